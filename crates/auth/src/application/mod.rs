pub mod config;
pub mod credentials;
pub mod session;

pub use config::{AuthConfig, SignupFollowUp};
pub use credentials::CredentialValidator;
pub use session::{AuthSessionController, SessionState};
