//! Auth (Local Authentication) Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Session controller and credential validation
//! - `infra/` - SQLite user store and secure-store session vault
//! - `presentation/` - Route guard policy
//!
//! ## Features
//! - Offline username + PIN login against the on-device user store
//! - Durable sessions restored across app restarts
//! - Biometric login replaying a cached credential shadow
//! - Local signup with immediate auto-login
//!
//! ## Trust Model
//! - Everything runs on the user's own device; the user store is the
//!   sole authority and there is no server round-trip
//! - PINs are stored and compared as plain text, matching the seeded
//!   account format
//! - The biometric gate proves "a human passed the device check";
//!   account binding comes from the shadow credential, not the sensor

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::{AuthConfig, SignupFollowUp};
pub use application::credentials::CredentialValidator;
pub use application::session::{AuthSessionController, SessionState};
pub use error::{AuthError, AuthResult};
pub use infra::sqlite::SqliteUserRepository;
pub use infra::vault::SecureSessionVault;
pub use presentation::guard::{RouteRoot, required_redirect};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
}

pub mod store {
    pub use crate::infra::sqlite::SqliteUserRepository as UserStore;
    pub use crate::infra::vault::SecureSessionVault as SessionStore;
}
