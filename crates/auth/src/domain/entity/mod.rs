//! Entities

pub mod shadow_credential;
pub mod user;

pub use shadow_credential::ShadowCredential;
pub use user::User;
