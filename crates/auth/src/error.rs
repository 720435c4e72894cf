//! Auth Error Types
//!
//! Auth-specific error variants that classify into the unified
//! `kernel` error vocabulary. User-visible messages are deliberately
//! generic for anything credential-shaped so a caller cannot probe
//! which field was wrong or whether a username exists.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::secure_store::StoreError;
use thiserror::Error;

use crate::domain::value_object::{PinError, UserNameError};

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Wrong PIN or unknown user; not distinguished to the caller
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// User name already exists (case-insensitively)
    #[error("User name already exists")]
    DuplicateUsername,

    /// Biometric login with no username input and no cached shadow
    #[error("No target user for biometric login")]
    NoTargetUser,

    /// Biometric login against a seeded (non-local) account
    #[error("Account is not local to this device")]
    NotLocalAccount,

    /// Shadow credential bound to a different account than the target
    #[error("Saved biometric credentials do not match this account")]
    ShadowMismatch,

    /// Device lacks biometric hardware or enrollment
    #[error("Biometric hardware unavailable or not enrolled")]
    HardwareUnavailable,

    /// User name validation failed
    #[error("Invalid user name: {0}")]
    InvalidUserName(#[from] UserNameError),

    /// PIN validation failed
    #[error("Invalid PIN: {0}")]
    InvalidPin(#[from] PinError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Secure storage error
    #[error("Secure storage error: {0}")]
    Storage(#[from] StoreError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the [`ErrorKind`] for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials => ErrorKind::Unauthorized,
            AuthError::DuplicateUsername => ErrorKind::Conflict,
            AuthError::NoTargetUser
            | AuthError::NotLocalAccount
            | AuthError::ShadowMismatch
            | AuthError::HardwareUnavailable => ErrorKind::PreconditionFailed,
            AuthError::InvalidUserName(_) | AuthError::InvalidPin(_) => ErrorKind::InvalidInput,
            AuthError::Database(_) | AuthError::Storage(_) => ErrorKind::Storage,
            AuthError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// The message shown to the user
    ///
    /// Credential failures collapse into one generic line regardless
    /// of the underlying cause; only biometric precondition failures
    /// get actionable wording, since those are fixable by the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials
            | AuthError::InvalidUserName(_)
            | AuthError::InvalidPin(_) => "Incorrect Username or PIN",
            AuthError::DuplicateUsername => "That username is already used. Try another.",
            AuthError::NoTargetUser => "Please enter your username first.",
            AuthError::NotLocalAccount => {
                "Biometric login is only available for accounts created on this device."
            }
            AuthError::ShadowMismatch => {
                "Please log in with your PIN once to enable biometric login for this account."
            }
            AuthError::HardwareUnavailable => "Face ID/Touch ID is not set up on this device.",
            AuthError::Database(_) | AuthError::Storage(_) | AuthError::Internal(_) => {
                "An unexpected error occurred"
            }
        }
    }

    /// Convert to the app-wide error type
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.user_message())
    }

    /// Log the error with the appropriate level
    pub fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Storage(e) => {
                tracing::error!(error = %e, "Auth secure storage error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_failures_share_one_message() {
        // Unknown user, wrong PIN, and malformed input must be
        // indistinguishable to the caller.
        let generic = AuthError::InvalidCredentials.user_message();
        assert_eq!(
            AuthError::InvalidUserName(UserNameError::Empty).user_message(),
            generic
        );
        assert_eq!(
            AuthError::InvalidPin(PinError::NonDigit).user_message(),
            generic
        );
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(AuthError::DuplicateUsername.kind(), ErrorKind::Conflict);
        assert_eq!(AuthError::NoTargetUser.kind(), ErrorKind::PreconditionFailed);
        assert_eq!(
            AuthError::HardwareUnavailable.kind(),
            ErrorKind::PreconditionFailed
        );
        assert_eq!(
            AuthError::Internal("x".into()).kind(),
            ErrorKind::Internal
        );
    }

    #[test]
    fn test_to_app_error_carries_user_message() {
        let err = AuthError::ShadowMismatch.to_app_error();
        assert_eq!(err.kind(), ErrorKind::PreconditionFailed);
        assert_eq!(err.message(), AuthError::ShadowMismatch.user_message());
    }
}
