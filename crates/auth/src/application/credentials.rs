//! Credential Validation
//!
//! The single seam through which raw username/PIN input reaches the
//! user store: trimming, case-insensitive lookup, and the plain PIN
//! comparison all happen here. Replacing the plaintext comparison
//! with a hashed scheme later means changing this file only.
//!
//! No lockout, no rate limiting, no attempt counting: repeated wrong
//! PINs are unrestricted. That is intentional, not an omission.

use std::sync::Arc;

use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{Pin, UserName};
use crate::error::{AuthError, AuthResult};

/// Validates credentials against the user store
pub struct CredentialValidator<U>
where
    U: UserRepository,
{
    users: Arc<U>,
}

impl<U> CredentialValidator<U>
where
    U: UserRepository + Sync,
{
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }

    /// Validate a username/PIN pair
    ///
    /// Returns the matched record, or `None` for an unknown user or a
    /// wrong PIN (callers must not distinguish the two). Malformed
    /// input (e.g. a whitespace-only username) matches nothing.
    pub async fn login(&self, username: &str, pin: &str) -> AuthResult<Option<User>> {
        let Ok(user_name) = UserName::new(username) else {
            return Ok(None);
        };

        match self.users.find_by_user_name(&user_name).await? {
            Some(user) if user.pin.matches(pin) => Ok(Some(user)),
            Some(_) => {
                tracing::debug!(user_name = %user_name, "PIN mismatch");
                Ok(None)
            }
            None => Ok(None),
        }
    }

    /// Case-insensitive existence check after trimming
    pub async fn username_exists(&self, username: &str) -> AuthResult<bool> {
        let Ok(user_name) = UserName::new(username) else {
            return Ok(false);
        };
        self.users.exists_by_user_name(&user_name).await
    }

    /// Existence check additionally requiring `is_local`
    ///
    /// Gates whether biometric login may even be attempted for the
    /// name; seeded accounts always fail this.
    pub async fn is_local_user(&self, username: &str) -> AuthResult<bool> {
        let Ok(user_name) = UserName::new(username) else {
            return Ok(false);
        };
        self.users.is_local(&user_name).await
    }

    /// Create a local account
    ///
    /// The existence check followed by the insert is a check-then-act
    /// gap; accepted, since writes are local and driven by one UI
    /// event at a time. The store's unique constraint backstops it.
    pub async fn create_user(&self, username: &str, pin: &str) -> AuthResult<User> {
        let user_name = UserName::new(username)?;
        let pin = Pin::new(pin)?;

        if self.users.exists_by_user_name(&user_name).await? {
            return Err(AuthError::DuplicateUsername);
        }

        let created = self.users.create(&User::new_local(user_name, pin)).await?;

        tracing::info!(user_name = %created.user_name, "User created");
        Ok(created)
    }
}
