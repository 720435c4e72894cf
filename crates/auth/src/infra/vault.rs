//! Secure Store Session Vault
//!
//! Persists the session record and the biometric shadow credential as
//! JSON values in the platform secure store. The two keys have
//! independent lifecycles: logout deletes the session record and
//! leaves the shadow in place.

use std::sync::Arc;

use platform::secure_store::SecureStore;

use crate::domain::entity::{ShadowCredential, User};
use crate::domain::repository::SessionVault;
use crate::error::AuthResult;

/// The durable "stay signed in" record
pub const SESSION_KEY: &str = "user_session";
/// The replayable credential pair behind biometric login
pub const BIOMETRIC_KEY: &str = "biometric_credentials";

/// Session vault over the platform secure store
pub struct SecureSessionVault<S> {
    store: Arc<S>,
}

impl<S> SecureSessionVault<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S> SessionVault for SecureSessionVault<S>
where
    S: SecureStore + Sync,
{
    async fn save_session(&self, user: &User) -> AuthResult<()> {
        let json = serde_json::to_string(user)
            .map_err(|e| crate::error::AuthError::Internal(e.to_string()))?;
        self.store.set_item(SESSION_KEY, &json).await?;
        Ok(())
    }

    /// Fail-soft: an unreadable or unparsable record restores no
    /// session instead of blocking startup
    async fn load_session(&self) -> Option<User> {
        let json = match self.store.get_item(SESSION_KEY).await {
            Ok(value) => value?,
            Err(e) => {
                tracing::warn!(error = %e, "Session record unreadable");
                return None;
            }
        };

        match serde_json::from_str(&json) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "Session record corrupt; ignoring");
                None
            }
        }
    }

    async fn clear_session(&self) -> AuthResult<()> {
        self.store.delete_item(SESSION_KEY).await?;
        Ok(())
    }

    async fn save_shadow(&self, shadow: &ShadowCredential) -> AuthResult<()> {
        let json = serde_json::to_string(shadow)
            .map_err(|e| crate::error::AuthError::Internal(e.to_string()))?;
        self.store.set_item(BIOMETRIC_KEY, &json).await?;
        Ok(())
    }

    async fn load_shadow(&self) -> Option<ShadowCredential> {
        let json = match self.store.get_item(BIOMETRIC_KEY).await {
            Ok(value) => value?,
            Err(e) => {
                tracing::warn!(error = %e, "Shadow credential unreadable");
                return None;
            }
        };

        match serde_json::from_str(&json) {
            Ok(shadow) => Some(shadow),
            Err(e) => {
                tracing::warn!(error = %e, "Shadow credential corrupt; ignoring");
                None
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
