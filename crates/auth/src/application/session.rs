//! Auth Session Controller
//!
//! Owns the in-memory session state for the running app instance and
//! orchestrates startup restore, PIN login, biometric login, logout,
//! and signup-then-auto-login. The route guard renders from
//! [`SessionState`] snapshots; nothing else mutates the state.
//!
//! State machine: `INITIALIZING` (cold start, `is_loading = true`)
//! settles into `READY` with or without a restored user once startup
//! store init and session restore have both completed. Store and
//! hardware failures are caught at this boundary and converted to
//! boolean results; nothing here is fatal to the process.

use std::future::Future;
use std::sync::Arc;

use platform::biometric::{BiometricDevice, BiometricGate};
use tokio::sync::RwLock;

use crate::application::config::{AuthConfig, SignupFollowUp};
use crate::application::credentials::CredentialValidator;
use crate::domain::entity::{ShadowCredential, User};
use crate::domain::repository::{SessionVault, UserRepository};
use crate::domain::value_object::UserName;
use crate::error::{AuthError, AuthResult};

/// In-memory session state, scoped to the process lifetime
#[derive(Debug, Clone)]
pub struct SessionState {
    /// The signed-in user, if any
    pub user: Option<User>,
    /// True until startup store init and session restore settle
    pub is_loading: bool,
}

impl SessionState {
    fn cold_start() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Orchestrates the session lifecycle
///
/// Driven by one UI event at a time; concurrent calls are not
/// expected, and if a UI allows them the last write wins.
pub struct AuthSessionController<U, V, D>
where
    U: UserRepository,
    V: SessionVault,
    D: BiometricDevice,
{
    validator: CredentialValidator<U>,
    vault: Arc<V>,
    gate: BiometricGate<D>,
    config: Arc<AuthConfig>,
    state: RwLock<SessionState>,
}

impl<U, V, D> AuthSessionController<U, V, D>
where
    U: UserRepository + Send + Sync,
    V: SessionVault + Send + Sync,
    D: BiometricDevice + Sync,
{
    pub fn new(users: Arc<U>, vault: Arc<V>, device: D, config: Arc<AuthConfig>) -> Self {
        Self {
            validator: CredentialValidator::new(users),
            vault,
            gate: BiometricGate::new(device),
            config,
            state: RwLock::new(SessionState::cold_start()),
        }
    }

    /// Snapshot of the current state, for the route guard and UI
    pub async fn snapshot(&self) -> SessionState {
        self.state.read().await.clone()
    }

    /// Startup: settle external store init and session restore, then
    /// move to READY
    ///
    /// `store_init` is the out-of-scope relational store preparation
    /// (schema, canonical sync); it runs concurrently with the
    /// session read. Failures on either side are logged and the app
    /// still reaches READY; worst case the user lands on the login
    /// screen.
    pub async fn initialize<F, E>(&self, store_init: F)
    where
        F: Future<Output = Result<(), E>>,
        E: std::fmt::Display,
    {
        let (init_result, restored) = tokio::join!(store_init, self.vault.load_session());

        if let Err(e) = init_result {
            tracing::error!(error = %e, "Startup store initialization failed");
        }
        match &restored {
            Some(user) => tracing::info!(user_name = %user.user_name, "Session restored"),
            None => tracing::debug!("No session to restore"),
        }

        let mut state = self.state.write().await;
        state.user = restored;
        state.is_loading = false;
    }

    /// PIN login
    ///
    /// On a match: sets the in-memory user, persists the session
    /// record, and overwrites the biometric shadow credential with
    /// the credentials just used. Persistence failures are logged and
    /// do not fail the login. Returns `false` for a mismatch, for any
    /// store error, and when called before startup has settled.
    pub async fn sign_in(&self, username: &str, pin: &str) -> bool {
        if self.state.read().await.is_loading {
            tracing::debug!("Login attempted before startup settled");
            return false;
        }

        let user = match self.validator.login(username, pin).await {
            Ok(Some(user)) => user,
            Ok(None) => return false,
            Err(e) => {
                e.log();
                return false;
            }
        };

        if let Err(e) = self.vault.save_session(&user).await {
            tracing::warn!(error = %e, "Session record not persisted");
        }
        let shadow = ShadowCredential::new(username.trim(), pin);
        if let Err(e) = self.vault.save_shadow(&shadow).await {
            tracing::warn!(error = %e, "Shadow credential not persisted");
        }

        tracing::info!(user_name = %user.user_name, "User signed in");
        self.state.write().await.user = Some(user);
        true
    }

    /// Biometric login
    ///
    /// The gate only answers "did a human pass the device biometric
    /// check"; which account that success applies to is decided here.
    /// On a passed challenge the stored shadow credentials replay
    /// through the normal PIN path, so the pair is re-validated
    /// against the current user store; if a canonical sync changed
    /// the PIN since the shadow was cached, the login fails like any
    /// other stale credential.
    pub async fn sign_in_with_biometric(
        &self,
        input_username: Option<&str>,
    ) -> AuthResult<bool> {
        let shadow = self.vault.load_shadow().await;

        // Target: typed input wins, else the cached shadow username.
        let typed = input_username.map(str::trim).filter(|s| !s.is_empty());
        let target = match typed {
            Some(t) => t.to_string(),
            None => shadow
                .as_ref()
                .map(|s| s.username.trim().to_string())
                .filter(|s| !s.is_empty())
                .ok_or(AuthError::NoTargetUser)?,
        };
        let target = UserName::new(&target).map_err(|_| AuthError::NoTargetUser)?;

        if !self.validator.is_local_user(target.original()).await? {
            return Err(AuthError::NotLocalAccount);
        }

        // One successful PIN login on this device must have bound the
        // shadow to this account first.
        let shadow = shadow.ok_or(AuthError::ShadowMismatch)?;
        if !shadow.covers(&target) {
            return Err(AuthError::ShadowMismatch);
        }

        if !self.gate.is_available().await {
            return Err(AuthError::HardwareUnavailable);
        }

        let prompt = format!("Log in as {}", target.original());
        if !self.gate.challenge(&prompt).await {
            tracing::info!(user_name = %target, "Biometric challenge failed or was cancelled");
            return Ok(false);
        }

        Ok(self.sign_in(&shadow.username, &shadow.pin).await)
    }

    /// Logout: clears the in-memory user and the session record
    ///
    /// The shadow credential is deliberately left in place so
    /// biometric re-entry keeps working. Calling this while already
    /// signed out is a no-op.
    pub async fn sign_out(&self) {
        self.state.write().await.user = None;
        if let Err(e) = self.vault.clear_session().await {
            tracing::warn!(error = %e, "Session record not cleared");
        }
        tracing::info!("User signed out");
    }

    /// Signup, then auto-login per [`AuthConfig::signup_follow_up`]
    pub async fn sign_up(&self, username: &str, pin: &str) -> AuthResult<()> {
        let created = self.validator.create_user(username, pin).await?;

        match self.config.signup_follow_up {
            SignupFollowUp::TrustImmediately => {
                if !self.sign_in(username, pin).await {
                    // The local store can lag a read after the insert;
                    // the signup itself just succeeded, so trust it
                    // with a provisional in-memory user. No session
                    // record is written on this path.
                    tracing::warn!(
                        user_name = %created.user_name,
                        "Post-signup login did not verify; trusting the fresh signup"
                    );
                    let provisional =
                        User::new_local(created.user_name.clone(), created.pin.clone());
                    self.state.write().await.user = Some(provisional);
                }
                Ok(())
            }
            SignupFollowUp::VerifiedOnly => {
                for attempt in 1..=self.config.signup_verify_attempts {
                    if self.sign_in(username, pin).await {
                        return Ok(());
                    }
                    tracing::debug!(attempt, "Post-signup login not settled yet");
                    tokio::time::sleep(self.config.signup_verify_delay).await;
                }
                Err(AuthError::Internal(
                    "post-signup login never verified".to_string(),
                ))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
