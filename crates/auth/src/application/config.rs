//! Application Configuration
//!
//! Configuration for the auth application layer.

use std::time::Duration;

/// What the controller does after a signup succeeds
///
/// Signup hands off to a normal login, and that login can lose a
/// read-after-write race against the local store. Whether to trust
/// the fresh signup anyway or insist on a verified login is a product
/// decision, so both behaviors exist behind this flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignupFollowUp {
    /// One login attempt, then trust the fresh signup with a
    /// provisional session (no durable session record, no verified
    /// PIN match).
    #[default]
    TrustImmediately,
    /// Retry the verified login until it settles; error out if it
    /// never does. No unverified session is ever established.
    VerifiedOnly,
}

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Post-signup auto-login behavior
    pub signup_follow_up: SignupFollowUp,
    /// Login attempts before `VerifiedOnly` gives up
    pub signup_verify_attempts: u32,
    /// Delay between `VerifiedOnly` attempts
    pub signup_verify_delay: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            signup_follow_up: SignupFollowUp::default(),
            signup_verify_attempts: 5,
            signup_verify_delay: Duration::from_millis(40),
        }
    }
}

impl AuthConfig {
    /// Config that never trusts an unverified signup
    pub fn verified_signup() -> Self {
        Self {
            signup_follow_up: SignupFollowUp::VerifiedOnly,
            ..Default::default()
        }
    }
}
