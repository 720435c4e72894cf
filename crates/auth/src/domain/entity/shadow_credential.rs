//! Biometric Shadow Credential
//!
//! A plaintext copy of the last credentials that passed a PIN login,
//! kept in durable storage so a biometric success can replay them
//! without the user retyping a PIN.
//!
//! Lifetime: overwritten on every successful PIN login, read on every
//! biometric attempt, never implicitly deleted. Logout deliberately
//! leaves it in place so biometric re-entry keeps working.

use serde::{Deserialize, Serialize};

use crate::domain::value_object::UserName;

/// The cached username/PIN pair for biometric replay
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadowCredential {
    pub username: String,
    pub pin: String,
}

impl ShadowCredential {
    pub fn new(username: impl Into<String>, pin: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            pin: pin.into(),
        }
    }

    /// Whether this credential was cached for `target`
    /// (case-insensitive, whitespace-tolerant).
    pub fn covers(&self, target: &UserName) -> bool {
        self.username.trim().to_lowercase() == target.canonical()
    }
}

impl std::fmt::Debug for ShadowCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The pin stays out of logs.
        f.debug_struct("ShadowCredential")
            .field("username", &self.username)
            .field("pin", &"****")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_is_case_insensitive() {
        let shadow = ShadowCredential::new("Dave", "1234");
        assert!(shadow.covers(&UserName::new("dave").unwrap()));
        assert!(shadow.covers(&UserName::new("DAVE").unwrap()));
        assert!(!shadow.covers(&UserName::new("ann").unwrap()));
    }

    #[test]
    fn test_covers_tolerates_stored_whitespace() {
        // Older builds cached the raw input; a shadow saved as "John "
        // must still bind to "john".
        let shadow = ShadowCredential::new("John ", "1234");
        assert!(shadow.covers(&UserName::new("john").unwrap()));
    }

    #[test]
    fn test_debug_redacts_pin() {
        let shadow = ShadowCredential::new("Dave", "1234");
        let rendered = format!("{:?}", shadow);
        assert!(rendered.contains("Dave"));
        assert!(!rendered.contains("1234"));
    }
}
