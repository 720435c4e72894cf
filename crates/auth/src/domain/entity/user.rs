//! User Entity
//!
//! The local account record. Matches the on-device `users` table:
//! an integer id assigned by the store, the handle, the plain PIN,
//! and whether the account was created on this device (`is_local`,
//! the gate for biometric eligibility).

use serde::{Deserialize, Serialize};

use crate::domain::value_object::{Pin, UserName};

/// User entity
///
/// Serialized verbatim (serde) as the durable session record, so it
/// derives `Serialize`/`Deserialize` directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Row id, assigned by the store on insert
    pub id: Option<i64>,
    /// User name (unique case-insensitively)
    pub user_name: UserName,
    /// Plain 4-digit PIN, stored as typed
    pub pin: Pin,
    /// Created via on-device signup, as opposed to the canonical
    /// seed list. Only local accounts may use biometric login.
    pub is_local: bool,
}

impl User {
    /// A not-yet-persisted local account (signup path)
    pub fn new_local(user_name: UserName, pin: Pin) -> Self {
        Self {
            id: None,
            user_name,
            pin,
            is_local: true,
        }
    }

    /// Attach the id assigned by the store
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_local_has_no_id() {
        let user = User::new_local(
            UserName::new("Dave").unwrap(),
            Pin::new("1234").unwrap(),
        );
        assert_eq!(user.id, None);
        assert!(user.is_local);
    }

    #[test]
    fn test_serde_roundtrip() {
        let user = User::new_local(
            UserName::new("Dave").unwrap(),
            Pin::new("1234").unwrap(),
        )
        .with_id(7);

        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}
