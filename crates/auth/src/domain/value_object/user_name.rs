//! User Name Value Object
//!
//! The public handle a user logs in and is displayed with.
//!
//! ## Invariants
//! - Non-empty after trimming
//! - `original` preserves the case the user typed (trimmed)
//! - `canonical` is the lowercase form used for every uniqueness and
//!   lookup decision, so names differing only in case or surrounding
//!   whitespace are the same account

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when user name validation fails
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserNameError {
    /// User name is empty after trimming
    #[error("User name cannot be empty")]
    Empty,
}

/// Validated, trimmed user name
///
/// # Storage
/// - `original`: the user's input, trimmed, case preserved
/// - `canonical`: lowercase form for uniqueness checks
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName {
    /// Original user input (preserves case)
    original: String,
    /// Canonical form (lowercase) for uniqueness
    canonical: String,
}

impl UserName {
    /// Create a new UserName from raw input
    ///
    /// Trims surrounding whitespace and validates non-emptiness.
    pub fn new(input: impl AsRef<str>) -> Result<Self, UserNameError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserNameError::Empty);
        }

        Ok(Self {
            original: trimmed.to_string(),
            canonical: trimmed.to_lowercase(),
        })
    }

    /// Rebuild from a value already stored in the database
    ///
    /// Stored names were validated on the way in; this cannot fail.
    pub fn from_stored(stored: &str) -> Self {
        Self {
            original: stored.to_string(),
            canonical: stored.to_lowercase(),
        }
    }

    /// The user's input, case preserved
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Lowercase form used for lookups and uniqueness
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Case-insensitive equality with another name
    pub fn same_account(&self, other: &UserName) -> bool {
        self.canonical == other.canonical
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl fmt::Debug for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserName({})", self.original)
    }
}

impl TryFrom<String> for UserName {
    type Error = UserNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.original
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_whitespace() {
        let name = UserName::new("  John ").unwrap();
        assert_eq!(name.original(), "John");
        assert_eq!(name.canonical(), "john");
    }

    #[test]
    fn test_preserves_case_in_original() {
        let name = UserName::new("Dave").unwrap();
        assert_eq!(name.original(), "Dave");
        assert_eq!(name.canonical(), "dave");
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(UserName::new(""), Err(UserNameError::Empty));
        assert_eq!(UserName::new("   "), Err(UserNameError::Empty));
    }

    #[test]
    fn test_same_account_is_case_insensitive() {
        let a = UserName::new("Ann").unwrap();
        let b = UserName::new("ann").unwrap();
        let c = UserName::new("bob").unwrap();
        assert!(a.same_account(&b));
        assert!(!a.same_account(&c));
    }

    #[test]
    fn test_serde_roundtrip_as_string() {
        let name = UserName::new("Dave").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"Dave\"");

        let back: UserName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);
    }
}
