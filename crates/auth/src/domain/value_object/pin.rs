//! PIN Value Object
//!
//! The 4-digit login secret. It is stored and compared as a plain
//! string value end to end; that is intentional, not an oversight.
//! Everything that touches the raw value funnels through
//! this type so a hashed credential can later replace it without
//! touching the controller or guard.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Required PIN length (digits)
pub const PIN_LENGTH: usize = 4;

/// Error returned when PIN validation fails
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PinError {
    /// PIN is not exactly [`PIN_LENGTH`] characters
    #[error("PIN must be exactly {PIN_LENGTH} digits (got {length})")]
    InvalidLength { length: usize },

    /// PIN contains a non-digit character
    #[error("PIN may only contain digits")]
    NonDigit,
}

/// A user's PIN, held as the plain stored value
///
/// Serialization is transparent (a bare string) so persisted session
/// records round-trip verbatim. Validation applies only at signup via
/// [`Pin::new`]; values coming back from storage are trusted as-is.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pin(String);

impl Pin {
    /// Validate and wrap a freshly chosen PIN
    pub fn new(input: impl AsRef<str>) -> Result<Self, PinError> {
        let raw = input.as_ref();
        if raw.chars().count() != PIN_LENGTH {
            return Err(PinError::InvalidLength {
                length: raw.chars().count(),
            });
        }
        if !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(PinError::NonDigit);
        }
        Ok(Self(raw.to_string()))
    }

    /// Rebuild from a value already stored in the database
    pub fn from_stored(stored: impl Into<String>) -> Self {
        Self(stored.into())
    }

    /// Plain string equality against a candidate value
    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }

    /// The raw stored value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Keep the raw value out of logs and panic messages.
        f.write_str("Pin(****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_pin() {
        let pin = Pin::new("1234").unwrap();
        assert!(pin.matches("1234"));
        assert!(!pin.matches("0000"));
    }

    #[test]
    fn test_length_enforced() {
        assert_eq!(Pin::new("123"), Err(PinError::InvalidLength { length: 3 }));
        assert_eq!(
            Pin::new("12345"),
            Err(PinError::InvalidLength { length: 5 })
        );
        assert_eq!(Pin::new(""), Err(PinError::InvalidLength { length: 0 }));
    }

    #[test]
    fn test_digits_only() {
        assert_eq!(Pin::new("12a4"), Err(PinError::NonDigit));
        assert_eq!(Pin::new("12 4"), Err(PinError::NonDigit));
    }

    #[test]
    fn test_debug_redacts_value() {
        let pin = Pin::new("1234").unwrap();
        assert_eq!(format!("{:?}", pin), "Pin(****)");
    }

    #[test]
    fn test_serde_transparent() {
        let pin = Pin::new("1234").unwrap();
        assert_eq!(serde_json::to_string(&pin).unwrap(), "\"1234\"");

        let back: Pin = serde_json::from_str("\"1234\"").unwrap();
        assert_eq!(back, pin);
    }
}
