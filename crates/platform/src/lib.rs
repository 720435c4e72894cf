//! Platform - Device-facing infrastructure
//!
//! Abstractions over device capabilities with no knowledge of
//! application accounts:
//! - `secure_store` - durable key-value storage (the OS keystore
//!   equivalent), with file-backed and in-memory implementations
//! - `biometric` - biometric hardware capability and challenge
//!
//! Everything identity-related (which account a biometric success
//! applies to, what a stored record means) lives in the `auth` crate.

pub mod biometric;
pub mod secure_store;

pub use biometric::{BiometricDevice, BiometricGate, DeniedDevice};
pub use secure_store::{FileStore, MemoryStore, SecureStore, StoreError};
