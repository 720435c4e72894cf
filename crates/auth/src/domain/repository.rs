//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the
//! infrastructure layer.

use crate::domain::entity::{ShadowCredential, User};
use crate::domain::value_object::UserName;
use crate::error::AuthResult;

/// User repository trait
///
/// Pure data access over local user records; policy (trimming,
/// duplicate checks, PIN comparison) lives in the application layer.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user, returning it with the assigned id.
    /// A case-insensitive username collision is a
    /// [`DuplicateUsername`](crate::error::AuthError::DuplicateUsername).
    async fn create(&self, user: &User) -> AuthResult<User>;

    /// Find a user by name (case-insensitive exact match).
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>>;

    /// Check if a user name exists (case-insensitive).
    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool>;

    /// Check if a user exists AND was created on this device.
    async fn is_local(&self, user_name: &UserName) -> AuthResult<bool>;
}

/// Session vault trait
///
/// Durable storage for the active session record and the biometric
/// shadow credential. Loads fail soft: corruption or an unreadable
/// store reads as "nothing stored" so startup is never blocked.
#[trait_variant::make(SessionVault: Send)]
pub trait LocalSessionVault {
    /// Persist the session record, overwriting any prior one.
    async fn save_session(&self, user: &User) -> AuthResult<()>;

    /// Read the session record. Any read/parse failure is logged and
    /// reads as `None`.
    async fn load_session(&self) -> Option<User>;

    /// Delete the session record only. The shadow credential is
    /// untouched. Idempotent.
    async fn clear_session(&self) -> AuthResult<()>;

    /// Overwrite the shadow credential.
    async fn save_shadow(&self, shadow: &ShadowCredential) -> AuthResult<()>;

    /// Read the shadow credential; absence is a normal state.
    async fn load_shadow(&self) -> Option<ShadowCredential>;
}
