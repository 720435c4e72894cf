pub mod sqlite;
pub mod vault;

pub use sqlite::{CanonicalUser, SqliteUserRepository, init_schema, sync_canonical_users};
pub use vault::SecureSessionVault;
