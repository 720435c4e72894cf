//! Feed (Local Timeline) Module
//!
//! Clean Architecture structure:
//! - `domain/` - Post entity and repository trait
//! - `infra/` - SQLite implementation and seed loading
//!
//! The feed is read from the same on-device database the auth module
//! uses. First launch bulk-loads the bundled seed posts; afterwards
//! the table is the source of truth and pages serve infinite scroll.

pub mod domain;
pub mod error;
pub mod infra;

pub use domain::entity::{Post, PostDraft};
pub use error::{FeedError, FeedResult};
pub use infra::sqlite::{SeedPost, SqliteFeedRepository, init_schema, seed_posts};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
