pub mod sqlite;

pub use sqlite::{SeedPost, SqliteFeedRepository, init_schema, seed_posts};
