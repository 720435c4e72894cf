//! Feed Repository Trait

use crate::domain::entity::{Post, PostDraft};
use crate::error::FeedResult;

/// Data access for the posts table
#[trait_variant::make(FeedRepository: Send)]
pub trait LocalFeedRepository {
    /// Newest-first page of posts for infinite scroll
    async fn page(&self, limit: i64, offset: i64) -> FeedResult<Vec<Post>>;

    /// Total number of posts
    async fn count(&self) -> FeedResult<i64>;

    /// Insert a new post, stamping it with the current time
    async fn create(&self, draft: &PostDraft) -> FeedResult<()>;
}
