//! SQLite Feed Repository
//!
//! Timestamps are always bound explicitly as RFC 3339 text so reads
//! decode uniformly; the column default never fires in practice.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::domain::entity::{Post, PostDraft};
use crate::domain::repository::FeedRepository;
use crate::error::FeedResult;

/// Posts inserted per statement during first-launch seeding
const SEED_BATCH_SIZE: usize = 50;

/// Create the posts table if it does not exist yet
pub async fn init_schema(pool: &SqlitePool) -> FeedResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS posts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            author TEXT NOT NULL,
            description TEXT,
            image TEXT,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// A bundled post from the seed list
#[derive(Debug, Clone, Deserialize)]
pub struct SeedPost {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// First-launch bulk load of the bundled posts
///
/// Skipped entirely when the table already has rows. Inserts run in
/// batches inside one transaction so a cold start with a large seed
/// list stays fast and all-or-nothing.
pub async fn seed_posts(pool: &SqlitePool, seed: &[SeedPost]) -> FeedResult<bool> {
    let existing = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        tracing::debug!(posts = existing, "Feed already seeded");
        return Ok(false);
    }

    let now = Utc::now();
    let mut tx = pool.begin().await?;

    for chunk in seed.chunks(SEED_BATCH_SIZE) {
        let mut builder: QueryBuilder<'_, Sqlite> = QueryBuilder::new(
            "INSERT INTO posts (title, author, description, image, created_at) ",
        );
        builder.push_values(chunk, |mut row, post| {
            row.push_bind(&post.title)
                .push_bind(&post.author)
                .push_bind(post.description.as_deref())
                .push_bind(post.image.as_deref())
                .push_bind(now);
        });
        builder.build().execute(&mut *tx).await?;
    }

    tx.commit().await?;

    tracing::info!(posts_seeded = seed.len(), "Feed seeded");

    Ok(true)
}

/// SQLite-backed feed repository
#[derive(Clone)]
pub struct SqliteFeedRepository {
    pool: SqlitePool,
}

impl SqliteFeedRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl FeedRepository for SqliteFeedRepository {
    async fn page(&self, limit: i64, offset: i64) -> FeedResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, author, description, image, created_at
            FROM posts
            ORDER BY id DESC
            LIMIT ?1 OFFSET ?2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostRow::into_post).collect())
    }

    async fn count(&self) -> FeedResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn create(&self, draft: &PostDraft) -> FeedResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (title, author, description, image, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.author)
        .bind(draft.description.as_deref())
        .bind(draft.image.as_deref())
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i64,
    title: String,
    author: String,
    description: Option<String>,
    image: Option<String>,
    created_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            id: self.id,
            title: self.title,
            author: self.author,
            description: self.description,
            image: self.image,
            created_at: self.created_at,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        init_schema(&pool).await.unwrap();
        pool
    }

    fn seed(n: usize) -> Vec<SeedPost> {
        (0..n)
            .map(|i| SeedPost {
                title: format!("Post {}", i),
                author: "Seeder".to_string(),
                description: None,
                image: None,
            })
            .collect()
    }

    #[tokio::test]
    async fn test_seed_spanning_multiple_batches() {
        let pool = test_pool().await;
        assert!(seed_posts(&pool, &seed(120)).await.unwrap());

        let repo = SqliteFeedRepository::new(pool);
        assert_eq!(repo.count().await.unwrap(), 120);
    }

    #[tokio::test]
    async fn test_seed_skipped_when_table_populated() {
        let pool = test_pool().await;
        assert!(seed_posts(&pool, &seed(3)).await.unwrap());
        assert!(!seed_posts(&pool, &seed(3)).await.unwrap());

        let repo = SqliteFeedRepository::new(pool);
        assert_eq!(repo.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_pages_are_newest_first() {
        let pool = test_pool().await;
        let repo = SqliteFeedRepository::new(pool);

        for i in 0..5 {
            repo.create(&PostDraft::new(format!("Post {}", i), "Dave"))
                .await
                .unwrap();
        }

        let first = repo.page(2, 0).await.unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].title, "Post 4");
        assert_eq!(first[1].title, "Post 3");

        let second = repo.page(2, 2).await.unwrap();
        assert_eq!(second[0].title, "Post 2");

        let past_end = repo.page(2, 10).await.unwrap();
        assert!(past_end.is_empty());
    }

    #[tokio::test]
    async fn test_create_roundtrips_optional_fields() {
        let pool = test_pool().await;
        let repo = SqliteFeedRepository::new(pool);

        repo.create(
            &PostDraft::new("Hello", "Dave").with_description("first post"),
        )
        .await
        .unwrap();

        let page = repo.page(10, 0).await.unwrap();
        assert_eq!(page[0].author, "Dave");
        assert_eq!(page[0].description.as_deref(), Some("first post"));
        assert!(page[0].image.is_none());
    }
}
