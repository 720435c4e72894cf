//! SQLite Repository Implementation
//!
//! The on-device relational store. Usernames are matched through the
//! `username_canonical` column so lookups and the uniqueness
//! constraint agree on case folding regardless of SQLite collation
//! settings.

use serde::Deserialize;
use sqlx::SqlitePool;

use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{Pin, UserName};
use crate::error::{AuthError, AuthResult};

/// Create the users table if it does not exist yet
pub async fn init_schema(pool: &SqlitePool) -> AuthResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL,
            username_canonical TEXT NOT NULL UNIQUE,
            pin TEXT NOT NULL,
            is_local INTEGER NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// A bundled account from the canonical seed list
#[derive(Debug, Clone, Deserialize)]
pub struct CanonicalUser {
    pub username: String,
    pub pin: String,
}

/// Reconcile the users table with the bundled seed list
///
/// Seeded accounts are upserted with `is_local = 0`: missing rows are
/// inserted, and rows whose PIN or local flag drifted from the seed
/// are rewritten. Signup rows (`is_local = 1`) are never touched
/// unless a seed entry claims the same canonical username.
pub async fn sync_canonical_users(
    pool: &SqlitePool,
    seed: &[CanonicalUser],
) -> AuthResult<()> {
    let mut tx = pool.begin().await?;

    for entry in seed {
        let user_name = UserName::new(&entry.username)
            .map_err(|e| AuthError::Internal(format!("Invalid seed username: {}", e)))?;

        sqlx::query(
            r#"
            INSERT INTO users (username, username_canonical, pin, is_local)
            VALUES (?1, ?2, ?3, 0)
            ON CONFLICT(username_canonical) DO UPDATE SET
                username = excluded.username,
                pin = excluded.pin,
                is_local = 0
            "#,
        )
        .bind(user_name.original())
        .bind(user_name.canonical())
        .bind(&entry.pin)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::info!(users_synced = seed.len(), "Canonical users synced");

    Ok(())
}

/// SQLite-backed user repository
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: &User) -> AuthResult<User> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (username, username_canonical, pin, is_local)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(user.user_name.original())
        .bind(user.user_name.canonical())
        .bind(user.pin.as_str())
        .bind(user.is_local)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => Ok(user.clone().with_id(done.last_insert_rowid())),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(AuthError::DuplicateUsername)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, pin, is_local
            FROM users
            WHERE username_canonical = ?1
            "#,
        )
        .bind(user_name.canonical())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username_canonical = ?1)",
        )
        .bind(user_name.canonical())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn is_local(&self, user_name: &UserName) -> AuthResult<bool> {
        let local = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username_canonical = ?1 AND is_local = 1)",
        )
        .bind(user_name.canonical())
        .fetch_one(&self.pool)
        .await?;

        Ok(local)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    pin: String,
    is_local: bool,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            id: Some(self.id),
            user_name: UserName::from_stored(&self.username),
            pin: Pin::from_stored(self.pin),
            is_local: self.is_local,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
