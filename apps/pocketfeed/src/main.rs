//! PocketFeed Entry Point
//!
//! Startup wiring and database preparation.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod shell;

use std::env;
use std::sync::Arc;

use auth::infra::sqlite::CanonicalUser;
use auth::{AuthConfig, AuthSessionController, SecureSessionVault, SqliteUserRepository};
use feed::{SeedPost, SqliteFeedRepository};
use platform::secure_store::FileStore;
use serde::Deserialize;
use sqlx::sqlite::SqlitePoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Deserialize)]
struct UserSeedFile {
    users: Vec<CanonicalUser>,
}

#[derive(Deserialize)]
struct PostSeedFile {
    posts: Vec<SeedPost>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pocketfeed=info,auth=info,feed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://pocketfeed.db?mode=rwc".to_string());

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to local database");

    // Secure store location; the mobile build uses the OS keychain,
    // the console build a JSON file next to the database
    let store_path =
        env::var("SECURE_STORE_PATH").unwrap_or_else(|_| "secure_store.json".to_string());
    let vault = Arc::new(SecureSessionVault::new(Arc::new(FileStore::new(store_path))));
    let users = Arc::new(SqliteUserRepository::new(pool.clone()));

    let config = if env::var("VERIFIED_SIGNUP").is_ok() {
        AuthConfig::verified_signup()
    } else {
        AuthConfig::default()
    };

    let controller = Arc::new(AuthSessionController::new(
        users,
        vault,
        shell::ConsoleBiometrics::from_env(),
        Arc::new(config),
    ));

    // Schema, canonical users, and first-launch feed seeding run
    // concurrently with session restore; failures land on the login
    // screen instead of aborting startup.
    let seed_pool = pool.clone();
    controller
        .initialize(async move {
            let user_seed: UserSeedFile =
                serde_json::from_str(include_str!("../assets/users.json"))?;
            let post_seed: PostSeedFile =
                serde_json::from_str(include_str!("../assets/seed.json"))?;

            auth::infra::sqlite::init_schema(&seed_pool).await?;
            auth::infra::sqlite::sync_canonical_users(&seed_pool, &user_seed.users).await?;
            feed::init_schema(&seed_pool).await?;
            feed::seed_posts(&seed_pool, &post_seed.posts).await?;

            Ok::<(), anyhow::Error>(())
        })
        .await;

    shell::run(controller, SqliteFeedRepository::new(pool)).await
}
