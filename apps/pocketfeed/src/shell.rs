//! Console Shell
//!
//! A minimal stand-in for the mobile navigation stack: three route
//! roots, a line-based command loop, and the route guard applied
//! after every state change. Screens decide nothing about access;
//! redirects come only from the guard.

use std::sync::Arc;

use auth::{
    AuthSessionController, RouteRoot, SecureSessionVault, SqliteUserRepository, required_redirect,
};
use feed::domain::repository::FeedRepository;
use feed::{PostDraft, SqliteFeedRepository};
use platform::biometric::BiometricDevice;
use platform::secure_store::FileStore;
use tokio::io::{AsyncBufReadExt, BufReader};

const FEED_PAGE_SIZE: i64 = 20;

/// Console stand-in for the device biometric sensor
///
/// The sensor itself always passes; availability is toggled through
/// the environment so the unavailable paths stay demonstrable.
pub struct ConsoleBiometrics {
    enabled: bool,
}

impl ConsoleBiometrics {
    pub fn from_env() -> Self {
        Self {
            enabled: std::env::var("DISABLE_BIOMETRICS").is_err(),
        }
    }
}

impl BiometricDevice for ConsoleBiometrics {
    async fn has_hardware(&self) -> bool {
        self.enabled
    }

    async fn is_enrolled(&self) -> bool {
        self.enabled
    }

    async fn authenticate(&self, prompt: &str) -> bool {
        println!("[biometric] {}", prompt);
        true
    }
}

pub type Controller =
    AuthSessionController<SqliteUserRepository, SecureSessionVault<FileStore>, ConsoleBiometrics>;

pub async fn run(controller: Arc<Controller>, posts: SqliteFeedRepository) -> anyhow::Result<()> {
    // Startup may have restored a session already.
    let mut current = apply_guard(&controller, RouteRoot::Login).await;
    print_location(&controller, current).await;

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    while let Some(line) = lines.next_line().await? {
        let mut parts = line.split_whitespace();
        let Some(cmd) = parts.next() else {
            continue;
        };
        let args: Vec<&str> = parts.collect();

        match (current, cmd) {
            (_, "quit") => break,

            (RouteRoot::Login, "login") if args.len() == 2 => {
                if !controller.sign_in(args[0], args[1]).await {
                    println!("Incorrect Username or PIN");
                }
            }
            (RouteRoot::Login, "bio") => {
                match controller
                    .sign_in_with_biometric(args.first().copied())
                    .await
                {
                    Ok(true) => {}
                    Ok(false) => println!("Incorrect Username or PIN"),
                    Err(e) => println!("{}", e.user_message()),
                }
            }
            (RouteRoot::Login, "signup") => {
                current = RouteRoot::SignUp;
                print_location(&controller, current).await;
            }

            (RouteRoot::SignUp, "create") if args.len() == 2 => {
                if let Err(e) = controller.sign_up(args[0], args[1]).await {
                    println!("{}", e.user_message());
                }
            }
            (RouteRoot::SignUp, "back") => {
                current = RouteRoot::Login;
                print_location(&controller, current).await;
            }

            (RouteRoot::Tabs, "feed") => {
                let page: i64 = args
                    .first()
                    .and_then(|a| a.parse().ok())
                    .filter(|p| *p >= 1)
                    .unwrap_or(1);
                show_feed(&posts, page).await;
            }
            (RouteRoot::Tabs, "post") if !args.is_empty() => {
                let author = controller
                    .snapshot()
                    .await
                    .user
                    .map(|u| u.user_name.original().to_string())
                    .unwrap_or_default();
                let draft = PostDraft::new(args.join(" "), author);
                match posts.create(&draft).await {
                    Ok(()) => println!("Posted."),
                    Err(e) => {
                        e.log();
                        println!("Could not save your post");
                    }
                }
            }
            (RouteRoot::Tabs, "logout") => {
                controller.sign_out().await;
            }

            _ => print_help(current),
        }

        let next = apply_guard(&controller, current).await;
        if next != current {
            current = next;
            print_location(&controller, current).await;
        }
    }

    Ok(())
}

async fn apply_guard(controller: &Controller, current: RouteRoot) -> RouteRoot {
    let state = controller.snapshot().await;
    required_redirect(&state, current).unwrap_or(current)
}

async fn show_feed(posts: &SqliteFeedRepository, page: i64) {
    let offset = (page - 1) * FEED_PAGE_SIZE;
    match posts.page(FEED_PAGE_SIZE, offset).await {
        Ok(items) if items.is_empty() => println!("(no more posts)"),
        Ok(items) => {
            for post in items {
                println!("#{} {} (by {})", post.id, post.title, post.author);
                if let Some(description) = &post.description {
                    println!("    {}", description);
                }
            }
        }
        Err(e) => {
            e.log();
            println!("Could not load the feed");
        }
    }
}

async fn print_location(controller: &Controller, current: RouteRoot) {
    match current {
        RouteRoot::Login => println!("== Login =="),
        RouteRoot::SignUp => println!("== Sign Up =="),
        RouteRoot::Tabs => {
            let who = controller
                .snapshot()
                .await
                .user
                .map(|u| u.user_name.original().to_string())
                .unwrap_or_default();
            println!("== Feed == (signed in as {})", who);
        }
    }
    print_help(current);
}

fn print_help(current: RouteRoot) {
    match current {
        RouteRoot::Login => {
            println!("commands: login <username> <pin> | bio [username] | signup | quit");
        }
        RouteRoot::SignUp => {
            println!("commands: create <username> <pin> | back | quit");
        }
        RouteRoot::Tabs => {
            println!("commands: feed [page] | post <title...> | logout | quit");
        }
    }
}
