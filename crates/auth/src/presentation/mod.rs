pub mod guard;

pub use guard::{RouteRoot, required_redirect};
