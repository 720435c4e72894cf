pub mod entity;
pub mod repository;

pub use entity::{Post, PostDraft};
pub use repository::FeedRepository;
