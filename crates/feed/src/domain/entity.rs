//! Feed Entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A post as stored in the on-device feed table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A post about to be created; the store assigns id and timestamp
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub title: String,
    pub author: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            description: None,
            image: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
