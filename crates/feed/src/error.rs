//! Feed Error Types

use kernel::error::{app_error::AppError, kind::ErrorKind};

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type FeedResult<T> = Result<T, FeedError>;

impl FeedError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FeedError::Database(_) => ErrorKind::Storage,
            FeedError::Internal(_) => ErrorKind::Internal,
        }
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    pub fn log(&self) {
        tracing::error!(kind = %self.kind(), error = %self, "Feed operation failed");
    }
}
