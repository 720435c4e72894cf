//! Error Conversions
//!
//! `From` impls that lift third-party errors into [`AppError`].
//! Database conversions are feature-gated so the kernel stays
//! dependency-light for crates that do not touch sqlx.

use super::app_error::AppError;
use super::kind::ErrorKind;

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::new(ErrorKind::Storage, "I/O operation failed").with_source(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::new(ErrorKind::Storage, "Stored record could not be decoded").with_source(err)
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let kind = match &err {
            sqlx::Error::RowNotFound => ErrorKind::NotFound,
            sqlx::Error::Database(db) if db.is_unique_violation() => ErrorKind::Conflict,
            _ => ErrorKind::Storage,
        };
        AppError::new(kind, "Database operation failed").with_source(err)
    }
}
