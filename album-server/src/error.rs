//! Error types for album-server

use thiserror::Error;

use crate::db::DbError;
use crate::models::ValidationError;

pub type AlbumResult<T> = Result<T, AlbumError>;

/// Failure of an album operation
#[derive(Error, Debug)]
pub enum AlbumError {
    /// Malformed identifier or request body (400)
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// No matching row (404)
    #[error("{message}")]
    NotFound { message: &'static str },

    /// Any other failure talking to the store (500)
    ///
    /// `message` is what the client sees; `source` is only logged.
    #[error("{message}: {source}")]
    Store {
        message: &'static str,
        #[source]
        source: DbError,
    },
}

impl AlbumError {
    pub fn not_found(message: &'static str) -> Self {
        Self::NotFound { message }
    }

    pub fn store(message: &'static str, source: DbError) -> Self {
        Self::Store { message, source }
    }

    /// Short message safe to return to a client.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::InvalidInput(e) => e.public_message(),
            Self::NotFound { message } => *message,
            Self::Store { message, .. } => *message,
        }
    }
}
