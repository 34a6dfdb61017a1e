//! Album storage
//!
//! The service only sees the `AlbumStore` trait. `AlbumRepo` talks to MySQL
//! through a sqlx pool; `MemoryAlbumStore` keeps rows in process for tests
//! and local runs.

pub mod albums;
pub mod memory;

use async_trait::async_trait;

use crate::models::{Album, AlbumId, NewAlbum};

pub use albums::AlbumRepo;
pub use memory::MemoryAlbumStore;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("store assigned id {0} outside the signed 64-bit range")]
    IdOutOfRange(u64),
}

/// Access to the `album` table
#[async_trait]
pub trait AlbumStore: Send + Sync {
    /// All albums whose artist equals `artist` exactly, ordered by id.
    async fn list_by_artist(&self, artist: &str) -> Result<Vec<Album>, DbError>;

    /// The album with `id`, or `DbError::NotFound`.
    async fn get(&self, id: AlbumId) -> Result<Album, DbError>;

    /// Insert a row and return the identifier the store assigned to it.
    async fn insert(&self, album: &NewAlbum) -> Result<AlbumId, DbError>;

    /// Round trip to the backing store without touching any rows.
    async fn ping(&self) -> Result<(), DbError>;
}
