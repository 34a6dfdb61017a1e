//! In-process album store
//!
//! Mirrors the table semantics: ids start at 1 and increase on every insert.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{AlbumStore, DbError};
use crate::models::{Album, AlbumId, NewAlbum};

#[derive(Default)]
struct Table {
    rows: Vec<Album>,
    next_id: i64,
}

/// Album store held in memory
#[derive(Default)]
pub struct MemoryAlbumStore {
    table: RwLock<Table>,
}

impl MemoryAlbumStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `albums`, keeping their ids.
    pub fn with_albums(albums: impl IntoIterator<Item = Album>) -> Self {
        let rows: Vec<Album> = albums.into_iter().collect();
        let next_id = rows.iter().map(|a| a.id).max().unwrap_or(0);
        Self {
            table: RwLock::new(Table { rows, next_id }),
        }
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl AlbumStore for MemoryAlbumStore {
    async fn list_by_artist(&self, artist: &str) -> Result<Vec<Album>, DbError> {
        let table = self.table.read().await;
        let mut albums: Vec<Album> = table
            .rows
            .iter()
            .filter(|a| a.artist == artist)
            .cloned()
            .collect();
        albums.sort_by_key(|a| a.id);
        Ok(albums)
    }

    async fn get(&self, id: AlbumId) -> Result<Album, DbError> {
        let table = self.table.read().await;
        table
            .rows
            .iter()
            .find(|a| a.id == id.get())
            .cloned()
            .ok_or_else(|| DbError::NotFound {
                resource: "album",
                id: id.to_string(),
            })
    }

    async fn insert(&self, album: &NewAlbum) -> Result<AlbumId, DbError> {
        let mut table = self.table.write().await;
        let next = table
            .next_id
            .checked_add(1)
            .ok_or(DbError::IdOutOfRange(i64::MAX as u64 + 1))?;
        table.next_id = next;
        let id = AlbumId(next);
        table.rows.push(Album::from_new(id, album.clone()));
        Ok(id)
    }

    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }
}
