//! Album service - the three operations exposed over HTTP
//!
//! Holds the store handle it was constructed with; there is no other state.
//! Store failures are logged here with the operation and key, then replaced
//! by an opaque message.

use std::sync::Arc;

use crate::db::{AlbumStore, DbError};
use crate::error::{AlbumError, AlbumResult};
use crate::models::{Album, AlbumId, NewAlbum};

#[derive(Clone)]
pub struct AlbumService {
    store: Arc<dyn AlbumStore>,
}

impl AlbumService {
    pub fn new(store: Arc<dyn AlbumStore>) -> Self {
        Self { store }
    }

    /// Albums by `artist`. An artist with no albums is `NotFound`, not an empty list.
    pub async fn list_by_artist(&self, artist: &str) -> AlbumResult<Vec<Album>> {
        let albums = self.store.list_by_artist(artist).await.map_err(|e| {
            tracing::error!(operation = "list_by_artist", artist, error = %e, "album query failed");
            AlbumError::store("database query error", e)
        })?;

        if albums.is_empty() {
            tracing::debug!(artist, "no albums for artist");
            return Err(AlbumError::not_found("no albums found for artist"));
        }

        Ok(albums)
    }

    /// Album by raw path identifier. The identifier is parsed before the store is touched.
    pub async fn get_by_id(&self, raw_id: &str) -> AlbumResult<Album> {
        let id = AlbumId::parse(raw_id)?;
        self.get(id).await
    }

    pub async fn get(&self, id: AlbumId) -> AlbumResult<Album> {
        match self.store.get(id).await {
            Ok(album) => Ok(album),
            Err(DbError::NotFound { .. }) => Err(AlbumError::not_found("album not found")),
            Err(e) => {
                tracing::error!(operation = "get_by_id", id = id.get(), error = %e, "album lookup failed");
                Err(AlbumError::store("database error", e))
            }
        }
    }

    /// Insert `new` and return it with the store-assigned identifier.
    ///
    /// A price the store would round is rejected before the insert.
    pub async fn create(&self, new: NewAlbum) -> AlbumResult<Album> {
        new.validate()?;

        let id = self.store.insert(&new).await.map_err(|e| {
            tracing::error!(
                operation = "create",
                title = %new.title,
                artist = %new.artist,
                error = %e,
                "album insert failed"
            );
            AlbumError::store("could not add album", e)
        })?;

        tracing::info!(id = id.get(), artist = %new.artist, "album created");
        Ok(Album::from_new(id, new))
    }

    /// Whether the store answers at all.
    pub async fn ping(&self) -> Result<(), DbError> {
        self.store.ping().await.map_err(|e| {
            tracing::warn!(operation = "ping", error = %e, "store unreachable");
            e
        })
    }
}
