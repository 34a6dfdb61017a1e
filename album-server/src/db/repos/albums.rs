//! MySQL album repository
//!
//! Every statement binds its arguments; nothing from a request is spliced
//! into SQL text.

use async_trait::async_trait;
use sqlx::MySqlPool;

use super::{AlbumStore, DbError};
use crate::models::{Album, AlbumId, NewAlbum};

// `price` is DECIMAL in the table; casting lets it decode straight into f64.
const SELECT_BY_ARTIST: &str = r#"
    SELECT id, title, artist, CAST(price AS DOUBLE) AS price
    FROM album
    WHERE artist = ?
    ORDER BY id
"#;

const SELECT_BY_ID: &str = r#"
    SELECT id, title, artist, CAST(price AS DOUBLE) AS price
    FROM album
    WHERE id = ?
"#;

const INSERT_ALBUM: &str = "INSERT INTO album (title, artist, price) VALUES (?, ?, ?)";

/// Album repository backed by a MySQL pool
#[derive(Clone)]
pub struct AlbumRepo {
    pool: MySqlPool,
}

impl AlbumRepo {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AlbumStore for AlbumRepo {
    async fn list_by_artist(&self, artist: &str) -> Result<Vec<Album>, DbError> {
        let albums = sqlx::query_as::<_, Album>(SELECT_BY_ARTIST)
            .bind(artist)
            .fetch_all(&self.pool)
            .await?;

        Ok(albums)
    }

    async fn get(&self, id: AlbumId) -> Result<Album, DbError> {
        sqlx::query_as::<_, Album>(SELECT_BY_ID)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "album",
                id: id.to_string(),
            })
    }

    async fn insert(&self, album: &NewAlbum) -> Result<AlbumId, DbError> {
        let result = sqlx::query(INSERT_ALBUM)
            .bind(&album.title)
            .bind(&album.artist)
            .bind(album.price)
            .execute(&self.pool)
            .await?;

        let raw = result.last_insert_id();
        i64::try_from(raw)
            .map(AlbumId)
            .map_err(|_| DbError::IdOutOfRange(raw))
    }

    async fn ping(&self) -> Result<(), DbError> {
        crate::db::ping(&self.pool).await?;
        Ok(())
    }
}
