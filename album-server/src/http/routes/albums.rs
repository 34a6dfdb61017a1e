//! Album endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Router,
};

use crate::error::AlbumError;
use crate::http::extractors::{AlbumPayload, ArtistName, RawAlbumId};
use crate::http::json::IndentedJson;
use crate::http::server::AppState;
use crate::models::Album;

/// GET /albums/{artist} - all albums by an artist
async fn list_by_artist(
    State(state): State<Arc<AppState>>,
    ArtistName(artist): ArtistName,
) -> Result<IndentedJson<Vec<Album>>, AlbumError> {
    let albums = state.albums.list_by_artist(&artist).await?;
    Ok(IndentedJson(albums))
}

/// GET /album/{id} - a single album
async fn get_album(
    State(state): State<Arc<AppState>>,
    RawAlbumId(id): RawAlbumId,
) -> Result<IndentedJson<Album>, AlbumError> {
    let album = state.albums.get_by_id(&id).await?;
    Ok(IndentedJson(album))
}

/// POST /albums - add an album
async fn create_album(
    State(state): State<Arc<AppState>>,
    AlbumPayload(new): AlbumPayload,
) -> Result<(StatusCode, IndentedJson<Album>), AlbumError> {
    let album = state.albums.create(new).await?;
    Ok((StatusCode::CREATED, IndentedJson(album)))
}

/// Album routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/albums", post(create_album))
        .route("/albums/{artist}", get(list_by_artist))
        .route("/album/{id}", get(get_album))
}
