//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;

use crate::error::AlbumError;
use crate::models::{NewAlbum, ValidationError};

/// Create-album payload decoded from the request body.
///
/// Unlike `axum::Json` this does not insist on a `content-type` header, and
/// every decoding failure becomes a 400 `InvalidInput`.
pub struct AlbumPayload(pub NewAlbum);

impl<S> FromRequest<S> for AlbumPayload
where
    S: Send + Sync,
{
    type Rejection = AlbumError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|e| {
            ValidationError::InvalidBody {
                reason: e.body_text(),
            }
        })?;

        let album = NewAlbum::from_json(&body)?;
        Ok(Self(album))
    }
}

/// `{artist}` path segment.
///
/// A segment that does not decode to UTF-8 cannot name a stored artist, so it
/// is answered like any other unknown artist.
pub struct ArtistName(pub String);

impl<S> FromRequestParts<S> for ArtistName
where
    S: Send + Sync,
{
    type Rejection = AlbumError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(artist)) => Ok(Self(artist)),
            Err(rejection) => {
                tracing::debug!(path = %parts.uri.path(), error = %rejection, "artist segment rejected");
                Err(AlbumError::not_found("no albums found for artist"))
            }
        }
    }
}

/// Raw `{id}` path segment, parsed later by the service.
///
/// A segment that does not decode to UTF-8 is already an invalid identifier.
pub struct RawAlbumId(pub String);

impl<S> FromRequestParts<S> for RawAlbumId
where
    S: Send + Sync,
{
    type Rejection = AlbumError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(Self(id)),
            Err(_) => {
                let value = parts.uri.path().rsplit('/').next().unwrap_or_default();
                Err(ValidationError::InvalidId {
                    value: value.to_owned(),
                }
                .into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/albums")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn accepts_body_without_content_type() {
        let AlbumPayload(album) =
            AlbumPayload::from_request(request(r#"{"title":"A","artist":"B","price":9.99}"#), &())
                .await
                .unwrap();
        assert_eq!(album.title, "A");
        assert_eq!(album.artist, "B");
        assert_eq!(album.price, 9.99);
    }

    #[tokio::test]
    async fn malformed_body_is_invalid_input() {
        let err = AlbumPayload::from_request(request(r#"{"title": "A""#), &())
            .await
            .err()
            .unwrap();
        assert!(matches!(
            err,
            AlbumError::InvalidInput(ValidationError::InvalidBody { .. })
        ));
    }
}
