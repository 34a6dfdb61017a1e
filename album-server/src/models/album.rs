//! Album record and the request contract for creating one

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Store-assigned album identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlbumId(pub i64);

impl AlbumId {
    /// Parse an identifier taken from a request path.
    ///
    /// # Example
    /// ```
    /// use album_server::models::AlbumId;
    ///
    /// assert_eq!(AlbumId::parse("42").unwrap(), AlbumId(42));
    /// assert!(AlbumId::parse("abc").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidId { value: s.to_owned() })
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for AlbumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Album as stored and as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Album {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl Album {
    /// Attach a store-assigned identifier to an accepted payload.
    pub fn from_new(id: AlbumId, new: NewAlbum) -> Self {
        Self {
            id: id.get(),
            title: new.title,
            artist: new.artist,
            price: new.price,
        }
    }
}

/// Largest magnitude the `DECIMAL(5,2)` price column holds, exclusive.
pub const PRICE_LIMIT: f64 = 1000.0;

/// Body of a create request.
///
/// There is no `id` field: a client-supplied identifier is dropped during
/// deserialization and never reaches the store.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewAlbum {
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl NewAlbum {
    /// Decode a request body, rejecting anything that isn't a complete payload.
    pub fn from_json(body: &[u8]) -> Result<Self, ValidationError> {
        serde_json::from_slice(body).map_err(|e| ValidationError::InvalidBody {
            reason: e.to_string(),
        })
    }

    /// Check that the store can hold `price` exactly.
    ///
    /// The column keeps two decimal places below 1000; anything else would be
    /// rounded on insert and read back different from what was accepted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.price.is_finite() || self.price.abs() >= PRICE_LIMIT {
            return Err(ValidationError::InvalidPrice { price: self.price });
        }

        let cents = (self.price * 100.0).round();
        if cents / 100.0 != self.price {
            return Err(ValidationError::InvalidPrice { price: self.price });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_ids() {
        assert_eq!(AlbumId::parse("1").unwrap(), AlbumId(1));
        assert_eq!(AlbumId::parse("-7").unwrap(), AlbumId(-7));
        assert_eq!(
            AlbumId::parse("9223372036854775807").unwrap(),
            AlbumId(i64::MAX)
        );
    }

    #[test]
    fn rejects_non_numeric_ids() {
        for raw in ["abc", "", "1.5", "12abc", " 3", "9223372036854775808"] {
            let err = AlbumId::parse(raw).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidId { ref value } if value == raw),
                "expected InvalidId for {raw:?}"
            );
        }
    }

    #[test]
    fn new_album_ignores_client_id() {
        let body = br#"{"id": 999, "title": "Blue Train", "artist": "John Coltrane", "price": 56.99}"#;
        let new = NewAlbum::from_json(body).unwrap();
        assert_eq!(new.title, "Blue Train");
        assert_eq!(new.artist, "John Coltrane");
        assert_eq!(new.price, 56.99);

        let album = Album::from_new(AlbumId(3), new);
        assert_eq!(album.id, 3);
    }

    #[test]
    fn new_album_rejects_malformed_bodies() {
        let cases: [&[u8]; 5] = [
            b"",
            b"not json",
            br#"{"title": "A", "artist": "B"}"#,
            br#"{"title": "A", "artist": "B", "price": "cheap"}"#,
            br#"[1, 2, 3]"#,
        ];
        for body in cases {
            let err = NewAlbum::from_json(body).unwrap_err();
            assert!(matches!(err, ValidationError::InvalidBody { .. }));
        }
    }

    fn priced(price: f64) -> NewAlbum {
        NewAlbum {
            title: "A".into(),
            artist: "B".into(),
            price,
        }
    }

    #[test]
    fn accepts_prices_the_column_holds() {
        for price in [0.0, 9.99, 56.99, 0.1, 999.99, -12.5, 17.0] {
            assert!(priced(price).validate().is_ok(), "price {price}");
        }
    }

    #[test]
    fn rejects_prices_the_column_would_round() {
        for price in [9.999, 0.001, 1000.0, 1234.5, -1000.0, f64::NAN, f64::INFINITY] {
            let err = priced(price).validate().unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidPrice { .. }),
                "price {price}"
            );
        }
    }

    #[test]
    fn album_json_shape() {
        let album = Album {
            id: 1,
            title: "Jeru".into(),
            artist: "Gerry Mulligan".into(),
            price: 17.99,
        };
        let value = serde_json::to_value(&album).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 1,
                "title": "Jeru",
                "artist": "Gerry Mulligan",
                "price": 17.99
            })
        );
    }
}
