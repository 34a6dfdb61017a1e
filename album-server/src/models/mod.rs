//! Domain models with validation at construction
//!
//! Request input is parsed into these types at the HTTP boundary.
//! Invalid input returns ValidationError, not panic.

pub mod album;
pub mod validation;

pub use album::{Album, AlbumId, NewAlbum};
pub use validation::ValidationError;
