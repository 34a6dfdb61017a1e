//! album-server: HTTP access to the `album` table
//!
//! Three operations over a relational store: list albums by artist, fetch
//! one by id, and insert a new one. The store sits behind the `AlbumStore`
//! trait so the service can run against MySQL or an in-memory table.

pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod service;
pub mod tracing_setup;

pub use error::{AlbumError, AlbumResult};
pub use service::AlbumService;
