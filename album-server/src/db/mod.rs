//! Database layer - connection pool and album storage
//!
//! - One pool shared by all requests, cloned into the repository
//! - Parameterized statements only
//! - "No rows" surfaces as `DbError::NotFound`, separate from driver errors

pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_from_url, ping, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
