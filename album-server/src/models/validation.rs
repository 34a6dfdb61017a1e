//! Validation error types

use std::fmt;

/// Input that failed to parse into a domain type
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Path identifier is not a 64-bit integer
    InvalidId { value: String },

    /// Request body is not a well-formed album payload
    InvalidBody { reason: String },

    /// Price the store cannot hold without rounding
    InvalidPrice { price: f64 },
}

impl ValidationError {
    /// Short message safe to hand back to clients.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::InvalidId { .. } => "invalid album ID",
            Self::InvalidBody { .. } => "invalid JSON format",
            Self::InvalidPrice { .. } => "price must be below 1000 with at most two decimal places",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId { value } => write!(f, "invalid album ID: '{}'", value),
            Self::InvalidBody { reason } => write!(f, "invalid JSON format: {}", reason),
            Self::InvalidPrice { price } => write!(f, "price {} cannot be stored exactly", price),
        }
    }
}

impl std::error::Error for ValidationError {}
