//! Error handling types for the auxide helper library.
//!
//! Only two failure classes ever cross the API boundary: invalid subjects
//! (null-reference misuse, in nullable-language terms) and codec round-trip
//! failures. Parse helpers never surface errors; they collapse every failure
//! into the caller-supplied default.

use std::fmt;
use thiserror::Error;

/// The error type for auxide operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuxideError {
    /// A subject that must be present was absent, or otherwise unusable
    /// for the requested operation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The JSON codec could not round-trip the given shape.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AuxideError {
    /// Create a new invalid argument error
    pub fn invalid_argument<T: fmt::Display>(msg: T) -> Self {
        Self::InvalidArgument(msg.to_string())
    }

    /// Create a new serialization error
    pub fn serialization<T: fmt::Display>(msg: T) -> Self {
        Self::Serialization(msg.to_string())
    }

    /// Check if this error is a caller misuse (invalid argument) error
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Check if this error came from the JSON codec
    #[must_use]
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization(_))
    }
}

/// Result type alias for auxide operations
pub type AuxideResult<T> = Result<T, AuxideError>;

impl From<serde_json::Error> for AuxideError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
