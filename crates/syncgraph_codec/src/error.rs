//! Error types for the codec crate.

use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while encoding or decoding transit payloads.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Failed to produce or parse JSON.
    #[error("JSON codec failed: {message}")]
    Json {
        /// Description of the JSON error.
        message: String,
    },

    /// Failed to produce or parse CBOR.
    #[error("CBOR codec failed: {message}")]
    Cbor {
        /// Description of the CBOR error.
        message: String,
    },

    /// The payload parsed but does not have the shape of sync data.
    #[error("invalid sync data structure: {message}")]
    InvalidStructure {
        /// Description of the structural error.
        message: String,
    },
}

impl CodecError {
    /// Create a JSON error.
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json {
            message: message.into(),
        }
    }

    /// Create a CBOR error.
    pub fn cbor(message: impl Into<String>) -> Self {
        Self::Cbor {
            message: message.into(),
        }
    }

    /// Create an invalid structure error.
    pub fn invalid_structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        Self::json(err.to_string())
    }
}
