//! Store-specific error types
//!
//! Errors that can occur while reading or writing the bookmark collection.
//!
//! # Error Types
//!
//! - **`SledError`**: Errors from the underlying sled embedded database
//! - **`DecodeError`**: Failures when deserializing a stored collection
//! - **`EncodeError`**: Failures when serializing a collection for storage
//! - **`WriteRejected`**: The store refused a write without a lower-level cause

use thiserror::Error;

/// Store-specific errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Represents a sled database error
    #[error("Database error: {0}")]
    SledError(#[from] sled::Error),

    /// Represents a bincode decoding error
    #[error("Error while decoding data: {0}")]
    DecodeError(#[from] bincode::error::DecodeError),

    /// Represents a bincode encoding error
    #[error("Error while encoding data: {0}")]
    EncodeError(#[from] bincode::error::EncodeError),

    /// Write was refused by the store
    #[error("Write rejected for key '{0}'")]
    WriteRejected(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
