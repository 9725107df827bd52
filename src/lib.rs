//! Markr - save, tag and search bookmarks
//!
//! This library provides the bookmark pipeline behind the `markr` CLI: a
//! write-through session over a key-value record store, keyword and tag
//! filtering, newest-first pagination, a tag index, tag autocompletion and
//! JSON backups.

use thiserror::Error;

pub mod backup;
pub mod bookmark;
pub mod browser;
pub mod cli;
pub mod commands;
pub mod completions;
pub mod config;
pub mod output;
pub mod search;
pub mod session;
pub mod store;
pub mod ui;

#[cfg(test)]
pub mod testing;

pub use bookmark::Bookmark;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum MarkrError {
    /// Store error
    #[error("Store error: {0}")]
    StoreError(#[from] store::StoreError),
    /// Backup file error
    #[error("{0}")]
    BackupError(#[from] backup::BackupError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// There is no document to bookmark
    #[error("No active target: a title and URL are required")]
    NoActiveTarget,
    /// No bookmark with the given id
    #[error("Bookmark {0} not found")]
    NotFound(i64),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
