//! Testing utilities for markr
//!
//! Helpers for building records, a temporary sled store that cleans up after
//! itself, and a store whose writes can be made to fail.
//!
//! Only available when compiled with `cfg(test)`.

use std::cell::RefCell;
use std::io;
use tempfile::TempDir;

use crate::bookmark::Bookmark;
use crate::browser::{ActiveDocument, ArgDocument, Document};
use crate::store::{MemoryStore, RecordStore, SledStore, StoreError};

/// Wrapper for a temporary sled store
///
/// The backing directory is removed when the wrapper goes out of scope.
pub struct TestStore {
    store: SledStore,
    _dir: TempDir,
}

impl TestStore {
    /// Create an empty store in a fresh temporary directory
    ///
    /// # Panics
    /// Panics if the directory or the store cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = SledStore::open(dir.path().join("db")).expect("Failed to open test store");
        Self { store, _dir: dir }
    }

    #[must_use]
    pub const fn store(&self) -> &SledStore {
        &self.store
    }

    pub const fn store_mut(&mut self) -> &mut SledStore {
        &mut self.store
    }
}

/// In-memory store whose writes can be switched to fail
#[derive(Debug, Default)]
pub struct FlakyStore {
    inner: MemoryStore,
    failing: bool,
}

impl FlakyStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent writes fail (or succeed again)
    pub const fn fail_writes(&mut self, failing: bool) {
        self.failing = failing;
    }
}

impl RecordStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<Vec<Bookmark>>, StoreError> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, records: &[Bookmark]) -> Result<(), StoreError> {
        if self.failing {
            return Err(StoreError::WriteRejected(key.to_string()));
        }
        self.inner.set(key, records)
    }
}

/// Build a bookmark with `id` as both identifier and timestamp
#[must_use]
pub fn bookmark(id: i64, title: &str, tags: &[&str]) -> Bookmark {
    Bookmark::new(
        title,
        format!("https://example.com/{id}"),
        "",
        tags.iter().map(|t| (*t).to_string()).collect(),
        id,
    )
}

/// An active document with the given title and address
#[must_use]
pub fn tab(title: &str, url: &str) -> ArgDocument {
    ArgDocument::new(Some(title.to_string()), Some(url.to_string()))
}

/// Active document that records opened addresses instead of launching a viewer
#[derive(Debug, Default)]
pub struct RecordingViewer {
    current: Option<Document>,
    opened: RefCell<Vec<String>>,
}

impl RecordingViewer {
    /// A viewer showing the given document
    #[must_use]
    pub fn showing(title: &str, url: &str) -> Self {
        Self {
            current: Some(Document {
                title: title.to_string(),
                url: url.to_string(),
            }),
            opened: RefCell::default(),
        }
    }

    /// Addresses passed to `open`, oldest first
    #[must_use]
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl ActiveDocument for RecordingViewer {
    fn current(&self) -> Option<Document> {
        self.current.clone()
    }

    fn open(&self, url: &str) -> io::Result<()> {
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}
