//! Record store for markr
//!
//! The store is a key-value capability holding whole bookmark collections:
//! one key maps to one serialized array of records. Nothing is indexed;
//! callers read the full collection, change it in memory and write it back.
//!
//! Two implementations are provided:
//! - [`SledStore`]: persistent, backed by a sled tree
//! - [`MemoryStore`]: in-process map, for embedding and tests

use sled::{Db, IVec, Tree};
use std::collections::HashMap;
use std::path::Path;

use crate::bookmark::Bookmark;

pub mod error;

pub use error::StoreError;

/// Key under which the bookmark collection is stored
pub const BOOKMARKS_KEY: &str = "bookmarks";

/// Get/set access to named bookmark collections
///
/// `set` returns only once the write is confirmed; a caller may treat a
/// successful return as committed.
pub trait RecordStore {
    /// Read the collection stored under `key`
    ///
    /// Returns `Ok(None)` if nothing was ever written under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be read or the stored value
    /// cannot be decoded.
    fn get(&self, key: &str) -> Result<Option<Vec<Bookmark>>, StoreError>;

    /// Replace the collection stored under `key`
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the collection cannot be encoded or the write
    /// is not confirmed.
    fn set(&mut self, key: &str, records: &[Bookmark]) -> Result<(), StoreError>;
}

/// Persistent store backed by sled
///
/// Collections live in the `collections` tree, encoded with bincode.
pub struct SledStore {
    db: Db,
    collections: Tree,
}

impl SledStore {
    /// Opens or creates a store at the specified path
    ///
    /// # Examples
    /// ```no_run
    /// use markr::store::SledStore;
    /// let store = SledStore::open("my_bookmarks").unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened or the internal
    /// tree cannot be created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        let collections = db.open_tree("collections")?;
        Ok(Self { db, collections })
    }

    /// Remove every stored collection
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if clearing the tree fails.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.collections.clear()?;
        self.db.flush()?;
        Ok(())
    }

    /// Insert `value` under `key` and keep it only if `confirm` succeeds
    ///
    /// On a failed confirmation the key is put back to what it held before
    /// the insert, so readers never see an unconfirmed collection.
    fn write_confirmed<F>(&self, key: &str, value: Vec<u8>, confirm: F) -> Result<(), StoreError>
    where
        F: FnOnce() -> Result<(), StoreError>,
    {
        let previous = self.collections.insert(key.as_bytes(), value)?;
        if let Err(e) = confirm() {
            if let Err(restore_err) = self.restore(key, previous) {
                tracing::error!(key, error = %restore_err, "could not restore collection after failed write");
            }
            return Err(e);
        }
        Ok(())
    }

    /// Put `key` back to `previous`, removing it if it did not exist
    fn restore(&self, key: &str, previous: Option<IVec>) -> Result<(), StoreError> {
        match previous {
            Some(old) => {
                self.collections.insert(key.as_bytes(), old)?;
            }
            None => {
                self.collections.remove(key.as_bytes())?;
            }
        }
        Ok(())
    }
}

fn encode(records: &[Bookmark]) -> Result<Vec<u8>, StoreError> {
    Ok(bincode::serde::encode_to_vec(records, bincode::config::standard())?)
}

impl RecordStore for SledStore {
    fn get(&self, key: &str) -> Result<Option<Vec<Bookmark>>, StoreError> {
        match self.collections.get(key.as_bytes())? {
            Some(value) => {
                let (records, _): (Vec<Bookmark>, usize) =
                    bincode::serde::decode_from_slice(&value, bincode::config::standard())?;
                Ok(Some(records))
            }
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, records: &[Bookmark]) -> Result<(), StoreError> {
        self.write_confirmed(key, encode(records)?, || {
            self.db.flush()?;
            Ok(())
        })?;
        tracing::debug!(key, count = records.len(), "collection written");
        Ok(())
    }
}

/// In-memory store
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    collections: HashMap<String, Vec<Bookmark>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<Bookmark>>, StoreError> {
        Ok(self.collections.get(key).cloned())
    }

    fn set(&mut self, key: &str, records: &[Bookmark]) -> Result<(), StoreError> {
        self.collections.insert(key.to_string(), records.to_vec());
        Ok(())
    }
}

impl<S: RecordStore + ?Sized> RecordStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<Vec<Bookmark>>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, records: &[Bookmark]) -> Result<(), StoreError> {
        (**self).set(key, records)
    }
}
