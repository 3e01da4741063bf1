//! The persistent key-value store.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use crate::error::Error;
use crate::password;
use crate::snapshot;

/// An in-memory map of string keys to string values, backed by one JSON
/// snapshot file.
///
/// A single reader-writer lock guards the map and the persistence write as
/// one critical section: reads run concurrently, while a write holds
/// exclusivity across both the map update and the full file rewrite. The
/// store is shared across threads behind an `Arc`.
///
/// There is no coordination between processes. Two stores opened on the
/// same file overwrite each other's snapshots, last writer wins.
pub struct Store {
    data: RwLock<HashMap<String, String>>,
    file: PathBuf,
}

impl Store {
    /// Open a store backed by the file at `path`.
    ///
    /// A missing file yields an empty store. An unreadable or corrupt file
    /// also yields an empty store: opening never fails, the failure is
    /// logged and the previous contents are effectively lost for this run.
    pub fn open(path: impl Into<PathBuf>) -> Store {
        let file = path.into();
        let data = match snapshot::read::<HashMap<String, String>>(&file) {
            Ok(Some(data)) => data,
            Ok(None) => HashMap::new(),
            Err(err) => {
                log::warn!(
                    "failed to load snapshot from {}, starting empty: {}",
                    file.display(),
                    err
                );
                HashMap::new()
            }
        };

        Store {
            data: RwLock::new(data),
            file,
        }
    }

    /// Look up `key`, returning a copy of its value.
    ///
    /// Never mutates and never touches disk.
    pub fn get(&self, key: &str) -> Option<String> {
        let data = self.data.read().unwrap_or_else(PoisonError::into_inner);
        data.get(key).cloned()
    }

    /// Insert or overwrite `key`, then persist the full data set before
    /// returning.
    ///
    /// The write lock covers both the map update and the disk write, so no
    /// other operation observes the store between the two. A failed disk
    /// write is logged rather than returned: the in-memory update still
    /// stands, and the file catches up on the next successful save.
    pub fn set(&self, key: &str, value: &str) {
        let mut data = self.data.write().unwrap_or_else(PoisonError::into_inner);
        data.insert(key.to_string(), value.to_string());
        if let Err(err) = snapshot::write(&self.file, &*data) {
            log::error!(
                "failed to persist snapshot to {}: {}",
                self.file.display(),
                err
            );
        }
    }

    /// Generate a strong password of `length` hex characters and store it
    /// under `key`.
    ///
    /// Validation and entropy failures are returned before the store is
    /// touched; on success the password is persisted like any other `set`.
    pub fn set_password(&self, key: &str, length: usize) -> Result<(), Error> {
        let value = password::generate_strong_password(length)?;
        self.set(key, &value);
        Ok(())
    }

    /// The backing file this store persists to.
    pub fn file(&self) -> &Path {
        &self.file
    }
}
