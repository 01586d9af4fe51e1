//! Local persistent storage with three fixed slots.
//!
//! Every slot holds one JSON document that is read and replaced whole.
//! [`FileStore`] keeps one file per slot in the cache directory and replaces it
//! atomically. [`MemoryStore`] keeps everything in process memory.

use crate::config;
use crate::error::{DirectoryError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// A named storage location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Last complete listing fetched from the API.
    Snapshot,
    /// Dapps the user has starred.
    Favorites,
    /// Most recently opened dapps, newest first.
    RecentlyViewed,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::Snapshot, Slot::Favorites, Slot::RecentlyViewed];

    /// The fixed storage key for this slot.
    pub fn key(self) -> &'static str {
        match self {
            Slot::Snapshot => config::SNAPSHOT_KEY,
            Slot::Favorites => config::FAVORITES_KEY,
            Slot::RecentlyViewed => config::RECENTLY_VIEWED_KEY,
        }
    }
}

/// Whole-value read/write access to the three storage slots.
pub trait SlotStore: Send + Sync {
    /// Read the raw contents of `slot`, or `None` if nothing was ever written.
    fn read(&self, slot: Slot) -> Result<Option<String>>;

    /// Replace the contents of `slot`.
    fn write(&self, slot: Slot, contents: &str) -> Result<()>;
}

impl<S: SlotStore + ?Sized> SlotStore for Arc<S> {
    fn read(&self, slot: Slot) -> Result<Option<String>> {
        (**self).read(slot)
    }

    fn write(&self, slot: Slot, contents: &str) -> Result<()> {
        (**self).write(slot, contents)
    }
}

// ---------------------------------------------------------------------------
// FileStore
// ---------------------------------------------------------------------------

/// Stores each slot as a JSON file inside a directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `slot`: the key without its leading `@`, plus `.json`.
    pub fn path(&self, slot: Slot) -> PathBuf {
        let key = slot.key().trim_start_matches('@');
        self.dir.join(format!("{key}.json"))
    }
}

impl SlotStore for FileStore {
    fn read(&self, slot: Slot) -> Result<Option<String>> {
        match fs::read_to_string(self.path(slot)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes to a temp file in the same directory and renames it into place,
    /// so readers see either the old or the new document.
    fn write(&self, slot: Slot, contents: &str) -> Result<()> {
        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(contents.as_bytes())?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(self.path(slot)).map_err(|e| e.error)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// Process-local store, used for tests and ephemeral clients.
#[derive(Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<Slot, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStore for MemoryStore {
    fn read(&self, slot: Slot) -> Result<Option<String>> {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(slots.get(&slot).cloned())
    }

    fn write(&self, slot: Slot, contents: &str) -> Result<()> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.insert(slot, contents.to_string());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Typed helpers
// ---------------------------------------------------------------------------

/// Read and decode a slot. Returns `Ok(None)` when the slot is empty and
/// `Err(Json)` when it holds something that does not decode as `T`.
pub fn load<T: DeserializeOwned>(store: &dyn SlotStore, slot: Slot) -> Result<Option<T>> {
    match store.read(slot)? {
        Some(contents) => Ok(Some(serde_json::from_str(&contents)?)),
        None => Ok(None),
    }
}

/// Encode `value` and replace the slot with it.
pub fn save<T: Serialize + ?Sized>(store: &dyn SlotStore, slot: Slot, value: &T) -> Result<()> {
    let contents = serde_json::to_string(value)?;
    store.write(slot, &contents)
}

/// Like [`load`], but a corrupt slot is logged and read as `T::default()`.
///
/// Storage I/O errors still propagate.
pub fn load_or_default<T: DeserializeOwned + Default>(store: &dyn SlotStore, slot: Slot) -> Result<T> {
    match load::<T>(store, slot) {
        Ok(value) => Ok(value.unwrap_or_default()),
        Err(DirectoryError::Json(e)) => {
            tracing::warn!("Corrupt {} slot ({}); treating as empty", slot.key(), e);
            Ok(T::default())
        }
        Err(e) => Err(e),
    }
}
