//! Key-value store persisted as one pretty-printed JSON document.
//!
//! The whole map lives in memory; each mutation rewrites the file through a
//! sibling `.tmp` file and a rename, so a crash mid-write leaves the previous
//! document intact. Sized for a handful of small keys written on user actions.

use crate::domain::error::{Result, ShelfError};
use crate::storage::backend::Storage;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// On-disk document.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Document {
    /// Bumped if the layout ever changes.
    version: u32,

    #[serde(default)]
    entries: BTreeMap<String, String>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            version: 1,
            entries: BTreeMap::new(),
        }
    }
}

/// [`Storage`] backed by a JSON file, written through on every change.
///
/// ```json
/// {
///   "version": 1,
///   "entries": {
///     "genrePreference": "Horror",
///     "searchPreference": "",
///     "wishlist": "[\"84\",\"1342\"]"
///   }
/// }
/// ```
#[derive(Debug)]
pub struct JsonStorage {
    file_path: PathBuf,
    document: Document,
    /// Set by a mutation until the next successful write.
    dirty: bool,
}

impl JsonStorage {
    /// Opens the store at `file_path`, reading it if present.
    ///
    /// Missing parent directories are created now; the file itself only
    /// appears on the first write.
    ///
    /// # Errors
    ///
    /// Fails when the directory cannot be created, or an existing file cannot
    /// be read or is not a valid document.
    pub fn new(file_path: PathBuf) -> Result<Self> {
        if let Some(dir) = file_path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        let document = if file_path.exists() {
            Self::read_document(&file_path)?
        } else {
            Document::default()
        };

        tracing::debug!(
            path = %file_path.display(),
            entries = document.entries.len(),
            "opened JSON store"
        );

        Ok(Self {
            file_path,
            document,
            dirty: false,
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn read_document(path: &Path) -> Result<Document> {
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| {
            ShelfError::Storage(format!("{} is not a valid store: {e}", path.display()))
        })
    }

    fn flush(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.document)
            .map_err(|e| ShelfError::Storage(format!("failed to encode store: {e}")))?;

        let staging = self.file_path.with_extension("tmp");
        std::fs::write(&staging, json)?;
        std::fs::rename(&staging, &self.file_path)?;

        self.dirty = false;
        tracing::trace!(path = %self.file_path.display(), "store written");
        Ok(())
    }
}

impl Storage for JsonStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.document.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_set", key = %key, value_len = value.len()).entered();

        if self.document.entries.get(key).is_some_and(|current| current == value) {
            return Ok(());
        }

        let previous = self.document.entries.insert(key.to_string(), value.to_string());
        self.dirty = true;

        if let Err(e) = self.flush() {
            // Memory must not run ahead of what is on disk.
            match previous {
                Some(previous) => self.document.entries.insert(key.to_string(), previous),
                None => self.document.entries.remove(key),
            };
            self.dirty = false;
            return Err(e);
        }
        Ok(())
    }
}

impl Drop for JsonStorage {
    fn drop(&mut self) {
        if self.dirty {
            if let Err(e) = self.flush() {
                tracing::error!(error = %e, "unsaved store changes lost");
            }
        }
    }
}
