//! User dictionary: the persisted override layer.
//!
//! Held fully in memory and written through to a flat JSON object on every
//! mutation. A mutation keeps the write lock until its save has finished, so
//! add/remove/import are linearized with each other and with the file
//! rewrite, while lookups only take the read lock.

#[cfg(test)]
mod tests;

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};

use crate::dict::{normalize_key, parse_flat_json, Dictionary, LoadError};

/// File name of the store inside the data directory.
pub const USER_DICT_FILENAME: &str = "user_orthography.json";

pub struct UserDictionary {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
    save_lock: Mutex<()>,
}

impl UserDictionary {
    /// Empty dictionary backed by `path`. Nothing is read or written yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: RwLock::new(HashMap::new()),
            save_lock: Mutex::new(()),
        }
    }

    /// Create and load. A malformed store leaves the dictionary empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let dict = Self::new(path);
        dict.load_or_empty();
        dict
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the in-memory entries with the store's content.
    ///
    /// A missing file yields an empty dictionary. On error the in-memory
    /// dictionary is left empty.
    pub fn load(&self) -> Result<usize, LoadError> {
        let mut map = self.write_map();
        map.clear();
        *map = read_store(&self.path)?;
        Ok(map.len())
    }

    /// `load`, logging and swallowing failures.
    pub fn load_or_empty(&self) {
        match self.load() {
            Ok(n) => debug!(entries = n, path = %self.path.display(), "user dictionary loaded"),
            Err(e) => warn!(path = %self.path.display(), "user dictionary unreadable, starting empty: {e}"),
        }
    }

    /// Write the whole dictionary to the store.
    pub fn save(&self) -> Result<(), io::Error> {
        let map = self.read_map();
        self.write_store(&map)
    }

    /// Upsert `word → replacement`. Both sides are trimmed and the word is
    /// lowercased. Returns `false` (and does nothing) if either is empty.
    pub fn add(&self, word: &str, replacement: &str) -> bool {
        let word = normalize_key(word);
        let replacement = replacement.trim();
        if word.is_empty() || replacement.is_empty() {
            return false;
        }
        let mut map = self.write_map();
        map.insert(word, replacement.to_string());
        self.persist(&map);
        true
    }

    /// Remove a word. Returns `false` if it was not present.
    pub fn remove(&self, word: &str) -> bool {
        let word = normalize_key(word);
        let mut map = self.write_map();
        if map.remove(&word).is_none() {
            return false;
        }
        self.persist(&map);
        true
    }

    /// All entries as (word, replacement) pairs, sorted by word.
    pub fn list(&self) -> Vec<(String, String)> {
        let map = self.read_map();
        let mut result: Vec<(String, String)> =
            map.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        result.sort();
        result
    }

    /// Pretty-printed JSON object of all entries, keys sorted.
    pub fn export(&self) -> String {
        let map = self.read_map();
        serde_json::to_string_pretty(&sorted(&map)).unwrap_or_else(|e| {
            warn!("user dictionary export failed: {e}");
            String::from("{}")
        })
    }

    /// Merge a flat JSON object into the dictionary.
    ///
    /// Existing words missing from `json` are kept; words present in it are
    /// overwritten. Returns the number of pairs imported, zero for
    /// malformed input.
    pub fn import(&self, json: &str) -> usize {
        let pairs = match parse_flat_json(json) {
            Ok(pairs) => pairs,
            Err(e) => {
                warn!("user dictionary import rejected: {e}");
                return 0;
            }
        };
        let count = pairs.len();
        if count == 0 {
            return 0;
        }
        let mut map = self.write_map();
        map.extend(pairs);
        self.persist(&map);
        count
    }

    /// Save after a mutation. Failures are logged; memory stays authoritative.
    fn persist(&self, map: &HashMap<String, String>) {
        if let Err(e) = self.write_store(map) {
            warn!(path = %self.path.display(), "user dictionary save failed: {e}");
        }
    }

    /// Atomic write: write to .tmp then rename.
    fn write_store(&self, map: &HashMap<String, String>) -> Result<(), io::Error> {
        let _guard = self.save_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let body = serde_json::to_string(&sorted(map)).map_err(io::Error::other)?;
        let tmp = self.path.with_extension("tmp");
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&tmp, body.as_bytes())?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn read_map(&self) -> RwLockReadGuard<'_, HashMap<String, String>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_map(&self) -> RwLockWriteGuard<'_, HashMap<String, String>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Dictionary for UserDictionary {
    fn lookup(&self, word: &str) -> Option<String> {
        self.read_map().get(word).cloned()
    }

    fn len(&self) -> usize {
        self.read_map().len()
    }
}

/// Read a store file, returning an empty map if it doesn't exist.
pub fn read_store(path: &Path) -> Result<HashMap<String, String>, LoadError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(HashMap::new()),
        Err(e) => return Err(e.into()),
    };
    Ok(parse_flat_json(&text)?.into_iter().collect())
}

fn sorted(map: &HashMap<String, String>) -> BTreeMap<&str, &str> {
    map.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
}
