//! Orthography engine: the entry point used by input integrations.
//!
//! One instance is built at startup and shared by reference. `init` loads
//! the bundled assets exactly once; lookups are read-only and may run concurrently,
//! user-dictionary mutations are serialized inside `UserDictionary`.


use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::dict::{AssetSource, LayeredDictionary};

pub struct OrthographyEngine {
    user_dict_path: PathBuf,
    layers: OnceLock<LayeredDictionary>,
    archaisms_enabled: AtomicBool,
}

impl OrthographyEngine {
    /// Engine whose user dictionary lives at `user_dict_path`.
    /// Nothing is loaded until `init` (or the first operation).
    pub fn new(user_dict_path: impl Into<PathBuf>) -> Self {
        Self {
            user_dict_path: user_dict_path.into(),
            layers: OnceLock::new(),
            archaisms_enabled: AtomicBool::new(false),
        }
    }

    pub fn user_dict_path(&self) -> &Path {
        &self.user_dict_path
    }

    /// Load the user dictionary, the built-in layer with its extension
    /// asset, and the archaism asset.
    ///
    /// Only the first call loads the assets; concurrent callers wait for it.
    /// The user dictionary may already have been loaded by an earlier
    /// operation, in which case it is kept. Returns `true` if this call
    /// loaded the assets.
    pub fn init(&self, assets: &dyn AssetSource) -> bool {
        let loaded = self.layers().load_assets(assets);
        if !loaded {
            debug!("engine already initialized");
        }
        loaded
    }

    /// Whether `init` has loaded the bundled assets.
    pub fn is_initialized(&self) -> bool {
        self.layers.get().is_some_and(LayeredDictionary::assets_loaded)
    }

    /// Loaded layers. The user dictionary is read on first access; the
    /// asset-backed layers stay at the baseline until `init`.
    pub fn layers(&self) -> &LayeredDictionary {
        self.layers
            .get_or_init(|| LayeredDictionary::open(&self.user_dict_path))
    }

    pub fn set_archaisms_enabled(&self, enabled: bool) {
        self.archaisms_enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn archaisms_enabled(&self) -> bool {
        self.archaisms_enabled.load(Ordering::Relaxed)
    }

    /// Pre-reform spelling of one word. Never fails: a word nothing
    /// applies to comes back unchanged.
    pub fn replace_word(&self, word: &str) -> String {
        self.layers().resolve(word, self.archaisms_enabled())
    }

    /// Re-read the user dictionary from its store.
    pub fn load_user_dictionary(&self) {
        self.layers().user().load_or_empty();
    }

    /// Write the user dictionary to its store, best effort.
    pub fn save_user_dictionary(&self) {
        if let Err(e) = self.layers().user().save() {
            warn!("user dictionary save failed: {e}");
        }
    }

    /// Returns `false` if the word or replacement is blank.
    pub fn add_user_entry(&self, word: &str, replacement: &str) -> bool {
        self.layers().user().add(word, replacement)
    }

    /// Returns `false` if the word was not in the user dictionary.
    pub fn remove_user_entry(&self, word: &str) -> bool {
        self.layers().user().remove(word)
    }

    pub fn list_user_entries(&self) -> Vec<(String, String)> {
        self.layers().user().list()
    }

    pub fn export_user_dictionary(&self) -> String {
        self.layers().user().export()
    }

    /// Merge a JSON object into the user dictionary; returns the number of
    /// imported pairs (zero on malformed input).
    pub fn import_user_dictionary(&self, json: &str) -> usize {
        self.layers().user().import(json)
    }
}
