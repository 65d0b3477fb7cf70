use std::borrow::Cow;
use std::path::Path;
use std::sync::OnceLock;

use tracing::{debug, debug_span, warn};

use super::{
    builtin, parse_flat_json, AssetSource, Dictionary, FlatDictionary, ARCHAISMS_ASSET,
    ORTHOGRAPHY_ASSET,
};
use crate::casing::apply_casing;
use crate::rules::apply_rules;
use crate::user_dict::UserDictionary;

/// The three lookup layers of the engine.
///
/// Resolution is two-staged: the archaism overlay (when enabled) rewrites
/// the word first, then the rewritten word is looked up in the user layer
/// and the built-in layer, falling back to the suffix rules. Only the first
/// layer that matches is used.
///
/// The layers backed by bundled assets are filled once by `load_assets`.
/// Until then the built-in layer is the hardcoded baseline and the archaism
/// overlay is empty.
pub struct LayeredDictionary {
    user: UserDictionary,
    baseline: FlatDictionary,
    assets: OnceLock<AssetLayers>,
}

struct AssetLayers {
    builtin: FlatDictionary,
    archaisms: FlatDictionary,
}

impl LayeredDictionary {
    /// User layer loaded from `user_dict_path`, baseline only, no assets.
    pub fn open(user_dict_path: &Path) -> Self {
        Self {
            user: UserDictionary::open(user_dict_path),
            baseline: builtin::baseline(),
            assets: OnceLock::new(),
        }
    }

    /// `open` followed by `load_assets`.
    pub fn load(user_dict_path: &Path, assets: &dyn AssetSource) -> Self {
        let dict = Self::open(user_dict_path);
        dict.load_assets(assets);
        dict
    }

    /// Merge the spelling extension over the baseline and load the archaism
    /// overlay. Missing or malformed assets leave the baseline (or an empty
    /// overlay). Only the first call loads; returns `true` if this one did.
    pub fn load_assets(&self, assets: &dyn AssetSource) -> bool {
        let mut loaded = false;
        self.assets.get_or_init(|| {
            loaded = true;
            let mut builtin = self.baseline.clone();
            builtin.extend(read_asset(assets, ORTHOGRAPHY_ASSET));
            let archaisms = FlatDictionary::from_pairs(read_asset(assets, ARCHAISMS_ASSET));
            debug!(
                user = self.user.len(),
                builtin = builtin.len(),
                archaisms = archaisms.len(),
                "dictionary layers loaded"
            );
            AssetLayers { builtin, archaisms }
        });
        loaded
    }

    pub fn assets_loaded(&self) -> bool {
        self.assets.get().is_some()
    }

    pub fn user(&self) -> &UserDictionary {
        &self.user
    }

    pub fn archaisms(&self) -> &FlatDictionary {
        static NONE: OnceLock<FlatDictionary> = OnceLock::new();
        match self.assets.get() {
            Some(layers) => &layers.archaisms,
            None => NONE.get_or_init(FlatDictionary::new),
        }
    }

    pub fn builtin(&self) -> &FlatDictionary {
        match self.assets.get() {
            Some(layers) => &layers.builtin,
            None => &self.baseline,
        }
    }

    /// Spelling lookup of a lowercase word: user layer, then built-in layer.
    pub fn lookup_spelling(&self, lower: &str) -> Option<String> {
        let layers: [&dyn Dictionary; 2] = [&self.user, self.builtin()];
        layers.into_iter().find_map(|layer| layer.lookup(lower))
    }

    /// Pre-reform form of `word`, cased after `word`.
    ///
    /// Returns the (possibly archaism-rewritten) word unchanged when neither
    /// a dictionary layer nor a rule applies.
    pub fn resolve(&self, word: &str, archaisms_enabled: bool) -> String {
        if word.is_empty() {
            return String::new();
        }
        let _span = debug_span!("resolve", word).entered();

        let mut current = Cow::Borrowed(word);
        let archaisms = self.archaisms();
        if archaisms_enabled && !archaisms.is_empty() {
            if let Some(repl) = archaisms.lookup(&word.to_lowercase()) {
                debug!(archaism = %repl);
                current = Cow::Owned(apply_casing(word, &repl));
            }
        }

        let lower = current.to_lowercase();
        if let Some(repl) = self.lookup_spelling(&lower) {
            debug!(replacement = %repl, "dictionary hit");
            return apply_casing(word, &repl);
        }
        if let Some(repl) = apply_rules(&lower) {
            debug!(replacement = %repl, "rule hit");
            return apply_casing(word, &repl);
        }
        current.into_owned()
    }
}

/// Pairs of a bundled asset; empty when it is absent or unreadable.
fn read_asset(assets: &dyn AssetSource, name: &str) -> Vec<(String, String)> {
    let text = match assets.read(name) {
        Ok(Some(text)) => text,
        Ok(None) => {
            debug!(asset = name, "asset not bundled");
            return Vec::new();
        }
        Err(e) => {
            warn!(asset = name, "asset unreadable: {e}");
            return Vec::new();
        }
    };
    parse_flat_json(&text).unwrap_or_else(|e| {
        warn!(asset = name, "asset malformed: {e}");
        Vec::new()
    })
}
