use std::collections::HashMap;

use super::{normalize_key, parse_flat_json, Dictionary, LoadError};

/// Read-only word → replacement layer.
#[derive(Debug, Clone, Default)]
pub struct FlatDictionary {
    entries: HashMap<String, String>,
}

impl FlatDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from pairs; later pairs win on key collision.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut dict = Self::new();
        dict.extend(pairs);
        dict
    }

    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        Ok(Self::from_pairs(parse_flat_json(text)?))
    }

    /// Merge pairs over the current entries, overriding existing keys.
    pub fn extend<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, value) in pairs {
            self.entries.insert(normalize_key(key.as_ref()), value.into());
        }
    }
}

impl Dictionary for FlatDictionary {
    fn lookup(&self, word: &str) -> Option<String> {
        self.entries.get(word).cloned()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
