//! Dictionary layers and their resolution.
//!
//! `FlatDictionary` is a read-only word → replacement map parsed from a flat
//! JSON object. `LayeredDictionary` stacks the user layer, the optional
//! archaism overlay and the built-in spelling layer.

mod asset;
pub mod builtin;
mod flat;
mod layered;

pub use asset::{AssetSource, DirAssets, MemoryAssets, ARCHAISMS_ASSET, ORTHOGRAPHY_ASSET};
pub use flat::FlatDictionary;
pub use layered::LayeredDictionary;

use std::io;

/// Failure to read a dictionary store or asset.
///
/// Callers degrade to an empty layer; a missing file is not an error and is
/// handled before this type is produced.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a flat JSON object")]
    NotAnObject,
}

pub trait Dictionary: Send + Sync {
    /// Look up a lowercase word.
    fn lookup(&self, word: &str) -> Option<String>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Normalize a dictionary key: trimmed and lowercased.
pub fn normalize_key(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Parse a flat `{ "word": "replacement", ... }` object.
///
/// Keys are normalized; pairs with an empty key, an empty value or a
/// non-string value are skipped.
pub fn parse_flat_json(text: &str) -> Result<Vec<(String, String)>, LoadError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let serde_json::Value::Object(map) = value else {
        return Err(LoadError::NotAnObject);
    };
    let pairs = map
        .into_iter()
        .filter_map(|(key, value)| match value {
            serde_json::Value::String(repl) if !repl.is_empty() => {
                let key = normalize_key(&key);
                (!key.is_empty()).then_some((key, repl))
            }
            _ => None,
        })
        .collect();
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flat_json() {
        let pairs = parse_flat_json(r#"{"Дело": "дѣло", "мир": "миръ"}"#).unwrap();
        assert_eq!(pairs.len(), 2);
        assert!(pairs.contains(&("дело".to_string(), "дѣло".to_string())));
        assert!(pairs.contains(&("мир".to_string(), "миръ".to_string())));
    }

    #[test]
    fn test_parse_skips_empty_and_non_string() {
        let pairs = parse_flat_json(r#"{"a": "", "b": 1, "c": null, " ": "x", "d": "д"}"#).unwrap();
        assert_eq!(pairs, vec![("d".to_string(), "д".to_string())]);
    }

    #[test]
    fn test_parse_rejects_non_object() {
        assert!(matches!(
            parse_flat_json(r#"["дело"]"#),
            Err(LoadError::NotAnObject)
        ));
        assert!(matches!(parse_flat_json("{not json"), Err(LoadError::Json(_))));
    }
}
