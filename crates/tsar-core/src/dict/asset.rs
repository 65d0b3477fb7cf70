use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use super::LoadError;

/// Spelling extension merged over the built-in baseline.
pub const ORTHOGRAPHY_ASSET: &str = "orthography.json";
/// Optional archaism overlay.
pub const ARCHAISMS_ASSET: &str = "archaisms.json";

/// Where bundled read-only assets come from.
pub trait AssetSource {
    /// Read an asset by name. `Ok(None)` when the asset is not bundled.
    fn read(&self, name: &str) -> Result<Option<String>, LoadError>;
}

/// Assets stored as files in one directory.
#[derive(Debug, Clone)]
pub struct DirAssets {
    root: PathBuf,
}

impl DirAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for DirAssets {
    fn read(&self, name: &str) -> Result<Option<String>, LoadError> {
        match fs::read_to_string(self.root.join(name)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Assets held in memory. The default value bundles nothing.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssets {
    files: HashMap<String, String>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, content: impl Into<String>) -> Self {
        self.files.insert(name.to_string(), content.into());
        self
    }
}

impl AssetSource for MemoryAssets {
    fn read(&self, name: &str) -> Result<Option<String>, LoadError> {
        Ok(self.files.get(name).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_assets_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let assets = DirAssets::new(dir.path());
        assert!(assets.read(ORTHOGRAPHY_ASSET).unwrap().is_none());
    }

    #[test]
    fn test_dir_assets_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(ARCHAISMS_ASSET), r#"{"рот": "уста"}"#).unwrap();
        let assets = DirAssets::new(dir.path());
        let text = assets.read(ARCHAISMS_ASSET).unwrap().unwrap();
        assert!(text.contains("уста"));
    }

    #[test]
    fn test_memory_assets() {
        let assets = MemoryAssets::new().with(ORTHOGRAPHY_ASSET, "{}");
        assert_eq!(assets.read(ORTHOGRAPHY_ASSET).unwrap().as_deref(), Some("{}"));
        assert!(assets.read(ARCHAISMS_ASSET).unwrap().is_none());
    }
}
