pub mod config_ops;
pub mod replace_ops;
pub mod user_dict_ops;

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use tracing::debug;
use tsar_core::dict::DirAssets;
use tsar_core::settings::{self, Settings};
use tsar_core::OrthographyEngine;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Settings file looked up in the data directory when `--config` is absent.
pub const SETTINGS_FILENAME: &str = "settings.toml";

pub fn default_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(dir).join("tsar");
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".local/share/tsar")
}

/// `config`, else `<data_dir>/settings.toml` if present, else the defaults.
pub fn load_settings(data_dir: &Path, config: Option<&Path>) -> Settings {
    let path = match config {
        Some(path) => path.to_path_buf(),
        None => {
            let path = data_dir.join(SETTINGS_FILENAME);
            if !path.exists() {
                return Settings::defaults();
            }
            path
        }
    };
    let content = die!(
        fs::read_to_string(&path),
        "Error reading {}: {}",
        path.display()
    );
    die!(settings::parse_settings_toml(&content), "Error: {}")
}

/// Build and initialize the engine described by `settings`.
pub fn open_engine(data_dir: &Path, settings: &Settings) -> OrthographyEngine {
    let engine = OrthographyEngine::new(settings.user_dict_path(data_dir));
    engine.init(&DirAssets::new(settings.assets_dir(data_dir)));
    engine.set_archaisms_enabled(settings.features.archaisms);
    debug!(
        data_dir = %data_dir.display(),
        archaisms = settings.features.archaisms,
        "engine opened"
    );
    engine
}
