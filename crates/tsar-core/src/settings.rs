//! Settings loaded from TOML.
//!
//! Defaults are embedded via `include_str!("default_settings.toml")`. The
//! engine never reads settings itself; callers parse them and push the
//! feature flags into the engine.

use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub paths: PathSettings,
    pub features: FeatureSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PathSettings {
    pub user_dict: PathBuf,
    pub assets: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureSettings {
    pub auto_replace: bool,
    pub archaisms: bool,
}

impl Settings {
    pub fn defaults() -> Self {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("default settings TOML must be valid")
    }

    /// User dictionary location, resolved against `data_dir`.
    pub fn user_dict_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.paths.user_dict)
    }

    /// Asset directory, resolved against `data_dir`.
    pub fn assets_dir(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.paths.assets)
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_non_empty {
        ($section:ident . $field:ident) => {
            if s.$section.$field.as_os_str().is_empty() {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        };
    }
    check_non_empty!(paths.user_dict);
    check_non_empty!(paths.assets);
    Ok(())
}
