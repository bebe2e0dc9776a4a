use super::keymap::KeyConfig;
use crate::infrastructure::http_backend::DEFAULT_ENDPOINT;
use crate::theme::PaletteType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub endpoint: String,
    pub theme: PaletteType,
    // Drop completions older than the one already on screen
    pub fence_stale_responses: bool,
    pub keys: KeyConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            theme: PaletteType::CatppuccinMocha,
            fence_stale_responses: false,
            keys: KeyConfig::default(),
        }
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("analyst");
        path.push("config.toml");
        path
    })
}

impl AppConfig {
    pub fn load() -> Self {
        match get_config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Missing files are silent; unreadable or malformed ones fall back to
    /// defaults with a warning in the log.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read config");
                return Self::default();
            }
        };

        match toml::from_str::<AppConfig>(&content) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "invalid config, using defaults");
                Self::default()
            }
        }
    }
}
