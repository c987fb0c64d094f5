//! Viewer configuration persistence.
//!
//! One persisted preference: the theme. Stored as TOML under the user config
//! directory. A missing or corrupt file falls back to defaults so startup
//! never blocks on configuration.
//!
//! ```toml
//! theme = "dark"  # or "light"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::LexiconError;
use crate::theme::Theme;

/// Persisted viewer preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    #[serde(default)]
    pub theme: Theme,
}

impl ViewerConfig {
    /// Config file location under the user config directory
    pub fn config_file_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join("khlex")
            .join("config.toml")
    }

    /// Load the persisted config, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&Self::config_file_path())
    }

    /// Load from an explicit path (tests use a temp directory).
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                warn!("ignoring corrupt config at {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Persist the config, creating parent directories.
    pub fn save(&self) -> Result<(), LexiconError> {
        self.save_to(&Self::config_file_path())
    }

    /// Save to an explicit path (tests use a temp directory).
    pub fn save_to(&self, path: &Path) -> Result<(), LexiconError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| LexiconError::Config(e.to_string()))?;
        fs::write(path, contents)?;
        Ok(())
    }
}
