//! User settings persistence
//!
//! Stores the default model/provider pair the user picked in the selector so
//! it survives restarts.

use crate::catalog::ModelDescriptor;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Persistent user settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Name of the default model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_model: Option<String>,

    /// Provider name of the default model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_provider: Option<String>,
}

impl Settings {
    /// Get the settings file path
    #[must_use]
    pub fn path() -> PathBuf {
        paths::settings_dir().join("settings.json")
    }

    /// Load settings from disk, returning defaults if the file doesn't exist
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    /// Load settings from `path`, returning defaults on any failure
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            debug!("Settings file not found, using defaults");
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => {
                    debug!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse settings file: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read settings file: {}", e);
                Self::default()
            }
        }
    }

    /// Save settings to `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file cannot be written.
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;

        std::fs::write(path, content)?;
        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Remember `model` as the default
    pub fn set_default(&mut self, model: &ModelDescriptor) {
        self.default_model = Some(model.name.clone());
        self.default_provider = Some(model.provider_name().to_string());
    }

    /// Default model name, if set
    #[must_use]
    pub fn default_model(&self) -> Option<&str> {
        self.default_model.as_deref()
    }

    /// Default provider name, if set
    #[must_use]
    pub fn default_provider(&self) -> Option<&str> {
        self.default_provider.as_deref()
    }
}
