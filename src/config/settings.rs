use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::hint_mode::HintSettings;
use crate::error::Result;

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Settings for hint selection
    pub hints: HintSettings,
    /// Override for the position history file location
    pub history_file: Option<PathBuf>,
}

impl Settings {
    /// Get the path to the YAML settings file
    pub fn file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("hintwarp").join("settings.yaml"))
    }

    /// Load settings from the default location, falling back to defaults
    pub fn load() -> Self {
        let loaded = match Self::file_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        };

        loaded.unwrap_or_else(|e| {
            log::warn!("Failed to load settings, using defaults: {}", e);
            Self::default()
        })
    }

    /// Load and sanitize settings from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut settings: Settings = serde_yml::from_str(&contents)?;
        settings.hints.sanitize();
        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings as YAML, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_yml::to_string(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.yaml");
        std::fs::write(&path, "hints:\n  hint_chars: \"asdf\"\n  hint_size: 30\n").unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.hints.hint_chars, "asdf");
        assert_eq!(settings.hints.hint_size, 30);
        assert_eq!(settings.hints.hint_exit, "esc");
        assert!(settings.history_file.is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.yaml");

        let mut settings = Settings::default();
        settings.hints.hint2_grid_size = 4;
        settings.save_to(&path).unwrap();

        assert_eq!(Settings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn test_load_sanitizes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.yaml");
        std::fs::write(&path, "hints:\n  hint_chars: \"\"\n").unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert!(!settings.hints.hint_chars.is_empty());
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.yaml");
        std::fs::write(&path, "hints: [not, a, map").unwrap();
        assert!(Settings::load_from(&path).is_err());
    }
}
