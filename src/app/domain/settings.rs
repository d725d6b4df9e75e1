use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::app::infrastructure::error::AppError;
use crate::app::infrastructure::fs::write_atomic;

pub const APP_DIR_NAME: &str = "shortpad";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
}

/// How much of the session is written at exit and restored at launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SessionRestore {
    /// Nothing is loaded or saved.
    Off,
    /// Font, color and window geometry.
    #[default]
    Preferences,
    /// Preferences plus the snippet text itself.
    Full,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,

    #[serde(default)]
    pub session_restore: SessionRestore,
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::Light
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
            session_restore: SessionRestore::default(),
        }
    }
}

impl AppSettings {
    /// Load settings from disk, or fall back to defaults
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            // Missing file: defaults, written on the next save
            Err(_) => Self::default(),
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(self)?;
        write_atomic(path, json.as_bytes())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(APP_DIR_NAME);
        path.push("settings.json");
        path
    }

    pub fn is_dark(&self) -> bool {
        self.theme_mode == ThemeMode::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.theme_mode, ThemeMode::Light);
        assert_eq!(settings.session_restore, SessionRestore::Preferences);
        assert!(!settings.is_dark());
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{"theme_mode": "Dark"}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert!(settings.is_dark());
        assert_eq!(settings.session_restore, SessionRestore::Preferences);
    }

    #[test]
    fn test_session_restore_serialization() {
        let settings = AppSettings {
            session_restore: SessionRestore::Full,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"Full\""));
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        let settings = AppSettings {
            theme_mode: ThemeMode::Dark,
            session_restore: SessionRestore::Off,
        };

        settings.save_to(&path).unwrap();
        assert_eq!(AppSettings::load_from(&path), settings);
    }

    #[test]
    fn test_corrupt_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(AppSettings::load_from(&path), AppSettings::default());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.json");
        assert_eq!(AppSettings::load_from(&path), AppSettings::default());
    }
}
