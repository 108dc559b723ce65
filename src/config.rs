//! RON configuration loader
//!
//! Loads the app configuration from an external RON file, with fallback to
//! hardcoded defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default config file, relative to the working directory
pub const CONFIG_FILE: &str = "cafe-progress.ron";

/// Environment variable overriding the config path
pub const CONFIG_ENV: &str = "CAFE_PROGRESS_CONFIG";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// XP granted per action in the demo
    pub xp_per_action: f64,
    /// Total XP the demo starts with
    pub starting_xp: f64,
    /// Preferences file; the platform data directory when unset
    pub preferences_path: Option<PathBuf>,
    /// Credit shown in the sound alert
    pub sound_credit: SoundCreditConfig,
}

/// Sound attribution shown by the credit alert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundCreditConfig {
    pub title: String,
    pub author: String,
    pub source: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            xp_per_action: 25.0,
            starting_xp: 0.0,
            preferences_path: None,
            sound_credit: SoundCreditConfig::default(),
        }
    }
}

impl Default for SoundCreditConfig {
    fn default() -> Self {
        Self {
            title: "Cafe Ambience".to_string(),
            author: "Unknown Artist".to_string(),
            source: None,
        }
    }
}

impl AppConfig {
    /// Load from `$CAFE_PROGRESS_CONFIG` or `./cafe-progress.ron`
    pub fn load() -> Self {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
        Self::load_from(&path)
    }

    /// Load from a RON file, falling back to defaults if missing or invalid
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No config at {:?}, using defaults", path);
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match Self::parse(&content) {
                Ok(config) => {
                    log::info!("Config loaded from {:?}", path);
                    config
                }
                Err(e) => {
                    log::warn!("Failed to parse {:?}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Failed to read {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_config() {
        let config = AppConfig::parse("(xp_per_action: 40.0)").unwrap();
        assert_eq!(config.xp_per_action, 40.0);
        assert_eq!(config.starting_xp, 0.0);
        assert_eq!(config.sound_credit, SoundCreditConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let config = AppConfig::parse(
            r#"(
                xp_per_action: 10.0,
                starting_xp: 450.0,
                preferences_path: Some("/tmp/prefs.json"),
                sound_credit: (
                    title: "Rain on Window",
                    author: "Mira K.",
                    source: Some("freesound.org"),
                ),
            )"#,
        )
        .unwrap();
        assert_eq!(config.starting_xp, 450.0);
        assert_eq!(config.preferences_path, Some(PathBuf::from("/tmp/prefs.json")));
        assert_eq!(config.sound_credit.author, "Mira K.");
        assert_eq!(config.sound_credit.source.as_deref(), Some("freesound.org"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("nope.ron"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_invalid_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.ron");
        fs::write(&path, "(xp_per_action: \"lots\")").unwrap();
        assert_eq!(AppConfig::load_from(&path), AppConfig::default());
    }
}
