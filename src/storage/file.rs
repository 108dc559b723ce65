//! JSON file store
//!
//! Preferences live in one flat JSON object of string keys and values.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::StoreError;
use crate::theme::ThemeStore;

/// Get the default preferences file path
pub fn default_preferences_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "cafe", "CafeProgress") {
        let mut path = proj_dirs.data_local_dir().to_path_buf();
        path.push("preferences.json");
        path
    } else {
        PathBuf::from("./preferences.json")
    }
}

/// File-backed store, loaded once and written through on every `set`
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at the default location
    pub fn open_default() -> Self {
        Self::open(default_preferences_path())
    }

    /// Open the store at `path`. Missing or unreadable files read as empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = load_values(&path);
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, json)?;

        log::debug!("Preferences saved to {:?}", self.path);
        Ok(())
    }
}

fn load_values(path: &Path) -> BTreeMap<String, String> {
    if !path.exists() {
        log::info!("No preferences at {:?}, starting empty", path);
        return BTreeMap::new();
    }

    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(values) => {
                log::info!("Preferences loaded from {:?}", path);
                values
            }
            Err(e) => {
                log::warn!("Failed to parse preferences: {}, starting empty", e);
                BTreeMap::new()
            }
        },
        Err(e) => {
            log::warn!("Failed to read preferences: {}, starting empty", e);
            BTreeMap::new()
        }
    }
}

impl ThemeStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }
}
