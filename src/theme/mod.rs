//! Light/dark theme state
//!
//! The active theme is owned by a [`ThemeToggle`], which reads and writes it
//! through an injected [`ThemeStore`] and publishes it to an [`AttributeSink`].

pub mod palette;

pub use palette::Palette;

use serde::{Deserialize, Serialize};

use crate::storage::StoreError;

/// Store key holding the persisted theme
pub const THEME_STORAGE_KEY: &str = "cafe-theme";

/// Root attribute the active theme is written to
pub const THEME_ATTRIBUTE: &str = "data-cafe-theme";

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stored/attribute value
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Get a human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// Parse a stored value. Only the exact lowercase values are accepted.
    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(&self) -> Palette {
        Palette::for_theme(*self)
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persistence capability for string preferences
pub trait ThemeStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Receiver of root-level attributes (e.g. `data-cafe-theme`)
pub trait AttributeSink {
    fn set_attribute(&mut self, name: &str, value: &str);
}

/// Active theme plus the store it persists to
#[derive(Debug)]
pub struct ThemeToggle<S: ThemeStore> {
    store: S,
    theme: Theme,
}

impl<S: ThemeStore> ThemeToggle<S> {
    /// Read the stored theme once, falling back to light
    pub fn new(store: S) -> Self {
        let theme = match store.get(THEME_STORAGE_KEY) {
            Some(value) => Theme::parse(&value).unwrap_or_else(|| {
                log::warn!("Unrecognized stored theme {:?}, using {}", value, Theme::default());
                Theme::default()
            }),
            None => Theme::default(),
        };
        log::info!("Theme initialised: {}", theme);

        Self { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }

    /// Flip the theme and persist it.
    ///
    /// The flipped theme stays active even if the write fails.
    pub fn toggle(&mut self) -> Result<Theme, StoreError> {
        let next = self.theme.toggled();
        self.set_theme(next)?;
        Ok(next)
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), StoreError> {
        self.theme = theme;
        log::info!("Theme set to {}", theme);
        self.store.set(THEME_STORAGE_KEY, theme.as_str())
    }

    /// Publish the active theme to the sink
    pub fn apply(&self, sink: &mut impl AttributeSink) {
        sink.set_attribute(THEME_ATTRIBUTE, self.theme.as_str());
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::collections::HashMap;

    #[derive(Default)]
    struct RecordingSink {
        attributes: HashMap<String, String>,
    }

    impl AttributeSink for RecordingSink {
        fn set_attribute(&mut self, name: &str, value: &str) {
            self.attributes.insert(name.to_string(), value.to_string());
        }
    }

    struct FailingStore;

    impl ThemeStore for FailingStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::other("read-only")))
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("Dark"), None);
        assert_eq!(Theme::parse(""), None);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn test_defaults_to_light() {
        let toggle = ThemeToggle::new(MemoryStore::new());
        assert_eq!(toggle.theme(), Theme::Light);
        assert!(!toggle.is_dark());
    }

    #[test]
    fn test_reads_stored_theme() {
        let toggle = ThemeToggle::new(MemoryStore::with_entry(THEME_STORAGE_KEY, "dark"));
        assert_eq!(toggle.theme(), Theme::Dark);
    }

    #[test]
    fn test_unrecognized_value_falls_back() {
        let toggle = ThemeToggle::new(MemoryStore::with_entry(THEME_STORAGE_KEY, "purple"));
        assert_eq!(toggle.theme(), Theme::Light);
    }

    #[test]
    fn test_toggle_persists() {
        let handle = MemoryStore::new();
        let mut toggle = ThemeToggle::new(handle.clone());

        assert_eq!(toggle.toggle().unwrap(), Theme::Dark);
        assert_eq!(handle.get(THEME_STORAGE_KEY).as_deref(), Some("dark"));

        assert_eq!(toggle.toggle().unwrap(), Theme::Light);
        assert_eq!(handle.get(THEME_STORAGE_KEY).as_deref(), Some("light"));

        // A fresh toggle over the same store sees the last write
        let reloaded = ThemeToggle::new(toggle.into_store());
        assert_eq!(reloaded.theme(), Theme::Light);
    }

    #[test]
    fn test_failed_write_keeps_new_theme() {
        let mut toggle = ThemeToggle::new(FailingStore);
        assert!(toggle.toggle().is_err());
        assert_eq!(toggle.theme(), Theme::Dark);
    }

    #[test]
    fn test_apply_writes_attribute() {
        let mut toggle = ThemeToggle::new(MemoryStore::new());
        let mut sink = RecordingSink::default();

        toggle.apply(&mut sink);
        assert_eq!(sink.attributes.get(THEME_ATTRIBUTE).map(String::as_str), Some("light"));

        toggle.toggle().unwrap();
        toggle.apply(&mut sink);
        assert_eq!(sink.attributes.get(THEME_ATTRIBUTE).map(String::as_str), Some("dark"));
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    }
}
