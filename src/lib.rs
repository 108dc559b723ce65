//! Cafe Progress - XP bar, theme toggle and sound credit widgets
//!
//! The level curve lives in [`progression`]; the widgets in [`ui`] render
//! it, and [`theme`] keeps the light/dark preference in an injected store.

pub mod config;
pub mod progression;
pub mod storage;
pub mod theme;
pub mod ui;

// Re-export commonly used types
pub use config::AppConfig;
pub use progression::{compute_progress, Experience, ProgressResult};
pub use storage::{FileStore, MemoryStore, StoreError};
pub use theme::{AttributeSink, Theme, ThemeStore, ThemeToggle};
