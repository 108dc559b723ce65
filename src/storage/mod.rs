//! Key-value preference storage
//!
//! Backends for the small string settings the widgets persist.

pub mod memory;
pub mod file;

pub use memory::MemoryStore;
pub use file::{FileStore, default_preferences_path};

use thiserror::Error;

/// Storage error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}
