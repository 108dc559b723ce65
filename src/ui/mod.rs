//! User Interface module
//!
//! Terminal UI using ratatui: the demo app and the widgets it hosts.

pub mod app;
pub mod widgets;

pub use app::App;
