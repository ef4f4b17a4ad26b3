//! `IconPicker` - tray-resident icon picker
//!
//! Keeps one always-on-top popup a click or a global shortcut away, and writes
//! exported icons into a managed directory that is swept of stale files on
//! startup. The `Supervisor` owns every subsystem and is driven by a single
//! event queue; platform objects (hotkey hook, popup window, login item) sit
//! behind traits so the state machine runs headless in tests.

// Module declarations
pub mod app;
pub mod config;
pub mod error;
pub mod export;
pub mod ipc;
pub mod shortcut;
pub mod tray;
pub mod utils;
pub mod window;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use error::{IconPickerError, Result};
