//! Configuration management module
//!
//! This module handles loading, saving, and managing application configuration.
//! Configuration is stored in `<config dir>/IconPicker/config.json` with atomic
//! writes to prevent corruption. A missing or malformed file is never an error:
//! the defaults apply and a warning is logged.

pub mod manager;
pub mod models;

pub use manager::ConfigManager;
pub use models::{AppConfig, DEFAULT_SHORTCUT, ExportLocation};
