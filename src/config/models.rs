//! Configuration data models
//!
//! This module defines the data structures used for application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Shortcut bound when no valid binding has been persisted
pub const DEFAULT_SHORTCUT: &str = "CommandOrControl+Shift+I";

/// Where exported icons are written
///
/// Resolved once at startup into a [`ManagedDirectory`](crate::export::ManagedDirectory).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportLocation {
    /// Temp-scoped staging area, swept on every startup
    #[default]
    Staging,
    /// Persistent "saved icons" folder in the per-user data directory
    SavedIcons,
    /// The user's downloads folder
    Downloads,
    /// An explicit directory
    Custom(PathBuf),
}

impl ExportLocation {
    /// Whether the directory only ever holds files this application wrote
    ///
    /// Only such a directory is swept at startup unless the config says otherwise.
    pub fn is_disposable(&self) -> bool {
        matches!(self, Self::Staging)
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Global shortcut descriptor, e.g. `CommandOrControl+Shift+I`
    pub shortcut: String,
    /// Export directory policy
    pub export_location: ExportLocation,
    /// Explicit override for the startup retention sweep
    ///
    /// Absent means "sweep only a disposable location", see
    /// [`sweeps_on_startup`](Self::sweeps_on_startup).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sweep_on_startup: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            shortcut: DEFAULT_SHORTCUT.to_string(),
            export_location: ExportLocation::default(),
            sweep_on_startup: None,
        }
    }
}

impl AppConfig {
    /// Whether the retention sweep runs on the export directory at startup
    pub fn sweeps_on_startup(&self) -> bool {
        self.sweep_on_startup
            .unwrap_or_else(|| self.export_location.is_disposable())
    }
}
