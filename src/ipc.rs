//! Requests sent by the popup surface and the responses it receives
//!
//! The popup never calls into the supervisor directly: it pushes an
//! [`IpcRequest`] onto the event queue and later receives the matching
//! [`IpcResponse`] through [`PopupSurface::deliver`](crate::window::PopupSurface::deliver).

use crate::export::{ExportRequest, ExportResult};
use serde::Serialize;

/// Request issued by the popup surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IpcRequest {
    /// `save-icon(content, filename)`
    SaveIcon(ExportRequest),
    /// `get-shortcut()`
    GetShortcut,
    /// `update-shortcut(newBinding)`
    UpdateShortcut(String),
}

/// Outcome of an `update-shortcut` request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortcutUpdate {
    /// Whether the new binding is now active
    pub success: bool,
    /// The active binding after a successful change
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<String>,
    /// Human-readable failure cause
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ShortcutUpdate {
    /// Successful change to `shortcut`
    pub fn changed(shortcut: impl Into<String>) -> Self {
        Self {
            success: true,
            shortcut: Some(shortcut.into()),
            error: None,
        }
    }

    /// Rejected change
    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            shortcut: None,
            error: Some(error.into()),
        }
    }
}

/// Response delivered back to the popup surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum IpcResponse {
    /// Answer to `save-icon`
    IconSaved(ExportResult),
    /// Answer to `get-shortcut`; empty when no binding is active
    Shortcut(String),
    /// Answer to `update-shortcut`
    ShortcutUpdated(ShortcutUpdate),
}
