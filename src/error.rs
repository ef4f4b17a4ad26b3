//! Error types for `IconPicker`
//!
//! This module defines all error types used throughout the application,
//! providing clear error messages and proper error propagation.
//!
//! Error variants use `#[source]` to preserve error chains so the log file
//! shows the full cause of a failed registration or export.

use std::path::PathBuf;
use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for `IconPicker`
#[derive(Debug, Error)]
pub enum IconPickerError {
    /// The shortcut descriptor could not be parsed into a key combination
    #[error("Invalid shortcut '{binding}': {reason}")]
    InvalidShortcut {
        /// Descriptor as supplied by the caller
        binding: String,
        /// Parser message
        reason: String,
    },

    /// The OS refused the binding, usually because another process owns it
    #[error("Shortcut '{binding}' is unavailable: {source}")]
    ShortcutUnavailable {
        /// Descriptor that could not be bound
        binding: String,
        /// Backend error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Releasing a binding from the OS hook failed
    #[error("Failed to release shortcut '{binding}': {source}")]
    ShortcutReleaseFailed {
        /// Descriptor that was being released
        binding: String,
        /// Backend error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Writing an exported file failed
    #[error("Failed to export '{}': {source}", path.display())]
    ExportFailed {
        /// Target path of the export
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The popup surface could not be created or shown
    /// Preserves the underlying error source for full error chain transparency
    #[error("Popup window error: {0}")]
    WindowError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The tray icon or its menu could not be created
    /// Preserves the underlying error source for full error chain transparency
    #[error("Tray icon error: {0}")]
    TrayError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Reading or writing the login item failed
    /// Preserves the underlying error source for full error chain transparency
    #[error("Auto-start error: {0}")]
    AutoStartError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Configuration error
    /// Preserves the underlying error source for full error chain transparency
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Another instance holds the single-instance lock
    #[error("Another instance of IconPicker is already running")]
    AlreadyRunning,

    /// Windows API error
    #[cfg(windows)]
    #[error("Windows API error: {0}")]
    WindowsApiError(#[from] windows::core::Error),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for `IconPicker` operations
pub type Result<T> = std::result::Result<T, IconPickerError>;

/// Convert an error to a user-friendly message
///
/// Used for the fatal startup dialog and for the short status line shown in
/// the popup after a failed shortcut change.
pub fn get_user_friendly_error(error: &IconPickerError) -> String {
    match error {
        IconPickerError::InvalidShortcut { binding, .. } => format!(
            "\"{binding}\" is not a valid shortcut.\n\n\
             Use modifiers and a key joined with '+', for example \
             CommandOrControl+Shift+I."
        ),
        IconPickerError::ShortcutUnavailable { binding, .. } => format!(
            "The shortcut \"{binding}\" is unavailable.\n\n\
             Another application is probably using it. \
             Your previous shortcut is still active."
        ),
        IconPickerError::ShortcutReleaseFailed { binding, .. } => format!(
            "Failed to release the shortcut \"{binding}\".\n\n\
             It will be released when IconPicker exits."
        ),
        IconPickerError::ExportFailed { path, source } => format!(
            "Failed to save the icon to:\n{}\n\n{source}\n\n\
             Please check file permissions and disk space.",
            path.display()
        ),
        IconPickerError::WindowError(_) => "Unable to open the icon picker window.\n\n\
             Try again from the tray menu. If the problem persists, restart IconPicker."
            .to_string(),
        IconPickerError::TrayError(_) => "Unable to create the tray icon.\n\n\
             IconPicker runs from the system tray and cannot start without it."
            .to_string(),
        IconPickerError::AutoStartError(_) => "Failed to change the \"Run at startup\" setting.\n\n\
             Check that your account may change login items."
            .to_string(),
        IconPickerError::ConfigError(_) => "Failed to load or save configuration.\n\n\
             Your shortcut may not persist after a restart."
            .to_string(),
        IconPickerError::AlreadyRunning => "IconPicker is already running.\n\n\
             Look for its icon in the system tray."
            .to_string(),
        #[cfg(windows)]
        IconPickerError::WindowsApiError(e) => {
            format!(
                "A Windows API error occurred:\n\n{e}\n\n\
                 Please ensure your Windows installation is up to date."
            )
        }
        IconPickerError::IoError(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions and disk space."
            )
        }
        IconPickerError::JsonError(e) => {
            format!(
                "Configuration file is corrupted:\n\n{e}\n\n\
                 The application will use default settings."
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = IconPickerError::InvalidShortcut {
            binding: "Ctrl+".to_string(),
            reason: "missing key".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid shortcut 'Ctrl+': missing key");
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: IconPickerError = io_error.into();
        assert!(matches!(error, IconPickerError::IoError(_)));
    }

    #[test]
    fn test_shortcut_unavailable_preserves_source() {
        use std::error::Error;

        let error = IconPickerError::ShortcutUnavailable {
            binding: "Alt+Space".to_string(),
            source: StringError::new("already registered"),
        };
        assert_eq!(
            error.to_string(),
            "Shortcut 'Alt+Space' is unavailable: already registered"
        );
        assert_eq!(
            error.source().map(ToString::to_string).as_deref(),
            Some("already registered")
        );
    }

    #[test]
    fn test_shortcut_unavailable_user_friendly() {
        let error = IconPickerError::ShortcutUnavailable {
            binding: "Alt+Space".to_string(),
            source: StringError::new("already registered"),
        };
        let message = get_user_friendly_error(&error);
        assert!(message.contains("unavailable"));
        assert!(message.contains("Alt+Space"));
        assert!(message.contains("previous shortcut is still active"));
    }

    #[test]
    fn test_export_failed_display_includes_path() {
        let error = IconPickerError::ExportFailed {
            path: PathBuf::from("/read-only/a.svg"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(error.to_string(), "Failed to export '/read-only/a.svg': denied");

        let message = get_user_friendly_error(&error);
        assert!(message.contains("/read-only/a.svg"));
        assert!(message.contains("permissions"));
    }

    #[test]
    fn test_tray_error_user_friendly() {
        let error = IconPickerError::TrayError(StringError::new("no status area"));
        let message = get_user_friendly_error(&error);
        assert!(message.contains("tray icon"));
    }
}
