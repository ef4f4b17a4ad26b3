//! Shortcut descriptors
//!
//! A binding keeps the descriptor exactly as the user typed it (that string is
//! what gets persisted and shown back in the popup) next to the parsed
//! `global_hotkey` key combination used for registration and event matching.

use crate::config::DEFAULT_SHORTCUT;
use crate::error::{IconPickerError, Result};
use global_hotkey::hotkey::HotKey;
use std::fmt;
use std::str::FromStr;

/// A parsed global shortcut
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutBinding {
    descriptor: String,
    hotkey: HotKey,
}

impl ShortcutBinding {
    /// Parse a descriptor such as `CommandOrControl+Shift+I`
    ///
    /// Tokens are joined with `+`, matched case-insensitively, and the last one
    /// names the key.
    pub fn parse(descriptor: &str) -> Result<Self> {
        let descriptor = descriptor.trim();
        let hotkey = HotKey::from_str(descriptor).map_err(|e| IconPickerError::InvalidShortcut {
            binding: descriptor.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            descriptor: descriptor.to_string(),
            hotkey,
        })
    }

    /// The build-time default binding
    pub fn default_binding() -> Self {
        Self::parse(DEFAULT_SHORTCUT).expect("DEFAULT_SHORTCUT is a valid descriptor")
    }

    /// Descriptor as persisted
    pub fn as_str(&self) -> &str {
        &self.descriptor
    }

    /// Parsed key combination
    pub fn hotkey(&self) -> HotKey {
        self.hotkey
    }

    /// Identifier carried by hotkey events for this combination
    pub fn id(&self) -> u32 {
        self.hotkey.id()
    }

    /// Label for menus, with platform modifier names
    ///
    /// `CommandOrControl+Shift+I` renders as `Ctrl+Shift+I` on Windows and
    /// Linux and as `Cmd+Shift+I` on macOS.
    pub fn display_label(&self) -> String {
        self.descriptor
            .split('+')
            .map(|token| {
                let token = token.trim();
                match token.to_ascii_uppercase().as_str() {
                    "COMMANDORCONTROL" | "COMMANDORCTRL" | "CMDORCTRL" | "CMDORCONTROL" => {
                        if cfg!(target_os = "macos") { "Cmd" } else { "Ctrl" }.to_string()
                    }
                    "CONTROL" | "CTRL" => "Ctrl".to_string(),
                    "COMMAND" | "CMD" | "SUPER" => "Cmd".to_string(),
                    "OPTION" | "ALT" => "Alt".to_string(),
                    "SHIFT" => "Shift".to_string(),
                    _ => token.strip_prefix("Key").unwrap_or(token).to_string(),
                }
            })
            .collect::<Vec<_>>()
            .join("+")
    }
}

impl fmt::Display for ShortcutBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use global_hotkey::hotkey::{Code, Modifiers};

    #[test]
    fn test_default_binding_parses() {
        let binding = ShortcutBinding::default_binding();
        assert_eq!(binding.as_str(), DEFAULT_SHORTCUT);
        assert_eq!(binding.hotkey().key, Code::KeyI);
        assert!(binding.hotkey().mods.contains(Modifiers::SHIFT));
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trims() {
        let a = ShortcutBinding::parse("  alt+shift+p ").unwrap();
        let b = ShortcutBinding::parse("Alt+Shift+KeyP").unwrap();
        assert_eq!(a.as_str(), "alt+shift+p");
        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for descriptor in ["", "Ctrl+", "Shift+NotAKey", "Ctrl++I"] {
            let err = ShortcutBinding::parse(descriptor).unwrap_err();
            assert!(
                matches!(err, IconPickerError::InvalidShortcut { .. }),
                "{descriptor:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_display_label_uses_platform_modifier() {
        let label = ShortcutBinding::default_binding().display_label();
        if cfg!(target_os = "macos") {
            assert_eq!(label, "Cmd+Shift+I");
        } else {
            assert_eq!(label, "Ctrl+Shift+I");
        }
        assert_eq!(
            ShortcutBinding::parse("alt+KeyQ").unwrap().display_label(),
            "Alt+Q"
        );
    }
}
