//! Menu contents and action ids

use crate::shortcut::ShortcutBinding;

/// Hover text of the tray icon
pub const TRAY_TOOLTIP: &str = "IconPicker";

/// Clickable tray menu item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayAction {
    /// Reveal the popup
    Open,
    /// Flip the "Run at startup" login item
    ToggleAutostart,
    /// Release resources and exit
    Quit,
}

impl TrayAction {
    /// Every action, in menu order
    pub const ALL: [Self; 3] = [Self::Open, Self::ToggleAutostart, Self::Quit];

    /// Stable menu id
    pub fn id(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::ToggleAutostart => "autostart",
            Self::Quit => "quit",
        }
    }

    /// Look up an action by menu id; unknown ids yield `None`
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.id() == id)
    }
}

/// One row of the tray menu, independent of the platform toolkit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// Enabled item that fires `action`
    Action {
        /// What clicking the item does
        action: TrayAction,
        /// Visible text
        text: String,
    },
    /// Disabled, informational item
    Label(String),
    /// Check item that fires `action`
    Check {
        /// What clicking the item does
        action: TrayAction,
        /// Visible text
        text: String,
        /// Current check state
        checked: bool,
    },
    /// Separator line
    Separator,
}

/// Live state shown by the tray menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrayMenuModel {
    /// Platform label of the active binding, `None` when no binding is active
    pub shortcut_label: Option<String>,
    /// Whether the login item is enabled
    pub autostart_enabled: bool,
}

impl TrayMenuModel {
    /// Build the model from the active binding and the login item flag
    pub fn build(active: Option<&ShortcutBinding>, autostart_enabled: bool) -> Self {
        Self {
            shortcut_label: active.map(ShortcutBinding::display_label),
            autostart_enabled,
        }
    }

    /// Text of the read-only shortcut row
    pub fn shortcut_text(&self) -> String {
        match &self.shortcut_label {
            Some(label) => format!("Shortcut: {label}"),
            None => "Shortcut: not set".to_string(),
        }
    }

    /// Menu rows, top to bottom
    pub fn entries(&self) -> Vec<MenuEntry> {
        vec![
            MenuEntry::Action {
                action: TrayAction::Open,
                text: "Open IconPicker".to_string(),
            },
            MenuEntry::Label(self.shortcut_text()),
            MenuEntry::Separator,
            MenuEntry::Check {
                action: TrayAction::ToggleAutostart,
                text: "Run at startup".to_string(),
                checked: self.autostart_enabled,
            },
            MenuEntry::Separator,
            MenuEntry::Action {
                action: TrayAction::Quit,
                text: "Quit".to_string(),
            },
        ]
    }
}
