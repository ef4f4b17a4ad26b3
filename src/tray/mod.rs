//! Tray menu model
//!
//! The platform tray lives in the binary; this module owns what it shows. A
//! [`TrayMenuModel`] is rebuilt from live state whenever the active shortcut or
//! the "Run at startup" flag changes, and menu clicks come back as
//! [`TrayAction`] values looked up by stable id.

pub mod menu;

pub use menu::{MenuEntry, TRAY_TOOLTIP, TrayAction, TrayMenuModel};
