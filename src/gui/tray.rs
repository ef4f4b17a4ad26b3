//! System tray integration
//!
//! Renders a [`TrayMenuModel`] with the `tray-icon` crate. Menu items carry the
//! stable [`TrayAction`](iconpicker::tray::TrayAction) ids, so the event pump
//! can map clicks back without holding on to the item handles. The menu is
//! replaced wholesale on every refresh.
//!
//! `tray-icon` is only built for Windows and macOS; elsewhere creating the tray
//! fails, which is fatal at startup.

use iconpicker::error::{IconPickerError, Result};
use iconpicker::tray::TrayMenuModel;

#[cfg(any(windows, target_os = "macos"))]
use iconpicker::tray::{MenuEntry, TRAY_TOOLTIP};
#[cfg(any(windows, target_os = "macos"))]
use tray_icon::{
    Icon, TrayIcon, TrayIconBuilder,
    menu::{CheckMenuItem, Menu, MenuItem, PredefinedMenuItem},
};

/// The status-area icon and its menu
#[cfg(any(windows, target_os = "macos"))]
pub struct TrayHandle {
    tray: TrayIcon,
}

#[cfg(any(windows, target_os = "macos"))]
impl TrayHandle {
    /// Create the tray icon showing `model`
    ///
    /// Must run after the event loop has started (a macOS requirement).
    pub fn new(model: &TrayMenuModel) -> Result<Self> {
        use tracing::info;

        let menu = build_menu(model)?;
        let tray = TrayIconBuilder::new()
            .with_menu(Box::new(menu))
            .with_menu_on_left_click(false)
            .with_icon(create_icon()?)
            .with_tooltip(TRAY_TOOLTIP)
            .build()
            .map_err(|e| IconPickerError::TrayError(Box::new(e)))?;

        info!("System tray icon created");
        Ok(Self { tray })
    }

    /// Replace the menu with one built from `model`
    pub fn rebuild(&self, model: &TrayMenuModel) -> Result<()> {
        let menu = build_menu(model)?;
        self.tray.set_menu(Some(Box::new(menu)));
        tracing::debug!("Tray menu rebuilt: {:?}", model);
        Ok(())
    }
}

#[cfg(any(windows, target_os = "macos"))]
fn build_menu(model: &TrayMenuModel) -> Result<Menu> {
    let menu = Menu::new();
    let append_failed = |e: tray_icon::menu::Error| IconPickerError::TrayError(Box::new(e));

    for entry in model.entries() {
        match entry {
            MenuEntry::Action { action, text } => {
                menu.append(&MenuItem::with_id(action.id(), text, true, None))
                    .map_err(append_failed)?;
            }
            MenuEntry::Label(text) => {
                menu.append(&MenuItem::new(text, false, None))
                    .map_err(append_failed)?;
            }
            MenuEntry::Check {
                action,
                text,
                checked,
            } => {
                menu.append(&CheckMenuItem::with_id(action.id(), text, true, checked, None))
                    .map_err(append_failed)?;
            }
            MenuEntry::Separator => {
                menu.append(&PredefinedMenuItem::separator())
                    .map_err(append_failed)?;
            }
        }
    }
    Ok(menu)
}

/// Draw the 32x32 tray icon: a rounded tile with a light picture frame
#[cfg(any(windows, target_os = "macos"))]
fn create_icon() -> Result<Icon> {
    let (rgba, size) = icon_rgba();
    Icon::from_rgba(rgba, size, size).map_err(|e| IconPickerError::TrayError(Box::new(e)))
}

/// Edge length of the generated tray icon
#[cfg(any(windows, target_os = "macos", test))]
const ICON_SIZE: u32 = 32;

#[cfg(any(windows, target_os = "macos", test))]
fn icon_rgba() -> (Vec<u8>, u32) {
    const TILE: [u8; 4] = [94, 53, 177, 255];
    const FRAME: [u8; 4] = [237, 231, 246, 255];
    const CLEAR: [u8; 4] = [0, 0, 0, 0];

    let size = ICON_SIZE;
    let last = size - 1;
    let mut rgba = Vec::with_capacity((size * size * 4) as usize);

    for y in 0..size {
        for x in 0..size {
            let corner = (x < 2 || x > last - 2) && (y < 2 || y > last - 2);
            let frame = (8..=23).contains(&x)
                && (8..=23).contains(&y)
                && (x <= 9 || x >= 22 || y <= 9 || y >= 22);
            let pixel = if corner {
                CLEAR
            } else if frame {
                FRAME
            } else {
                TILE
            };
            rgba.extend_from_slice(&pixel);
        }
    }
    (rgba, size)
}

/// Placeholder for platforms without tray support
#[cfg(not(any(windows, target_os = "macos")))]
pub struct TrayHandle;

#[cfg(not(any(windows, target_os = "macos")))]
impl TrayHandle {
    /// Always fails: no tray backend is built for this platform
    pub fn new(_model: &TrayMenuModel) -> Result<Self> {
        Err(IconPickerError::TrayError(
            iconpicker::error::StringError::new("no system tray support on this platform"),
        ))
    }

    /// Unreachable in practice since `new` never succeeds
    pub fn rebuild(&self, _model: &TrayMenuModel) -> Result<()> {
        Ok(())
    }
}
