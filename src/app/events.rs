//! Event queue vocabulary

use crate::ipc::{IpcRequest, IpcResponse};
use crate::tray::{TrayAction, TrayMenuModel};

/// Input to the supervisor, in arrival order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Left click on the tray icon
    TrayClicked,
    /// Tray menu item chosen
    Menu(TrayAction),
    /// A registered global hotkey was pressed; carries the hotkey id
    HotkeyPressed(u32),
    /// The popup surface lost input focus
    SurfaceFocusLost,
    /// Request from the popup surface
    Ipc(IpcRequest),
}

/// Work the shell performs after an event is handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Deliver a response to the popup surface
    Reply(IpcResponse),
    /// Rebuild the tray menu from this model
    RefreshTray(TrayMenuModel),
    /// Stop the event loop
    Quit,
}
