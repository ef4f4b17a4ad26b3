//! Popup surface abstraction

use crate::error::Result;
use crate::ipc::IpcResponse;

/// Construction parameters for the popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceOptions {
    /// Logical width in pixels
    pub width: u32,
    /// Logical height in pixels
    pub height: u32,
    /// Whether the user may resize the window
    pub resizable: bool,
    /// Keep the window above all others
    pub always_on_top: bool,
    /// Hide the window from the taskbar and task switcher
    pub skip_taskbar: bool,
    /// Draw native title bar and borders
    pub decorations: bool,
}

/// The one popup configuration this application uses
pub const POPUP_OPTIONS: SurfaceOptions = SurfaceOptions {
    width: 320,
    height: 420,
    resizable: false,
    always_on_top: true,
    skip_taskbar: true,
    decorations: false,
};

/// A live (or formerly live) popup window
pub trait PopupSurface {
    /// Whether the OS window has been closed; a destroyed surface is never reused
    fn is_destroyed(&self) -> bool;

    /// Whether the window is currently shown
    fn is_visible(&self) -> bool;

    /// Whether the window currently holds input focus
    ///
    /// Checked when a focus loss is reported, to drop reports that are already stale.
    fn has_focus(&self) -> bool;

    /// Make the window visible
    fn show(&mut self) -> Result<()>;

    /// Hide the window without destroying it
    fn hide(&mut self) -> Result<()>;

    /// Give the window input focus
    fn focus(&mut self);

    /// Hand a response to the UI content
    fn deliver(&mut self, response: &IpcResponse);
}

/// Builds popup surfaces with their content loaded and ready to paint
pub trait SurfaceFactory {
    /// Concrete surface type
    type Surface: PopupSurface;

    /// Construct a hidden surface
    fn create(&mut self, options: &SurfaceOptions) -> Result<Self::Surface>;
}
