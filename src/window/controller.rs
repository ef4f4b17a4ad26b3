//! Popup window lifecycle

use crate::error::Result;
use crate::ipc::IpcResponse;
use crate::window::surface::{POPUP_OPTIONS, PopupSurface, SurfaceFactory};
use tracing::{debug, info, warn};

/// Owner of the singleton popup surface
pub struct WindowController<F: SurfaceFactory> {
    factory: F,
    surface: Option<F::Surface>,
}

impl<F: SurfaceFactory> WindowController<F> {
    /// Create a controller with no surface
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            surface: None,
        }
    }

    /// The live surface, dropping a destroyed one
    fn live_surface(&mut self) -> Option<&mut F::Surface> {
        if self.surface.as_ref().is_some_and(PopupSurface::is_destroyed) {
            info!("Popup window was closed, discarding handle");
            self.surface = None;
        }
        self.surface.as_mut()
    }

    /// Whether a live surface exists
    pub fn has_live_surface(&mut self) -> bool {
        self.live_surface().is_some()
    }

    /// Whether a live surface exists and is shown
    pub fn is_visible(&mut self) -> bool {
        self.live_surface().is_some_and(|surface| surface.is_visible())
    }

    /// Factory, for inspection
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Show the popup, creating it first if no live surface exists
    pub fn reveal(&mut self) -> Result<()> {
        if let Some(surface) = self.live_surface() {
            surface.show()?;
            surface.focus();
            debug!("Popup window shown");
            return Ok(());
        }

        info!("Creating popup window");
        let mut surface = self.factory.create(&POPUP_OPTIONS)?;
        surface.show()?;
        surface.focus();
        self.surface = Some(surface);
        Ok(())
    }

    /// Flip visibility of the live surface, or reveal when there is none
    pub fn toggle(&mut self) -> Result<()> {
        match self.live_surface() {
            Some(surface) if surface.is_visible() => {
                surface.hide()?;
                debug!("Popup window hidden by toggle");
                Ok(())
            }
            _ => self.reveal(),
        }
    }

    /// Hide the live surface after the platform reported a focus loss
    ///
    /// A stale report is ignored once the surface holds focus again.
    pub fn hide_on_blur(&mut self) {
        let Some(surface) = self.live_surface() else {
            return;
        };
        if !surface.is_visible() {
            return;
        }
        if surface.has_focus() {
            debug!("Popup window regained focus, not hiding");
            return;
        }
        match surface.hide() {
            Ok(()) => debug!("Popup window hidden on focus loss"),
            Err(e) => warn!("Failed to hide popup window on focus loss: {}", e),
        }
    }

    /// Forward a response to the live surface; dropped if there is none
    pub fn deliver(&mut self, response: &IpcResponse) {
        match self.live_surface() {
            Some(surface) => surface.deliver(response),
            None => debug!("No popup window to deliver {:?} to", response),
        }
    }
}
