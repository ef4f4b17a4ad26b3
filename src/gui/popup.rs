//! Slint implementation of the popup surface
//!
//! The Slint component only renders and reports; every callback is turned into
//! an [`AppEvent::Ipc`] and pushed onto the shell's queue, and a focus loss of
//! the winit window behind it becomes [`AppEvent::SurfaceFocusLost`] on the same
//! queue. Window attributes Slint does not model (task-switcher exclusion,
//! focus) also go through that winit window.

use crate::PopupWindow;
use iconpicker::app::AppEvent;
use iconpicker::error::{IconPickerError, Result};
use iconpicker::export::ExportRequest;
use iconpicker::ipc::{IpcRequest, IpcResponse};
use iconpicker::window::{PopupSurface, SurfaceFactory, SurfaceOptions};
use slint::winit_030::winit::event::WindowEvent;
use slint::winit_030::winit::window::WindowLevel;
use slint::winit_030::{EventResult, WinitWindowAccessor};
use slint::{CloseRequestResponse, ComponentHandle, SharedString};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::mpsc::Sender;
use tracing::{debug, info, warn};

/// The live popup component
pub struct SlintPopup {
    window: PopupWindow,
    options: SurfaceOptions,
    /// Set when the OS closed the window; the handle is then discarded
    destroyed: Rc<Cell<bool>>,
}

impl SlintPopup {
    /// Apply attributes that only exist once the native window does
    fn apply_window_attributes(&self) {
        let options = self.options;
        let applied = self.window.window().with_winit_window(|winit| {
            winit.set_resizable(options.resizable);
            winit.set_decorations(options.decorations);
            winit.set_window_level(if options.always_on_top {
                WindowLevel::AlwaysOnTop
            } else {
                WindowLevel::Normal
            });

            #[cfg(windows)]
            {
                use slint::winit_030::winit::platform::windows::WindowExtWindows;
                winit.set_skip_taskbar(options.skip_taskbar);
            }
        });

        if applied.is_none() {
            warn!("Popup is not backed by a winit window, attributes not applied");
        }
    }

    fn set_status(&self, message: &str, is_error: bool) {
        self.window.set_status(SharedString::from(message));
        self.window.set_status_is_error(is_error);
    }
}

impl PopupSurface for SlintPopup {
    fn is_destroyed(&self) -> bool {
        self.destroyed.get()
    }

    fn is_visible(&self) -> bool {
        self.window.window().is_visible()
    }

    fn has_focus(&self) -> bool {
        self.window
            .window()
            .with_winit_window(|winit| winit.has_focus())
            .unwrap_or(false)
    }

    fn show(&mut self) -> Result<()> {
        self.window
            .show()
            .map_err(|e| IconPickerError::WindowError(Box::new(e)))?;
        self.apply_window_attributes();
        // Refresh the shortcut field every time the panel appears
        self.window.invoke_request_shortcut();
        Ok(())
    }

    fn hide(&mut self) -> Result<()> {
        self.window
            .hide()
            .map_err(|e| IconPickerError::WindowError(Box::new(e)))
    }

    fn focus(&mut self) {
        self.window
            .window()
            .with_winit_window(|winit| winit.focus_window());
    }

    fn deliver(&mut self, response: &IpcResponse) {
        match response {
            IpcResponse::IconSaved(result) => match (&result.path, &result.error) {
                (Some(path), _) if result.success => {
                    self.set_status(&format!("Saved to {}", path.display()), false);
                }
                (_, error) => {
                    let message = error.as_deref().unwrap_or("Export failed");
                    self.set_status(message, true);
                }
            },
            IpcResponse::Shortcut(current) => {
                self.window.set_shortcut(SharedString::from(current.as_str()));
                self.window
                    .set_shortcut_draft(SharedString::from(current.as_str()));
            }
            IpcResponse::ShortcutUpdated(update) => match &update.shortcut {
                Some(shortcut) if update.success => {
                    self.window.set_shortcut(SharedString::from(shortcut.as_str()));
                    self.window
                        .set_shortcut_draft(SharedString::from(shortcut.as_str()));
                    self.set_status("Shortcut updated", false);
                }
                _ => {
                    let message = update.error.as_deref().unwrap_or("Shortcut change failed");
                    self.set_status(message, true);
                }
            },
        }
    }
}

/// Map a winit window event to the application event it stands for
fn focus_event(event: &WindowEvent) -> Option<AppEvent> {
    match event {
        WindowEvent::Focused(false) => Some(AppEvent::SurfaceFocusLost),
        _ => None,
    }
}

/// Builds [`SlintPopup`]s wired to the shell's event queue
pub struct SlintSurfaceFactory {
    events: Sender<AppEvent>,
}

impl SlintSurfaceFactory {
    /// Factory whose popups report into `events`
    pub fn new(events: Sender<AppEvent>) -> Self {
        Self { events }
    }

    fn forward(events: &Sender<AppEvent>, request: IpcRequest) {
        if events.send(AppEvent::Ipc(request)).is_err() {
            warn!("Event queue closed, dropping popup request");
        }
    }
}

impl SurfaceFactory for SlintSurfaceFactory {
    type Surface = SlintPopup;

    #[expect(
        clippy::cast_precision_loss,
        reason = "Popup dimensions are small logical pixel counts"
    )]
    fn create(&mut self, options: &SurfaceOptions) -> Result<SlintPopup> {
        let window = PopupWindow::new().map_err(|e| IconPickerError::WindowError(Box::new(e)))?;
        window.window().set_size(slint::LogicalSize::new(
            options.width as f32,
            options.height as f32,
        ));

        let events = self.events.clone();
        window.on_save_icon(move |content, filename| {
            let request = ExportRequest::new(content.as_str(), filename.as_str());
            Self::forward(&events, IpcRequest::SaveIcon(request));
        });

        let events = self.events.clone();
        window.on_request_shortcut(move || {
            Self::forward(&events, IpcRequest::GetShortcut);
        });

        let events = self.events.clone();
        window.on_update_shortcut(move |descriptor| {
            Self::forward(&events, IpcRequest::UpdateShortcut(descriptor.to_string()));
        });

        let events = self.events.clone();
        window.window().on_winit_window_event(move |_, event| {
            if let Some(blur) = focus_event(event)
                && events.send(blur).is_err()
            {
                warn!("Event queue closed, dropping focus loss");
            }
            EventResult::Propagate
        });

        let destroyed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&destroyed);
        window.window().on_close_requested(move || {
            debug!("Popup window closed by the OS");
            flag.set(true);
            CloseRequestResponse::HideWindow
        });

        info!("Popup window created ({}x{})", options.width, options.height);
        Ok(SlintPopup {
            window,
            options: *options,
            destroyed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_focus_loss_maps_to_an_event() {
        assert_eq!(
            focus_event(&WindowEvent::Focused(false)),
            Some(AppEvent::SurfaceFocusLost)
        );
        assert_eq!(focus_event(&WindowEvent::Focused(true)), None);
        assert_eq!(focus_event(&WindowEvent::CloseRequested), None);
    }
}
