//! Event pump between the platform and the supervisor
//!
//! Tray, menu and hotkey events arrive on global channels owned by their
//! crates; popup callbacks and popup focus losses arrive on the shell's own
//! channel. A repeating Slint timer drains all of them on the UI thread, feeds
//! the resulting [`AppEvent`]s to the supervisor in order, and applies the
//! returned effects.

use crate::gui::popup::SlintSurfaceFactory;
use crate::gui::tray::TrayHandle;
use global_hotkey::{GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState};
use iconpicker::app::{AppEvent, Effect, Supervisor};
use iconpicker::error::Result;
use iconpicker::utils::AutoStartManager;
use std::sync::mpsc::Receiver;
use std::time::Duration;
use tracing::{debug, error, warn};

/// How often the pump drains its sources
pub const PUMP_INTERVAL: Duration = Duration::from_millis(100);

/// Supervisor wired to the real platform
pub type AppSupervisor =
    Supervisor<Option<GlobalHotKeyManager>, SlintSurfaceFactory, AutoStartManager>;

/// Owns the supervisor, the tray and the popup event queue
pub struct Shell {
    supervisor: AppSupervisor,
    tray: Option<TrayHandle>,
    requests: Receiver<AppEvent>,
}

impl Shell {
    /// Wrap a started supervisor; popup callbacks arrive on `requests`
    pub fn new(supervisor: AppSupervisor, requests: Receiver<AppEvent>) -> Self {
        Self {
            supervisor,
            tray: None,
            requests,
        }
    }

    /// Create the tray icon from the supervisor's current menu model
    pub fn install_tray(&mut self) -> Result<()> {
        let model = self.supervisor.tray_menu();
        self.tray = Some(TrayHandle::new(&model)?);
        Ok(())
    }

    /// Drain every source once and dispatch
    pub fn pump(&mut self) {
        // Popup events first: a focus loss queued before a tray click or
        // shortcut press must not hide the panel that press just revealed
        let mut queue: Vec<AppEvent> = self.requests.try_iter().collect();
        queue.extend(self.collect_platform_events());

        for event in queue {
            debug!("Dispatching {:?}", event);
            for effect in self.supervisor.handle(event) {
                self.apply(effect);
            }
        }
    }

    /// Release the global shortcut before the process exits
    pub fn shutdown(&mut self) {
        self.supervisor.shutdown();
    }

    fn collect_platform_events(&self) -> Vec<AppEvent> {
        let mut events = Vec::new();

        #[cfg(any(windows, target_os = "macos"))]
        {
            use iconpicker::tray::TrayAction;
            use tray_icon::menu::MenuEvent;
            use tray_icon::{MouseButton, MouseButtonState, TrayIconEvent};

            while let Ok(event) = MenuEvent::receiver().try_recv() {
                match TrayAction::from_id(&event.id.0) {
                    Some(action) => events.push(AppEvent::Menu(action)),
                    None => debug!("Ignoring menu event {:?}", event.id),
                }
            }

            while let Ok(event) = TrayIconEvent::receiver().try_recv() {
                if let TrayIconEvent::Click {
                    button: MouseButton::Left,
                    button_state: MouseButtonState::Up,
                    ..
                } = event
                {
                    events.push(AppEvent::TrayClicked);
                }
            }
        }

        while let Ok(event) = GlobalHotKeyEvent::receiver().try_recv() {
            // Release events would toggle the popup a second time
            if event.state == HotKeyState::Pressed {
                events.push(AppEvent::HotkeyPressed(event.id));
            }
        }

        events
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::Reply(response) => self.supervisor.deliver(&response),
            Effect::RefreshTray(model) => match &self.tray {
                Some(tray) => {
                    if let Err(e) = tray.rebuild(&model) {
                        warn!("Failed to rebuild tray menu: {}", e);
                    }
                }
                None => debug!("Tray not installed yet, skipping refresh"),
            },
            Effect::Quit => {
                if let Err(e) = slint::quit_event_loop() {
                    error!("Failed to stop the event loop: {}", e);
                }
            }
        }
    }
}
