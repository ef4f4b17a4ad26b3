//! Startup ordering, event dispatch and shutdown

use crate::app::events::{AppEvent, Effect};
use crate::config::ConfigManager;
use crate::export::{ExportService, ManagedDirectory, RETENTION_MAX_AGE, SweepReport, sweep};
use crate::ipc::{IpcRequest, IpcResponse, ShortcutUpdate};
use crate::shortcut::{HotkeyBackend, ShortcutBinding, ShortcutManager};
use crate::tray::{TrayAction, TrayMenuModel};
use crate::utils::autostart::LoginItem;
use crate::window::{SurfaceFactory, WindowController};
use std::path::Path;
use tracing::{debug, error, info, warn};

/// Owner of every subsystem of the running application
pub struct Supervisor<B: HotkeyBackend, F: SurfaceFactory, L: LoginItem> {
    shortcuts: ShortcutManager<B>,
    window: WindowController<F>,
    exports: ExportService,
    login_item: L,
    last_sweep: Option<SweepReport>,
    shut_down: bool,
}

impl<B, F, L> Supervisor<B, F, L>
where
    B: HotkeyBackend,
    F: SurfaceFactory,
    L: LoginItem,
{
    /// Run the startup sequence
    ///
    /// In order: load the config, create and sweep the export directory, then
    /// register the persisted shortcut. None of these steps is fatal; the tray
    /// menu model is available from [`tray_menu`](Self::tray_menu) afterwards.
    pub fn start(store: ConfigManager, backend: B, factory: F, login_item: L) -> Self {
        Self::start_in(&std::env::temp_dir(), store, backend, factory, login_item)
    }

    /// [`start`](Self::start) with `temp_root` in place of the system temp directory
    pub fn start_in(
        temp_root: &Path,
        store: ConfigManager,
        backend: B,
        factory: F,
        login_item: L,
    ) -> Self {
        let config = store.load();
        let directory = ManagedDirectory::resolve_in(&config.export_location, temp_root);

        if let Err(e) = directory.ensure() {
            warn!(
                "Failed to create export directory {}: {}",
                directory.path().display(),
                e
            );
        }

        let last_sweep = if config.sweeps_on_startup() {
            Some(sweep(directory.path(), RETENTION_MAX_AGE))
        } else {
            info!("Startup sweep disabled for {}", directory.path().display());
            None
        };

        let mut shortcuts = ShortcutManager::new(backend, store);
        shortcuts.register_persisted(&config.shortcut);

        Self {
            shortcuts,
            window: WindowController::new(factory),
            exports: ExportService::new(directory),
            login_item,
            last_sweep,
            shut_down: false,
        }
    }

    /// Report of the startup sweep, `None` when it was disabled
    pub fn last_sweep(&self) -> Option<SweepReport> {
        self.last_sweep
    }

    /// Shortcut manager
    pub fn shortcuts(&self) -> &ShortcutManager<B> {
        &self.shortcuts
    }

    /// Window controller
    pub fn window(&mut self) -> &mut WindowController<F> {
        &mut self.window
    }

    /// Export service
    pub fn exports(&self) -> &ExportService {
        &self.exports
    }

    /// Login item
    pub fn login_item(&self) -> &L {
        &self.login_item
    }

    /// Whether [`shutdown`](Self::shutdown) has run
    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Current tray menu contents
    pub fn tray_menu(&self) -> TrayMenuModel {
        let autostart = self.login_item.is_enabled().unwrap_or_else(|e| {
            warn!("Failed to read run at startup setting: {}", e);
            false
        });
        TrayMenuModel::build(self.shortcuts.active(), autostart)
    }

    /// Dispatch one event and return what the shell must do next
    pub fn handle(&mut self, event: AppEvent) -> Vec<Effect> {
        if self.shut_down {
            debug!("Ignoring {:?} after shutdown", event);
            return Vec::new();
        }

        match event {
            AppEvent::TrayClicked => {
                self.toggle_window();
                Vec::new()
            }
            AppEvent::HotkeyPressed(id) => {
                if self.shortcuts.is_trigger(id) {
                    self.toggle_window();
                } else {
                    debug!("Ignoring hotkey {} that is not the active shortcut", id);
                }
                Vec::new()
            }
            AppEvent::Menu(action) => self.handle_menu(action),
            AppEvent::SurfaceFocusLost => {
                self.window.hide_on_blur();
                Vec::new()
            }
            AppEvent::Ipc(request) => self.handle_request(request),
        }
    }

    /// Forward a response to the popup surface
    pub fn deliver(&mut self, response: &IpcResponse) {
        self.window.deliver(response);
    }

    /// Release the global shortcut; safe to call more than once
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        info!("Shutting down");
        self.shortcuts.release();
        self.shut_down = true;
    }

    fn toggle_window(&mut self) {
        if let Err(e) = self.window.toggle() {
            error!("Failed to toggle popup window: {}", e);
        }
    }

    fn handle_menu(&mut self, action: TrayAction) -> Vec<Effect> {
        match action {
            TrayAction::Open => {
                if let Err(e) = self.window.reveal() {
                    error!("Failed to open popup window: {}", e);
                }
                Vec::new()
            }
            TrayAction::ToggleAutostart => {
                let enable = match self.login_item.is_enabled() {
                    Ok(enabled) => !enabled,
                    Err(e) => {
                        warn!("Failed to read run at startup setting: {}", e);
                        true
                    }
                };
                if let Err(e) = self.login_item.set_enabled(enable) {
                    error!("Failed to change run at startup setting: {}", e);
                }
                // Refresh even on failure so the check mark matches the OS again
                vec![Effect::RefreshTray(self.tray_menu())]
            }
            TrayAction::Quit => {
                self.shutdown();
                vec![Effect::Quit]
            }
        }
    }

    fn handle_request(&mut self, request: IpcRequest) -> Vec<Effect> {
        match request {
            IpcRequest::SaveIcon(request) => {
                let result = self.exports.export(request);
                vec![Effect::Reply(IpcResponse::IconSaved(result))]
            }
            IpcRequest::GetShortcut => {
                let current = self
                    .shortcuts
                    .active()
                    .map(ShortcutBinding::as_str)
                    .unwrap_or_default()
                    .to_string();
                vec![Effect::Reply(IpcResponse::Shortcut(current))]
            }
            IpcRequest::UpdateShortcut(descriptor) => {
                match self.shortcuts.register_descriptor(&descriptor) {
                    Ok(binding) => {
                        let update = ShortcutUpdate::changed(binding.as_str());
                        vec![
                            Effect::Reply(IpcResponse::ShortcutUpdated(update)),
                            Effect::RefreshTray(self.tray_menu()),
                        ]
                    }
                    Err(e) => {
                        warn!("Shortcut change to '{}' rejected: {}", descriptor, e);
                        let update = ShortcutUpdate::rejected(e.to_string());
                        vec![Effect::Reply(IpcResponse::ShortcutUpdated(update))]
                    }
                }
            }
        }
    }
}
