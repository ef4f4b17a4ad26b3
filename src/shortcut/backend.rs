//! OS-level hotkey hook

use crate::error::StringError;
use global_hotkey::GlobalHotKeyManager;
use global_hotkey::hotkey::HotKey;

/// Error reported by a hotkey backend
pub type BackendError = Box<dyn std::error::Error + Send + Sync>;

/// Registration surface of the OS global-hotkey hook
pub trait HotkeyBackend {
    /// Claim `hotkey` process-wide; fails if another process owns it
    fn register(&mut self, hotkey: HotKey) -> Result<(), BackendError>;

    /// Release a previously claimed `hotkey`
    fn unregister(&mut self, hotkey: HotKey) -> Result<(), BackendError>;
}

impl HotkeyBackend for GlobalHotKeyManager {
    fn register(&mut self, hotkey: HotKey) -> Result<(), BackendError> {
        GlobalHotKeyManager::register(self, hotkey).map_err(Into::into)
    }

    fn unregister(&mut self, hotkey: HotKey) -> Result<(), BackendError> {
        GlobalHotKeyManager::unregister(self, hotkey).map_err(Into::into)
    }
}

/// A hook that could not be created; every registration fails
impl<B: HotkeyBackend> HotkeyBackend for Option<B> {
    fn register(&mut self, hotkey: HotKey) -> Result<(), BackendError> {
        match self {
            Some(backend) => backend.register(hotkey),
            None => Err(StringError::new("global shortcuts are not available")),
        }
    }

    fn unregister(&mut self, hotkey: HotKey) -> Result<(), BackendError> {
        match self {
            Some(backend) => backend.unregister(hotkey),
            None => Ok(()),
        }
    }
}
