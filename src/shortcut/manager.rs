//! Shortcut state machine

use crate::config::ConfigManager;
use crate::error::{IconPickerError, Result};
use crate::shortcut::backend::HotkeyBackend;
use crate::shortcut::binding::ShortcutBinding;
use tracing::{debug, error, info, warn};

/// Registration state of the global shortcut
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortcutState {
    /// No binding is held by this process
    Unregistered,
    /// `binding` is claimed from the OS hook
    Registered(ShortcutBinding),
}

/// Owner of the single active global shortcut
pub struct ShortcutManager<B: HotkeyBackend> {
    backend: B,
    state: ShortcutState,
    store: ConfigManager,
}

impl<B: HotkeyBackend> ShortcutManager<B> {
    /// Create an unregistered manager persisting through `store`
    pub fn new(backend: B, store: ConfigManager) -> Self {
        Self {
            backend,
            state: ShortcutState::Unregistered,
            store,
        }
    }

    /// Current state
    pub fn state(&self) -> &ShortcutState {
        &self.state
    }

    /// The active binding, if any
    pub fn active(&self) -> Option<&ShortcutBinding> {
        match &self.state {
            ShortcutState::Registered(binding) => Some(binding),
            ShortcutState::Unregistered => None,
        }
    }

    /// Backend, for inspection
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Register the persisted binding at startup
    ///
    /// Falls back to the default binding when the stored descriptor does not
    /// parse. A registration failure leaves the shortcut inactive and is only
    /// logged.
    pub fn register_persisted(&mut self, descriptor: &str) {
        let binding = ShortcutBinding::parse(descriptor).unwrap_or_else(|e| {
            warn!("Stored shortcut is invalid, using default: {}", e);
            ShortcutBinding::default_binding()
        });

        match self.register(binding) {
            Ok(()) => info!("Global shortcut ready"),
            Err(e) => error!("Global shortcut inactive: {}", e),
        }
    }

    /// Parse `descriptor` and register it; see [`register`](Self::register)
    pub fn register_descriptor(&mut self, descriptor: &str) -> Result<&ShortcutBinding> {
        let binding = ShortcutBinding::parse(descriptor)?;
        self.register(binding)?;
        self.active().ok_or_else(|| {
            IconPickerError::ConfigError(crate::error::StringError::new(
                "shortcut missing after successful registration",
            ))
        })
    }

    /// Replace the active binding with `binding`
    ///
    /// The old binding is released first. If the OS refuses the new one, the
    /// old binding is claimed again and the manager stays where it was. On
    /// success the new descriptor is persisted; a persistence failure is logged
    /// and the binding stays active.
    pub fn register(&mut self, binding: ShortcutBinding) -> Result<()> {
        if self.active() == Some(&binding) {
            debug!("Shortcut {} already active", binding);
            return Ok(());
        }

        let previous = match std::mem::replace(&mut self.state, ShortcutState::Unregistered) {
            ShortcutState::Registered(previous) => {
                if let Err(source) = self.backend.unregister(previous.hotkey()) {
                    self.state = ShortcutState::Registered(previous.clone());
                    return Err(IconPickerError::ShortcutReleaseFailed {
                        binding: previous.to_string(),
                        source,
                    });
                }
                debug!("Released shortcut {}", previous);
                Some(previous)
            }
            ShortcutState::Unregistered => None,
        };

        match self.backend.register(binding.hotkey()) {
            Ok(()) => {
                info!("Registered global shortcut {}", binding);
                if let Err(e) = self.store.save_shortcut(binding.as_str()) {
                    warn!(
                        "Failed to persist shortcut {}: {}. It stays active for this session.",
                        binding, e
                    );
                }
                self.state = ShortcutState::Registered(binding);
                Ok(())
            }
            Err(source) => {
                warn!("Shortcut {} unavailable: {}", binding, source);
                if let Some(previous) = previous {
                    self.restore(previous);
                }
                Err(IconPickerError::ShortcutUnavailable {
                    binding: binding.to_string(),
                    source,
                })
            }
        }
    }

    fn restore(&mut self, previous: ShortcutBinding) {
        match self.backend.register(previous.hotkey()) {
            Ok(()) => {
                info!("Restored previous shortcut {}", previous);
                self.state = ShortcutState::Registered(previous);
            }
            Err(e) => {
                error!("Failed to restore previous shortcut {}: {}", previous, e);
            }
        }
    }

    /// Whether a hotkey event with `id` belongs to the active binding
    pub fn is_trigger(&self, id: u32) -> bool {
        self.active().is_some_and(|binding| binding.id() == id)
    }

    /// Release the active binding from the OS hook
    ///
    /// Safe to call more than once. After release no hotkey event triggers.
    pub fn release(&mut self) {
        if let ShortcutState::Registered(binding) =
            std::mem::replace(&mut self.state, ShortcutState::Unregistered)
        {
            match self.backend.unregister(binding.hotkey()) {
                Ok(()) => info!("Released global shortcut {}", binding),
                Err(e) => warn!("Failed to release global shortcut {}: {}", binding, e),
            }
        }
    }
}

impl<B: HotkeyBackend> Drop for ShortcutManager<B> {
    fn drop(&mut self) {
        self.release();
    }
}
