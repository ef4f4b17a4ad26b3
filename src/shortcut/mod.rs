//! Global shortcut management
//!
//! Exactly one binding is active process-wide. The [`ShortcutManager`] moves
//! between two states:
//!
//! ```text
//! Unregistered ──register(b) ok──▶ Registered(b) ──register(c) ok──▶ Registered(c)
//!       ▲                              │    ▲                           │
//!       └──────────── release ─────────┘    └── register(c) failed ─────┘
//! ```
//!
//! A failed re-registration restores the previous binding. Successful changes
//! are persisted through the [`ConfigManager`](crate::config::ConfigManager).
//! The OS hook sits behind [`HotkeyBackend`] so the state machine can be
//! exercised without a desktop session.

pub mod backend;
pub mod binding;
pub mod manager;

pub use backend::{BackendError, HotkeyBackend};
pub use binding::ShortcutBinding;
pub use manager::{ShortcutManager, ShortcutState};
