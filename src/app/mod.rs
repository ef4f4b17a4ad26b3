//! Application supervisor
//!
//! The shell (tray, hotkey hook, popup callbacks) turns every platform signal
//! into an [`AppEvent`] and hands it to [`Supervisor::handle`]. The supervisor
//! mutates the subsystems it owns and answers with [`Effect`]s, which the
//! shell applies. Everything runs on the UI thread.

pub mod events;
pub mod supervisor;

pub use events::{AppEvent, Effect};
pub use supervisor::Supervisor;
