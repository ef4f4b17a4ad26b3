//! GUI module
//!
//! Platform side of the application: the Slint popup, the system tray and the
//! timer-driven event pump that connects them to the supervisor.

pub mod popup;
pub mod shell;
pub mod tray;

pub use popup::SlintSurfaceFactory;
pub use shell::{PUMP_INTERVAL, Shell};
