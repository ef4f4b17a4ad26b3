//! Utility modules
//!
//! Provides the "Run at startup" login item, logging, and single instance
//! enforcement.

pub mod autostart;
pub mod logging;
pub mod single_instance;

pub use autostart::{AutoStartManager, LoginItem};
pub use logging::init_logging;
pub use single_instance::SingleInstanceGuard;
