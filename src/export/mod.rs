//! Export pipeline
//!
//! Exported icons land in one [`ManagedDirectory`], chosen by the
//! `export_location` policy and resolved once at startup:
//!
//! - **Staging**: `<temp>/iconpicker-exports`, the default
//! - **Saved icons**: `<data dir>/IconPicker/saved-icons`
//! - **Downloads**: the user's downloads folder
//! - **Custom**: any directory from the config file
//!
//! The directory is created at startup. The [`retention`] sweep then runs on it
//! only when it is disposable (staging) or `sweep_on_startup` asks for it, so a
//! user's own folder is never emptied by default.

pub mod directory;
pub mod retention;
pub mod service;

pub use directory::ManagedDirectory;
pub use retention::{RETENTION_MAX_AGE, SweepReport, sweep};
pub use service::{ExportRequest, ExportResult, ExportService};
