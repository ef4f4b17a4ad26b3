//! Startup retention sweep for the export directory
//!
//! Best-effort: every entry older than the cutoff is removed, and a failure on
//! one entry is logged and skipped so the rest of the directory is still swept.

use std::path::Path;
use std::time::{Duration, SystemTime};
use tracing::{debug, info, warn};

/// Age after which exported files are removed
pub const RETENTION_MAX_AGE: Duration = Duration::from_secs(24 * 60 * 60);

/// Counts collected by one sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Entries deleted
    pub removed: usize,
    /// Entries younger than the cutoff
    pub kept: usize,
    /// Entries that could not be inspected or deleted
    pub failed: usize,
}

/// Delete every entry of `directory` last modified more than `max_age` ago
///
/// A missing directory is a no-op. Sub-directories are removed recursively.
pub fn sweep(directory: &Path, max_age: Duration) -> SweepReport {
    let mut report = SweepReport::default();

    let entries = match std::fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("Sweep skipped, {} does not exist", directory.display());
            return report;
        }
        Err(e) => {
            warn!("Sweep skipped, cannot read {}: {}", directory.display(), e);
            return report;
        }
    };

    let Some(cutoff) = SystemTime::now().checked_sub(max_age) else {
        return report;
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Failed to read directory entry: {}", e);
                report.failed += 1;
                continue;
            }
        };
        let path = entry.path();

        // symlink_metadata so a link is judged (and removed) itself, not its target
        let (metadata, modified) = match std::fs::symlink_metadata(&path)
            .and_then(|m| m.modified().map(|modified| (m, modified)))
        {
            Ok(found) => found,
            Err(e) => {
                warn!("Failed to read modification time of {}: {}", path.display(), e);
                report.failed += 1;
                continue;
            }
        };

        if modified >= cutoff {
            report.kept += 1;
            continue;
        }

        let removal = if metadata.is_dir() {
            std::fs::remove_dir_all(&path)
        } else {
            std::fs::remove_file(&path)
        };
        match removal {
            Ok(()) => {
                debug!("Removed stale export {}", path.display());
                report.removed += 1;
            }
            Err(e) => {
                warn!("Failed to remove stale export {}: {}", path.display(), e);
                report.failed += 1;
            }
        }
    }

    info!(
        "Swept {}: {} removed, {} kept, {} failed",
        directory.display(),
        report.removed,
        report.kept,
        report.failed
    );
    report
}
