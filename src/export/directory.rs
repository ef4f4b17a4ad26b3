//! Managed export directory resolution

use crate::config::ExportLocation;
use crate::config::manager::APP_DIR_NAME;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory name of the temp-scoped staging area
const STAGING_DIR_NAME: &str = "iconpicker-exports";

/// Directory holding exported icons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagedDirectory {
    path: PathBuf,
}

impl ManagedDirectory {
    /// Wrap an explicit directory, made absolute against the working directory
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let path = std::path::absolute(&path).unwrap_or(path);
        Self { path }
    }

    /// Resolve the configured export policy to a concrete directory
    pub fn resolve(location: &ExportLocation) -> Self {
        Self::resolve_in(location, &std::env::temp_dir())
    }

    /// Resolve with `temp_root` standing in for the system temp directory
    pub fn resolve_in(location: &ExportLocation, temp_root: &Path) -> Self {
        let path = match location {
            ExportLocation::Staging => temp_root.join(STAGING_DIR_NAME),
            ExportLocation::SavedIcons => dirs::data_dir()
                .unwrap_or_else(|| temp_root.to_path_buf())
                .join(APP_DIR_NAME)
                .join("saved-icons"),
            ExportLocation::Downloads => dirs::download_dir()
                .or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
                .unwrap_or_else(|| temp_root.join(STAGING_DIR_NAME)),
            ExportLocation::Custom(path) => path.clone(),
        };
        debug!("Export location {:?} resolved to {}", location, path.display());
        Self::new(path)
    }

    /// Absolute path of the directory
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the directory and any missing parents; succeeds if it already exists
    pub fn ensure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staging_lives_under_temp() {
        let dir = ManagedDirectory::resolve(&ExportLocation::Staging);
        assert!(dir.path().starts_with(std::env::temp_dir()));
        assert!(dir.path().ends_with(STAGING_DIR_NAME));
    }

    #[test]
    fn test_staging_follows_temp_root() {
        let root = tempfile::tempdir().unwrap();
        let dir = ManagedDirectory::resolve_in(&ExportLocation::Staging, root.path());
        assert_eq!(dir.path(), root.path().join(STAGING_DIR_NAME));
    }

    #[test]
    fn test_saved_icons_is_app_scoped() {
        let dir = ManagedDirectory::resolve(&ExportLocation::SavedIcons);
        assert!(dir.path().ends_with(Path::new(APP_DIR_NAME).join("saved-icons")));
    }

    #[test]
    fn test_relative_custom_path_becomes_absolute() {
        let dir = ManagedDirectory::resolve(&ExportLocation::Custom(PathBuf::from("icons")));
        assert!(dir.path().is_absolute());
        assert!(dir.path().ends_with("icons"));
    }

    #[test]
    fn test_ensure_is_idempotent_and_creates_parents() {
        let root = tempfile::tempdir().unwrap();
        let dir = ManagedDirectory::new(root.path().join("a").join("b"));

        dir.ensure().unwrap();
        dir.ensure().unwrap();

        assert!(dir.path().is_dir());
    }
}
