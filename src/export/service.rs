//! Export service
//!
//! Writes a named content blob into the managed directory. Every write goes
//! through a `tempfile::NamedTempFile` in the target directory that is then
//! persisted over the final name, so readers see either the old file or the new
//! one, never a partial write. Failures become an [`ExportResult`] with
//! `success == false`; nothing here panics or propagates to the event loop.

use crate::error::{IconPickerError, Result};
use crate::export::directory::ManagedDirectory;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

/// Content produced by the popup, consumed once by [`ExportService::export`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    /// File body
    pub content: Vec<u8>,
    /// File name, used verbatim
    pub name: String,
}

impl ExportRequest {
    /// Create a request from any byte or text payload
    pub fn new(content: impl Into<Vec<u8>>, name: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            name: name.into(),
        }
    }
}

/// Outcome of an export, returned to the requester
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportResult {
    /// Whether the file was written
    pub success: bool,
    /// Absolute path written on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Failure message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExportResult {
    fn written(path: PathBuf) -> Self {
        Self {
            success: true,
            path: Some(path),
            error: None,
        }
    }

    fn failed(error: &IconPickerError) -> Self {
        Self {
            success: false,
            path: None,
            error: Some(error.to_string()),
        }
    }
}

/// Writes exports into a [`ManagedDirectory`]
#[derive(Debug, Clone)]
pub struct ExportService {
    directory: ManagedDirectory,
}

impl ExportService {
    /// Create a service writing into `directory`
    pub fn new(directory: ManagedDirectory) -> Self {
        Self { directory }
    }

    /// Directory exports are written to
    pub fn directory(&self) -> &ManagedDirectory {
        &self.directory
    }

    /// Handle a `save-icon` request
    pub fn export(&self, request: ExportRequest) -> ExportResult {
        match self.write(&request.content, &request.name) {
            Ok(path) => {
                info!("Exported {} ({} bytes)", path.display(), request.content.len());
                ExportResult::written(path)
            }
            Err(e) => {
                warn!("Export of '{}' failed: {}", request.name, e);
                ExportResult::failed(&e)
            }
        }
    }

    /// Write `content` to `filename` inside the managed directory, replacing any
    /// existing file, and return the absolute path written
    pub fn write(&self, content: &[u8], filename: &str) -> Result<PathBuf> {
        let dir = self.directory.path();
        let target = dir.join(filename);
        let export_failed = |source: std::io::Error| IconPickerError::ExportFailed {
            path: target.clone(),
            source,
        };

        if filename.is_empty() {
            return Err(export_failed(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "file name is empty",
            )));
        }

        self.directory.ensure().map_err(export_failed)?;

        // The temp file must share the target's directory for the rename to be atomic
        let parent = target.parent().unwrap_or(dir);
        let mut temp = tempfile::NamedTempFile::new_in(parent).map_err(export_failed)?;
        temp.write_all(content).map_err(export_failed)?;
        temp.flush().map_err(export_failed)?;
        temp.persist(&target).map_err(|e| export_failed(e.error))?;

        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_in(root: &tempfile::TempDir) -> ExportService {
        ExportService::new(ManagedDirectory::new(root.path().join("exports")))
    }

    #[test]
    fn test_export_creates_directory_and_returns_absolute_path() {
        let root = tempfile::tempdir().unwrap();
        let service = service_in(&root);

        let result = service.export(ExportRequest::new("<svg/>", "a.svg"));

        assert!(result.success);
        assert!(result.error.is_none());
        let path = result.path.unwrap();
        assert!(path.is_absolute());
        assert_eq!(path, root.path().join("exports").join("a.svg"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "<svg/>");
    }

    #[test]
    fn test_second_export_overwrites_first() {
        let root = tempfile::tempdir().unwrap();
        let service = service_in(&root);

        assert!(service.export(ExportRequest::new("first", "a.svg")).success);
        assert!(service.export(ExportRequest::new("second", "a.svg")).success);

        let dir = service.directory().path();
        let names: Vec<_> = std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("a.svg")]);
        assert_eq!(std::fs::read_to_string(dir.join("a.svg")).unwrap(), "second");
    }

    #[test]
    fn test_binary_content_is_written_verbatim() {
        let root = tempfile::tempdir().unwrap();
        let service = service_in(&root);
        let png_header = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0x00];

        let result = service.export(ExportRequest::new(png_header.clone(), "icon.png"));

        assert_eq!(std::fs::read(result.path.unwrap()).unwrap(), png_header);
    }

    #[test]
    fn test_empty_filename_fails_without_touching_disk() {
        let root = tempfile::tempdir().unwrap();
        let service = service_in(&root);

        let result = service.export(ExportRequest::new("x", ""));

        assert!(!result.success);
        assert!(result.path.is_none());
        assert!(result.error.unwrap().contains("empty"));
        assert!(!service.directory().path().exists());
    }

    #[test]
    fn test_missing_subdirectory_in_name_reports_failure() {
        let root = tempfile::tempdir().unwrap();
        let service = service_in(&root);

        let result = service.export(ExportRequest::new("x", "nested/a.svg"));

        assert!(!result.success);
        assert!(result.error.is_some());
    }

    #[test]
    fn test_directory_blocked_by_file_reports_failure() {
        let root = tempfile::tempdir().unwrap();
        let blocked = root.path().join("exports");
        std::fs::write(&blocked, "not a directory").unwrap();
        let service = ExportService::new(ManagedDirectory::new(&blocked));

        let result = service.export(ExportRequest::new("x", "a.svg"));

        assert!(!result.success);
        assert!(result.error.unwrap().contains("a.svg"));
    }

    #[test]
    fn test_result_serialization_omits_absent_fields() {
        let root = tempfile::tempdir().unwrap();
        let service = service_in(&root);

        let ok = serde_json::to_value(service.export(ExportRequest::new("x", "a.svg"))).unwrap();
        assert_eq!(ok["success"], true);
        assert!(ok["path"].is_string());
        assert!(ok.get("error").is_none());
    }
}
