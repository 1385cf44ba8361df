//! Workspace upload engine
//!
//! Drives the two-phase transfer for every file the walker yields: raw
//! content upload first, then the metadata patch that moves the object to
//! its real name and path. A failure in either phase is recorded against
//! that file alone; the batch always runs to the end of the walk.

use super::endpoints::upload_content;
use super::filter::IgnoreList;
use super::walker::{FileEntry, walk};
use super::SyncError;
use crate::api::{CmlClient, FileMetadata};
use serde::Serialize;
use std::path::Path;

/// Why one file failed to transfer
#[derive(Debug, Clone, Serialize)]
pub struct TransferFailure {
    /// Path relative to the sync root
    pub file: String,
    /// Human-readable failure detail
    pub error: String,
}

/// Outcome of one folder upload
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    /// True iff no file failed
    pub success: bool,
    /// One-line summary of the run
    pub message: String,
    /// Relative paths transferred completely (content and metadata)
    pub uploaded: Vec<String>,
    /// Files that failed either phase, with details
    pub failed: Vec<TransferFailure>,
}

impl BatchReport {
    fn finalize(uploaded: Vec<String>, failed: Vec<TransferFailure>) -> Self {
        let message = format!(
            "Upload completed. Successfully uploaded {} files.",
            uploaded.len()
        );
        Self {
            success: failed.is_empty(),
            message,
            uploaded,
            failed,
        }
    }

    /// Number of files transferred completely
    pub fn success_count(&self) -> usize {
        self.uploaded.len()
    }

    /// Number of files that failed
    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }
}

/// Upload a local folder into a project, preserving relative paths.
///
/// Fatal errors (invalid root) surface before any network call. Per-file
/// errors never do: each is converted into a [`TransferFailure`] and the
/// remaining files are still attempted. Files are processed one at a
/// time, and for each file the content upload strictly precedes the
/// metadata patch.
///
/// A metadata-patch failure leaves the already-uploaded content on the
/// remote under its default object name; the report records the file as
/// failed and no cleanup is attempted.
pub async fn sync_folder(
    client: &CmlClient,
    project_id: &str,
    root: &Path,
    ignore: &IgnoreList,
) -> Result<BatchReport, SyncError> {
    let mut uploaded = Vec::new();
    let mut failed = Vec::new();

    for entry in walk(root, ignore)? {
        let relative = entry.relative_display();
        log::info!("uploading {relative}");

        match transfer_file(client, project_id, &entry).await {
            Ok(()) => uploaded.push(relative),
            Err(detail) => {
                log::warn!("failed to upload {relative}: {detail}");
                failed.push(TransferFailure {
                    file: relative,
                    error: detail,
                });
            }
        }
    }

    let report = BatchReport::finalize(uploaded, failed);
    log::info!(
        "{} ({} failed)",
        report.message,
        report.failed_count()
    );
    Ok(report)
}

/// Run both transfer phases for one file, in order.
async fn transfer_file(
    client: &CmlClient,
    project_id: &str,
    entry: &FileEntry,
) -> Result<(), String> {
    upload_content(client, project_id, entry)
        .await
        .map_err(|e| e.to_string())?;

    let metadata = FileMetadata::file(entry.file_name(), entry.relative_display());
    client
        .update_file_metadata(project_id, &metadata)
        .await
        .map_err(|e| format!("content uploaded but metadata update failed: {e}"))?;

    Ok(())
}
