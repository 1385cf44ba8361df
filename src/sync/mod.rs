//! Bulk workspace synchronization
//!
//! Uploads a local directory tree into a remote project: a lazy,
//! exclusion-aware walk feeds a per-file two-phase transfer (content
//! upload, then metadata patch), and per-file outcomes aggregate into a
//! batch report. The traversal is pure; all I/O lives in the engine.

pub mod endpoints;
pub mod engine;
pub mod filter;
pub mod walker;

use std::path::PathBuf;
use thiserror::Error;

pub use endpoints::{UPLOAD_ENDPOINT_CANDIDATES, upload_content};
pub use engine::{BatchReport, TransferFailure, sync_folder};
pub use filter::{DEFAULT_IGNORED_DIRS, IgnoreList};
pub use walker::{FileEntry, walk};

/// Fatal synchronization errors, raised before any file is transferred
#[derive(Debug, Error)]
pub enum SyncError {
    /// The sync root is missing or not a directory
    #[error("{} is not a valid directory", .0.display())]
    InvalidRoot(PathBuf),
}
