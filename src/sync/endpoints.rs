//! Upload endpoint probing
//!
//! The content-upload resource has moved between CML API versions. Rather
//! than pinning one path, the resolver walks an ordered candidate list and
//! settles on the first endpoint that accepts the upload. Candidate
//! failures are collected so an exhausted list reports every attempt.

use crate::api::error::{ApiError, EndpointFailure};
use crate::api::CmlClient;
use super::walker::FileEntry;

/// Upload paths to try, in order, under `/api/v2/projects/{id}/`.
/// The bare `files` collection is current; the suffixed forms appear on
/// older deployments.
pub const UPLOAD_ENDPOINT_CANDIDATES: [&str; 3] = ["files", "files/content", "files/upload"];

/// Upload one file's content, probing each candidate endpoint in order.
///
/// Returns the endpoint path that accepted the upload. The file is re-read
/// from disk for every attempt, so a half-consumed stream from a failed
/// attempt can never leak into the next one. If no candidate accepts,
/// fails with [`ApiError::AllEndpointsFailed`] naming every attempt.
pub async fn upload_content(
    client: &CmlClient,
    project_id: &str,
    entry: &FileEntry,
) -> Result<String, ApiError> {
    let mut failures = Vec::new();

    for candidate in UPLOAD_ENDPOINT_CANDIDATES {
        let path = format!("/api/v2/projects/{project_id}/{candidate}");
        log::debug!("trying upload endpoint {path} for {}", entry.relative_display());

        let bytes = match tokio::fs::read(&entry.absolute).await {
            Ok(bytes) => bytes,
            Err(e) => {
                failures.push(EndpointFailure {
                    endpoint: path,
                    detail: format!("could not read {}: {e}", entry.absolute.display()),
                });
                continue;
            }
        };

        match client.post_file(&path, &entry.file_name(), bytes).await {
            Ok(()) => return Ok(path),
            Err(e) => {
                log::debug!("upload endpoint {path} rejected {}: {e}", entry.relative_display());
                failures.push(EndpointFailure {
                    endpoint: path,
                    detail: e.to_string(),
                });
            }
        }
    }

    Err(ApiError::AllEndpointsFailed(failures))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_order_starts_with_the_current_collection_path() {
        assert_eq!(UPLOAD_ENDPOINT_CANDIDATES[0], "files");
        assert_eq!(UPLOAD_ENDPOINT_CANDIDATES.len(), 3);
    }
}
