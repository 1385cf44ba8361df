//! End-to-end tests for the folder upload engine against a mock
//! control-plane server: endpoint probing, per-file failure isolation and
//! batch accounting.

use cloudera_ml_cli::api::CmlClient;
use cloudera_ml_cli::sync::{IgnoreList, sync_folder};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PROJECT: &str = "proj-1";

fn upload_path(candidate: &str) -> String {
    format!("/api/v2/projects/{PROJECT}/{candidate}")
}

fn metadata_path() -> String {
    format!("/api/v2/projects/{PROJECT}/files/file")
}

fn write(root: &Path, relative: &str, contents: &str) {
    let full = root.join(relative);
    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(full, contents).unwrap();
}

/// Two real files plus an excluded dependency directory
fn sample_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.py", "print('a')");
    write(dir.path(), "sub/b.py", "print('b')");
    write(dir.path(), "node_modules/x.js", "module.exports = {}");
    dir
}

async fn client_for(server: &MockServer) -> CmlClient {
    CmlClient::new(&server.uri(), "test-key").unwrap()
}

#[tokio::test]
async fn uploads_tree_and_patches_metadata() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(upload_path("files")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path(metadata_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(2)
        .mount(&server)
        .await;

    let tree = sample_tree();
    let client = client_for(&server).await;
    let report = sync_folder(&client, PROJECT, tree.path(), &IgnoreList::default())
        .await
        .unwrap();

    assert!(report.success);
    assert_eq!(report.message, "Upload completed. Successfully uploaded 2 files.");

    let mut uploaded = report.uploaded.clone();
    uploaded.sort();
    assert_eq!(uploaded, vec!["a.py", "sub/b.py"]);
    assert!(report.failed.is_empty());
    assert_eq!(report.success_count() + report.failed_count(), 2);
}

#[tokio::test]
async fn falls_back_to_the_next_upload_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(upload_path("files")))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(upload_path("files/content")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    // The probe must stop at the first success
    Mock::given(method("POST"))
        .and(path(upload_path("files/upload")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path(metadata_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.py", "print('a')");

    let client = client_for(&server).await;
    let report = sync_folder(&client, PROJECT, dir.path(), &IgnoreList::default())
        .await
        .unwrap();

    assert!(report.success);
    assert_eq!(report.uploaded, vec!["a.py"]);
}

#[tokio::test]
async fn exhausted_endpoints_fail_the_file_and_skip_metadata() {
    let server = MockServer::start().await;

    for candidate in ["files", "files/content", "files/upload"] {
        Mock::given(method("POST"))
            .and(path(upload_path(candidate)))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(serde_json::json!({"message": "unavailable"})),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    // Content never landed, so the metadata phase must never run
    Mock::given(method("PATCH"))
        .and(path(metadata_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.py", "print('a')");

    let client = client_for(&server).await;
    let report = sync_folder(&client, PROJECT, dir.path(), &IgnoreList::default())
        .await
        .unwrap();

    assert!(!report.success);
    assert!(report.uploaded.is_empty());
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].file, "a.py");
    assert!(
        report.failed[0]
            .error
            .contains("All 3 upload endpoints failed"),
        "unexpected error detail: {}",
        report.failed[0].error
    );
    assert_eq!(report.success_count() + report.failed_count(), 1);
}

#[tokio::test]
async fn metadata_failure_is_a_file_failure_despite_uploaded_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(upload_path("files")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path(metadata_path()))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(serde_json::json!({"message": "boom"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.py", "print('a')");

    let client = client_for(&server).await;
    let report = sync_folder(&client, PROJECT, dir.path(), &IgnoreList::default())
        .await
        .unwrap();

    assert!(!report.success);
    assert!(report.uploaded.is_empty());
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].file, "a.py");
    assert!(report.failed[0].error.contains("metadata"));
}

#[tokio::test]
async fn one_bad_file_does_not_abort_the_batch() {
    let server = MockServer::start().await;

    // Content uploads succeed for everyone; the metadata patch rejects
    // exactly one path.
    Mock::given(method("POST"))
        .and(path(upload_path("files")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path(metadata_path()))
        .and(wiremock::matchers::body_json(
            serde_json::json!({"name": "a.py", "path": "a.py", "type": "file"}),
        ))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(serde_json::json!({"message": "boom"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path(metadata_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.py", "print('a')");
    write(dir.path(), "sub/b.py", "print('b')");

    let client = client_for(&server).await;
    let report = sync_folder(&client, PROJECT, dir.path(), &IgnoreList::default())
        .await
        .unwrap();

    assert!(!report.success);
    assert_eq!(report.uploaded, vec!["sub/b.py"]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].file, "a.py");
    assert_eq!(report.success_count() + report.failed_count(), 2);
}

#[tokio::test]
async fn empty_tree_is_a_successful_batch() {
    let server = MockServer::start().await;

    let dir = TempDir::new().unwrap();
    let client = client_for(&server).await;
    let report = sync_folder(&client, PROJECT, dir.path(), &IgnoreList::default())
        .await
        .unwrap();

    assert!(report.success);
    assert_eq!(report.success_count(), 0);
    assert_eq!(report.failed_count(), 0);
    assert_eq!(report.message, "Upload completed. Successfully uploaded 0 files.");
    assert_eq!(server.received_requests().await.unwrap().len(), 0);
}

#[tokio::test]
async fn invalid_root_fails_before_any_request() {
    let server = MockServer::start().await;

    let dir = TempDir::new().unwrap();
    let client = client_for(&server).await;
    let result = sync_folder(
        &client,
        PROJECT,
        &dir.path().join("missing"),
        &IgnoreList::default(),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(server.received_requests().await.unwrap().len(), 0);
}
