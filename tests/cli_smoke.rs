//! Smoke tests for the `cml-ctl` binary: argument surface, configuration
//! validation and fatal preconditions.

use assert_cmd::Command;
use predicates::prelude::*;

fn cml_ctl() -> Command {
    let mut cmd = Command::cargo_bin("cml-ctl").unwrap();
    // Keep ambient credentials out of the test environment
    cmd.env_remove("CLOUDERA_ML_HOST");
    cmd.env_remove("CLOUDERA_ML_API_KEY");
    cmd.env_remove("CLOUDERA_ML_PROJECT_ID");
    cmd
}

#[test]
fn help_lists_the_command_surface() {
    cml_ctl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("upload-folder"))
        .stdout(predicate::str::contains("create-job"))
        .stdout(predicate::str::contains("get-runtimes"));
}

#[test]
fn version_reports_the_binary_name() {
    cml_ctl()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cml-ctl"));
}

#[test]
fn missing_host_and_key_fail_before_any_work() {
    cml_ctl()
        .arg("list-jobs")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing configuration: host, api_key"))
        .stderr(predicate::str::contains("CLOUDERA_ML_HOST"));
}

#[test]
fn project_scoped_commands_require_a_project_id() {
    cml_ctl()
        .args(["--host", "ml.example.com", "--api-key", "k", "list-jobs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing configuration: project_id"));
}

#[test]
fn upload_folder_rejects_a_missing_root_without_touching_the_network() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("no-such-dir");

    cml_ctl()
        .args([
            "--host",
            "ml.example.com",
            "--api-key",
            "k",
            "--project-id",
            "p",
            "upload-folder",
        ])
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid directory"));
}

#[test]
fn upload_folder_requires_a_path_argument() {
    cml_ctl()
        .args(["--host", "h", "--api-key", "k", "upload-folder"])
        .assert()
        .failure();
}
