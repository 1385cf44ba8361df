//! API request and response types for the Cloudera ML control plane
//!
//! Typed DTOs exist for the resources whose fields the CLI inspects
//! (jobs, projects, runtimes). Operations whose payloads the CLI only
//! relays (job runs, model builds/deployments, applications) deserialize
//! into `serde_json::Value` at the call site and carry typed request
//! bodies here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Error payload returned by the CML API on non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    /// Error message
    #[serde(default)]
    pub error: Option<String>,
    /// Detailed error message
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorResponse {
    /// Get the error message, preferring `message` over `error`
    pub fn get_message(&self) -> String {
        self.message
            .clone()
            .or_else(|| self.error.clone())
            .unwrap_or_else(|| "Unknown error".to_string())
    }
}

// =========================================================================
// Jobs
// =========================================================================

/// A job definition inside a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Unique job identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Job display name
    #[serde(default)]
    pub name: Option<String>,
    /// Script the job executes, relative to the project root
    #[serde(default)]
    pub script: Option<String>,
    /// Last reported status
    #[serde(default)]
    pub status: Option<String>,
    /// Creation timestamp, as returned by the API
    #[serde(default)]
    pub created_at: Option<String>,
    /// CPU cores reserved for the job
    #[serde(default)]
    pub cpu: Option<f64>,
    /// Memory in GB reserved for the job
    #[serde(default)]
    pub memory: Option<f64>,
    /// GPUs reserved for the job
    #[serde(default)]
    pub nvidia_gpu: Option<u32>,
}

impl Job {
    /// Human-readable creation time; falls back to the raw API value when
    /// it is not an ISO-8601 timestamp.
    pub fn created_at_display(&self) -> String {
        match &self.created_at {
            Some(raw) => raw
                .parse::<DateTime<Utc>>()
                .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
                .unwrap_or_else(|_| raw.clone()),
            None => "Unknown".to_string(),
        }
    }

    /// Name to show in messages when one is missing
    pub fn display_name(&self) -> String {
        match (&self.name, &self.id) {
            (Some(name), _) => name.clone(),
            (None, Some(id)) => format!("Job ID {id}"),
            (None, None) => "Unknown job".to_string(),
        }
    }
}

/// Response wrapper for the job listing endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct JobList {
    /// Jobs in the project
    #[serde(default)]
    pub jobs: Vec<Job>,
}

/// Request body for creating a job
#[derive(Debug, Clone, Serialize)]
pub struct CreateJobRequest {
    /// Job name
    pub name: String,
    /// Script path relative to the project root
    pub script: String,
    /// Kernel type
    pub kernel: String,
    /// CPU cores
    pub cpu: u32,
    /// Memory in GB
    pub memory: u32,
    /// Number of GPUs
    pub nvidia_gpu: u32,
    /// Runtime environment identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_identifier: Option<String>,
}

/// Request body for starting a job run
#[derive(Debug, Clone, Serialize, Default)]
pub struct CreateJobRunRequest {
    /// Environment variables for this run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_variables: Option<serde_json::Map<String, serde_json::Value>>,
    /// Overrides applied on top of the job configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_config: Option<serde_json::Map<String, serde_json::Value>>,
}

// =========================================================================
// Projects
// =========================================================================

/// Project information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique project identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Project name
    #[serde(default)]
    pub name: Option<String>,
    /// Remaining fields, kept verbatim so lookups can echo the full record
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Response wrapper for the project listing endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectList {
    /// All visible projects
    #[serde(default)]
    pub projects: Vec<Project>,
}

// =========================================================================
// Runtimes
// =========================================================================

/// One ML runtime image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Runtime {
    /// Image identifier (newer deployments)
    #[serde(default)]
    pub image_identifier: Option<String>,
    /// Runtime identifier (older deployments)
    #[serde(default)]
    pub runtime_identifier: Option<String>,
    /// Runtime edition
    #[serde(default)]
    pub edition: Option<String>,
    /// Image type
    #[serde(default)]
    pub image_type: Option<String>,
    /// Short human description
    #[serde(default)]
    pub short_description: Option<String>,
}

impl Runtime {
    /// The identifier to pass when creating jobs, whichever field the
    /// deployment populates.
    pub fn identifier(&self) -> Option<&str> {
        self.image_identifier
            .as_deref()
            .or(self.runtime_identifier.as_deref())
    }
}

/// Response wrapper for the runtime listing endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeList {
    /// Available runtimes
    #[serde(default)]
    pub runtimes: Vec<Runtime>,
}

// =========================================================================
// Files
// =========================================================================

/// Metadata patch applied after a raw content upload, moving the object
/// to its intended name and path inside the project.
#[derive(Debug, Clone, Serialize)]
pub struct FileMetadata {
    /// File display name
    pub name: String,
    /// Logical path relative to the project root
    pub path: String,
    /// Entry type, always `file` for uploads
    #[serde(rename = "type")]
    pub entry_type: String,
}

impl FileMetadata {
    /// Metadata for a regular file
    pub fn file(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            entry_type: "file".to_string(),
        }
    }
}

// =========================================================================
// Models
// =========================================================================

/// Request body for building a model
#[derive(Debug, Clone, Serialize)]
pub struct CreateModelBuildRequest {
    /// Path of the file containing the model code
    pub file_path: String,
    /// Function that serves the model
    pub function_name: String,
    /// Kernel type
    pub kernel: String,
    /// Runtime environment identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_identifier: Option<String>,
    /// Pod size for the build
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replica_size: Option<String>,
    /// Custom Docker image, when building outside the managed runtimes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_docker_image: Option<String>,
}

/// Request body for deploying a model build
#[derive(Debug, Clone, Serialize)]
pub struct CreateModelDeploymentRequest {
    /// Deployment name
    pub name: String,
    /// Whether the deployed endpoint requires authentication
    pub enable_auth: bool,
    /// CPU cores per replica
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<u32>,
    /// Memory in GB per replica
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<u32>,
    /// GPUs per replica
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nvidia_gpu: Option<u32>,
    /// Number of replicas
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replica_count: Option<u32>,
    /// Minimum number of replicas
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_replica_count: Option<u32>,
    /// Maximum number of replicas
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_replica_count: Option<u32>,
    /// Target node selector for scheduling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_node_selector: Option<String>,
    /// Environment variables for the deployment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_variables: Option<serde_json::Map<String, serde_json::Value>>,
}

// =========================================================================
// Applications
// =========================================================================

/// Request body for creating an application
#[derive(Debug, Clone, Serialize)]
pub struct CreateApplicationRequest {
    /// Application name
    pub name: String,
    /// Script path relative to the project root
    pub script: String,
    /// Description shown in the applications list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// CPU cores
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<u32>,
    /// Memory in GB
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<u32>,
    /// Number of GPUs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nvidia_gpu: Option<u32>,
    /// Runtime environment identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_identifier: Option<String>,
    /// Environment variables for the application
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_variables: Option<serde_json::Map<String, serde_json::Value>>,
}
