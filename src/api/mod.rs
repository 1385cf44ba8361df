//! Cloudera ML control-plane API client
//!
//! Authenticated access to the CML API: projects, jobs, runtimes, files,
//! model builds/deployments and applications.
//!
//! # Example
//!
//! ```rust,ignore
//! use cloudera_ml_cli::api::CmlClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CmlClient::new("ml.example.com", "api-key")?;
//!
//!     for job in client.list_jobs("project-id").await?.jobs {
//!         println!("Job: {}", job.display_name());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod types;

// Re-export commonly used items
pub use client::{AuthScheme, CmlClient, DEFAULT_RUNTIME_IDENTIFIER, normalize_host};
pub use error::{ApiError, EndpointFailure, Result};
pub use types::{
    ApiErrorResponse, CreateApplicationRequest, CreateJobRequest, CreateJobRunRequest,
    CreateModelBuildRequest, CreateModelDeploymentRequest, FileMetadata, Job, JobList, Project,
    ProjectList, Runtime, RuntimeList,
};
