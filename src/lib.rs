//! # Cloudera ML CLI
//!
//! A Rust-based command-line client for Cloudera Machine Learning. Uploads
//! local workspaces into remote projects and drives the control-plane API:
//! jobs and job runs, project discovery, runtimes, model builds and
//! deployments, and applications.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cloudera_ml_cli::api::CmlClient;
//! use cloudera_ml_cli::sync::{IgnoreList, sync_folder};
//! use std::path::Path;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CmlClient::new("ml.example.com", "api-key")?;
//! let report = sync_folder(
//!     &client,
//!     "project-id",
//!     Path::new("./my-workspace"),
//!     &IgnoreList::default(),
//! )
//! .await?;
//! println!("{}", report.message);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod sync;

// Re-export commonly used types and functions
pub use api::{ApiError, CmlClient, normalize_host};
pub use config::Config;
pub use error::{CmlError, Result};
pub use sync::{BatchReport, IgnoreList, sync_folder};

use cli::Commands;

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Execute one parsed command against a resolved configuration
pub async fn run_command(config: &Config, command: Commands, json: bool) -> Result<()> {
    match command {
        Commands::UploadFolder {
            folder_path,
            ignore_folders,
        } => handlers::handle_upload_folder(config, folder_path, ignore_folders, json).await,

        Commands::ListJobs => handlers::handle_list_jobs(config, json).await,

        Commands::CreateJob {
            name,
            script,
            kernel,
            cpu,
            memory,
            nvidia_gpu,
            runtime,
        } => {
            handlers::handle_create_job(
                config, name, script, kernel, cpu, memory, nvidia_gpu, runtime, json,
            )
            .await
        }

        Commands::DeleteJob { job_id } => handlers::handle_delete_job(config, job_id).await,

        Commands::DeleteAllJobs => handlers::handle_delete_all_jobs(config, json).await,

        Commands::CreateJobRun {
            job_id,
            env_vars,
            override_config,
        } => {
            handlers::handle_create_job_run(config, job_id, env_vars, override_config, json).await
        }

        Commands::ListJobRuns { job_id } => handlers::handle_list_job_runs(config, job_id).await,

        Commands::GetProjectId { project_name } => {
            handlers::handle_get_project_id(config, project_name, json).await
        }

        Commands::ListProjects => handlers::handle_list_projects(config, json).await,

        Commands::GetRuntimes => handlers::handle_get_runtimes(config, json).await,

        Commands::CreateModelBuild {
            model_id,
            file_path,
            function_name,
            kernel,
            runtime,
            replica_size,
            custom_docker_image,
        } => {
            handlers::handle_create_model_build(
                config,
                model_id,
                file_path,
                function_name,
                kernel,
                runtime,
                replica_size,
                custom_docker_image,
                json,
            )
            .await
        }

        Commands::CreateModelDeployment {
            model_id,
            build_id,
            name,
            cpu,
            memory,
            nvidia_gpu,
            replica_count,
            min_replica_count,
            max_replica_count,
            disable_auth,
            target_node_selector,
            env_vars,
        } => {
            handlers::handle_create_model_deployment(
                config,
                model_id,
                build_id,
                name,
                cpu,
                memory,
                nvidia_gpu,
                replica_count,
                min_replica_count,
                max_replica_count,
                disable_auth,
                target_node_selector,
                env_vars,
                json,
            )
            .await
        }

        Commands::ListApplications => handlers::handle_list_applications(config).await,

        Commands::GetApplication { application_id } => {
            handlers::handle_get_application(config, application_id).await
        }

        Commands::CreateApplication {
            name,
            script,
            description,
            cpu,
            memory,
            nvidia_gpu,
            runtime,
            env_vars,
        } => {
            handlers::handle_create_application(
                config, name, script, description, cpu, memory, nvidia_gpu, runtime, env_vars,
                json,
            )
            .await
        }

        Commands::DeleteApplication { application_id } => {
            handlers::handle_delete_application(config, application_id).await
        }
    }
}
