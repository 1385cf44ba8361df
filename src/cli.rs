use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cml-ctl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Drive a Cloudera Machine Learning deployment from the command line")]
#[command(long_about = "A command-line client for Cloudera Machine Learning. Uploads local \
workspaces into remote projects and manages jobs, job runs, runtimes, model builds, model \
deployments and applications through the CML control-plane API.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Cloudera ML host URL
    #[arg(long, global = true, env = "CLOUDERA_ML_HOST", value_name = "URL")]
    pub host: Option<String>,

    /// Cloudera ML API key
    #[arg(
        long,
        global = true,
        env = "CLOUDERA_ML_API_KEY",
        value_name = "KEY",
        hide_env_values = true
    )]
    pub api_key: Option<String>,

    /// Cloudera ML project ID (required for project-scoped commands)
    #[arg(long, global = true, env = "CLOUDERA_ML_PROJECT_ID", value_name = "ID")]
    pub project_id: Option<String>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format where applicable
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upload a local folder into the project, preserving relative paths
    UploadFolder {
        /// Local folder to upload
        #[arg(value_name = "FOLDER_PATH")]
        folder_path: PathBuf,

        /// Directory names to skip during upload (defaults: node_modules, .git, .vscode, dist, out)
        #[arg(long, value_delimiter = ',', value_name = "NAMES")]
        ignore_folders: Option<Vec<String>>,
    },

    /// List jobs in the project
    ListJobs,

    /// Create a new job
    CreateJob {
        /// Job name
        #[arg(long)]
        name: String,

        /// Script path relative to the project root
        #[arg(long)]
        script: String,

        /// Kernel type
        #[arg(long, default_value = "python3")]
        kernel: String,

        /// CPU cores
        #[arg(long, default_value_t = 1)]
        cpu: u32,

        /// Memory in GB
        #[arg(long, default_value_t = 1)]
        memory: u32,

        /// Number of GPUs
        #[arg(long, default_value_t = 0)]
        nvidia_gpu: u32,

        /// Runtime environment identifier
        #[arg(long, value_name = "IDENTIFIER")]
        runtime: Option<String>,
    },

    /// Delete a job by ID
    DeleteJob {
        /// ID of the job to delete
        #[arg(value_name = "JOB_ID")]
        job_id: String,
    },

    /// Delete all jobs in the project
    DeleteAllJobs,

    /// Start a run for an existing job
    CreateJobRun {
        /// ID of the job to run
        #[arg(value_name = "JOB_ID")]
        job_id: String,

        /// Environment variables as a JSON object
        #[arg(long, value_name = "JSON")]
        env_vars: Option<String>,

        /// Job configuration overrides as a JSON object
        #[arg(long, value_name = "JSON")]
        override_config: Option<String>,
    },

    /// List runs for a job
    ListJobRuns {
        /// ID of the job whose runs to list
        #[arg(value_name = "JOB_ID")]
        job_id: String,
    },

    /// Look up a project ID by project name
    GetProjectId {
        /// Name of the project to find ("*" lists all projects)
        #[arg(value_name = "PROJECT_NAME")]
        project_name: String,
    },

    /// List all available projects
    ListProjects,

    /// List available ML runtimes
    GetRuntimes,

    /// Build a model from a script in the project
    CreateModelBuild {
        /// ID of the model to build
        #[arg(long)]
        model_id: String,

        /// Path of the file containing the model code, relative to the project root
        #[arg(long)]
        file_path: String,

        /// Name of the function that serves the model
        #[arg(long)]
        function_name: String,

        /// Kernel type
        #[arg(long, default_value = "python3")]
        kernel: String,

        /// Runtime environment identifier
        #[arg(long, value_name = "IDENTIFIER")]
        runtime: Option<String>,

        /// Pod size for the build
        #[arg(long)]
        replica_size: Option<String>,

        /// Custom Docker image to build with
        #[arg(long, value_name = "IMAGE")]
        custom_docker_image: Option<String>,
    },

    /// Deploy a finished model build
    CreateModelDeployment {
        /// ID of the model to deploy
        #[arg(long)]
        model_id: String,

        /// ID of the model build to deploy
        #[arg(long)]
        build_id: String,

        /// Name for the deployment
        #[arg(long)]
        name: String,

        /// CPU cores per replica
        #[arg(long)]
        cpu: Option<u32>,

        /// Memory in GB per replica
        #[arg(long)]
        memory: Option<u32>,

        /// Number of GPUs per replica
        #[arg(long)]
        nvidia_gpu: Option<u32>,

        /// Number of replicas
        #[arg(long)]
        replica_count: Option<u32>,

        /// Minimum number of replicas
        #[arg(long)]
        min_replica_count: Option<u32>,

        /// Maximum number of replicas
        #[arg(long)]
        max_replica_count: Option<u32>,

        /// Disable authentication for the deployed endpoint
        #[arg(long)]
        disable_auth: bool,

        /// Target node selector for scheduling
        #[arg(long, value_name = "SELECTOR")]
        target_node_selector: Option<String>,

        /// Environment variables as a JSON object
        #[arg(long, value_name = "JSON")]
        env_vars: Option<String>,
    },

    /// List applications in the project
    ListApplications,

    /// Show details for one application
    GetApplication {
        /// ID of the application
        #[arg(value_name = "APPLICATION_ID")]
        application_id: String,
    },

    /// Create a new application
    CreateApplication {
        /// Application name
        #[arg(long)]
        name: String,

        /// Script path relative to the project root
        #[arg(long)]
        script: String,

        /// Description shown in the applications list
        #[arg(long)]
        description: Option<String>,

        /// CPU cores
        #[arg(long)]
        cpu: Option<u32>,

        /// Memory in GB
        #[arg(long)]
        memory: Option<u32>,

        /// Number of GPUs
        #[arg(long)]
        nvidia_gpu: Option<u32>,

        /// Runtime environment identifier
        #[arg(long, value_name = "IDENTIFIER")]
        runtime: Option<String>,

        /// Environment variables as a JSON object
        #[arg(long, value_name = "JSON")]
        env_vars: Option<String>,
    },

    /// Delete an application by ID
    DeleteApplication {
        /// ID of the application to delete
        #[arg(value_name = "APPLICATION_ID")]
        application_id: String,
    },
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}
