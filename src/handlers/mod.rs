// Handler modules
pub mod applications;
pub mod jobs;
pub mod models;
pub mod projects;
pub mod runtimes;
pub mod sync;
pub mod utils;

// Re-export all handler functions
pub use applications::{
    handle_create_application, handle_delete_application, handle_get_application,
    handle_list_applications,
};
pub use jobs::{
    handle_create_job, handle_create_job_run, handle_delete_all_jobs, handle_delete_job,
    handle_list_job_runs, handle_list_jobs,
};
pub use models::{handle_create_model_build, handle_create_model_deployment};
pub use projects::{handle_get_project_id, handle_list_projects};
pub use runtimes::handle_get_runtimes;
pub use sync::handle_upload_folder;
