//! Handlers for model build and deployment commands

use super::utils::{parse_json_object, print_json};
use crate::api::{CmlClient, CreateModelBuildRequest, CreateModelDeploymentRequest};
use crate::config::Config;
use crate::error::Result;
use colored::Colorize;

#[allow(clippy::too_many_arguments)]
pub async fn handle_create_model_build(
    config: &Config,
    model_id: String,
    file_path: String,
    function_name: String,
    kernel: String,
    runtime: Option<String>,
    replica_size: Option<String>,
    custom_docker_image: Option<String>,
    json: bool,
) -> Result<()> {
    let project_id = config.project_id()?;
    let client = CmlClient::new(&config.host, &config.api_key)?;

    let request = CreateModelBuildRequest {
        file_path,
        function_name,
        kernel,
        runtime_identifier: runtime,
        replica_size,
        custom_docker_image,
    };

    let build = client
        .create_model_build(project_id, &model_id, &request)
        .await?;

    if json {
        return print_json(&build);
    }

    println!(
        "{}",
        format!("✅ Build started for model {model_id}").green()
    );
    print_json(&build)
}

#[allow(clippy::too_many_arguments)]
pub async fn handle_create_model_deployment(
    config: &Config,
    model_id: String,
    build_id: String,
    name: String,
    cpu: Option<u32>,
    memory: Option<u32>,
    nvidia_gpu: Option<u32>,
    replica_count: Option<u32>,
    min_replica_count: Option<u32>,
    max_replica_count: Option<u32>,
    disable_auth: bool,
    target_node_selector: Option<String>,
    env_vars: Option<String>,
    json: bool,
) -> Result<()> {
    let project_id = config.project_id()?;
    let client = CmlClient::new(&config.host, &config.api_key)?;

    let request = CreateModelDeploymentRequest {
        name: name.clone(),
        enable_auth: !disable_auth,
        cpu,
        memory,
        nvidia_gpu,
        replica_count,
        min_replica_count,
        max_replica_count,
        target_node_selector,
        environment_variables: parse_json_object("--env-vars", env_vars)?,
    };

    let deployment = client
        .create_model_deployment(project_id, &model_id, &build_id, &request)
        .await?;

    if json {
        return print_json(&deployment);
    }

    println!(
        "{}",
        format!("✅ Deployment '{name}' created for model {model_id}").green()
    );
    print_json(&deployment)
}
