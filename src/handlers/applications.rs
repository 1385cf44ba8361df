//! Handlers for application management commands

use super::utils::{parse_json_object, print_json};
use crate::api::{CmlClient, CreateApplicationRequest};
use crate::config::Config;
use crate::error::Result;
use colored::Colorize;

pub async fn handle_list_applications(config: &Config) -> Result<()> {
    let project_id = config.project_id()?;
    let client = CmlClient::new(&config.host, &config.api_key)?;

    let applications = client.list_applications(project_id).await?;
    print_json(&applications)
}

pub async fn handle_get_application(config: &Config, application_id: String) -> Result<()> {
    let project_id = config.project_id()?;
    let client = CmlClient::new(&config.host, &config.api_key)?;

    let application = client.get_application(project_id, &application_id).await?;
    print_json(&application)
}

#[allow(clippy::too_many_arguments)]
pub async fn handle_create_application(
    config: &Config,
    name: String,
    script: String,
    description: Option<String>,
    cpu: Option<u32>,
    memory: Option<u32>,
    nvidia_gpu: Option<u32>,
    runtime: Option<String>,
    env_vars: Option<String>,
    json: bool,
) -> Result<()> {
    let project_id = config.project_id()?;
    let client = CmlClient::new(&config.host, &config.api_key)?;

    let request = CreateApplicationRequest {
        name: name.clone(),
        script,
        description,
        cpu,
        memory,
        nvidia_gpu,
        runtime_identifier: runtime,
        environment_variables: parse_json_object("--env-vars", env_vars)?,
    };

    let application = client.create_application(project_id, &request).await?;

    if json {
        return print_json(&application);
    }

    println!(
        "{}",
        format!("✅ Application '{name}' created successfully").green()
    );
    print_json(&application)
}

pub async fn handle_delete_application(config: &Config, application_id: String) -> Result<()> {
    let project_id = config.project_id()?;
    let client = CmlClient::new(&config.host, &config.api_key)?;

    client
        .delete_application(project_id, &application_id)
        .await?;
    println!(
        "{}",
        format!("✅ Successfully deleted application {application_id}").green()
    );

    Ok(())
}
