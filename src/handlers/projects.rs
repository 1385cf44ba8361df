//! Handlers for project discovery commands

use super::utils::print_json;
use crate::api::{ApiError, CmlClient};
use crate::config::Config;
use crate::error::Result;
use colored::Colorize;

pub async fn handle_get_project_id(
    config: &Config,
    project_name: String,
    json: bool,
) -> Result<()> {
    // "*" means list everything, same as the list-projects command
    if project_name == "*" {
        return handle_list_projects(config, json).await;
    }

    let client = CmlClient::new(&config.host, &config.api_key)?;
    let projects = client.list_projects().await?.projects;

    let found = projects
        .iter()
        .find(|p| p.name.as_deref() == Some(project_name.as_str()));

    let Some(project) = found else {
        return Err(ApiError::NotFound(format!(
            "No project found with name: {project_name}"
        ))
        .into());
    };

    if json {
        return print_json(&serde_json::json!({
            "project_id": project.id,
            "project_name": project_name,
            "project_info": project,
        }));
    }

    println!(
        "{}",
        format!(
            "✅ Project '{}' has ID {}",
            project_name,
            project.id.as_deref().unwrap_or("unknown")
        )
        .green()
    );

    Ok(())
}

pub async fn handle_list_projects(config: &Config, json: bool) -> Result<()> {
    let client = CmlClient::new(&config.host, &config.api_key)?;
    let projects = client.list_projects().await?.projects;

    if json {
        return print_json(&projects);
    }

    println!("Found {} projects", projects.len());
    for project in &projects {
        println!(
            "  {} ({})",
            project.name.as_deref().unwrap_or("unnamed"),
            project.id.as_deref().unwrap_or("no id")
        );
    }

    Ok(())
}
