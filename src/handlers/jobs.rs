//! Handlers for job lifecycle commands

use super::utils::{parse_json_object, print_json};
use crate::api::{CmlClient, CreateJobRequest, CreateJobRunRequest, DEFAULT_RUNTIME_IDENTIFIER};
use crate::config::Config;
use crate::error::Result;
use colored::Colorize;

pub async fn handle_list_jobs(config: &Config, json: bool) -> Result<()> {
    let project_id = config.project_id()?;
    let client = CmlClient::new(&config.host, &config.api_key)?;
    let jobs = client.list_jobs(project_id).await?.jobs;

    if json {
        return print_json(&jobs);
    }

    println!("Found {} jobs", jobs.len());
    for job in &jobs {
        println!(
            "  {} [{}]",
            job.display_name(),
            job.status.as_deref().unwrap_or("unknown")
        );
        if let Some(id) = &job.id {
            println!("    id: {id}");
        }
        if let Some(script) = &job.script {
            println!("    script: {script}");
        }
        println!("    created: {}", job.created_at_display());
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub async fn handle_create_job(
    config: &Config,
    name: String,
    script: String,
    kernel: String,
    cpu: u32,
    memory: u32,
    nvidia_gpu: u32,
    runtime: Option<String>,
    json: bool,
) -> Result<()> {
    let project_id = config.project_id()?;
    let client = CmlClient::new(&config.host, &config.api_key)?;

    let request = CreateJobRequest {
        name: name.clone(),
        script,
        kernel,
        cpu,
        memory,
        nvidia_gpu,
        runtime_identifier: Some(
            runtime.unwrap_or_else(|| DEFAULT_RUNTIME_IDENTIFIER.to_string()),
        ),
    };

    let job = client.create_job(project_id, &request).await?;

    if json {
        return print_json(&job);
    }

    println!(
        "{}",
        format!("✅ Job '{name}' created successfully").green()
    );
    if let Some(id) = &job.id {
        println!("  id: {id}");
    }

    Ok(())
}

pub async fn handle_delete_job(config: &Config, job_id: String) -> Result<()> {
    let project_id = config.project_id()?;
    let client = CmlClient::new(&config.host, &config.api_key)?;

    // Fetch the name first so the confirmation is readable; deletion
    // proceeds even when the lookup fails.
    let job_name = match client.get_job(project_id, &job_id).await {
        Ok(job) => job.display_name(),
        Err(_) => format!("Job ID {job_id}"),
    };

    client.delete_job(project_id, &job_id).await?;
    println!("{}", format!("✅ Successfully deleted '{job_name}'").green());

    Ok(())
}

pub async fn handle_delete_all_jobs(config: &Config, json: bool) -> Result<()> {
    let project_id = config.project_id()?;
    let client = CmlClient::new(&config.host, &config.api_key)?;

    let jobs = client.list_jobs(project_id).await?.jobs;
    if jobs.is_empty() {
        println!("No jobs found to delete");
        return Ok(());
    }

    let mut deleted = Vec::new();
    let mut failed = Vec::new();

    for job in &jobs {
        let Some(id) = job.id.as_deref() else {
            continue;
        };
        match client.delete_job(project_id, id).await {
            Ok(()) => deleted.push(job.display_name()),
            Err(e) => failed.push((job.display_name(), e.to_string())),
        }
    }

    if json {
        return print_json(&serde_json::json!({
            "success": failed.is_empty(),
            "deleted_count": deleted.len(),
            "deleted_jobs": deleted,
            "failed_count": failed.len(),
            "failed_jobs": failed
                .iter()
                .map(|(name, error)| serde_json::json!({"name": name, "error": error}))
                .collect::<Vec<_>>(),
        }));
    }

    if failed.is_empty() {
        println!(
            "{}",
            format!("✅ Successfully deleted all {} jobs", deleted.len()).green()
        );
    } else {
        println!(
            "Deleted {} jobs, but failed to delete {} jobs",
            deleted.len(),
            failed.len()
        );
        for (name, error) in &failed {
            println!("  {} - {}", name.red(), error);
        }
    }

    Ok(())
}

pub async fn handle_create_job_run(
    config: &Config,
    job_id: String,
    env_vars: Option<String>,
    override_config: Option<String>,
    json: bool,
) -> Result<()> {
    let project_id = config.project_id()?;
    let client = CmlClient::new(&config.host, &config.api_key)?;

    let request = CreateJobRunRequest {
        environment_variables: parse_json_object("--env-vars", env_vars)?,
        override_config: parse_json_object("--override-config", override_config)?,
    };

    let run = client.create_job_run(project_id, &job_id, &request).await?;

    if json {
        return print_json(&run);
    }

    println!(
        "{}",
        format!("✅ Run started for job {job_id}").green()
    );
    print_json(&run)
}

pub async fn handle_list_job_runs(config: &Config, job_id: String) -> Result<()> {
    let project_id = config.project_id()?;
    let client = CmlClient::new(&config.host, &config.api_key)?;

    let runs = client.list_job_runs(project_id, &job_id).await?;
    print_json(&runs)
}
