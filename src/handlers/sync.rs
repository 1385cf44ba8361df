//! Handler for the `upload-folder` command

use super::utils::print_json;
use crate::api::CmlClient;
use crate::config::Config;
use crate::error::Result;
use crate::sync::{IgnoreList, sync_folder};
use colored::Colorize;
use std::path::PathBuf;

pub async fn handle_upload_folder(
    config: &Config,
    folder_path: PathBuf,
    ignore_folders: Option<Vec<String>>,
    json: bool,
) -> Result<()> {
    let project_id = config.project_id()?;
    let client = CmlClient::new(&config.host, &config.api_key)?;

    let ignore = match ignore_folders {
        Some(names) if !names.is_empty() => IgnoreList::from_names(names),
        _ => IgnoreList::default(),
    };

    if !json {
        println!(
            "📤 Uploading {} to project {}",
            folder_path.display(),
            project_id
        );
    }

    let report = sync_folder(&client, project_id, &folder_path, &ignore).await?;

    if json {
        return print_json(&report);
    }

    if report.success {
        println!("{}", report.message.green());
    } else {
        println!("{}", report.message);
        println!(
            "{}",
            format!("{} file(s) failed:", report.failed_count()).red()
        );
        for failure in &report.failed {
            println!("  {} - {}", failure.file.red(), failure.error);
        }
    }

    Ok(())
}
