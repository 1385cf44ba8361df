//! Handler for the `get-runtimes` command

use super::utils::print_json;
use crate::api::CmlClient;
use crate::config::Config;
use crate::error::Result;

pub async fn handle_get_runtimes(config: &Config, json: bool) -> Result<()> {
    let client = CmlClient::new(&config.host, &config.api_key)?;
    let runtimes = client.list_runtimes().await?.runtimes;

    if json {
        return print_json(&runtimes);
    }

    println!("Found {} runtimes:", runtimes.len());
    for (idx, runtime) in runtimes.iter().enumerate() {
        println!(
            "\n{}. Runtime: {}",
            idx + 1,
            runtime.identifier().unwrap_or("unknown")
        );
        println!("   Edition: {}", runtime.edition.as_deref().unwrap_or("Unknown"));
        println!("   Type: {}", runtime.image_type.as_deref().unwrap_or("Unknown"));
        println!(
            "   Description: {}",
            runtime
                .short_description
                .as_deref()
                .unwrap_or("No description")
        );
    }

    if let Some(example) = runtimes.first().and_then(|r| r.identifier()) {
        println!("\nExample runtime identifier to use with create-job:");
        println!("  --runtime \"{example}\"");
    }

    Ok(())
}
