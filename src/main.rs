use clap::Parser;
use cloudera_ml_cli::{CmlError, Config, cli::Cli, run_command};
use std::process;

#[tokio::main]
async fn main() {
    // Pick up CLOUDERA_ML_* values from a local .env before clap reads
    // the environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    cli.init_logging();

    let config = match Config::resolve(
        cli.host.clone(),
        cli.api_key.clone(),
        cli.project_id.clone(),
    ) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Please set the following environment variables:");
            eprintln!("  CLOUDERA_ML_HOST - Your Cloudera ML host URL");
            eprintln!("  CLOUDERA_ML_API_KEY - Your Cloudera ML API key");
            eprintln!("\nOr provide them as arguments:");
            eprintln!("  cml-ctl --host URL --api-key KEY <COMMAND>");
            process::exit(1);
        }
    };

    if let Err(e) = run_command(&config, cli.command, cli.json).await {
        eprintln!("Error: {e}");
        if let CmlError::MissingConfiguration(_) = e {
            eprintln!("Pass --project-id or set CLOUDERA_ML_PROJECT_ID");
        }
        process::exit(1);
    }
}
