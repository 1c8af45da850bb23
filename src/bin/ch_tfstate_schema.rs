//! Generate a CloudHealth account schema from a Terraform state in S3

use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use chtools::{run_state_schema_command, StateSchemaCli};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = StateSchemaCli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting ch-tfstate-schema v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: bucket={}, key={}, profile={}, region={:?}, no_cache={}",
        cli.s3_bucket, cli.s3_key, cli.profile, cli.region, cli.no_cache
    );

    match run_state_schema_command(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
