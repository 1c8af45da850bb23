//! List AWS accounts registered in CloudHealth

use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use chtools::{run_accounts_command, AccountsCli};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = AccountsCli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting ch-aws-accounts v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: owner_id={:?}, per_page={}, verbose={}, api_url={}",
        cli.owner_id, cli.per_page, cli.verbose, cli.api_url
    );

    match run_accounts_command(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
