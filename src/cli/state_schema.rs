//! Arguments for the Terraform state schema builder

use clap::Parser;

use crate::config::defaults;

/// Generate a CloudHealth account schema from a Terraform state stored in S3
#[derive(Parser, Debug)]
#[command(name = "ch-tfstate-schema")]
#[command(version)]
#[command(
    about = "Generate a CloudHealth API schema from a Terraform state stored in S3",
    long_about = None
)]
pub struct StateSchemaCli {
    /// S3 bucket holding the Terraform state
    #[arg(short = 'b', long)]
    pub s3_bucket: String,

    /// S3 key of the Terraform state
    #[arg(short = 'k', long)]
    pub s3_key: String,

    /// AWS SDK profile name
    #[arg(short = 'p', long, default_value = defaults::PROFILE)]
    pub profile: String,

    /// Print diagnostics to stderr
    #[arg(short = 'v', long, default_value_t = false)]
    pub verbose: bool,

    /// AWS region (overrides the profile region)
    #[arg(long)]
    pub region: Option<String>,

    /// AWS operation timeout in seconds
    #[arg(long, default_value_t = defaults::TIMEOUT_SECS)]
    pub timeout: u64,

    /// Do not read or write the assumed-role credential cache
    #[arg(long, default_value_t = false)]
    pub no_cache: bool,

    /// Pretty-print the JSON output
    #[arg(long, default_value_t = false)]
    pub pretty: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,
}
