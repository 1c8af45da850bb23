//! chtools - AWS account onboarding helpers for CloudHealth
//!
//! Two independent command-line utilities:
//!
//! - `ch-aws-accounts` lists the AWS accounts registered in CloudHealth,
//!   optionally stopping at the first page that holds a given owner ID.
//! - `ch-tfstate-schema` reads a Terraform state from S3 and turns its root
//!   module outputs into a CloudHealth account definition.
//!
//! # Example
//!
//! ```bash
//! # List every registered account
//! CH_API_KEY=<guid> ch-aws-accounts
//!
//! # Look up the accounts of one owner
//! ch-aws-accounts -k <guid> -i 123456789012
//!
//! # Build an account schema from a remote state
//! ch-tfstate-schema -b tf-states -k accounts/acme.tfstate -p ops
//! ```

pub mod aws;
pub mod cli;
pub mod cloudhealth;
pub mod config;
pub mod error;
pub mod output;
pub mod terraform;

pub use cli::{AccountsCli, StateSchemaCli};
pub use cloudhealth::{run_accounts_command, ChClient};
pub use error::{ChError, Result};
pub use output::JsonFormatter;
pub use terraform::{build_schema, run_state_schema_command, AccountSchema};
