//! Terraform state to CloudHealth account schema conversion

mod commands;
pub mod schema;
mod state;

pub use commands::{build_schema, run_state_schema_command};
pub use schema::AccountSchema;
