//! CLI argument parsing

mod accounts;
mod state_schema;
pub mod validate;

pub use accounts::AccountsCli;
pub use state_schema::StateSchemaCli;
pub use validate::{validate_api_key, validate_owner_id, validate_per_page, validate_timeout};
