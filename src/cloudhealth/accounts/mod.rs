//! AWS accounts registered in CloudHealth

mod api;
mod commands;
mod models;
pub mod pagination;

pub use commands::run_accounts_command;
pub use models::{owner_id_matches, AwsAccountsPage};
pub use pagination::{advance, PageOutcome, PageStep, PaginationCursor};
