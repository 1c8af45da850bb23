//! CloudHealth API client module

pub mod accounts;
mod client;

pub use accounts::run_accounts_command;
pub use client::ChClient;
