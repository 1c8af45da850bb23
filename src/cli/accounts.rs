//! Arguments for the AWS account lister

use clap::Parser;

use crate::config::{api, credentials, defaults};

/// List AWS accounts registered in CloudHealth
#[derive(Parser, Debug)]
#[command(name = "ch-aws-accounts")]
#[command(version)]
#[command(about = "List AWS accounts registered in CloudHealth", long_about = None)]
pub struct AccountsCli {
    /// Owner ID (AWS account ID) to look for
    #[arg(short = 'i', long)]
    pub owner_id: Option<String>,

    /// CloudHealth API key
    #[arg(short = 'k', long, env = credentials::API_KEY_ENV_VAR, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Number of results per page
    #[arg(short = 'p', long, default_value_t = api::DEFAULT_PER_PAGE, allow_negative_numbers = true)]
    pub per_page: i64,

    /// Print each request URL to stderr
    #[arg(short = 'v', long, default_value_t = false)]
    pub verbose: bool,

    /// CloudHealth API base URL
    #[arg(long, env = credentials::API_URL_ENV_VAR, default_value = api::BASE_URL)]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = defaults::TIMEOUT_SECS)]
    pub timeout: u64,

    /// Pretty-print the JSON output
    #[arg(long, default_value_t = false)]
    pub pretty: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = AccountsCli::parse_from(["ch-aws-accounts", "-k", "key"]);
        assert!(cli.owner_id.is_none());
        assert_eq!(cli.per_page, 30);
        assert!(!cli.verbose);
        assert!(!cli.pretty);
        assert_eq!(cli.timeout, defaults::TIMEOUT_SECS);
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
    }

    #[test]
    fn test_short_flags() {
        let cli = AccountsCli::parse_from([
            "ch-aws-accounts",
            "-i",
            "123456789012",
            "-k",
            "0f8fad5b-d9cb-469f-a165-70867728950e",
            "-p",
            "100",
            "-v",
        ]);
        assert_eq!(cli.owner_id.as_deref(), Some("123456789012"));
        assert_eq!(
            cli.api_key.as_deref(),
            Some("0f8fad5b-d9cb-469f-a165-70867728950e")
        );
        assert_eq!(cli.per_page, 100);
        assert!(cli.verbose);
    }

    #[test]
    fn test_negative_per_page_reaches_validation() {
        let cli = AccountsCli::parse_from(["ch-aws-accounts", "-k", "key", "-p", "-3"]);
        assert_eq!(cli.per_page, -3);
    }

    #[test]
    fn test_non_numeric_per_page_is_parse_error() {
        let result = AccountsCli::try_parse_from(["ch-aws-accounts", "-p", "many"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_long_flags() {
        let cli = AccountsCli::parse_from([
            "ch-aws-accounts",
            "--owner-id",
            "42",
            "--api-key",
            "key",
            "--per-page",
            "5",
            "--verbose",
            "--api-url",
            "http://localhost:8080",
            "--timeout",
            "5",
            "--pretty",
        ]);
        assert_eq!(cli.owner_id.as_deref(), Some("42"));
        assert_eq!(cli.api_url, "http://localhost:8080");
        assert_eq!(cli.timeout, 5);
        assert!(cli.pretty);
    }
}
