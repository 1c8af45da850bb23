/// Configuration constants for the CloudHealth API
pub mod api {
    /// CloudHealth API base URL
    pub const BASE_URL: &str = "https://chapi.cloudhealthtech.com";

    /// AWS accounts endpoint
    pub const AWS_ACCOUNTS: &str = "v1/aws_accounts";

    /// Default page size for AWS account listing
    pub const DEFAULT_PER_PAGE: i64 = 30;

    /// Largest valid AWS account identifier (12 digits)
    pub const MAX_ACCOUNT_ID: u64 = 999_999_999_999;

    /// Where API key requirements are documented
    pub const API_KEY_DOCS_URL: &str =
        "https://apidocs.cloudhealthtech.com/#how-cloudhealth-validates-api-requests";
}

/// Configuration constants for credentials
pub mod credentials {
    /// Environment variable holding the CloudHealth API key
    pub const API_KEY_ENV_VAR: &str = "CH_API_KEY";

    /// Environment variable overriding the CloudHealth API base URL
    pub const API_URL_ENV_VAR: &str = "CH_API_URL";
}

/// Assumed-role credential cache settings
pub mod cache {
    /// Cache directory relative to HOME
    pub const DIR_PATH: &str = ".aws/boto/cache";

    /// Cached credentials are treated as expired this many seconds early
    pub const EXPIRY_MARGIN_SECS: i64 = 300;

    /// Provider name reported for credentials loaded from the cache
    pub const PROVIDER_NAME: &str = "JsonFileCache";
}

/// Default values for CLI
pub mod defaults {
    /// Default AWS profile
    pub const PROFILE: &str = "default";

    /// Region used when neither the flag nor the profile provides one
    pub const REGION: &str = "us-east-1";

    /// Default request timeout in seconds
    pub const TIMEOUT_SECS: u64 = 30;

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
