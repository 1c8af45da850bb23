//! Validation of command-line values that clap cannot express

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;

use crate::config::{api, credentials};
use crate::error::{ChError, Result};

static GUID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("GUID pattern is a valid regex")
});

/// Check that an API key is present and shaped like a GUID
pub fn validate_api_key(api_key: Option<&str>) -> Result<&str> {
    let key = api_key.ok_or_else(|| {
        ChError::InvalidInput(format!(
            "API key not set. Set environment variable {} or invoke program with option -k/--api-key",
            credentials::API_KEY_ENV_VAR
        ))
    })?;

    if !GUID.is_match(key) {
        return Err(ChError::InvalidInput(format!(
            "API key is not valid. It must be a globally unique identifier (GUID).\n\
             See {} for more details.",
            api::API_KEY_DOCS_URL
        )));
    }

    Ok(key)
}

/// Parse an owner ID and check it is a possible AWS account identifier
pub fn validate_owner_id(raw: &str) -> Result<u64> {
    let invalid = || ChError::InvalidInput(format!("'{}' is an invalid AWS account identifier.", raw));

    // i128 so that negative and oversized values report a range error, not a parse error
    let id: i128 = raw.trim().parse().map_err(|_| invalid())?;
    if id < 1 || id > i128::from(api::MAX_ACCOUNT_ID) {
        return Err(invalid());
    }

    u64::try_from(id).map_err(|_| invalid())
}

/// Check that a page size is a positive integer
pub fn validate_per_page(per_page: i64) -> Result<u32> {
    if per_page <= 0 {
        return Err(ChError::InvalidInput(
            "-p/--per-page argument must be a positive number.".to_string(),
        ));
    }

    u32::try_from(per_page).map_err(|_| {
        ChError::InvalidInput(format!("-p/--per-page value {} is too large.", per_page))
    })
}

/// Check that a timeout is at least one second
pub fn validate_timeout(seconds: u64) -> Result<Duration> {
    if seconds == 0 {
        return Err(ChError::InvalidInput(
            "--timeout must be a positive number of seconds.".to_string(),
        ));
    }
    Ok(Duration::from_secs(seconds))
}
