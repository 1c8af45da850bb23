//! AWS account listing data models

use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ChError, Result};

/// Message reported for any response body that is not an account page
pub const MALFORMED_RESPONSE: &str = "Malformed CloudHealth API response body.";

/// One page of the `aws_accounts` endpoint.
///
/// Records are kept as raw JSON and passed through untouched.
#[derive(Deserialize, Debug)]
pub struct AwsAccountsPage {
    pub aws_accounts: Vec<Value>,
}

impl AwsAccountsPage {
    /// Parse a response body, rejecting anything without an `aws_accounts` array
    pub fn from_body(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| {
            debug!("Could not parse AWS accounts page: {}", e);
            ChError::MalformedResponse(MALFORMED_RESPONSE.to_string())
        })
    }
}

/// Check whether an account record belongs to the given AWS owner ID.
///
/// The API may send `owner_id` as a number or a string; both are compared
/// numerically so zero-padded IDs still match.
pub fn owner_id_matches(record: &Value, owner_id: u64) -> bool {
    match record.get("owner_id") {
        Some(Value::Number(n)) => n.as_u64() == Some(owner_id),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok() == Some(owner_id),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_deserialization() {
        let body = json!({
            "aws_accounts": [
                {"id": 1, "name": "prod", "owner_id": "123456789012"},
                {"id": 2, "name": "dev", "owner_id": "210987654321"}
            ],
            "total_pages": 1
        })
        .to_string();

        let page = AwsAccountsPage::from_body(body.as_bytes()).unwrap();
        assert_eq!(page.aws_accounts.len(), 2);
        assert_eq!(page.aws_accounts[0]["name"], "prod");
    }

    #[test]
    fn test_empty_page() {
        let page = AwsAccountsPage::from_body(br#"{"aws_accounts": []}"#).unwrap();
        assert!(page.aws_accounts.is_empty());
    }

    #[test]
    fn test_malformed_bodies() {
        let bodies: [&[u8]; 6] = [
            b"<html>Bad Gateway</html>",
            b"",
            br#"{"accounts": []}"#,
            br#"{"aws_accounts": null}"#,
            br#"{"aws_accounts": {"id": 1}}"#,
            br#"[{"owner_id": "123456789012"}]"#,
        ];
        for body in bodies {
            match AwsAccountsPage::from_body(body) {
                Err(ChError::MalformedResponse(msg)) => assert_eq!(msg, MALFORMED_RESPONSE),
                other => panic!("Expected MalformedResponse, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_owner_id_matches_string_and_number() {
        assert!(owner_id_matches(&json!({"owner_id": "123456789012"}), 123456789012));
        assert!(owner_id_matches(&json!({"owner_id": 123456789012u64}), 123456789012));
        assert!(owner_id_matches(&json!({"owner_id": "000000000042"}), 42));
    }

    #[test]
    fn test_owner_id_mismatch() {
        assert!(!owner_id_matches(&json!({"owner_id": "123456789012"}), 1));
        assert!(!owner_id_matches(&json!({"owner_id": null}), 1));
        assert!(!owner_id_matches(&json!({"owner_id": "not-an-id"}), 1));
        assert!(!owner_id_matches(&json!({"name": "no owner"}), 1));
        assert!(!owner_id_matches(&json!("123456789012"), 123456789012));
    }
}
