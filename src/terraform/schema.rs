//! CloudHealth account schema built from Terraform outputs

use serde::Serialize;
use serde_json::Value;

use crate::error::{ChError, Result};

use super::state::Outputs;

/// Authentication protocol CloudHealth uses for onboarded accounts
const ASSUME_ROLE_PROTOCOL: &str = "assume_role";

/// Terraform output names read by the projection
mod output_keys {
    pub const ACCOUNT_ALIAS: &str = "account_alias";
    pub const ACCOUNT_ID: &str = "account_id";
    pub const ROLE_NAME: &str = "cloudhealth_role_name";
    pub const ROLE_EXTERNAL_ID: &str = "cloudhealth_role_external_id";
    pub const BILLING_BUCKET: &str = "billing_bucket";
    pub const CLOUDTRAIL_BUCKET: &str = "cloudtrail_bucket";
    pub const CONFIG_BUCKET: &str = "config_bucket";
}

/// Account definition accepted by the CloudHealth AWS account API
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AccountSchema {
    pub name: String,
    pub authentication: Authentication,
    pub billing: Billing,
    pub cloudtrail: BucketFeed,
    pub aws_config: BucketFeed,
    pub cloudwatch: Cloudwatch,
    pub tags: Vec<Value>,
}

/// Assume-role credentials section; keys are left blank for later filling
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Authentication {
    pub protocol: String,
    pub assume_role_arn: String,
    pub assume_role_external_id: Value,
    pub access_key: String,
    pub secret_key: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Billing {
    pub bucket: String,
}

/// A log feed read from an S3 bucket (CloudTrail, AWS Config)
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BucketFeed {
    pub enabled: bool,
    pub bucket: String,
    pub prefix: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Cloudwatch {
    pub enabled: bool,
}

impl BucketFeed {
    /// Feed is enabled whenever the output exists, even with a null value
    fn from_output(outputs: &Outputs, key: &str) -> Self {
        Self {
            enabled: outputs.contains_key(key),
            bucket: optional_string(outputs, key),
            prefix: String::new(),
        }
    }
}

impl AccountSchema {
    /// Project root module outputs into an account schema.
    ///
    /// `account_alias`, `account_id` and `cloudhealth_role_name` must carry
    /// non-null scalar values; anything else is a malformed state.
    pub fn from_outputs(outputs: &Outputs) -> Result<Self> {
        let name = required_scalar(outputs, output_keys::ACCOUNT_ALIAS)?;
        let account_id = required_scalar(outputs, output_keys::ACCOUNT_ID)?;
        let role_name = required_scalar(outputs, output_keys::ROLE_NAME)?;

        Ok(Self {
            name,
            authentication: Authentication {
                protocol: ASSUME_ROLE_PROTOCOL.to_string(),
                assume_role_arn: assume_role_arn(&account_id, &role_name),
                assume_role_external_id: output_value(outputs, output_keys::ROLE_EXTERNAL_ID)
                    .cloned()
                    .unwrap_or(Value::Null),
                access_key: String::new(),
                secret_key: String::new(),
            },
            billing: Billing {
                bucket: optional_string(outputs, output_keys::BILLING_BUCKET),
            },
            cloudtrail: BucketFeed::from_output(outputs, output_keys::CLOUDTRAIL_BUCKET),
            aws_config: BucketFeed::from_output(outputs, output_keys::CONFIG_BUCKET),
            cloudwatch: Cloudwatch { enabled: true },
            tags: Vec::new(),
        })
    }
}

/// IAM role ARN for a role name in an account
fn assume_role_arn(account_id: &str, role_name: &str) -> String {
    format!("arn:aws:iam::{}:role/{}", account_id, role_name)
}

/// The `value` of an output, if the output exists and has one
fn output_value<'a>(outputs: &'a Outputs, key: &str) -> Option<&'a Value> {
    outputs.get(key).and_then(|output| output.get("value"))
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn required_scalar(outputs: &Outputs, key: &str) -> Result<String> {
    output_value(outputs, key)
        .and_then(scalar_to_string)
        .ok_or_else(|| {
            ChError::MalformedState(format!(
                "Malformed Terraform state: output '{}' is missing or not a scalar value.",
                key
            ))
        })
}

fn optional_string(outputs: &Outputs, key: &str) -> String {
    output_value(outputs, key)
        .and_then(scalar_to_string)
        .unwrap_or_default()
}
