//! STS helpers for caller identity

use aws_sdk_sts::error::DisplayErrorContext;
use aws_sdk_sts::Client as StsClient;

use crate::error::{ChError, Result};

use super::AwsSession;

/// Reports which principal the session acts as, via STS GetCallerIdentity
pub struct StsCallerIdentity {
    client: StsClient,
}

impl StsCallerIdentity {
    pub fn new(session: &AwsSession) -> Self {
        Self {
            client: StsClient::new(session.config()),
        }
    }

    /// ARN of the calling principal
    ///
    /// A rejected call means the session's credentials are unusable, so
    /// failures are credential errors.
    pub async fn caller_arn(&self) -> Result<String> {
        let out = self
            .client
            .get_caller_identity()
            .send()
            .await
            .map_err(|e| ChError::Credentials(DisplayErrorContext(&e).to_string()))?;

        out.arn().map(str::to_string).ok_or_else(|| {
            ChError::Credentials("STS GetCallerIdentity returned no Arn".to_string())
        })
    }
}
