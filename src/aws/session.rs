//! AWS session resolution from a named profile

use std::time::Duration;

use aws_config::profile::ProfileFileCredentialsProvider;
use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_s3::error::DisplayErrorContext;
use log::{debug, warn};

use crate::config::defaults;
use crate::error::{ChError, Result};

use super::cache::{CachedCredentialsProvider, JsonFileCache};
use super::profile::default_session_parameters;

/// How to build an AWS session
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub profile: String,
    /// Overrides the region configured in the profile
    pub region: Option<String>,
    /// Timeout for each AWS operation
    pub timeout: Duration,
    /// Credential cache, `None` to always resolve fresh credentials
    pub cache: Option<JsonFileCache>,
}

/// Resolved AWS configuration shared by the S3 and STS clients
#[derive(Debug, Clone)]
pub struct AwsSession {
    config: SdkConfig,
}

impl AwsSession {
    /// Resolve credentials for the profile and build the SDK configuration.
    ///
    /// Credentials are resolved once, up front, so an unknown profile or a
    /// failed role assumption is reported before any S3 call. Retries are
    /// disabled.
    pub async fn load(options: &SessionOptions) -> Result<Self> {
        debug!("Resolving credentials for profile '{}'", options.profile);

        let profile_provider = ProfileFileCredentialsProvider::builder()
            .profile_name(&options.profile)
            .build();
        let (cache, cache_key) = match &options.cache {
            Some(cache) => match default_session_parameters(&options.profile).await {
                Ok(params) => (
                    Some(cache.clone()),
                    JsonFileCache::cache_key(
                        &options.profile,
                        options.region.as_deref(),
                        &params,
                    ),
                ),
                Err(e) => {
                    warn!("Credential cache disabled: {}", e);
                    (None, String::new())
                }
            },
            None => (None, String::new()),
        };
        let provider = CachedCredentialsProvider::new(profile_provider, cache, cache_key);

        let credentials = provider
            .provide_credentials()
            .await
            .map_err(|e| ChError::Credentials(DisplayErrorContext(&e).to_string()))?;

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .profile_name(&options.profile)
            .credentials_provider(credentials)
            .retry_config(RetryConfig::disabled())
            .timeout_config(
                TimeoutConfig::builder()
                    .operation_timeout(options.timeout)
                    .build(),
            );
        if let Some(region) = &options.region {
            loader = loader.region(Region::new(region.clone()));
        }

        let config = loader.load().await;
        let config = if config.region().is_none() {
            debug!("No region configured, using {}", defaults::REGION);
            config
                .to_builder()
                .region(Region::new(defaults::REGION))
                .build()
        } else {
            config
        };

        Ok(Self { config })
    }

    /// Wrap an existing SDK configuration
    #[cfg(test)]
    pub(crate) fn from_config(config: SdkConfig) -> Self {
        Self { config }
    }

    /// SDK configuration for building service clients
    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    /// Region the clients will talk to
    pub fn region(&self) -> Option<&str> {
        self.config.region().map(|r| r.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_exposes_region() {
        let config = SdkConfig::builder()
            .region(Region::new("eu-west-1"))
            .behavior_version(BehaviorVersion::latest())
            .build();
        let session = AwsSession::from_config(config);
        assert_eq!(session.region(), Some("eu-west-1"));
    }
}
