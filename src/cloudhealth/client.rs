//! CloudHealth HTTP client for API interactions

use log::debug;
use reqwest::Client;
use std::time::Duration;

use crate::error::{ChError, Result};

/// CloudHealth API client
pub struct ChClient {
    client: Client,
    api_key: String,
    base_url: String,
    /// Echo every request URL to stderr
    verbose: bool,
}

impl ChClient {
    /// Create a new client authenticating with `api_key` against `base_url`
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10).min(timeout))
            .timeout(timeout)
            .build()
            .map_err(|e| ChError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            verbose: false,
        })
    }

    /// Enable echoing of request URLs
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Base URL for API requests, without trailing slash
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Send a GET request and return the body of a successful response
    ///
    /// The URL is echoed to stderr first when verbose mode is on.
    pub(crate) async fn get_body(&self, url: &str, error_context: &str) -> Result<Vec<u8>> {
        if self.verbose {
            eprintln!("{}", url);
        }
        debug!("Fetching {} from: {}", error_context, url);

        let response = self.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                format!("Failed to fetch {}", error_context)
            } else {
                format!("Failed to fetch {}: {}", error_context, body.trim())
            };
            return Err(ChError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
impl ChClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new(
            "0f8fad5b-d9cb-469f-a165-70867728950e".to_string(),
            base_url.to_string(),
            Duration::from_secs(5),
        )
        .expect("test client builds")
    }
}
