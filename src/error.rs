use std::fmt;

/// Error type shared by both CloudHealth utilities
#[derive(Debug)]
pub enum ChError {
    /// A command-line value failed validation
    InvalidInput(String),
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Response body is not JSON or lacks the expected shape
    MalformedResponse(String),
    /// Valid JSON that is not a usable Terraform state
    MalformedState(String),
    /// AWS profile or credential resolution failed
    Credentials(String),
    /// S3 or STS client error
    Storage(String),
    /// Local configuration error
    Config(String),
}

impl fmt::Display for ChError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChError::InvalidInput(msg) => write!(f, "{}", msg),
            ChError::Http(e) => write!(f, "HTTP request failed: {}", e),
            ChError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            ChError::MalformedResponse(msg) => write!(f, "{}", msg),
            ChError::MalformedState(msg) => write!(f, "{}", msg),
            ChError::Credentials(msg) => write!(f, "{}", msg),
            ChError::Storage(msg) => write!(f, "{}", msg),
            ChError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ChError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ChError {
    fn from(err: reqwest::Error) -> Self {
        ChError::Http(err)
    }
}

impl From<serde_json::Error> for ChError {
    fn from(err: serde_json::Error) -> Self {
        ChError::MalformedResponse(err.to_string())
    }
}

impl From<std::io::Error> for ChError {
    fn from(err: std::io::Error) -> Self {
        ChError::Config(err.to_string())
    }
}

/// Result type alias for CloudHealth tooling
pub type Result<T> = std::result::Result<T, ChError>;
