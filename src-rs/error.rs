use std::path::PathBuf;

/// Failure to obtain a usable configuration. Always fatal for a run.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Failure of a single provider/model call. The driver logs these and moves on.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),
    #[error("missing credential {var} for provider {provider}")]
    MissingCredential { provider: String, var: &'static str },
    #[error("network error: {0}")]
    Network(String),
    #[error("LLM API error ({status}): {body}")]
    Api { status: u16, body: String },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl ProviderError {
    /// Short, stable tag for the failure class.
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::UnsupportedProvider(_) => "unsupported_provider",
            ProviderError::MissingCredential { .. } => "missing_credential",
            ProviderError::Network(_) => "network",
            ProviderError::Api { .. } => "api",
            ProviderError::MalformedResponse(_) => "malformed_response",
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ProviderError::MalformedResponse(e.to_string())
        } else {
            ProviderError::Network(e.to_string())
        }
    }
}
