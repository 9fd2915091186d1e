use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Provider request failed: {0}")]
    ProviderRequest(String),

    #[error("Provider returned HTTP {status}: {body}")]
    ProviderHttp { status: u16, body: String },

    #[error("Invalid provider response: {0}")]
    InvalidProviderResponse(String),

    #[error("Failed to write output to {destination}: {reason}")]
    OutputError { destination: String, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
