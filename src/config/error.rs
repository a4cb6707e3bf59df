//! Configuration errors.

use thiserror::Error;

/// Failure to read configuration at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read .env file: {0}")]
    DotEnv(String),

    #[error("could not load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// A configuration value that loaded but is out of range.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("port must be non-zero")]
    InvalidPort,

    #[error("invalid socket address: {0}")]
    InvalidSocketAddr(String),

    #[error("remote timeouts must be between 1 and 300 seconds")]
    InvalidTimeout,

    #[error("endpoint URL must start with http:// or https://: {0}")]
    InvalidEndpointUrl(String),

    #[error("remote endpoints must use https in production")]
    EndpointMustBeHttps,

    #[error("free analysis quota must not be negative")]
    InvalidFreeQuota,

    #[error("chat history limit must be at least 1")]
    InvalidChatHistoryLimit,

    #[error("storage path is required for the file backend")]
    MissingStoragePath,
}
