//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid bind address")]
    InvalidBindAddress,

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Pool min_connections exceeds max_connections")]
    InvalidPoolSize,

    #[error("Pool size exceeds maximum allowed (100)")]
    PoolSizeTooLarge,

    #[error("Invalid booking store URL")]
    InvalidStoreUrl,

    #[error("Booking store URL must use HTTPS in production")]
    StoreUrlMustBeHttps,

    #[error("UTC offset must be between -720 and 840 minutes")]
    InvalidUtcOffset,

    #[error("Invalid store timeout")]
    InvalidStoreTimeout,

    #[error("Invalid webhook URL")]
    InvalidWebhookUrl,

    #[error("Invalid notification timeout")]
    InvalidNotificationTimeout,

    #[error("Invalid team email address")]
    InvalidTeamEmail,

    #[error("Invalid from email address")]
    InvalidFromEmail,
}
