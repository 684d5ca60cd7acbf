//! Domain error types for when-next
//!
//! Provides structured error types for different domains:
//! - `ConfigError` for flags and config files
//! - `SelectionError` for turning the picker selection back into dates
//! - `WebhookError` for posting the poll
//! - `WhenNextError` as the top-level error type

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for when-next
#[derive(Debug, Error)]
pub enum WhenNextError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),

    #[error("Webhook error: {0}")]
    Webhook(#[from] WebhookError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Errors related to flags and config files
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Cli(#[from] clap::Error),

    #[error("webhook required")]
    MissingWebhook,

    #[error("Invalid webhook url '{url}': {reason}")]
    InvalidWebhook { url: String, reason: String },

    #[error("Duration must be between 1 and {max} hours, got {got}")]
    DurationOutOfRange { got: u32, max: u32 },

    #[error("Invalid date layout '{0}'")]
    InvalidLayout(String),

    #[error("Failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    InvalidFile {
        path: PathBuf,
        #[source]
        source: clap::Error,
    },

    #[error("Config file {0} cannot contain a config path")]
    NestedConfig(PathBuf),
}

/// Errors raised while extracting the selected dates
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("Malformed date identity '{0}'")]
    MalformedIdentity(String),
}

/// Errors related to the Discord webhook
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("Failed to post webhook: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to send webhook ({status}): {body}")]
    Rejected {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Result type alias for WhenNextError
pub type Result<T> = std::result::Result<T, WhenNextError>;

/// Result type alias for ConfigError
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for WebhookError
pub type WebhookResult<T> = std::result::Result<T, WebhookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_convert_to_top_level() {
        let err: WhenNextError = ConfigError::MissingWebhook.into();
        assert_eq!(err.to_string(), "Config error: webhook required");

        let err: WhenNextError = SelectionError::MalformedIdentity("2026-02-30".to_string()).into();
        assert!(matches!(err, WhenNextError::Selection(_)));

        let err: WhenNextError = WebhookError::Rejected {
            status: reqwest::StatusCode::BAD_REQUEST,
            body: "bad request".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Webhook error: Failed to send webhook (400 Bad Request): bad request"
        );
    }
}
