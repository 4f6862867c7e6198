//! Error types for the sign-in notifier
//!
//! Transport failures are kept separate from the notifier's own errors because
//! the notifier turns them into a [`crate::models::LoginOutcome`] instead of
//! propagating them.

use thiserror::Error;

/// Failures while sending the authorization code to the server
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be sent or its body could not be read
    #[error("Request to sign-in endpoint failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Sign-in endpoint returned HTTP {0}")]
    Status(u16),

    /// The configured server URL or connect path does not form a valid URL
    #[error("Invalid sign-in endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Errors surfaced to callers of the library
#[derive(Debug, Error)]
pub enum NotifierError {
    /// The widget payload is not a JSON object of the expected shape
    #[error("Invalid authorization result: {0}")]
    InvalidAuthorizationResult(#[from] serde_json::Error),

    /// Settings could not be read, parsed or applied
    #[error("Settings error: {0}")]
    Settings(String),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl From<std::io::Error> for NotifierError {
    fn from(err: std::io::Error) -> Self {
        NotifierError::Settings(err.to_string())
    }
}

impl From<basic_toml::Error> for NotifierError {
    fn from(err: basic_toml::Error) -> Self {
        NotifierError::Settings(err.to_string())
    }
}
