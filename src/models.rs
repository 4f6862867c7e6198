use serde::{de, Deserialize, Deserializer, Serialize};

use crate::errors::NotifierError;

/// Result handed over by the sign-in widget when the interactive flow finishes
///
/// Only `code` and `error` are read; any other field the widget sends is
/// ignored. Empty strings and `null` count as absent, mirroring the widget's
/// truthiness contract.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorizationResult {
    #[serde(default, deserialize_with = "non_empty_string")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub error: Option<String>,
}

impl AuthorizationResult {
    /// Parse the widget payload
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not a JSON object or if `code` or
    /// `error` hold something other than a string or `null`.
    pub fn from_json(payload: &str) -> Result<Self, NotifierError> {
        let value: serde_json::Value = serde_json::from_str(payload)?;
        if !value.is_object() {
            let err = <serde_json::Error as de::Error>::custom(
                "authorization result must be a JSON object",
            );
            return Err(err.into());
        }
        Ok(serde_json::from_value(value)?)
    }

    #[must_use]
    pub fn with_code(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            error: None,
        }
    }

    #[must_use]
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// The one-time authorization code, if the widget produced a usable one
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref().filter(|code| !code.is_empty())
    }

    /// The widget's error indicator, if any
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref().filter(|error| !error.is_empty())
    }
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// Body returned by the sign-in endpoint
///
/// Never parsed. The only property that matters is whether it is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerResponse(String);

impl ServerResponse {
    #[must_use]
    pub fn new(body: impl Into<String>) -> Self {
        Self(body.into())
    }

    #[must_use]
    pub fn is_truthy(&self) -> bool {
        !self.0.is_empty()
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_body(self) -> String {
        self.0
    }
}

/// What a single notifier invocation did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// No authorization code; nothing happened
    MissingCode,
    /// Server answered with a non-empty body; redirect scheduled
    Success { body: String },
    /// Empty server body while the widget reported an error
    ServerRejection { error: String },
    /// Empty server body and no widget error
    UnknownFailure,
    /// The request never produced a response the page could act on
    TransportFailure { reason: String },
}

impl LoginOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Success { .. })
    }

    /// Short label used in log lines
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            LoginOutcome::MissingCode => "missing_code",
            LoginOutcome::Success { .. } => "success",
            LoginOutcome::ServerRejection { .. } => "server_rejection",
            LoginOutcome::UnknownFailure => "unknown_failure",
            LoginOutcome::TransportFailure { .. } => "transport_failure",
        }
    }
}
