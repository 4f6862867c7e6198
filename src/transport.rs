//! Delivery of the authorization code to the sign-in endpoint
//!
//! The notifier only needs one call, `post_code`, so the HTTP layer sits
//! behind [`CodeExchangeClient`]. The reqwest-backed implementation is the one
//! used outside of tests.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::errors::TransportError;
use crate::models::ServerResponse;
use crate::settings::ServerSettings;
use crate::utils::logging::LoggingHelper;

/// Content type declared for the raw code body
pub const CODE_CONTENT_TYPE: &str = "application/octet-stream; charset=utf-8";

/// Query parameter carrying the anti-forgery state token
pub const STATE_QUERY_PARAM: &str = "state";

/// Sends a one-time authorization code to the server
#[async_trait]
pub trait CodeExchangeClient: Send + Sync {
    /// POST `code` as the raw request body, tagged with `state_token`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The endpoint URL cannot be built
    /// - The request fails at the transport level
    /// - The server answers with a non-success status
    async fn post_code(
        &self,
        state_token: &str,
        code: &str,
    ) -> Result<ServerResponse, TransportError>;
}

/// [`CodeExchangeClient`] backed by a shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestCodeExchangeClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl ReqwestCodeExchangeClient {
    /// Build a client for the endpoint described by `settings`
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` and `connect_path` do not form a valid URL
    pub fn new(settings: &ServerSettings) -> Result<Self, TransportError> {
        Self::with_client(reqwest::Client::new(), settings)
    }

    /// Build a client reusing an existing `reqwest::Client`
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` and `connect_path` do not form a valid URL
    pub fn with_client(
        client: reqwest::Client,
        settings: &ServerSettings,
    ) -> Result<Self, TransportError> {
        let endpoint = Url::parse(&settings.base_url)?.join(&settings.connect_path)?;
        Ok(Self { client, endpoint })
    }

    /// Endpoint URL with the state token attached, e.g. `/gconnect?state=ABC`
    #[must_use]
    pub fn request_url(&self, state_token: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .clear()
            .append_pair(STATE_QUERY_PARAM, state_token);
        url
    }
}

#[async_trait]
impl CodeExchangeClient for ReqwestCodeExchangeClient {
    async fn post_code(
        &self,
        state_token: &str,
        code: &str,
    ) -> Result<ServerResponse, TransportError> {
        let url = self.request_url(state_token);
        LoggingHelper::log_code_exchange_start(url.path(), code.len());

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, CODE_CONTENT_TYPE)
            .body(code.as_bytes().to_vec())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        LoggingHelper::log_server_response(status.as_u16(), &body);
        Ok(ServerResponse::new(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server_settings(base_url: &str) -> ServerSettings {
        ServerSettings {
            base_url: base_url.to_string(),
            ..ServerSettings::default()
        }
    }

    #[test]
    fn test_request_url_carries_state() {
        let client = ReqwestCodeExchangeClient::new(&server_settings("http://localhost:8000"))
            .unwrap();
        let url = client.request_url("PX7QK2ZL");
        assert_eq!(url.as_str(), "http://localhost:8000/gconnect?state=PX7QK2ZL");
        assert!(url.path().starts_with("/gconnect"));
    }

    #[test]
    fn test_request_url_replaces_previous_state() {
        let client = ReqwestCodeExchangeClient::new(&server_settings("http://localhost:8000"))
            .unwrap();
        let first = client.request_url("one");
        let second = client.request_url("two");
        assert_eq!(first.query(), Some("state=one"));
        assert_eq!(second.query(), Some("state=two"));
    }

    #[test]
    fn test_custom_connect_path() {
        let settings = ServerSettings {
            base_url: "https://example.com/app/".to_string(),
            connect_path: "auth/connect".to_string(),
            state_token: String::new(),
        };
        let client = ReqwestCodeExchangeClient::new(&settings).unwrap();
        assert_eq!(
            client.request_url("s").as_str(),
            "https://example.com/app/auth/connect?state=s"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = ReqwestCodeExchangeClient::new(&server_settings("not a url"));
        assert!(matches!(result, Err(TransportError::InvalidUrl(_))));
    }
}
