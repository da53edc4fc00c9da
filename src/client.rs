//! The client handle every endpoint method hangs off.

use serde_json::Value;

use crate::config::Config;
use crate::error::Result;
use crate::http::{ApiRequest, HttpClient, Transport};

/// Fluidcoins API client.
///
/// Owns its transport and configuration; nothing is shared process-wide, so
/// several clients with different keys can coexist. Cloning is cheap when the
/// transport is [`HttpClient`].
#[derive(Clone)]
pub struct Fluidcoins<T: Transport = HttpClient> {
    transport: T,
}

impl Fluidcoins<HttpClient> {
    /// Client for the production API authenticated with `secret_key`.
    pub fn new(secret_key: impl Into<String>) -> Result<Self> {
        Self::with_config(&Config::new(secret_key)?)
    }

    pub fn with_config(config: &Config) -> Result<Self> {
        Ok(Self::with_transport(HttpClient::new(config)?))
    }

    /// Client configured from `FLUIDCOINS_SECRET_KEY` / `FLUIDCOINS_API_URL`.
    pub fn from_env() -> Result<Self> {
        Self::with_config(&Config::from_env()?)
    }
}

impl<T: Transport> Fluidcoins<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Issues exactly one request and hands back the response body as-is.
    pub(crate) async fn send(&self, request: ApiRequest) -> Result<Value> {
        self.transport.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::http::MockTransport;
    use serde_json::json;

    #[test]
    fn test_new_builds_http_transport_for_production() {
        let client = Fluidcoins::new("sk_test_123").unwrap();
        assert_eq!(client.transport().api_url(), "https://api.fluidcoins.com");
    }

    #[test]
    fn test_new_rejects_empty_key() {
        let err = Fluidcoins::new("").err().unwrap();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_with_config_uses_custom_api_url() {
        let config = Config::new("sk_test_123")
            .unwrap()
            .with_api_url("http://localhost:1234");
        let client = Fluidcoins::with_config(&config).unwrap();
        assert_eq!(client.transport().api_url(), "http://localhost:1234");
    }

    #[tokio::test]
    async fn test_send_delegates_to_transport_once() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| req.to_string() == "GET /v1/merchant")
            .times(1)
            .returning(|_| Ok(json!({"status": true})));

        let client = Fluidcoins::with_transport(transport);
        let body = client.send(ApiRequest::get("/v1/merchant")).await.unwrap();
        assert_eq!(body, json!({"status": true}));
    }
}
