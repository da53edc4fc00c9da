//! reqwest-backed transport carrying the bearer token and base URL.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{
    Client,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde_json::Value;

use super::request::ApiRequest;
use crate::config::Config;
use crate::error::{Error, Result, classify};

const USER_AGENT: &str = concat!("fluidcoins-rust/", env!("CARGO_PKG_VERSION"));

/// Sends one [`ApiRequest`] and yields the parsed response body.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<Value>;
}

/// HTTP transport with the authorization and content-type headers preset.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    api_url: String,
}

impl HttpClient {
    /// Builds the transport for `config`. No network traffic happens here.
    pub fn new(config: &Config) -> Result<Self> {
        let client = build_http_client(config.secret_key())?;
        Ok(Self::from_client(client, config.api_url()))
    }

    /// Wraps an already configured reqwest Client.
    pub fn from_client(client: Client, api_url: &str) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns a reference to the underlying reqwest Client.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

/// Build a reqwest Client that sends `Authorization: Bearer <key>` on every request.
pub fn build_http_client(secret_key: &str) -> Result<Client> {
    let mut headers = HeaderMap::new();

    let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", secret_key))
        .map_err(|_| Error::Config("secret key is not a valid header value".to_string()))?;
    auth_value.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth_value);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .build()
        .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))
}

#[async_trait]
impl Transport for HttpClient {
    #[tracing::instrument(skip(self, request), fields(request = %request))]
    async fn send(&self, request: ApiRequest) -> Result<Value> {
        let url = format!("{}{}", self.api_url, request.path_and_query());

        debug!("{} {}...", request.method, url);

        let mut builder = self.client.request(request.method.clone(), &url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            debug!("{} -> {}", request, status);
            if text.trim().is_empty() {
                return Ok(Value::Null);
            }
            return serde_json::from_str(&text).map_err(Error::Decode);
        }

        let err = classify(status, &text);
        warn!("{} -> {}: {}", request, status, err);
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::http::Query;
    use mockito::Matcher;
    use serde_json::json;

    fn client_for(url: &str) -> HttpClient {
        let config = Config::new("sk_test_123").unwrap().with_api_url(url);
        HttpClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_send_sets_auth_and_content_type_headers() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/v1/address/ADDR_abc")
            .match_header("authorization", "Bearer sk_test_123")
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status": true, "address": {"reference": "ADDR_abc"}}"#)
            .create_async()
            .await;

        let client = client_for(&server.url());
        let body = client
            .send(ApiRequest::get("/v1/address/ADDR_abc"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(body["address"]["reference"], "ADDR_abc");
    }

    #[tokio::test]
    async fn test_send_returns_body_untouched() {
        let mut server = mockito::Server::new_async().await;
        let raw = r#"{"status": true, "message": "ok", "data": {"nested": [1, 2, 3], "Odd_Key": null}}"#;

        let mock = server
            .mock("GET", "/v1/merchant")
            .with_status(200)
            .with_body(raw)
            .create_async()
            .await;

        let client = client_for(&server.url());
        let body = client.send(ApiRequest::get("/v1/merchant")).await.unwrap();

        mock.assert_async().await;
        assert_eq!(body, serde_json::from_str::<Value>(raw).unwrap());
    }

    #[tokio::test]
    async fn test_send_query_and_json_body() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/v1/address?page=1&per_page=20")
            .match_body(Matcher::Json(json!({"code": "ETH", "network": "ERC20"})))
            .with_status(200)
            .with_body(r#"{"status": true}"#)
            .create_async()
            .await;

        let client = client_for(&server.url());
        let request = ApiRequest::post("/v1/address")
            .query(Query::new().paginate(None, None, 20))
            .json(&json!({"code": "ETH", "network": "ERC20"}))
            .unwrap();
        client.send(request).await.unwrap();

        mock.assert_async().await;
    }

    #[test_log::test(tokio::test)]
    async fn test_send_bad_request() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/v1/address")
            .with_status(400)
            .with_body(
                r#"{"message": "cannot generate USD Tether address in test mode.", "status": false}"#,
            )
            .create_async()
            .await;

        let client = client_for(&server.url());
        let err = client
            .send(ApiRequest::post("/v1/address"))
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert_eq!(
            err.message(),
            Some("cannot generate USD Tether address in test mode.")
        );
        assert_eq!(err.status(), Some(false));
    }

    #[tokio::test]
    async fn test_send_classifies_status_codes() {
        let cases = [
            (401, ErrorKind::Unauthorized),
            (404, ErrorKind::NotFound),
            (500, ErrorKind::Server),
            (503, ErrorKind::Server),
        ];

        for (code, kind) in cases {
            let mut server = mockito::Server::new_async().await;
            let mock = server
                .mock("GET", "/v1/balances")
                .with_status(code)
                .with_body(format!(r#"{{"message": "failed with {}", "status": false}}"#, code))
                .create_async()
                .await;

            let client = client_for(&server.url());
            let err = client
                .send(ApiRequest::get("/v1/balances"))
                .await
                .unwrap_err();

            mock.assert_async().await;
            assert_eq!(err.kind(), kind, "status {}", code);
            assert_eq!(err.message(), Some(format!("failed with {}", code).as_str()));
        }
    }

    #[tokio::test]
    async fn test_send_empty_success_body_is_null() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("DELETE", "/v1/payouts/PAYOUT_1")
            .with_status(204)
            .create_async()
            .await;

        let client = client_for(&server.url());
        let body = client
            .send(ApiRequest::delete("/v1/payouts/PAYOUT_1"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(body, Value::Null);
    }

    #[tokio::test]
    async fn test_send_invalid_json_is_decode_error() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/v1/currencies")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client = client_for(&server.url());
        let err = client
            .send(ApiRequest::get("/v1/currencies"))
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[tokio::test]
    async fn test_send_without_response_is_transport_error() {
        // Nothing listens on port 1.
        let client = client_for("http://127.0.0.1:1");
        let err = client
            .send(ApiRequest::get("/v1/merchant"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(err.api_error().is_none());
    }

    #[test]
    fn test_build_http_client_rejects_unprintable_key() {
        let err = build_http_client("sk_test\n123").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_from_client_trims_trailing_slash() {
        let client = HttpClient::from_client(Client::new(), "https://api.fluidcoins.com/");
        assert_eq!(client.api_url(), "https://api.fluidcoins.com");
    }
}
