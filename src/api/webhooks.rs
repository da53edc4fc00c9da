use serde_json::Value;

use crate::client::Fluidcoins;
use crate::error::Result;
use crate::http::{ApiRequest, Transport, resource_path};
use crate::models::WebhookEndpoint;

const HOOKS: &str = "/v1/hooks";

impl<T: Transport> Fluidcoins<T> {
    /// Lists webhook endpoints. The API allows at most five.
    #[tracing::instrument(skip(self))]
    pub async fn list_webhooks(&self) -> Result<Value> {
        self.send(ApiRequest::get(HOOKS)).await
    }

    #[tracing::instrument(skip(self, endpoint))]
    pub async fn create_webhook(&self, endpoint: &str) -> Result<Value> {
        let body = WebhookEndpoint {
            endpoint: endpoint.to_string(),
        };
        self.send(ApiRequest::post(HOOKS).json(&body)?).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_webhook(&self, reference: &str) -> Result<Value> {
        self.send(ApiRequest::get(resource_path(HOOKS, reference, &[])?))
            .await
    }

    /// Points an existing webhook at a new `endpoint`.
    #[tracing::instrument(skip(self, endpoint))]
    pub async fn edit_webhook(&self, reference: &str, endpoint: &str) -> Result<Value> {
        let body = WebhookEndpoint {
            endpoint: endpoint.to_string(),
        };
        let path = resource_path(HOOKS, reference, &[])?;
        self.send(ApiRequest::patch(path).json(&body)?).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn enable_webhook(&self, reference: &str) -> Result<Value> {
        self.send(ApiRequest::post(resource_path(HOOKS, reference, &["enable"])?))
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn disable_webhook(&self, reference: &str) -> Result<Value> {
        self.send(ApiRequest::delete(resource_path(
            HOOKS,
            reference,
            &["enable"],
        )?))
        .await
    }

    /// Opens the delivery log portal for a webhook.
    #[tracing::instrument(skip(self))]
    pub async fn webhook_logs(&self, reference: &str) -> Result<Value> {
        self.send(ApiRequest::post(resource_path(HOOKS, reference, &["portal"])?))
            .await
    }
}
