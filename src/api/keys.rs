use serde_json::Value;

use crate::client::Fluidcoins;
use crate::error::Result;
use crate::http::{ApiRequest, Transport};

impl<T: Transport> Fluidcoins<T> {
    #[tracing::instrument(skip(self))]
    pub async fn list_api_keys(&self) -> Result<Value> {
        self.send(ApiRequest::get("/v1/keys")).await
    }

    /// Issues fresh API keys. The key this client was built with stops working
    /// once the API rotates it.
    #[tracing::instrument(skip(self))]
    pub async fn rotate_api_keys(&self) -> Result<Value> {
        self.send(ApiRequest::get("/v1/keys/rotate")).await
    }
}
