use serde_json::Value;

use crate::client::Fluidcoins;
use crate::error::Result;
use crate::http::{ApiRequest, Transport, resource_path};

const BALANCES: &str = "/v1/balances";

impl<T: Transport> Fluidcoins<T> {
    /// Fetches every balance held by the merchant.
    #[tracing::instrument(skip(self))]
    pub async fn list_balances(&self) -> Result<Value> {
        self.send(ApiRequest::get(BALANCES)).await
    }

    /// Fetches a single balance by currency code, e.g. `USDT` or `NGN`.
    #[tracing::instrument(skip(self))]
    pub async fn get_balance(&self, code: &str) -> Result<Value> {
        self.send(ApiRequest::get(resource_path(BALANCES, code, &[])?))
            .await
    }
}
