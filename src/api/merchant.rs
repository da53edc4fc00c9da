use serde_json::Value;

use crate::client::Fluidcoins;
use crate::error::Result;
use crate::http::{ApiRequest, Transport};

impl<T: Transport> Fluidcoins<T> {
    /// Fetches the merchant the secret key belongs to.
    #[tracing::instrument(skip(self))]
    pub async fn get_current_merchant(&self) -> Result<Value> {
        self.send(ApiRequest::get("/v1/merchant")).await
    }
}
