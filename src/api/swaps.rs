use serde_json::Value;

use super::SHORT_PER_PAGE;
use crate::client::Fluidcoins;
use crate::error::Result;
use crate::http::{ApiRequest, Query, Transport};
use crate::models::NewSwap;

const SWAPS: &str = "/v1/swaps";

impl<T: Transport> Fluidcoins<T> {
    /// Swap history, 10 per page by default.
    #[tracing::instrument(skip(self))]
    pub async fn list_swaps(&self, page: Option<u32>, per_page: Option<u32>) -> Result<Value> {
        let query = Query::new().paginate(page, per_page, SHORT_PER_PAGE);
        self.send(ApiRequest::get(SWAPS).query(query)).await
    }

    /// Converts `swap.amount` (smallest unit of `swap.from`) into `swap.to`.
    #[tracing::instrument(skip(self, swap))]
    pub async fn create_swap(&self, swap: &NewSwap) -> Result<Value> {
        self.send(ApiRequest::post(SWAPS).json(swap)?).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::testing::expect_request;
    use crate::models::NewSwap;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_swaps_defaults() {
        let client = expect_request("GET /v1/swaps?page=1&per_page=10", None);
        client.list_swaps(None, None).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_swap() {
        let client = expect_request(
            "POST /v1/swaps",
            Some(json!({"amount": 5000, "from": "USDT", "to": "NGN"})),
        );
        let swap = NewSwap {
            amount: 5000,
            from: "USDT".to_string(),
            to: "NGN".to_string(),
        };
        client.create_swap(&swap).await.unwrap();
    }
}
