use serde_json::Value;

use super::SHORT_PER_PAGE;
use crate::client::Fluidcoins;
use crate::error::Result;
use crate::http::{ApiRequest, Query, Transport, resource_path};
use crate::models::TransactionStatus;

const TRANSACTIONS: &str = "/v1/transactions";

impl<T: Transport> Fluidcoins<T> {
    /// Lists all transactions, optionally only those with `status`.
    #[tracing::instrument(skip(self))]
    pub async fn list_transactions(
        &self,
        status: Option<TransactionStatus>,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<Value> {
        let query = Query::new()
            .paginate(page, per_page, SHORT_PER_PAGE)
            .push_opt("status", status);
        self.send(ApiRequest::get(TRANSACTIONS).query(query)).await
    }

    /// Fetches a transaction by reference, e.g. `TRANS_qgc`.
    #[tracing::instrument(skip(self))]
    pub async fn get_transaction(&self, reference: &str) -> Result<Value> {
        self.send(ApiRequest::get(resource_path(TRANSACTIONS, reference, &[])?))
            .await
    }
}
