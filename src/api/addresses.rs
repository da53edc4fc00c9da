use serde_json::Value;

use super::DEFAULT_PER_PAGE;
use crate::client::Fluidcoins;
use crate::error::Result;
use crate::http::{ApiRequest, Query, Transport, resource_path};
use crate::models::NewAddress;

const ADDRESSES: &str = "/v1/address";
const ADDRESS_TRANSACTIONS: &str = "/v1/address/transactions";

impl<T: Transport> Fluidcoins<T> {
    /// Lists generated addresses.
    ///
    /// `coin_id` restricts the list to one coin; it is the coin's id as
    /// returned by [`Fluidcoins::list_currencies`].
    #[tracing::instrument(skip(self))]
    pub async fn list_addresses(
        &self,
        coin_id: Option<&str>,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<Value> {
        let query = Query::new()
            .paginate(page, per_page, DEFAULT_PER_PAGE)
            .push_opt("coin_id", coin_id);
        self.send(ApiRequest::get(ADDRESSES).query(query)).await
    }

    /// Generates a new deposit address for `address.code` on `address.network`.
    #[tracing::instrument(skip(self, address))]
    pub async fn create_address(&self, address: &NewAddress) -> Result<Value> {
        self.send(ApiRequest::post(ADDRESSES).json(address)?).await
    }

    /// Lists crypto deposits across all addresses.
    #[tracing::instrument(skip(self))]
    pub async fn list_crypto_deposits(
        &self,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<Value> {
        let query = Query::new().paginate(page, per_page, DEFAULT_PER_PAGE);
        self.send(ApiRequest::get(ADDRESS_TRANSACTIONS).query(query))
            .await
    }

    /// Fetches one transaction that occurred on an address, e.g. `TRANS_xy`.
    #[tracing::instrument(skip(self))]
    pub async fn get_address_transaction(&self, reference: &str) -> Result<Value> {
        self.send(ApiRequest::get(resource_path(
            ADDRESS_TRANSACTIONS,
            reference,
            &[],
        )?))
        .await
    }

    /// Fetches an address by reference, e.g. `ADDR_xy`.
    #[tracing::instrument(skip(self))]
    pub async fn get_address(&self, reference: &str) -> Result<Value> {
        self.send(ApiRequest::get(resource_path(ADDRESSES, reference, &[])?))
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_address_transactions(
        &self,
        reference: &str,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<Value> {
        let path = resource_path(ADDRESSES, reference, &["transactions"])?;
        let query = Query::new().paginate(page, per_page, DEFAULT_PER_PAGE);
        self.send(ApiRequest::get(path).query(query)).await
    }
}
