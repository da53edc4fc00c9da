use serde_json::Value;

use super::SHORT_PER_PAGE;
use crate::client::Fluidcoins;
use crate::error::Result;
use crate::http::{ApiRequest, Query, Transport, resource_path};
use crate::models::{CustomerUpdate, NewCustomer, TransactionStatus};

const CUSTOMERS: &str = "/v1/customers";

impl<T: Transport> Fluidcoins<T> {
    /// Lists customers, 10 per page unless told otherwise.
    ///
    /// `blacklisted` filters on blacklist membership when given.
    #[tracing::instrument(skip(self))]
    pub async fn list_customers(
        &self,
        blacklisted: Option<bool>,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<Value> {
        let query = Query::new()
            .paginate(page, per_page, SHORT_PER_PAGE)
            .push_opt("blacklisted", blacklisted);
        self.send(ApiRequest::get(CUSTOMERS).query(query)).await
    }

    #[tracing::instrument(skip(self, customer))]
    pub async fn create_customer(&self, customer: &NewCustomer) -> Result<Value> {
        self.send(ApiRequest::post(CUSTOMERS).json(customer)?).await
    }

    /// Fetches a customer by reference, e.g. `CUS_xyz`.
    #[tracing::instrument(skip(self))]
    pub async fn get_customer(&self, reference: &str) -> Result<Value> {
        self.send(ApiRequest::get(resource_path(CUSTOMERS, reference, &[])?))
            .await
    }

    /// Partially updates a customer; only the fields set in `update` are sent.
    #[tracing::instrument(skip(self, update))]
    pub async fn edit_customer(&self, reference: &str, update: &CustomerUpdate) -> Result<Value> {
        let path = resource_path(CUSTOMERS, reference, &[])?;
        self.send(ApiRequest::patch(path).json(update)?).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn blacklist_customer(&self, reference: &str) -> Result<Value> {
        self.send(ApiRequest::post(resource_path(
            CUSTOMERS,
            reference,
            &["blacklist"],
        )?))
        .await
    }

    /// Removes a customer from the blacklist.
    #[tracing::instrument(skip(self))]
    pub async fn whitelist_customer(&self, reference: &str) -> Result<Value> {
        self.send(ApiRequest::delete(resource_path(
            CUSTOMERS,
            reference,
            &["blacklist"],
        )?))
        .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_customer_transactions(
        &self,
        reference: &str,
        status: Option<TransactionStatus>,
    ) -> Result<Value> {
        let path = resource_path(CUSTOMERS, reference, &["transactions"])?;
        let query = Query::new().push_opt("status", status);
        self.send(ApiRequest::get(path).query(query)).await
    }
}
