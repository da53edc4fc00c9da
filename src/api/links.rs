use serde_json::Value;

use super::DEFAULT_PER_PAGE;
use crate::client::Fluidcoins;
use crate::error::Result;
use crate::http::{ApiRequest, Query, Transport, resource_path};
use crate::models::{LinkStatus, NewPaymentLink, PaymentLinkUpdate};

const LINKS: &str = "/v1/links";

impl<T: Transport> Fluidcoins<T> {
    #[tracing::instrument(skip(self))]
    pub async fn list_payment_links(
        &self,
        status: Option<LinkStatus>,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<Value> {
        let query = Query::new()
            .paginate(page, per_page, DEFAULT_PER_PAGE)
            .push_opt("status", status);
        self.send(ApiRequest::get(LINKS).query(query)).await
    }

    /// Creates a hosted payment page. `link.amount` is in kobo/cents.
    #[tracing::instrument(skip(self, link))]
    pub async fn create_payment_link(&self, link: &NewPaymentLink) -> Result<Value> {
        self.send(ApiRequest::post(LINKS).json(link)?).await
    }

    /// Fetches a payment link by reference, e.g. `LINK_rkK`.
    #[tracing::instrument(skip(self))]
    pub async fn get_payment_link(&self, reference: &str) -> Result<Value> {
        self.send(ApiRequest::get(resource_path(LINKS, reference, &[])?))
            .await
    }

    #[tracing::instrument(skip(self, update))]
    pub async fn edit_payment_link(
        &self,
        reference: &str,
        update: &PaymentLinkUpdate,
    ) -> Result<Value> {
        let path = resource_path(LINKS, reference, &[])?;
        self.send(ApiRequest::patch(path).json(update)?).await
    }

    /// Re-opens a payment link for collection.
    #[tracing::instrument(skip(self))]
    pub async fn enable_payment_link(&self, reference: &str) -> Result<Value> {
        self.send(ApiRequest::post(resource_path(LINKS, reference, &["enable"])?))
            .await
    }

    /// Stops a payment link from collecting payments.
    #[tracing::instrument(skip(self))]
    pub async fn disable_payment_link(&self, reference: &str) -> Result<Value> {
        self.send(ApiRequest::delete(resource_path(
            LINKS,
            reference,
            &["enable"],
        )?))
        .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_payment_link_transactions(&self, reference: &str) -> Result<Value> {
        self.send(ApiRequest::get(resource_path(
            LINKS,
            reference,
            &["transactions"],
        )?))
        .await
    }
}
