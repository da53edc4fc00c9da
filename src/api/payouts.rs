use serde_json::Value;

use super::DEFAULT_PER_PAGE;
use crate::client::Fluidcoins;
use crate::error::Result;
use crate::http::{ApiRequest, Query, Transport, resource_path};
use crate::models::{NewPayout, NewPayoutAccount};

const PAYOUTS: &str = "/v1/payouts";
const PAYOUT_ACCOUNTS: &str = "/v1/payouts/accounts";
const BANKS: &str = "/v1/payouts/accounts/banks";
const RESOLVE_BANK_ACCOUNT: &str = "/v1/payouts/accounts/banks/resolve";

/// Country `list_banks` falls back to.
const DEFAULT_BANK_COUNTRY: &str = "NG";

impl<T: Transport> Fluidcoins<T> {
    #[tracing::instrument(skip(self))]
    pub async fn list_payouts(&self, page: Option<u32>, per_page: Option<u32>) -> Result<Value> {
        let query = Query::new().paginate(page, per_page, DEFAULT_PER_PAGE);
        self.send(ApiRequest::get(PAYOUTS).query(query)).await
    }

    /// Requests a payout to a stored payout account.
    ///
    /// The currency comes from the payout account, so `payout.amount` must be
    /// in that currency's lowest denomination.
    #[tracing::instrument(skip(self, payout))]
    pub async fn request_payout(&self, payout: &NewPayout) -> Result<Value> {
        self.send(ApiRequest::post(PAYOUTS).json(payout)?).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_payout(&self, reference: &str) -> Result<Value> {
        self.send(ApiRequest::get(resource_path(PAYOUTS, reference, &[])?))
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn cancel_payout(&self, reference: &str) -> Result<Value> {
        self.send(ApiRequest::delete(resource_path(PAYOUTS, reference, &[])?))
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_payout_accounts(
        &self,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<Value> {
        let query = Query::new().paginate(page, per_page, DEFAULT_PER_PAGE);
        self.send(ApiRequest::get(PAYOUT_ACCOUNTS).query(query))
            .await
    }

    /// Stores a payout destination: either `bank` or `crypto` should be set.
    #[tracing::instrument(skip(self, account))]
    pub async fn create_payout_account(&self, account: &NewPayoutAccount) -> Result<Value> {
        self.send(ApiRequest::post(PAYOUT_ACCOUNTS).json(account)?)
            .await
    }

    /// Lists banks in `country` (Nigeria when `None`).
    #[tracing::instrument(skip(self))]
    pub async fn list_banks(&self, country: Option<&str>) -> Result<Value> {
        let query = Query::new().push("country", country.unwrap_or(DEFAULT_BANK_COUNTRY));
        self.send(ApiRequest::get(BANKS).query(query)).await
    }

    /// Looks up the account holder for `account` at the bank with sort code `bank_code`.
    #[tracing::instrument(skip(self))]
    pub async fn resolve_bank_account(&self, bank_code: &str, account: &str) -> Result<Value> {
        let query = Query::new()
            .push("bank_code", bank_code)
            .push("account", account);
        self.send(ApiRequest::get(RESOLVE_BANK_ACCOUNT).query(query))
            .await
    }
}
