use serde_json::Value;

use crate::client::Fluidcoins;
use crate::error::Result;
use crate::http::{ApiRequest, Query, Transport};

const CURRENCIES: &str = "/v1/currencies";
const RATES: &str = "/v1/rates";

impl<T: Transport> Fluidcoins<T> {
    /// Lists supported coins. `test_net_only` keeps only coins with a test-net network.
    #[tracing::instrument(skip(self))]
    pub async fn list_currencies(&self, test_net_only: Option<bool>) -> Result<Value> {
        let query = Query::new().push_opt("test_net_only", test_net_only);
        self.send(ApiRequest::get(CURRENCIES).query(query)).await
    }

    /// Current fiat exchange rates.
    ///
    /// With a `(from, to)` pair only that pair is returned; without one, all
    /// supported fiat currencies.
    #[tracing::instrument(skip(self))]
    pub async fn get_fiat_rates(&self, pair: Option<(&str, &str)>) -> Result<Value> {
        let query = match pair {
            Some((from, to)) => Query::new().push("from", from).push("to", to),
            None => Query::new(),
        };
        self.send(ApiRequest::get(RATES).query(query)).await
    }
}
