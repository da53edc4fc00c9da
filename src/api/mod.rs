//! Endpoint methods, grouped by resource.
//!
//! Each method maps onto exactly one HTTP request: identifiers go into the
//! path, optional filters into the query string (only when supplied), payloads
//! into the JSON body. The response body is returned unchanged; failures come
//! back as [`crate::Error`].

mod addresses;
mod balances;
mod currencies;
mod customers;
mod keys;
mod links;
mod merchant;
mod payouts;
mod swaps;
mod transactions;
mod webhooks;

/// Default `per_page` for most listing endpoints.
pub const DEFAULT_PER_PAGE: u32 = 20;

/// Default `per_page` for customers, swaps and transactions.
pub const SHORT_PER_PAGE: u32 = 10;


#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use tracing::span::{Attributes, Id};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    use super::testing::expect_request;
    use crate::models::{NewAddress, NewPayout, NewSwap, PaymentLinkUpdate};

    /// Records the field names of every span opened, keyed by span name.
    #[derive(Clone, Default)]
    struct SpanFields(Arc<Mutex<Vec<(String, Vec<String>)>>>);

    impl SpanFields {
        fn of(&self, span: &str) -> Vec<String> {
            let spans = self.0.lock().unwrap();
            spans
                .iter()
                .find(|(name, _)| name == span)
                .map(|(_, fields)| fields.clone())
                .unwrap_or_else(|| panic!("no span named {}", span))
        }
    }

    impl<S: tracing::Subscriber> Layer<S> for SpanFields {
        fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
            let fields = attrs.fields().iter().map(|f| f.name().to_string()).collect();
            self.0
                .lock()
                .unwrap()
                .push((attrs.metadata().name().to_string(), fields));
        }
    }

    #[tokio::test]
    async fn test_payloads_are_not_recorded_on_spans() {
        let spans = SpanFields::default();
        let _guard =
            tracing::subscriber::set_default(tracing_subscriber::registry().with(spans.clone()));

        let address = NewAddress {
            code: "ETH".to_string(),
            network: "ERC20".to_string(),
        };
        expect_request("POST /v1/address", Some(serde_json::to_value(&address).unwrap()))
            .create_address(&address)
            .await
            .unwrap();

        let payout = NewPayout {
            amount: 100000,
            recipient: "PAY_ACCT_XYZ".to_string(),
        };
        expect_request("POST /v1/payouts", Some(serde_json::to_value(&payout).unwrap()))
            .request_payout(&payout)
            .await
            .unwrap();

        let swap = NewSwap {
            amount: 5,
            from: "USDT".to_string(),
            to: "NGN".to_string(),
        };
        expect_request("POST /v1/swaps", Some(serde_json::to_value(&swap).unwrap()))
            .create_swap(&swap)
            .await
            .unwrap();

        let update = PaymentLinkUpdate::default();
        expect_request("PATCH /v1/links/LINK_rkK", Some(serde_json::json!({})))
            .edit_payment_link("LINK_rkK", &update)
            .await
            .unwrap();

        expect_request(
            "PATCH /v1/hooks/HOOK_1",
            Some(serde_json::json!({"endpoint": "https://example.com/hook"})),
        )
        .edit_webhook("HOOK_1", "https://example.com/hook")
        .await
        .unwrap();

        assert!(spans.of("create_address").is_empty());
        assert!(spans.of("request_payout").is_empty());
        assert!(spans.of("create_swap").is_empty());
        assert_eq!(spans.of("edit_payment_link"), vec!["reference"]);
        assert_eq!(spans.of("edit_webhook"), vec!["reference"]);
    }
}
