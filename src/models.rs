//! Request payloads and filter values accepted by the endpoint methods.
//!
//! Response bodies are not modelled; they come back as `serde_json::Value`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Transaction status filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Success,
    Failed,
    Pending,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Success => "success",
            TransactionStatus::Failed => "failed",
            TransactionStatus::Pending => "pending",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment link status filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LinkStatus {
    Enabled,
    Disabled,
}

impl LinkStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkStatus::Enabled => "enabled",
            LinkStatus::Disabled => "disabled",
        }
    }
}

impl fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fiat currency a payment link is denominated in. The API defaults to NGN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Ngn,
}

/// Body of `POST /v1/address`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAddress {
    /// Coin code, e.g. `ETH`, `USDT`, `XLM`
    pub code: String,
    /// Network, e.g. `ERC20`, `TRC20`, `BEP20`
    pub network: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Phone {
    /// Country code, e.g. `NG`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Body of `POST /v1/customers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub email: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
}

/// Body of `PATCH /v1/customers/{reference}`; only set fields are sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CustomerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
}

/// Body of `POST /v1/links`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPaymentLink {
    /// Amount in kobo/cents
    pub amount: u64,
    pub description: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collect_phone_number: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_after_payment: Option<bool>,
}

/// Body of `PATCH /v1/links/{reference}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PaymentLinkUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collect_phone_number: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_after_payment: Option<bool>,
}

/// Body of `POST /v1/payouts`.
///
/// `amount` is in the lowest denomination of the payout account's currency
/// (1,000 Naira is 100000; 1 BTC is 100 million satoshis).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPayout {
    pub amount: u64,
    /// Payout account reference, e.g. `PAY_ACCT_XYZ`
    pub recipient: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    pub account_number: String,
    pub bank_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptoWallet {
    pub address: String,
    /// Free-form identifier, e.g. the recipient's name
    pub label: String,
    pub network: String,
}

/// Body of `POST /v1/payouts/accounts`: a bank account or a crypto wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPayoutAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<BankAccount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crypto: Option<CryptoWallet>,
    pub currency: String,
}

/// Body of `POST /v1/swaps`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSwap {
    /// Non-zero, in the smallest unit of `from`
    pub amount: u64,
    pub from: String,
    pub to: String,
}

/// Body of `POST`/`PATCH /v1/hooks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookEndpoint {
    pub endpoint: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_values() {
        assert_eq!(TransactionStatus::Pending.to_string(), "pending");
        assert_eq!(LinkStatus::Disabled.to_string(), "disabled");
        assert_eq!(serde_json::to_value(Currency::Usd).unwrap(), json!("USD"));
    }

    #[test]
    fn test_optional_fields_are_skipped() {
        let update = CustomerUpdate {
            email: Some("jane@example.com".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"email": "jane@example.com"})
        );

        let link = NewPaymentLink {
            amount: 100000,
            description: "Test payment description".to_string(),
            title: "Test Payment".to_string(),
            collect_phone_number: None,
            currency: Some(Currency::Ngn),
            disable_after_payment: None,
        };
        assert_eq!(
            serde_json::to_value(&link).unwrap(),
            json!({
                "amount": 100000,
                "description": "Test payment description",
                "title": "Test Payment",
                "currency": "NGN"
            })
        );
    }

    #[test]
    fn test_payout_account_with_crypto_only() {
        let account: NewPayoutAccount = serde_json::from_value(json!({
            "crypto": {"address": "0xabc", "label": "Ada", "network": "ERC20"},
            "currency": "USDT"
        }))
        .unwrap();
        assert!(account.bank.is_none());
        assert_eq!(account.crypto.as_ref().unwrap().network, "ERC20");
        assert_eq!(
            serde_json::to_value(&account).unwrap(),
            json!({
                "crypto": {"address": "0xabc", "label": "Ada", "network": "ERC20"},
                "currency": "USDT"
            })
        );
    }
}
