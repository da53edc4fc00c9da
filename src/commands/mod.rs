//! Command-line front end: one sub-command per endpoint method.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    ErrorKind, Fluidcoins,
    config::{API_URL_ENV, Config, SECRET_KEY_ENV},
    http::Transport,
    models::{LinkStatus, TransactionStatus},
};

/// fluidcoins - Fluidcoins API client
///
/// Calls one Fluidcoins API endpoint and prints the JSON response.
///
/// Examples:
///   fluidcoins addresses list --per-page 5
///   fluidcoins customers get CUS_xyz
///   fluidcoins links create --data '{"amount": 100000, "title": "Tee", "description": "Black tee"}'
#[derive(Parser, Debug)]
#[command(author, version = env!("FLUIDCOINS_VERSION"), about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Secret key used as the bearer token
    #[arg(
        long = "secret-key",
        env = SECRET_KEY_ENV,
        hide_env_values = true,
        value_name = "KEY",
        global = true
    )]
    pub secret_key: Option<String>,

    /// API URL (defaults to https://api.fluidcoins.com)
    #[arg(long = "api-url", env = API_URL_ENV, value_name = "URL", global = true)]
    pub api_url: Option<String>,
}

impl Cli {
    pub fn config(&self) -> Result<Config> {
        let secret_key = self.secret_key.clone().with_context(|| {
            format!("No secret key given. Pass --secret-key or set {}.", SECRET_KEY_ENV)
        })?;
        let config = Config::new(secret_key)?;

        Ok(match &self.api_url {
            Some(url) => config.with_api_url(url.as_str()),
            None => config,
        })
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Crypto deposit addresses
    #[command(subcommand)]
    Addresses(AddressCommand),

    /// Merchant balances
    #[command(subcommand)]
    Balances(BalanceCommand),

    /// List supported coins
    Currencies {
        /// Only coins that have a test-net network
        #[arg(long)]
        test_net_only: bool,
    },

    /// Fiat exchange rates
    Rates {
        /// Base currency to convert from
        #[arg(long, requires = "to")]
        from: Option<String>,
        /// Currency to convert to
        #[arg(long, requires = "from")]
        to: Option<String>,
    },

    /// Customers
    #[command(subcommand)]
    Customers(CustomerCommand),

    /// Payment links
    #[command(subcommand)]
    Links(LinkCommand),

    /// Show the current merchant
    Merchant,

    /// Payouts
    #[command(subcommand)]
    Payouts(PayoutCommand),

    /// Stored payout destinations
    #[command(subcommand)]
    PayoutAccounts(PayoutAccountCommand),

    /// Banks available for payouts
    #[command(subcommand)]
    Banks(BankCommand),

    /// Currency swaps
    #[command(subcommand)]
    Swaps(SwapCommand),

    /// Transactions
    #[command(subcommand)]
    Transactions(TransactionCommand),

    /// Webhook endpoints
    #[command(subcommand)]
    Webhooks(WebhookCommand),

    /// API keys
    #[command(subcommand)]
    Keys(KeyCommand),
}

#[derive(Args, Debug, Clone, Copy, Default)]
pub struct PageArgs {
    /// Page to fetch (defaults to 1)
    #[arg(long)]
    pub page: Option<u32>,

    /// Items per page
    #[arg(long)]
    pub per_page: Option<u32>,
}

#[derive(Args, Debug)]
pub struct DataArgs {
    /// Request body as JSON
    #[arg(long, value_name = "JSON")]
    pub data: String,
}

#[derive(Subcommand, Debug)]
pub enum AddressCommand {
    /// List addresses
    List {
        /// Only addresses for this coin id
        #[arg(long)]
        coin_id: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Generate a new address, e.g. --data '{"code": "ETH", "network": "ERC20"}'
    Create(DataArgs),
    /// Show an address
    Get { reference: String },
    /// List transactions on an address
    Transactions {
        reference: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// List crypto deposits across all addresses
    Deposits {
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show a single address transaction
    Deposit { reference: String },
}

#[derive(Subcommand, Debug)]
pub enum BalanceCommand {
    List,
    Get { code: String },
}

#[derive(Subcommand, Debug)]
pub enum CustomerCommand {
    List {
        /// Only blacklisted (true) or non-blacklisted (false) customers
        #[arg(long)]
        blacklisted: Option<bool>,
        #[command(flatten)]
        page: PageArgs,
    },
    Create(DataArgs),
    Get {
        reference: String,
    },
    Edit {
        reference: String,
        #[command(flatten)]
        data: DataArgs,
    },
    Blacklist {
        reference: String,
    },
    Whitelist {
        reference: String,
    },
    Transactions {
        reference: String,
        #[arg(long, value_enum)]
        status: Option<TransactionStatus>,
    },
}

#[derive(Subcommand, Debug)]
pub enum LinkCommand {
    List {
        #[arg(long, value_enum)]
        status: Option<LinkStatus>,
        #[command(flatten)]
        page: PageArgs,
    },
    Create(DataArgs),
    Get {
        reference: String,
    },
    Edit {
        reference: String,
        #[command(flatten)]
        data: DataArgs,
    },
    Enable {
        reference: String,
    },
    Disable {
        reference: String,
    },
    Transactions {
        reference: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum PayoutCommand {
    List {
        #[command(flatten)]
        page: PageArgs,
    },
    /// Request a payout, e.g. --data '{"amount": 100000, "recipient": "PAY_ACCT_XYZ"}'
    Request(DataArgs),
    Get {
        reference: String,
    },
    Cancel {
        reference: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum PayoutAccountCommand {
    List {
        #[command(flatten)]
        page: PageArgs,
    },
    Create(DataArgs),
}

#[derive(Subcommand, Debug)]
pub enum BankCommand {
    List {
        /// Country code (defaults to NG)
        #[arg(long)]
        country: Option<String>,
    },
    /// Look up the holder of a bank account
    Resolve { bank_code: String, account: String },
}

#[derive(Subcommand, Debug)]
pub enum SwapCommand {
    List {
        #[command(flatten)]
        page: PageArgs,
    },
    Create(DataArgs),
}

#[derive(Subcommand, Debug)]
pub enum TransactionCommand {
    List {
        #[arg(long, value_enum)]
        status: Option<TransactionStatus>,
        #[command(flatten)]
        page: PageArgs,
    },
    Get {
        reference: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum WebhookCommand {
    List,
    Create { endpoint: String },
    Get { reference: String },
    Edit { reference: String, endpoint: String },
    Enable { reference: String },
    Disable { reference: String },
    Logs { reference: String },
}

#[derive(Subcommand, Debug)]
pub enum KeyCommand {
    List,
    Rotate,
}

fn parse_data<D: DeserializeOwned>(data: &DataArgs) -> Result<D> {
    serde_json::from_str(&data.data).context("Invalid --data JSON")
}

/// Runs `command` against `client` and returns the response body.
pub async fn run<T: Transport>(client: &Fluidcoins<T>, command: Command) -> Result<Value> {
    debug!("Running {:?}", command);

    let body = match command {
        Command::Addresses(cmd) => match cmd {
            AddressCommand::List { coin_id, page } => {
                client
                    .list_addresses(coin_id.as_deref(), page.page, page.per_page)
                    .await?
            }
            AddressCommand::Create(data) => client.create_address(&parse_data(&data)?).await?,
            AddressCommand::Get { reference } => client.get_address(&reference).await?,
            AddressCommand::Transactions { reference, page } => {
                client
                    .list_address_transactions(&reference, page.page, page.per_page)
                    .await?
            }
            AddressCommand::Deposits { page } => {
                client.list_crypto_deposits(page.page, page.per_page).await?
            }
            AddressCommand::Deposit { reference } => {
                client.get_address_transaction(&reference).await?
            }
        },

        Command::Balances(cmd) => match cmd {
            BalanceCommand::List => client.list_balances().await?,
            BalanceCommand::Get { code } => client.get_balance(&code).await?,
        },

        Command::Currencies { test_net_only } => {
            client
                .list_currencies(test_net_only.then_some(true))
                .await?
        }

        Command::Rates { from, to } => {
            let pair = from.as_deref().zip(to.as_deref());
            client.get_fiat_rates(pair).await?
        }

        Command::Customers(cmd) => match cmd {
            CustomerCommand::List { blacklisted, page } => {
                client
                    .list_customers(blacklisted, page.page, page.per_page)
                    .await?
            }
            CustomerCommand::Create(data) => client.create_customer(&parse_data(&data)?).await?,
            CustomerCommand::Get { reference } => client.get_customer(&reference).await?,
            CustomerCommand::Edit { reference, data } => {
                client
                    .edit_customer(&reference, &parse_data(&data)?)
                    .await?
            }
            CustomerCommand::Blacklist { reference } => {
                client.blacklist_customer(&reference).await?
            }
            CustomerCommand::Whitelist { reference } => {
                client.whitelist_customer(&reference).await?
            }
            CustomerCommand::Transactions { reference, status } => {
                client.list_customer_transactions(&reference, status).await?
            }
        },

        Command::Links(cmd) => match cmd {
            LinkCommand::List { status, page } => {
                client
                    .list_payment_links(status, page.page, page.per_page)
                    .await?
            }
            LinkCommand::Create(data) => client.create_payment_link(&parse_data(&data)?).await?,
            LinkCommand::Get { reference } => client.get_payment_link(&reference).await?,
            LinkCommand::Edit { reference, data } => {
                client
                    .edit_payment_link(&reference, &parse_data(&data)?)
                    .await?
            }
            LinkCommand::Enable { reference } => client.enable_payment_link(&reference).await?,
            LinkCommand::Disable { reference } => client.disable_payment_link(&reference).await?,
            LinkCommand::Transactions { reference } => {
                client.list_payment_link_transactions(&reference).await?
            }
        },

        Command::Merchant => client.get_current_merchant().await?,

        Command::Payouts(cmd) => match cmd {
            PayoutCommand::List { page } => client.list_payouts(page.page, page.per_page).await?,
            PayoutCommand::Request(data) => client.request_payout(&parse_data(&data)?).await?,
            PayoutCommand::Get { reference } => client.get_payout(&reference).await?,
            PayoutCommand::Cancel { reference } => client.cancel_payout(&reference).await?,
        },

        Command::PayoutAccounts(cmd) => match cmd {
            PayoutAccountCommand::List { page } => {
                client
                    .list_payout_accounts(page.page, page.per_page)
                    .await?
            }
            PayoutAccountCommand::Create(data) => {
                client.create_payout_account(&parse_data(&data)?).await?
            }
        },

        Command::Banks(cmd) => match cmd {
            BankCommand::List { country } => client.list_banks(country.as_deref()).await?,
            BankCommand::Resolve { bank_code, account } => {
                client.resolve_bank_account(&bank_code, &account).await?
            }
        },

        Command::Swaps(cmd) => match cmd {
            SwapCommand::List { page } => client.list_swaps(page.page, page.per_page).await?,
            SwapCommand::Create(data) => client.create_swap(&parse_data(&data)?).await?,
        },

        Command::Transactions(cmd) => match cmd {
            TransactionCommand::List { status, page } => {
                client
                    .list_transactions(status, page.page, page.per_page)
                    .await?
            }
            TransactionCommand::Get { reference } => client.get_transaction(&reference).await?,
        },

        Command::Webhooks(cmd) => match cmd {
            WebhookCommand::List => client.list_webhooks().await?,
            WebhookCommand::Create { endpoint } => client.create_webhook(&endpoint).await?,
            WebhookCommand::Get { reference } => client.get_webhook(&reference).await?,
            WebhookCommand::Edit {
                reference,
                endpoint,
            } => client.edit_webhook(&reference, &endpoint).await?,
            WebhookCommand::Enable { reference } => client.enable_webhook(&reference).await?,
            WebhookCommand::Disable { reference } => client.disable_webhook(&reference).await?,
            WebhookCommand::Logs { reference } => client.webhook_logs(&reference).await?,
        },

        Command::Keys(cmd) => match cmd {
            KeyCommand::List => client.list_api_keys().await?,
            KeyCommand::Rotate => client.rotate_api_keys().await?,
        },
    };

    Ok(body)
}

/// Adds a hint about where the secret key comes from to 401 failures.
pub fn with_hint(err: anyhow::Error) -> anyhow::Error {
    match err.downcast_ref::<crate::Error>().map(crate::Error::kind) {
        Some(ErrorKind::Unauthorized) => err.context(format!(
            "The API rejected the secret key. Check --secret-key or {}.",
            SECRET_KEY_ENV
        )),
        _ => err,
    }
}
