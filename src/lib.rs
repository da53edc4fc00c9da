//! Client for the Fluidcoins payments API.
//!
//! ```no_run
//! # async fn demo() -> fluidcoins::Result<()> {
//! let client = fluidcoins::Fluidcoins::new("sk_test_123")?;
//! let address = client.get_address("ADDR_abc").await?;
//! println!("{}", address["address"]["reference"]);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
#[cfg(feature = "cli")]
pub mod commands;
pub mod config;
pub mod error;
pub mod http;
pub mod models;

pub use client::Fluidcoins;
pub use config::Config;
pub use error::{ApiError, Error, ErrorKind, Result};
