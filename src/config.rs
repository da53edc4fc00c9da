//! Client configuration: secret key and API base URL.

use std::env;
use std::fmt;

use crate::error::{Error, Result};

/// Production API host.
pub const DEFAULT_API_URL: &str = "https://api.fluidcoins.com";

/// Environment variable holding the secret key.
pub const SECRET_KEY_ENV: &str = "FLUIDCOINS_SECRET_KEY";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "FLUIDCOINS_API_URL";

#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    secret_key: String,
    api_url: String,
}

impl Config {
    /// Config for the production API. The key's format is not checked.
    pub fn new(secret_key: impl Into<String>) -> Result<Self> {
        let secret_key = secret_key.into();
        if secret_key.trim().is_empty() {
            return Err(Error::Config("secret key is empty".to_string()));
        }

        Ok(Self {
            secret_key,
            api_url: DEFAULT_API_URL.to_string(),
        })
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Reads `FLUIDCOINS_SECRET_KEY` and, if set, `FLUIDCOINS_API_URL`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = lookup(SECRET_KEY_ENV)
            .ok_or_else(|| Error::Config(format!("{} is not set", SECRET_KEY_ENV)))?;
        let config = Self::new(secret_key)?;

        Ok(match lookup(API_URL_ENV).filter(|url| !url.is_empty()) {
            Some(url) => config.with_api_url(url),
            None => config,
        })
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("secret_key", &mask(&self.secret_key))
            .field("api_url", &self.api_url)
            .finish()
    }
}

/// Keeps the key's prefix (e.g. `sk_test_`) and hides the rest.
fn mask(secret: &str) -> String {
    let visible: String = secret.chars().take(8).collect();
    if visible.len() == secret.len() {
        "*********".to_string()
    } else {
        format!("{}*********", visible)
    }
}
