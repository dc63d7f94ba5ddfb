//! Support for runtime configuration options

use crate::error::{Error, Result};
use crate::markdown::DEFAULT_DAYS;

/// Name of the environment variable that holds the Linear API key
pub const API_KEY_VAR: &str = "LINEAR_API_KEY";
/// Name of the environment variable that can override the API endpoint
pub const API_URL_VAR: &str = "LINEAR_API_URL";

pub const DEFAULT_API_URL: &str = "https://api.linear.app/graphql";

/// Reports are written into this folder, under the current directory
pub const OUTPUT_DIR_NAME: &str = "linear";


#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_key: String,
    pub api_url: String,
}

impl Config {
    /// Read the configuration from the environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration from anything that maps variable names to values.
    ///
    /// An empty API key is considered missing
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| key.is_empty() == false)
            .ok_or(Error::MissingApiKey)?;
        let api_url = lookup(API_URL_VAR)
            .filter(|url| url.is_empty() == false)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Self { api_key, api_url })
    }
}

/// Parse the optional `days` command-line argument. Only strictly positive integers are accepted.
///
/// A missing or empty argument means [`DEFAULT_DAYS`]
pub fn parse_days(arg: Option<&str>) -> Result<u32> {
    let arg = match arg {
        None | Some("") => return Ok(DEFAULT_DAYS),
        Some(arg) => arg,
    };
    match arg.trim().parse::<u32>() {
        Ok(days) if days > 0 => Ok(days),
        _ => Err(Error::InvalidDays(arg.to_string())),
    }
}
