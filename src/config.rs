//! Startup configuration.
//!
//! Credentials and the API endpoint come from the environment
//! (optionally via a `.env` file loaded in `main`). The config is
//! built once and handed to the [`NewsClient`](crate::api::NewsClient)
//! rather than read ambiently at call sites, so a missing variable is
//! a fatal error before any network traffic.

use std::env;
use std::path::PathBuf;

use crate::error::Error;

/// How long cached API responses stay valid.
pub const CACHE_TTL_SECS: i64 = 300;

/// Settings required to talk to the Bing News Search API.
#[derive(Debug, Clone)]
pub struct Config {
    /// Value for the `Ocp-Apim-Subscription-Key` request header.
    pub subscription_key: String,
    /// Base URL of the API, e.g. `https://api.bing.microsoft.com/`.
    /// The news path (`v7.0/news`) is appended verbatim.
    pub endpoint: String,
}

impl Config {
    /// Read the configuration from `BING_SEARCH_KEY` and
    /// `BING_SEARCH_ENDPOINT`. Fails naming the first missing variable.
    pub fn from_env() -> Result<Self, Error> {
        let subscription_key =
            env::var("BING_SEARCH_KEY").map_err(|_| Error::MissingEnv("BING_SEARCH_KEY"))?;
        let endpoint =
            env::var("BING_SEARCH_ENDPOINT").map_err(|_| Error::MissingEnv("BING_SEARCH_ENDPOINT"))?;
        Ok(Self {
            subscription_key,
            endpoint,
        })
    }
}

/// Directory holding cached responses, under the platform cache dir.
pub fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(env::temp_dir)
        .join("newsdesk")
}
