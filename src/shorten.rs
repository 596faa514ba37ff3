//! URL shortening via an external redirect service.
//!
//! The table renderer shortens every article URL, one blocking call
//! per row. The service sits behind the [`ShortenUrl`] trait so the
//! renderer can be exercised in tests without a network.

use std::time::Instant;

use tracing::{instrument, warn};

use crate::error::Error;

/// Maps a long URL to a shorter redirect URL.
pub trait ShortenUrl {
    async fn shorten(&self, url: &str) -> Result<String, Error>;
}

const ISGD_ENDPOINT: &str = "https://is.gd/create.php";

/// Shortener backed by the is.gd simple API.
///
/// A successful response body is the shortened URL itself; any
/// non-2xx status is surfaced as [`Error::Shortener`].
pub struct IsGdShortener {
    http: reqwest::Client,
}

impl IsGdShortener {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .user_agent(concat!("newsdesk/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }
}

impl Default for IsGdShortener {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortenUrl for IsGdShortener {
    #[instrument(level = "debug", skip(self))]
    async fn shorten(&self, url: &str) -> Result<String, Error> {
        let t0 = Instant::now();
        let request_url = format!(
            "{ISGD_ENDPOINT}?format=simple&url={}",
            urlencoding::encode(url)
        );
        let response = self.http.get(&request_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, %url, "shortener request failed");
            return Err(Error::Shortener { status });
        }
        let short = response.text().await?.trim().to_string();
        tracing::debug!(elapsed_ms = t0.elapsed().as_millis() as u64, %short, "shortened URL");
        Ok(short)
    }
}
