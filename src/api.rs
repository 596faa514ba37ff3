//! HTTP client for the Bing News Search API.
//!
//! [`NewsClient`] owns the reqwest client, the startup configuration,
//! and the response cache. Each of the three request shapes builds a
//! URL against `{endpoint}v7.0/news` and funnels through one GET
//! helper that attaches the subscription-key header, fails on non-2xx
//! status, and decodes the body into a [`SearchResponse`].
//!
//! Responses are cached on disk keyed by the full request URL; a fresh
//! cache entry skips the network entirely.

use reqwest::Client;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::cache::HttpCache;
use crate::cli::{Category, Market};
use crate::config::Config;
use crate::error::Error;
use crate::models::SearchResponse;

const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

pub struct NewsClient {
    http: Client,
    config: Config,
    cache: HttpCache,
}

impl NewsClient {
    pub fn new(config: Config, cache: HttpCache) -> Self {
        Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .user_agent(concat!("newsdesk/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_else(|_| Client::new()),
            config,
            cache,
        }
    }

    /// Search news by word or phrase.
    #[instrument(level = "info", skip(self))]
    pub async fn search_phrase(&self, phrase: &str) -> Result<SearchResponse, Error> {
        let url = phrase_url(&self.config.endpoint, phrase)?;
        self.fetch(url).await
    }

    /// Browse news for a category within a market.
    #[instrument(level = "info", skip(self))]
    pub async fn search_category(
        &self,
        market: Market,
        category: Category,
    ) -> Result<SearchResponse, Error> {
        let url = category_url(&self.config.endpoint, market, category)?;
        self.fetch(url).await
    }

    /// Fetch trending topics for a market.
    #[instrument(level = "info", skip(self))]
    pub async fn trending(&self, market: Market) -> Result<SearchResponse, Error> {
        let url = trending_url(&self.config.endpoint, market)?;
        self.fetch(url).await
    }

    async fn fetch(&self, url: Url) -> Result<SearchResponse, Error> {
        if let Some(body) = self.cache.lookup(url.as_str()) {
            debug!(url = %url, "serving response from cache");
            return decode_response(&body);
        }

        let response = self
            .http
            .get(url.clone())
            .header(SUBSCRIPTION_KEY_HEADER, &self.config.subscription_key)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        info!(url = %url, bytes = body.len(), "fetched search response");
        if let Err(e) = self.cache.store(url.as_str(), &body) {
            warn!(error = %e, "failed to cache response; continuing");
        }
        decode_response(&body)
    }
}

fn decode_response(body: &str) -> Result<SearchResponse, Error> {
    Ok(serde_json::from_str(body)?)
}

// The endpoint is concatenated, not resolved: the configured base URL
// is expected to end with a slash, matching the upstream convention.
fn news_url(endpoint: &str, path: &str) -> Result<Url, Error> {
    Ok(Url::parse(&format!("{endpoint}v7.0/news{path}"))?)
}

fn phrase_url(endpoint: &str, phrase: &str) -> Result<Url, Error> {
    let mut url = news_url(endpoint, "/search")?;
    url.query_pairs_mut()
        .append_pair("q", phrase)
        .append_pair("textDecorations", "false");
    Ok(url)
}

fn category_url(endpoint: &str, market: Market, category: Category) -> Result<Url, Error> {
    let mut url = news_url(endpoint, "")?;
    url.query_pairs_mut()
        .append_pair("mkt", market.code())
        .append_pair("category", category.as_str());
    Ok(url)
}

fn trending_url(endpoint: &str, market: Market) -> Result<Url, Error> {
    let mut url = news_url(endpoint, "/trendingtopics")?;
    url.query_pairs_mut().append_pair("mkt", market.code());
    Ok(url)
}
