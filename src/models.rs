//! Wire-format models for the Bing News Search API.
//!
//! The API returns two article shapes from different upstream feeds:
//! regular search hits (`name`/`description`/`url`) and trending-topic
//! records, which carry `webSearchUrl` and an `image.provider` list
//! instead of a description. Nothing in the payload tags the shape, so
//! records are deserialized with every field optional and then
//! classified into the [`Article`] sum type, validating the required
//! fields of each variant up front.
//!
//! Field names are camelCase on the wire, hence the `#[serde(rename)]`
//! attributes.

use serde::Deserialize;

use crate::error::Error;

/// Top-level search response.
///
/// `value` is required: a response without it is malformed, and decode
/// fails before any formatting happens.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    /// Article records, in the order the API returned them.
    pub value: Vec<RawArticle>,
    /// Estimated total result count; absent on trending responses.
    #[serde(rename = "totalEstimatedMatches")]
    pub total_estimated_matches: Option<u64>,
}

/// An article record as it appears on the wire, before classification.
#[derive(Debug, Deserialize)]
pub struct RawArticle {
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "webSearchUrl")]
    pub web_search_url: Option<String>,
    pub image: Option<ArticleImage>,
}

#[derive(Debug, Deserialize)]
pub struct ArticleImage {
    #[serde(default)]
    pub provider: Vec<Provider>,
}

/// Organization that supplied a trending topic's image.
#[derive(Debug, Deserialize)]
pub struct Provider {
    pub name: String,
    #[serde(rename = "_type")]
    pub kind: String,
}

/// A classified article record.
#[derive(Debug)]
pub enum Article {
    Standard {
        title: String,
        description: String,
        url: String,
    },
    Trending {
        title: String,
        provider: Provider,
        url: String,
    },
}

impl Article {
    /// Classify a raw record and validate the fields its shape requires.
    ///
    /// The discriminant is structural: a record carrying both `name`
    /// and `webSearchUrl` is a trending topic; anything else is a
    /// standard search hit. Trending records must also carry at least
    /// one `image.provider` entry, which supplies the synthesized
    /// description.
    pub fn classify(raw: RawArticle) -> Result<Self, Error> {
        if raw.name.is_some() && raw.web_search_url.is_some() {
            let title = raw.name.ok_or(Error::MissingField("name"))?;
            let url = raw.web_search_url.ok_or(Error::MissingField("webSearchUrl"))?;
            let provider = raw
                .image
                .ok_or(Error::MissingField("image"))?
                .provider
                .into_iter()
                .next()
                .ok_or(Error::EmptyProvider)?;
            Ok(Article::Trending {
                title,
                provider,
                url,
            })
        } else {
            Ok(Article::Standard {
                title: raw.name.ok_or(Error::MissingField("name"))?,
                description: raw.description.ok_or(Error::MissingField("description"))?,
                url: raw.url.ok_or(Error::MissingField("url"))?,
            })
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Article::Standard { title, .. } | Article::Trending { title, .. } => title,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Article::Standard { url, .. } | Article::Trending { url, .. } => url,
        }
    }

    /// The description shown in the table. Trending topics have no
    /// natural description, so one is synthesized from the provider.
    pub fn display_description(&self) -> String {
        match self {
            Article::Standard { description, .. } => description.clone(),
            Article::Trending { provider, .. } => {
                format!("Provided by {}, an {}.", provider.name, provider.kind)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> RawArticle {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_response_without_value_fails_decode() {
        let result: Result<SearchResponse, _> =
            serde_json::from_str(r#"{"totalEstimatedMatches": 12}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("value"), "unexpected error: {err}");
    }

    #[test]
    fn test_response_decodes_value_and_total() {
        let response: SearchResponse = serde_json::from_str(
            r#"{
                "value": [
                    {"name": "A headline", "description": "Words.", "url": "https://example.com/a"}
                ],
                "totalEstimatedMatches": 42
            }"#,
        )
        .unwrap();
        assert_eq!(response.value.len(), 1);
        assert_eq!(response.total_estimated_matches, Some(42));
    }

    #[test]
    fn test_standard_record_classifies_as_standard() {
        let raw = decode(
            r#"{"name": "A headline", "description": "Words.", "url": "https://example.com/a"}"#,
        );
        let article = Article::classify(raw).unwrap();
        assert!(matches!(article, Article::Standard { .. }));
        assert_eq!(article.title(), "A headline");
        assert_eq!(article.url(), "https://example.com/a");
        assert_eq!(article.display_description(), "Words.");
    }

    #[test]
    fn test_name_plus_web_search_url_classifies_as_trending() {
        let raw = decode(
            r#"{
                "name": "Budget vote",
                "webSearchUrl": "https://bing.com/search?q=budget",
                "image": {"provider": [{"name": "Reuters", "_type": "Organization"}]}
            }"#,
        );
        let article = Article::classify(raw).unwrap();
        assert!(matches!(article, Article::Trending { .. }));
        assert_eq!(article.url(), "https://bing.com/search?q=budget");
        assert_eq!(
            article.display_description(),
            "Provided by Reuters, an Organization."
        );
    }

    #[test]
    fn test_web_search_url_without_name_stays_standard() {
        // Only the presence of BOTH keys flips a record to trending,
        // and the standard shape still requires `name`.
        let raw = decode(
            r#"{
                "description": "Words.",
                "url": "https://example.com/a",
                "webSearchUrl": "https://bing.com/search?q=a"
            }"#,
        );
        let err = Article::classify(raw).unwrap_err();
        assert!(matches!(err, Error::MissingField("name")));
    }

    #[test]
    fn test_trending_record_with_empty_provider_is_named_error() {
        let raw = decode(
            r#"{
                "name": "Budget vote",
                "webSearchUrl": "https://bing.com/search?q=budget",
                "image": {"provider": []}
            }"#,
        );
        assert!(matches!(
            Article::classify(raw).unwrap_err(),
            Error::EmptyProvider
        ));
    }

    #[test]
    fn test_trending_record_without_image_is_field_error() {
        let raw = decode(
            r#"{"name": "Budget vote", "webSearchUrl": "https://bing.com/search?q=budget"}"#,
        );
        assert!(matches!(
            Article::classify(raw).unwrap_err(),
            Error::MissingField("image")
        ));
    }

    #[test]
    fn test_standard_record_missing_description_is_field_error() {
        let raw = decode(r#"{"name": "A headline", "url": "https://example.com/a"}"#);
        assert!(matches!(
            Article::classify(raw).unwrap_err(),
            Error::MissingField("description")
        ));
    }
}
