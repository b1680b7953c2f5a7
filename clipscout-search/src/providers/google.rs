//! Generic web search via the Google Custom Search JSON API.
//!
//! Requires both an API key and a search engine id (`cx`). Results carry
//! no publish timestamp, so they receive no recency bonus.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::provider::SearchProvider;
use crate::text::collapse_whitespace;
use crate::types::{SearchResult, Source};
use serde::Deserialize;

const SEARCH_URL: &str = "https://www.googleapis.com/customsearch/v1";

/// Custom Search returns at most 10 items per request.
const UPSTREAM_MAX_RESULTS: usize = 10;

/// Google Custom Search adapter.
pub struct GoogleProvider;

impl SearchProvider for GoogleProvider {
    async fn search(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let (Some(api_key), Some(cx)) = (
            config.credentials.google_api_key.as_deref(),
            config.credentials.google_cx.as_deref(),
        ) else {
            tracing::debug!("Google search skipped: key or cx not configured");
            return Ok(Vec::new());
        };

        tracing::trace!(query, "Google search");

        let client = http::build_client(config)?;
        let limit = config.max_results.clamp(1, UPSTREAM_MAX_RESULTS);
        let num = limit.to_string();

        let response = client
            .get(SEARCH_URL)
            .query(&[
                ("q", query),
                ("key", api_key),
                ("cx", cx),
                ("num", num.as_str()),
            ])
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("Google request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("Google API error: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Http(format!("Google response read failed: {e}")))?;

        parse_search_json(&body, limit)
    }

    fn source_type(&self) -> Source {
        Source::Google
    }
}

#[derive(Debug, Deserialize)]
struct CustomSearchResponse {
    #[serde(default)]
    items: Vec<CustomSearchItem>,
}

#[derive(Debug, Default, Deserialize)]
struct CustomSearchItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    snippet: String,
    #[serde(default)]
    link: String,
}

/// Parse a Custom Search JSON response into normalized results.
pub(crate) fn parse_search_json(
    json: &str,
    max_results: usize,
) -> Result<Vec<SearchResult>, SearchError> {
    let body: CustomSearchResponse = serde_json::from_str(json)
        .map_err(|e| SearchError::Parse(format!("Google response: {e}")))?;

    let results: Vec<SearchResult> = body
        .items
        .into_iter()
        .take(max_results)
        .map(|item| SearchResult {
            title: collapse_whitespace(&item.title),
            url: item.link,
            snippet: collapse_whitespace(&item.snippet),
            source: Source::Google,
            score: 0.0,
            published_at: None,
        })
        .collect();

    tracing::debug!(count = results.len(), "Google results parsed");
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOCK_SEARCH_JSON: &str = r#"{
        "kind": "customsearch#search",
        "items": [
            {
                "title": "Best budget  laptops 2024",
                "link": "https://example.com/laptops",
                "snippet": "Our picks for the\nbest cheap laptops."
            },
            {
                "title": "Laptop buying guide",
                "link": "https://example.com/guide",
                "snippet": "How to choose a laptop."
            },
            {
                "title": "Third result",
                "link": "https://example.com/third",
                "snippet": "More laptops."
            }
        ]
    }"#;

    #[test]
    fn parse_mock_json_returns_results() {
        let results = parse_search_json(MOCK_SEARCH_JSON, 10).expect("should parse");
        assert_eq!(results.len(), 3);

        assert_eq!(results[0].title, "Best budget laptops 2024");
        assert_eq!(results[0].url, "https://example.com/laptops");
        assert_eq!(results[0].snippet, "Our picks for the best cheap laptops.");
        assert_eq!(results[0].source, Source::Google);
        assert!(results[0].published_at.is_none());
    }

    #[test]
    fn parse_respects_max_results() {
        let results = parse_search_json(MOCK_SEARCH_JSON, 2).expect("should parse");
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn parse_missing_items_returns_empty() {
        let results =
            parse_search_json(r#"{"kind": "customsearch#search"}"#, 10).expect("should parse");
        assert!(results.is_empty());
    }

    #[test]
    fn parse_item_with_missing_fields_defaults() {
        let results =
            parse_search_json(r#"{"items": [{"link": "https://a.com"}]}"#, 10)
                .expect("should parse");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "");
        assert_eq!(results[0].url, "https://a.com");
    }

    #[tokio::test]
    async fn missing_credentials_yield_empty_not_error() {
        let provider = GoogleProvider;
        let config = SearchConfig::default();
        let results = provider.search("anything", &config).await;
        assert!(results.expect("should succeed").is_empty());
    }

    #[tokio::test]
    async fn key_without_cx_yields_empty() {
        let provider = GoogleProvider;
        let mut config = SearchConfig::default();
        config.credentials.google_api_key = Some("key".into());
        let results = provider.search("anything", &config).await;
        assert!(results.expect("should succeed").is_empty());
    }

    #[test]
    fn source_type_is_google() {
        assert_eq!(GoogleProvider.source_type(), Source::Google);
    }
}
