//! YouTube video search via the Data API v3 `search.list` endpoint.
//!
//! The only source that carries a publish timestamp, so YouTube results
//! are eligible for the recency bonus during scoring.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::provider::SearchProvider;
use crate::text::collapse_whitespace;
use crate::types::{SearchResult, Source};
use chrono::{DateTime, Utc};
use serde::Deserialize;

const SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";

/// The most results `search.list` hands back per request on this tier.
const UPSTREAM_MAX_RESULTS: usize = 10;

/// YouTube Data API search adapter.
pub struct YoutubeProvider;

impl SearchProvider for YoutubeProvider {
    async fn search(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let Some(api_key) = config.credentials.youtube_api_key.as_deref() else {
            tracing::debug!("YouTube search skipped: no API key configured");
            return Ok(Vec::new());
        };

        tracing::trace!(query, "YouTube search");

        let client = http::build_client(config)?;
        let limit = config.max_results.clamp(1, UPSTREAM_MAX_RESULTS).to_string();

        let response = client
            .get(SEARCH_URL)
            .query(&[
                ("part", "snippet"),
                ("type", "video"),
                ("q", query),
                ("maxResults", limit.as_str()),
                ("key", api_key),
            ])
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("YouTube request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("YouTube API error: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Http(format!("YouTube response read failed: {e}")))?;

        parse_search_json(&body)
    }

    fn source_type(&self) -> Source {
        Source::Youtube
    }
}

// Explicit response shape: every field defaults when absent so a sparse
// upstream payload normalizes instead of failing.

#[derive(Debug, Deserialize)]
struct SearchListResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchItem {
    #[serde(default)]
    id: ItemId,
    #[serde(default)]
    snippet: ItemSnippet,
}

#[derive(Debug, Default, Deserialize)]
struct ItemId {
    #[serde(rename = "videoId", default)]
    video_id: String,
}

#[derive(Debug, Default, Deserialize)]
struct ItemSnippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(rename = "publishedAt", default)]
    published_at: String,
}

/// Parse a `search.list` JSON response into normalized results.
///
/// Extracted as a separate function for testability with fixture JSON.
pub(crate) fn parse_search_json(json: &str) -> Result<Vec<SearchResult>, SearchError> {
    let body: SearchListResponse = serde_json::from_str(json)
        .map_err(|e| SearchError::Parse(format!("YouTube response: {e}")))?;

    let results: Vec<SearchResult> = body
        .items
        .into_iter()
        .filter(|item| !item.id.video_id.is_empty())
        .map(|item| SearchResult {
            title: collapse_whitespace(&item.snippet.title),
            url: format!("https://www.youtube.com/watch?v={}", item.id.video_id),
            snippet: collapse_whitespace(&item.snippet.description),
            source: Source::Youtube,
            score: 0.0,
            published_at: DateTime::parse_from_rfc3339(&item.snippet.published_at)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
        })
        .collect();

    tracing::debug!(count = results.len(), "YouTube results parsed");
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOCK_SEARCH_JSON: &str = r#"{
        "kind": "youtube#searchListResponse",
        "items": [
            {
                "id": {"kind": "youtube#video", "videoId": "abc123"},
                "snippet": {
                    "title": "  Budget   Laptop Review ",
                    "description": "The best\nbudget laptops of the year.",
                    "publishedAt": "2024-05-01T12:00:00Z"
                }
            },
            {
                "id": {"kind": "youtube#video", "videoId": "def456"},
                "snippet": {
                    "title": "Second video",
                    "description": "Another description",
                    "publishedAt": "not-a-timestamp"
                }
            },
            {
                "id": {"kind": "youtube#channel"},
                "snippet": {"title": "A channel, not a video"}
            }
        ]
    }"#;

    #[test]
    fn parse_mock_json_returns_results() {
        let results = parse_search_json(MOCK_SEARCH_JSON).expect("should parse");
        assert_eq!(results.len(), 2);

        assert_eq!(results[0].title, "Budget Laptop Review");
        assert_eq!(results[0].url, "https://www.youtube.com/watch?v=abc123");
        assert_eq!(results[0].snippet, "The best budget laptops of the year.");
        assert_eq!(results[0].source, Source::Youtube);
        assert!(results[0].published_at.is_some());
    }

    #[test]
    fn unparseable_timestamp_becomes_none() {
        let results = parse_search_json(MOCK_SEARCH_JSON).expect("should parse");
        assert!(results[1].published_at.is_none());
    }

    #[test]
    fn items_without_video_id_are_skipped() {
        let results = parse_search_json(MOCK_SEARCH_JSON).expect("should parse");
        assert!(results.iter().all(|r| !r.url.ends_with("v=")));
    }

    #[test]
    fn parse_empty_items_returns_empty() {
        let results = parse_search_json(r#"{"items": []}"#).expect("should parse");
        assert!(results.is_empty());
    }

    #[test]
    fn parse_missing_items_returns_empty() {
        let results = parse_search_json(r#"{"kind": "youtube#searchListResponse"}"#)
            .expect("should parse");
        assert!(results.is_empty());
    }

    #[test]
    fn parse_malformed_json_is_an_error() {
        assert!(parse_search_json("not json").is_err());
    }

    #[tokio::test]
    async fn missing_api_key_yields_empty_not_error() {
        let provider = YoutubeProvider;
        let config = SearchConfig::default();
        let results = provider.search("anything", &config).await;
        assert!(results.expect("should succeed").is_empty());
    }

    #[test]
    fn source_type_is_youtube() {
        assert_eq!(YoutubeProvider.source_type(), Source::Youtube);
    }

    #[test]
    fn is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<YoutubeProvider>();
    }
}
