//! Blog search via the Naver Open API.
//!
//! Naver wraps matched query terms in `<b>` tags and escapes entities in
//! titles and descriptions, so both fields go through markup stripping.
//! Credentials travel as request headers rather than query parameters.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::provider::SearchProvider;
use crate::text::clean_html_text;
use crate::types::{SearchResult, Source};
use serde::Deserialize;

const SEARCH_URL: &str = "https://openapi.naver.com/v1/search/blog.json";

/// Keep the blog display count aligned with the other providers' cap.
const UPSTREAM_MAX_RESULTS: usize = 10;

/// Naver blog search adapter.
pub struct NaverProvider;

impl SearchProvider for NaverProvider {
    async fn search(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let (Some(client_id), Some(client_secret)) = (
            config.credentials.naver_client_id.as_deref(),
            config.credentials.naver_client_secret.as_deref(),
        ) else {
            tracing::debug!("Naver search skipped: client id or secret not configured");
            return Ok(Vec::new());
        };

        tracing::trace!(query, "Naver blog search");

        let client = http::build_client(config)?;
        let limit = config.max_results.clamp(1, UPSTREAM_MAX_RESULTS);
        let display = limit.to_string();

        let response = client
            .get(SEARCH_URL)
            .query(&[("query", query), ("display", display.as_str())])
            .header("X-Naver-Client-Id", client_id)
            .header("X-Naver-Client-Secret", client_secret)
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("Naver request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("Naver API error: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Http(format!("Naver response read failed: {e}")))?;

        parse_search_json(&body, limit)
    }

    fn source_type(&self) -> Source {
        Source::Naver
    }
}

#[derive(Debug, Deserialize)]
struct BlogSearchResponse {
    #[serde(default)]
    items: Vec<BlogSearchItem>,
}

#[derive(Debug, Default, Deserialize)]
struct BlogSearchItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    link: String,
}

/// Parse a Naver blog search JSON response into normalized results.
pub(crate) fn parse_search_json(
    json: &str,
    max_results: usize,
) -> Result<Vec<SearchResult>, SearchError> {
    let body: BlogSearchResponse = serde_json::from_str(json)
        .map_err(|e| SearchError::Parse(format!("Naver response: {e}")))?;

    let results: Vec<SearchResult> = body
        .items
        .into_iter()
        .take(max_results)
        .map(|item| SearchResult {
            title: clean_html_text(&item.title),
            url: item.link,
            snippet: clean_html_text(&item.description),
            source: Source::Naver,
            score: 0.0,
            published_at: None,
        })
        .collect();

    tracing::debug!(count = results.len(), "Naver results parsed");
    Ok(results)
}
