//! Web-search endpoint: fan out to the configured sources and return
//! ranked, bounded results.

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use clipscout_search::{SearchConfig, SearchResult, Source};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Default result count when `maxResults` is absent or unparseable.
const DEFAULT_MAX_RESULTS: i64 = 5;

/// Short public cache hint; results are stable enough for a minute.
const CACHE_HINT: &str = "s-maxage=60, stale-while-revalidate=120";

/// Query parameters for `GET /api/web/search`.
///
/// `maxResults` arrives as a string and is parsed leniently: a
/// non-numeric value falls back to the default rather than rejecting
/// the request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(default)]
    query: Option<String>,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    max_results: Option<String>,
}

/// Response envelope for the search endpoint.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

/// `GET /api/web/search?query=...&source=all&maxResults=5`
///
/// A blank or missing `query` is a 400. An unknown `source` selects no
/// providers and yields an empty result set; so does a total lack of
/// configured credentials. Neither is an error.
pub async fn web_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let query = params.query.as_deref().map(str::trim).unwrap_or("");
    if query.is_empty() {
        return Err(AppError::bad_request("query required"));
    }

    let sources = resolve_sources(params.source.as_deref().unwrap_or("youtube"));
    let max_results = params
        .max_results
        .as_deref()
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(DEFAULT_MAX_RESULTS)
        .clamp(1, 10) as usize;

    let config = SearchConfig {
        sources,
        max_results,
        timeout_seconds: state.config.timeout_seconds,
        credentials: state.config.search_credentials.clone(),
    };

    let results = clipscout_search::search(query, &config).await?;
    tracing::debug!(query, count = results.len(), "search complete");

    Ok((
        [(header::CACHE_CONTROL, CACHE_HINT)],
        Json(SearchResponse { results }),
    ))
}

/// Map the `source` selector to the active source subset.
fn resolve_sources(selector: &str) -> Vec<Source> {
    match selector {
        "all" => Source::all().to_vec(),
        name => Source::parse(name).map(|s| vec![s]).unwrap_or_default(),
    }
}
