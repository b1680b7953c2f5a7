//! Core search orchestrator: concurrent multi-source fan-out, score, rank.
//!
//! Queries all configured sources concurrently, waits for every call to
//! settle, drops individual failures, scores the merged results, sorts
//! them deterministically, and truncates to the requested bound.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::provider::SearchProvider;
use crate::providers::{GoogleProvider, NaverProvider, YoutubeProvider};
use crate::types::{SearchResult, Source};
use chrono::{DateTime, Utc};

use super::scoring::score_results;

/// Lower bound on the caller's result limit.
pub const MIN_RESULTS: usize = 1;

/// Upper bound on the caller's result limit.
pub const MAX_RESULTS: usize = 10;

/// Orchestrate a concurrent search across the configured sources.
///
/// # Pipeline
///
/// 1. Fan out one adapter call per source in `config.sources` with
///    [`futures::future::join_all`]
/// 2. Wait for all calls to settle; log failed sources at warn level and
///    drop them — a single provider's failure must not abort the rest
/// 3. Merge successful results in source order
/// 4. Score every result against the query (see
///    [`super::scoring::score_result`])
/// 5. Sort by score descending; the sort is stable so ties keep their
///    merge order
/// 6. Truncate to `config.max_results` clamped into
///    `[MIN_RESULTS, MAX_RESULTS]`
///
/// An empty source list, unconfigured providers, and even every provider
/// failing all yield `Ok(vec![])` — an empty result set is a valid
/// outcome, not an error.
pub async fn orchestrate_search(
    query: &str,
    config: &SearchConfig,
) -> Result<Vec<SearchResult>, SearchError> {
    let futures: Vec<_> = config
        .sources
        .iter()
        .map(|source| {
            let q = query.to_string();
            let cfg = config.clone();
            let src = *source;
            async move {
                let outcome = query_provider(src, &q, &cfg).await;
                (src, outcome)
            }
        })
        .collect();

    let outcomes = futures::future::join_all(futures).await;

    let mut merged: Vec<SearchResult> = Vec::new();
    for (source, outcome) in outcomes {
        match outcome {
            Ok(results) => {
                tracing::debug!(%source, count = results.len(), "source returned results");
                merged.extend(results);
            }
            Err(err) => {
                tracing::warn!(%source, error = %err, "source query failed, dropping it");
            }
        }
    }

    Ok(rank(merged, query, config.max_results, Utc::now()))
}

/// Score, sort, and truncate merged results.
///
/// Exposed separately so the ranking step can be exercised with a pinned
/// timestamp and synthetic results.
pub fn rank(
    mut results: Vec<SearchResult>,
    query: &str,
    max_results: usize,
    now: DateTime<Utc>,
) -> Vec<SearchResult> {
    score_results(&mut results, query, now);
    // Stable sort: equal scores keep their merge (encounter) order.
    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    results.truncate(max_results.clamp(MIN_RESULTS, MAX_RESULTS));
    results
}

/// Query a single source, dispatching to the concrete adapter.
async fn query_provider(
    source: Source,
    query: &str,
    config: &SearchConfig,
) -> Result<Vec<SearchResult>, SearchError> {
    match source {
        Source::Youtube => YoutubeProvider.search(query, config).await,
        Source::Google => GoogleProvider.search(query, config).await,
        Source::Naver => NaverProvider.search(query, config).await,
    }
}
