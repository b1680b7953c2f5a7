//! Trait definition for pluggable search provider adapters.
//!
//! Each upstream source (YouTube, Google, Naver) implements
//! [`SearchProvider`] to provide a uniform interface for querying and
//! normalizing results.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::types::{SearchResult, Source};

/// A pluggable search provider adapter.
///
/// Implementors map one upstream API call to normalized
/// [`SearchResult`] values. Each adapter handles its own:
///
/// - upstream request construction with query encoding and credentials
/// - capping the requested item count to the upstream's accepted maximum
/// - markup stripping and whitespace collapsing of titles/snippets
/// - mapping heterogeneous upstream fields into [`SearchResult`]
///
/// An adapter whose credentials are absent returns an empty result set
/// rather than an error ("not configured" is distinct from "failed").
/// Adapters perform no retries; a failed call simply yields zero results
/// from that source once the orchestrator drops the failure.
///
/// All implementations must be `Send + Sync` for concurrent fan-out.
pub trait SearchProvider: Send + Sync {
    /// Query the upstream and return normalized results.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the HTTP request fails, the upstream
    /// returns a non-success status, or the response cannot be parsed.
    fn search(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> impl std::future::Future<Output = Result<Vec<SearchResult>, SearchError>> + Send;

    /// Returns which [`Source`] this adapter queries.
    fn source_type(&self) -> Source;

    /// Returns the base relevance weight for results from this source.
    ///
    /// Typically delegates to [`Source::base_weight()`].
    fn base_weight(&self) -> f64 {
        self.source_type().base_weight()
    }
}
