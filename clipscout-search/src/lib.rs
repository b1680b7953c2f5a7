//! # clipscout-search
//!
//! Multi-source web search aggregation for clipscout.
//!
//! This crate queries several upstream content APIs — YouTube video
//! search, Google Custom Search, Naver blog search — concurrently,
//! normalizes their inconsistent response shapes into one schema, and
//! ranks the merged results with a deterministic relevance score. It
//! compiles into the clipscout service as a library dependency.
//!
//! ## Design
//!
//! - One adapter per upstream source behind [`SearchProvider`]
//! - Concurrent fan-out that waits for every source to settle and drops
//!   individual failures — one bad provider never blanks the response
//! - An unconfigured provider (absent credentials) contributes zero
//!   results instead of an error
//! - Scoring from source weight, publish recency, and query-term match,
//!   clamped to `[0, 1]`; stable sort; bounded result count
//!
//! ## Security
//!
//! - Credentials are passed in explicitly and never logged
//! - No network listeners — this is a library, not a server
//! - Search queries are logged only at trace level

pub mod config;
pub mod error;
pub mod http;
pub mod orchestrator;
pub mod provider;
pub mod providers;
pub mod text;
pub mod types;

pub use config::{Credentials, SearchConfig};
pub use error::{Result, SearchError};
pub use provider::SearchProvider;
pub use types::{SearchResult, Source};

/// Search the configured sources concurrently and return ranked results.
///
/// Queries every source in `config.sources`, merges and scores the
/// results, and returns up to `config.max_results` items (clamped into
/// `[1, 10]`) sorted by descending score. Sources whose credentials are
/// absent and sources whose calls fail both contribute zero results; an
/// empty result set is a valid outcome.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if the configuration is invalid.
/// Individual provider failures are logged and swallowed, never
/// surfaced.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> clipscout_search::Result<()> {
/// let config = clipscout_search::SearchConfig {
///     credentials: clipscout_search::Credentials::from_env(),
///     ..Default::default()
/// };
/// let results = clipscout_search::search("budget laptop", &config).await?;
/// for result in &results {
///     println!("{:.2} {}: {}", result.score, result.source, result.title);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(query: &str, config: &SearchConfig) -> Result<Vec<SearchResult>> {
    config.validate()?;
    orchestrator::search::orchestrate_search(query, config).await
}
