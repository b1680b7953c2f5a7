//! Shared HTTP client construction for upstream API requests.

use crate::config::SearchConfig;
use crate::error::SearchError;
use std::time::Duration;

/// Build a [`reqwest::Client`] configured for upstream API calls.
///
/// The timeout bounds the entire request; a timed-out call surfaces as an
/// ordinary [`SearchError::Http`] and is never retried.
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed.
pub fn build_client(config: &SearchConfig) -> Result<reqwest::Client, SearchError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}
