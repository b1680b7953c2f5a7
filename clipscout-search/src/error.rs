//! Error types for the clipscout-search crate.
//!
//! All errors use stable string messages suitable for display and
//! programmatic handling. No API keys or credential material appears in
//! error messages.

/// Errors that can occur while querying an upstream search provider.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// An HTTP request to an upstream API failed (transport error,
    /// timeout, or non-success status).
    #[error("HTTP error: {0}")]
    Http(String),

    /// Failed to parse an upstream API response body.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for clipscout-search results.
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_http() {
        let err = SearchError::Http("connection refused".into());
        assert_eq!(err.to_string(), "HTTP error: connection refused");
    }

    #[test]
    fn display_parse() {
        let err = SearchError::Parse("unexpected response shape".into());
        assert_eq!(err.to_string(), "parse error: unexpected response shape");
    }

    #[test]
    fn display_config() {
        let err = SearchError::Config("timeout_seconds must be > 0".into());
        assert_eq!(err.to_string(), "config error: timeout_seconds must be > 0");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchError>();
    }
}
