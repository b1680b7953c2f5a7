//! Search configuration and per-provider credentials.
//!
//! [`SearchConfig`] controls which sources are queried, the result bound,
//! and the per-request timeout. [`Credentials`] carries the upstream API
//! keys; a provider whose credentials are absent is silently skipped
//! rather than treated as an error.

use crate::error::SearchError;
use crate::types::Source;
use std::fmt;

/// API credentials for the upstream search providers.
///
/// Every field is optional: an unconfigured provider simply contributes
/// zero results. Credentials are passed in explicitly (rather than read
/// from globals) so tests can inject fakes.
#[derive(Clone, Default)]
pub struct Credentials {
    /// YouTube Data API key.
    pub youtube_api_key: Option<String>,
    /// Google Custom Search API key.
    pub google_api_key: Option<String>,
    /// Google Custom Search engine identifier.
    pub google_cx: Option<String>,
    /// Naver Open API client id.
    pub naver_client_id: Option<String>,
    /// Naver Open API client secret.
    pub naver_client_secret: Option<String>,
}

impl Credentials {
    /// Load credentials from the process environment.
    ///
    /// Missing or empty variables leave the corresponding provider
    /// unconfigured.
    pub fn from_env() -> Self {
        Self {
            youtube_api_key: env_non_empty("YOUTUBE_API_KEY"),
            google_api_key: env_non_empty("GOOGLE_API_KEY"),
            google_cx: env_non_empty("GOOGLE_CX"),
            naver_client_id: env_non_empty("NAVER_CLIENT_ID"),
            naver_client_secret: env_non_empty("NAVER_CLIENT_SECRET"),
        }
    }

    /// Whether the given source has the credentials it needs to be queried.
    pub fn configured_for(&self, source: Source) -> bool {
        match source {
            Source::Youtube => self.youtube_api_key.is_some(),
            Source::Google => self.google_api_key.is_some() && self.google_cx.is_some(),
            Source::Naver => {
                self.naver_client_id.is_some() && self.naver_client_secret.is_some()
            }
        }
    }
}

// Credentials never appear in logs or error output; Debug shows only
// which providers are configured.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("youtube", &self.youtube_api_key.is_some())
            .field("google", &(self.google_api_key.is_some() && self.google_cx.is_some()))
            .field(
                "naver",
                &(self.naver_client_id.is_some() && self.naver_client_secret.is_some()),
            )
            .finish()
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Configuration for one search operation.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Which sources to query. Queried concurrently; results are merged.
    /// An empty list is valid and yields an empty result set.
    pub sources: Vec<Source>,
    /// Maximum number of results to return after ranking. Clamped into
    /// `[1, 10]` by the orchestrator.
    pub max_results: usize,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// Upstream API credentials.
    pub credentials: Credentials,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            sources: Source::all().to_vec(),
            max_results: 5,
            timeout_seconds: 8,
            credentials: Credentials::default(),
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is
    /// invalid.
    ///
    /// An empty `sources` list and an out-of-range `max_results` are both
    /// permitted: the former is a valid empty outcome, the latter is
    /// clamped during ranking.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = SearchConfig::default();
        assert_eq!(config.sources.len(), 3);
        assert_eq!(config.max_results, 5);
        assert_eq!(config.timeout_seconds, 8);
    }

    #[test]
    fn valid_config_passes_validation() {
        assert!(SearchConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = SearchConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_seconds"));
    }

    #[test]
    fn empty_sources_is_valid() {
        let config = SearchConfig {
            sources: vec![],
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unconfigured_credentials_match_no_source() {
        let creds = Credentials::default();
        for source in Source::all() {
            assert!(!creds.configured_for(*source));
        }
    }

    #[test]
    fn google_requires_both_key_and_cx() {
        let creds = Credentials {
            google_api_key: Some("key".into()),
            ..Default::default()
        };
        assert!(!creds.configured_for(Source::Google));

        let creds = Credentials {
            google_api_key: Some("key".into()),
            google_cx: Some("cx".into()),
            ..Default::default()
        };
        assert!(creds.configured_for(Source::Google));
    }

    #[test]
    fn naver_requires_both_id_and_secret() {
        let creds = Credentials {
            naver_client_id: Some("id".into()),
            ..Default::default()
        };
        assert!(!creds.configured_for(Source::Naver));

        let creds = Credentials {
            naver_client_id: Some("id".into()),
            naver_client_secret: Some("secret".into()),
            ..Default::default()
        };
        assert!(creds.configured_for(Source::Naver));
    }

    #[test]
    fn debug_output_never_leaks_key_material() {
        let creds = Credentials {
            youtube_api_key: Some("super-secret-key".into()),
            ..Default::default()
        };
        let rendered = format!("{creds:?}");
        assert!(!rendered.contains("super-secret-key"));
        assert!(rendered.contains("youtube: true"));
    }
}
