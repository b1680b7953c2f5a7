//! Core types for aggregated search results and source identification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single normalized result from one of the upstream content APIs.
///
/// Adapters are responsible for collapsing whitespace and stripping any
/// markup the upstream embeds before constructing one of these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// The title of the result, whitespace-collapsed and markup-free.
    pub title: String,
    /// The URL of the result.
    pub url: String,
    /// A short text snippet, whitespace-collapsed and markup-free.
    pub snippet: String,
    /// Which upstream source returned this result.
    pub source: Source,
    /// Relevance score in `[0, 1]`, assigned by the scoring engine.
    pub score: f64,
    /// Publish timestamp for sources that carry one. Drives the recency
    /// bonus during scoring; never serialized into responses.
    #[serde(skip)]
    pub published_at: Option<DateTime<Utc>>,
}

/// Upstream content sources that clipscout-search can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Video platform search — freshest, highest engagement value.
    Youtube,
    /// Generic web search via a programmable search API.
    Google,
    /// Blog search — embeds HTML markup in titles and snippets.
    Naver,
}

impl Source {
    /// Returns the lowercase wire name of this source.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Youtube => "youtube",
            Self::Google => "google",
            Self::Naver => "naver",
        }
    }

    /// Returns the base relevance weight for results from this source.
    ///
    /// Reflects assumed result freshness/engagement value: video results
    /// rank highest, generic web next, blog posts lowest.
    pub fn base_weight(&self) -> f64 {
        match self {
            Self::Youtube => 0.5,
            Self::Google => 0.45,
            Self::Naver => 0.4,
        }
    }

    /// Returns all available source variants.
    pub fn all() -> &'static [Source] {
        &[Self::Youtube, Self::Google, Self::Naver]
    }

    /// Parse a wire name back to a [`Source`]. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Source> {
        match name {
            "youtube" => Some(Self::Youtube),
            "google" => Some(Self::Google),
            "naver" => Some(Self::Naver),
            _ => None,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_result_construction() {
        let result = SearchResult {
            title: "Example".into(),
            url: "https://example.com".into(),
            snippet: "An example page".into(),
            source: Source::Google,
            score: 0.45,
            published_at: None,
        };
        assert_eq!(result.title, "Example");
        assert_eq!(result.source, Source::Google);
        assert!((result.score - 0.45).abs() < f64::EPSILON);
    }

    #[test]
    fn search_result_serializes_without_timestamp() {
        let result = SearchResult {
            title: "Test".into(),
            url: "https://test.com".into(),
            snippet: "snippet".into(),
            source: Source::Youtube,
            score: 0.9,
            published_at: Some(Utc::now()),
        };
        let json = serde_json::to_string(&result).expect("serialize");
        assert!(!json.contains("published_at"));
        assert!(json.contains("\"source\":\"youtube\""));
    }

    #[test]
    fn search_result_serde_round_trip() {
        let result = SearchResult {
            title: "Test".into(),
            url: "https://test.com".into(),
            snippet: "snippet".into(),
            source: Source::Naver,
            score: 0.4,
            published_at: None,
        };
        let json = serde_json::to_string(&result).expect("serialize");
        let decoded: SearchResult = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded.title, "Test");
        assert_eq!(decoded.source, Source::Naver);
        assert!(decoded.published_at.is_none());
    }

    #[test]
    fn source_display_matches_name() {
        assert_eq!(Source::Youtube.to_string(), "youtube");
        assert_eq!(Source::Google.to_string(), "google");
        assert_eq!(Source::Naver.to_string(), "naver");
    }

    #[test]
    fn source_weights_descend_by_assumed_value() {
        assert!(Source::Youtube.base_weight() > Source::Google.base_weight());
        assert!(Source::Google.base_weight() > Source::Naver.base_weight());
    }

    #[test]
    fn source_all_lists_every_variant() {
        let all = Source::all();
        assert_eq!(all.len(), 3);
        assert!(all.contains(&Source::Youtube));
        assert!(all.contains(&Source::Naver));
    }

    #[test]
    fn source_parse_round_trips() {
        for source in Source::all() {
            assert_eq!(Source::parse(source.name()), Some(*source));
        }
        assert_eq!(Source::parse("bing"), None);
        assert_eq!(Source::parse(""), None);
    }

    #[test]
    fn source_serde_uses_lowercase() {
        let json = serde_json::to_string(&Source::Youtube).expect("serialize");
        assert_eq!(json, "\"youtube\"");
        let decoded: Source = serde_json::from_str("\"naver\"").expect("deserialize");
        assert_eq!(decoded, Source::Naver);
    }
}
