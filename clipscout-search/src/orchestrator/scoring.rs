//! Deterministic relevance scoring for merged search results.
//!
//! Each result's score combines three independent components:
//!
//! - base weight by source (from [`Source::base_weight()`])
//! - a recency bonus for sources that carry a publish timestamp
//! - a query-match bonus for query substrings in the title/snippet
//!
//! The final score is clamped to `[0, 1]`. Scoring is a pure function of
//! `(result, query, now)` and is reproducible given identical inputs.

use crate::types::SearchResult;
use chrono::{DateTime, Utc};

/// Recency decay horizon in days: an item published `now` earns the full
/// bonus, decaying toward zero past roughly three horizons.
const RECENCY_HORIZON_DAYS: f64 = 14.0;

/// Maximum recency bonus.
const RECENCY_MAX_BONUS: f64 = 0.2;

/// Bonus when the lowercased query appears in the lowercased title.
const TITLE_MATCH_BONUS: f64 = 0.25;

/// Bonus when the lowercased query appears in the lowercased snippet.
const SNIPPET_MATCH_BONUS: f64 = 0.15;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Calculate the relevance score for a single result.
///
/// # Scoring formula
///
/// ```text
/// score = clamp(base_weight + recency_bonus + query_match_bonus, 0, 1)
/// recency_bonus = clamp(exp(-age_days / 14) * 0.2, 0, 0.2)   (timestamped sources)
/// query_match_bonus = 0.25·title_contains + 0.15·snippet_contains
/// ```
///
/// `now` is passed explicitly so callers and tests pin the evaluation
/// instant.
pub fn score_result(result: &SearchResult, query: &str, now: DateTime<Utc>) -> f64 {
    let score = result.source.base_weight()
        + recency_bonus(result.published_at, now)
        + query_match_bonus(query, &result.title, &result.snippet);
    score.clamp(0.0, 1.0)
}

/// Assign scores to every result in place.
pub fn score_results(results: &mut [SearchResult], query: &str, now: DateTime<Utc>) {
    for result in results.iter_mut() {
        result.score = score_result(result, query, now);
    }
}

/// Recency bonus for a publish timestamp, zero when absent.
///
/// Ages are floored at zero: a timestamp in the future earns exactly
/// the full bonus.
fn recency_bonus(published_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> f64 {
    let Some(published) = published_at else {
        return 0.0;
    };
    let age_days = (now - published).num_seconds().max(0) as f64 / SECONDS_PER_DAY;
    ((-age_days / RECENCY_HORIZON_DAYS).exp() * RECENCY_MAX_BONUS).clamp(0.0, RECENCY_MAX_BONUS)
}

/// Query-match bonus: substring checks on lowercased title and snippet.
///
/// An empty query earns no bonus. The two components stack.
fn query_match_bonus(query: &str, title: &str, snippet: &str) -> f64 {
    let q = query.to_lowercase();
    if q.is_empty() {
        return 0.0;
    }
    let mut bonus = 0.0;
    if title.to_lowercase().contains(&q) {
        bonus += TITLE_MATCH_BONUS;
    }
    if snippet.to_lowercase().contains(&q) {
        bonus += SNIPPET_MATCH_BONUS;
    }
    bonus
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Source;
    use chrono::Duration;

    fn make_result(source: Source, title: &str, snippet: &str) -> SearchResult {
        SearchResult {
            title: title.to_string(),
            url: "https://example.com".to_string(),
            snippet: snippet.to_string(),
            source,
            score: 0.0,
            published_at: None,
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-06-15T00:00:00Z")
            .expect("valid timestamp")
            .with_timezone(&Utc)
    }

    #[test]
    fn base_weight_only_without_timestamp_or_match() {
        let result = make_result(Source::Google, "title", "snippet");
        let score = score_result(&result, "unrelated", fixed_now());
        assert!((score - 0.45).abs() < f64::EPSILON);
    }

    #[test]
    fn fresh_item_gets_full_recency_bonus() {
        let mut result = make_result(Source::Youtube, "title", "snippet");
        result.published_at = Some(fixed_now());
        let score = score_result(&result, "unrelated", fixed_now());
        assert!((score - 0.7).abs() < 1e-9);
    }

    #[test]
    fn recency_bonus_decays_with_age() {
        let now = fixed_now();
        let mut fresh = make_result(Source::Youtube, "t", "s");
        fresh.published_at = Some(now - Duration::days(1));
        let mut stale = make_result(Source::Youtube, "t", "s");
        stale.published_at = Some(now - Duration::days(30));

        let fresh_score = score_result(&fresh, "", now);
        let stale_score = score_result(&stale, "", now);
        assert!(fresh_score > stale_score);
    }

    #[test]
    fn ancient_timestamp_bonus_approaches_zero() {
        let now = fixed_now();
        let mut result = make_result(Source::Youtube, "t", "s");
        result.published_at = Some(now - Duration::days(3650));
        let score = score_result(&result, "", now);
        assert!((score - Source::Youtube.base_weight()).abs() < 1e-9);
    }

    #[test]
    fn future_timestamp_clamps_to_max_bonus() {
        let now = fixed_now();
        let mut result = make_result(Source::Youtube, "t", "s");
        result.published_at = Some(now + Duration::days(2));
        let score = score_result(&result, "", now);
        assert!((score - 0.7).abs() < 1e-9);
    }

    #[test]
    fn no_timestamp_means_no_recency_bonus() {
        let result = make_result(Source::Naver, "t", "s");
        let score = score_result(&result, "", fixed_now());
        assert!((score - 0.4).abs() < f64::EPSILON);
    }

    #[test]
    fn title_match_adds_quarter_point() {
        let result = make_result(Source::Google, "Best budget laptops", "nothing here");
        let score = score_result(&result, "budget", fixed_now());
        assert!((score - (0.45 + 0.25)).abs() < 1e-9);
    }

    #[test]
    fn snippet_match_adds_fifteen_hundredths() {
        let result = make_result(Source::Google, "nothing here", "a budget pick");
        let score = score_result(&result, "budget", fixed_now());
        assert!((score - (0.45 + 0.15)).abs() < 1e-9);
    }

    #[test]
    fn match_bonuses_stack() {
        let result = make_result(Source::Naver, "budget laptops", "budget laptops again");
        let score = score_result(&result, "budget", fixed_now());
        assert!((score - (0.4 + 0.25 + 0.15)).abs() < 1e-9);
    }

    #[test]
    fn query_match_is_case_insensitive() {
        let result = make_result(Source::Google, "BUDGET Laptops", "s");
        let score = score_result(&result, "Budget", fixed_now());
        assert!((score - (0.45 + 0.25)).abs() < 1e-9);
    }

    #[test]
    fn empty_query_earns_no_match_bonus() {
        let result = make_result(Source::Google, "anything", "anything");
        let score = score_result(&result, "", fixed_now());
        assert!((score - 0.45).abs() < f64::EPSILON);
    }

    #[test]
    fn query_longer_than_content_earns_no_bonus() {
        let result = make_result(Source::Google, "ab", "cd");
        let score = score_result(&result, "a much longer query string", fixed_now());
        assert!((score - 0.45).abs() < f64::EPSILON);
    }

    #[test]
    fn score_never_exceeds_one() {
        let now = fixed_now();
        let mut result = make_result(Source::Youtube, "budget laptops", "budget laptops");
        result.published_at = Some(now);
        // 0.5 + 0.2 + 0.25 + 0.15 = 1.1 before the clamp.
        let score = score_result(&result, "budget", now);
        assert!((score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn scoring_is_deterministic() {
        let now = fixed_now();
        let mut result = make_result(Source::Youtube, "budget", "laptops");
        result.published_at = Some(now - Duration::days(3));
        let a = score_result(&result, "budget", now);
        let b = score_result(&result, "budget", now);
        assert!((a - b).abs() < f64::EPSILON);
    }

    #[test]
    fn score_results_updates_all_in_place() {
        let mut results = vec![
            make_result(Source::Youtube, "budget", "s"),
            make_result(Source::Naver, "t", "s"),
        ];
        score_results(&mut results, "budget", fixed_now());
        assert!((results[0].score - 0.75).abs() < 1e-9);
        assert!((results[1].score - 0.4).abs() < 1e-9);
    }
}
