//! Paginated comment collection with cross-sweep deduplication.
//!
//! A collection run pages through `commentThreads.list` under two
//! orderings — relevance-first, then time-first — deduplicating by
//! thread id in a request-scoped map. The two sweeps overlap heavily on
//! popular videos; the map collapses them. The merged set is then sorted
//! by the caller-chosen key and truncated to a bounded count.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Result, YoutubeClient, YoutubeError};

/// Lower bound on the collected-comment count.
pub const MIN_COMMENTS: usize = 100;

/// Upper bound on the collected-comment count.
pub const MAX_COMMENTS: usize = 300;

/// Comments requested per page (upstream maximum).
const PAGE_SIZE: usize = 100;

/// Pages fetched per ordering sweep.
const PAGE_BUDGET: usize = 3;

/// A single top-level comment, keyed by its upstream-unique thread id.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRecord {
    /// Upstream thread id; the deduplication key.
    pub id: String,
    /// Comment text (display form, falling back to the original).
    pub text: String,
    /// Like count at fetch time.
    pub like_count: u64,
    /// Publish timestamp; epoch when the upstream value is absent or
    /// unparseable.
    pub published_at: DateTime<Utc>,
    /// Author display name.
    pub author: String,
}

/// Sort key for the final comment list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentSort {
    /// Most-liked first (the default).
    #[default]
    Likes,
    /// Most recent first.
    Time,
}

impl CommentSort {
    /// Parse the `sortBy` request parameter. Unknown values fall back
    /// to likes.
    pub fn parse(value: &str) -> Self {
        match value {
            "time" => Self::Time,
            _ => Self::Likes,
        }
    }
}

/// The two fixed orderings swept during collection.
#[derive(Debug, Clone, Copy)]
enum SweepOrder {
    Relevance,
    Time,
}

impl SweepOrder {
    fn as_param(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Time => "time",
        }
    }
}

// Explicit `commentThreads.list` response shape; absent fields default
// rather than failing the page.

#[derive(Debug, Deserialize)]
struct CommentThreadsResponse {
    #[serde(default)]
    items: Vec<CommentThread>,
    #[serde(rename = "nextPageToken", default)]
    next_page_token: String,
}

impl CommentThreadsResponse {
    fn terminal() -> Self {
        Self {
            items: Vec::new(),
            next_page_token: String::new(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct CommentThread {
    #[serde(default)]
    id: String,
    #[serde(default)]
    snippet: ThreadSnippet,
}

#[derive(Debug, Default, Deserialize)]
struct ThreadSnippet {
    #[serde(rename = "topLevelComment", default)]
    top_level_comment: TopLevelComment,
}

#[derive(Debug, Default, Deserialize)]
struct TopLevelComment {
    #[serde(default)]
    snippet: CommentSnippet,
}

#[derive(Debug, Default, Deserialize)]
struct CommentSnippet {
    #[serde(rename = "textDisplay", default)]
    text_display: String,
    #[serde(rename = "textOriginal", default)]
    text_original: String,
    #[serde(rename = "likeCount", default)]
    like_count: u64,
    #[serde(rename = "publishedAt", default)]
    published_at: String,
    #[serde(rename = "authorDisplayName", default)]
    author_display_name: String,
}

impl YoutubeClient {
    /// Collect, deduplicate, sort, and bound comments for a video.
    ///
    /// Runs a relevance-first sweep and a time-first sweep, each up to
    /// the page budget; both feed one dedup map. `max_comments` is
    /// clamped into `[MIN_COMMENTS, MAX_COMMENTS]`.
    ///
    /// # Errors
    ///
    /// A page fetch returning a permission/not-found status ends that
    /// sweep silently; any other failure aborts the whole collection.
    pub async fn collect_comments(
        &self,
        video_id: &str,
        sort: CommentSort,
        max_comments: usize,
    ) -> Result<Vec<CommentRecord>> {
        let bound = max_comments.clamp(MIN_COMMENTS, MAX_COMMENTS);
        let mut collected: HashMap<String, CommentRecord> = HashMap::new();

        for order in [SweepOrder::Relevance, SweepOrder::Time] {
            self.sweep(video_id, order, &mut collected).await?;
        }

        tracing::debug!(
            video_id,
            unique = collected.len(),
            bound,
            "comment sweeps complete"
        );

        let mut comments: Vec<CommentRecord> = collected.into_values().collect();
        sort_comments(&mut comments, sort);
        comments.truncate(bound);
        Ok(comments)
    }

    /// Page through one ordering, inserting records into the shared map.
    async fn sweep(
        &self,
        video_id: &str,
        order: SweepOrder,
        collected: &mut HashMap<String, CommentRecord>,
    ) -> Result<()> {
        let mut page_token = String::new();

        for _ in 0..PAGE_BUDGET {
            let page = self
                .fetch_comment_page(video_id, order, &page_token)
                .await?;

            for thread in page.items {
                if thread.id.is_empty() {
                    continue;
                }
                // Later insert for the same id overwrites.
                collected.insert(thread.id.clone(), into_record(thread));
            }

            if page.next_page_token.is_empty() {
                break;
            }
            page_token = page.next_page_token;
        }

        Ok(())
    }

    /// Fetch one comment page.
    ///
    /// A 403/404 response (comments disabled, private video) is treated
    /// as "no more data" and yields an empty terminal page. Any other
    /// non-success status is a hard failure.
    async fn fetch_comment_page(
        &self,
        video_id: &str,
        order: SweepOrder,
        page_token: &str,
    ) -> Result<CommentThreadsResponse> {
        let api_key = self.api_key()?;
        let page_size = PAGE_SIZE.to_string();

        let mut request = self
            .http_client()
            .get(self.url("/commentThreads"))
            .query(&[
                ("part", "snippet"),
                ("videoId", video_id),
                ("maxResults", page_size.as_str()),
                ("order", order.as_param()),
                ("textFormat", "plainText"),
                ("key", api_key),
                (
                    "fields",
                    "items(id,snippet/topLevelComment/snippet(authorDisplayName,likeCount,publishedAt,textDisplay,textOriginal)),nextPageToken",
                ),
            ]);
        if !page_token.is_empty() {
            request = request.query(&[("pageToken", page_token)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| YoutubeError::Http(format!("commentThreads.list failed: {e}")))?;

        let status = response.status();
        if status.as_u16() == 403 || status.as_u16() == 404 {
            tracing::debug!(video_id, order = order.as_param(), %status, "comment page unavailable, ending sweep");
            return Ok(CommentThreadsResponse::terminal());
        }

        let body = response
            .text()
            .await
            .map_err(|e| YoutubeError::Http(format!("commentThreads.list read failed: {e}")))?;

        if !status.is_success() {
            return Err(YoutubeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| YoutubeError::Parse(format!("commentThreads.list: {e}")))
    }
}

fn into_record(thread: CommentThread) -> CommentRecord {
    let snippet = thread.snippet.top_level_comment.snippet;
    let text = if snippet.text_display.is_empty() {
        snippet.text_original
    } else {
        snippet.text_display
    };
    CommentRecord {
        id: thread.id,
        text,
        like_count: snippet.like_count,
        published_at: DateTime::parse_from_rfc3339(&snippet.published_at)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_default(),
        author: snippet.author_display_name,
    }
}

/// Sort descending by the selected key. Secondary keys keep the order
/// deterministic across the map's arbitrary iteration order.
pub(crate) fn sort_comments(comments: &mut [CommentRecord], sort: CommentSort) {
    match sort {
        CommentSort::Likes => comments.sort_by(|a, b| {
            b.like_count
                .cmp(&a.like_count)
                .then_with(|| b.published_at.cmp(&a.published_at))
                .then_with(|| a.id.cmp(&b.id))
        }),
        CommentSort::Time => comments.sort_by(|a, b| {
            b.published_at
                .cmp(&a.published_at)
                .then_with(|| b.like_count.cmp(&a.like_count))
                .then_with(|| a.id.cmp(&b.id))
        }),
    }
}
