//! YouTube Data API client: metadata lookup and comment collection.
//!
//! The client owns a configured [`reqwest::Client`] and the API key; the
//! base URL is injectable so tests can point it at a mock server.

pub mod comments;
pub mod metadata;
pub mod video_id;

pub use comments::{CommentRecord, CommentSort};
pub use metadata::VideoMeta;
pub use video_id::extract_video_id;

/// Errors from the YouTube Data API client.
#[derive(Debug, thiserror::Error)]
pub enum YoutubeError {
    /// No API key configured; the ingest path has no fallback.
    #[error("YOUTUBE_API_KEY missing")]
    MissingApiKey,

    /// Transport-level failure (connection error or timeout).
    #[error("YouTube request failed: {0}")]
    Http(String),

    /// Non-success status from the API, with the response body.
    #[error("YouTube API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The video id resolved to zero upstream items.
    #[error("video not found")]
    VideoNotFound,

    /// The response body could not be parsed.
    #[error("YouTube response parse error: {0}")]
    Parse(String),
}

/// Convenience type alias for YouTube client results.
pub type Result<T> = std::result::Result<T, YoutubeError>;

/// Client for the YouTube Data API v3.
pub struct YoutubeClient {
    client: reqwest::Client,
    api_base: String,
    api_key: Option<String>,
}

impl YoutubeClient {
    /// Create a client from a pre-built [`reqwest::Client`].
    ///
    /// `api_key` may be absent; every call then fails with
    /// [`YoutubeError::MissingApiKey`].
    pub fn new(client: reqwest::Client, api_base: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client,
            api_base: api_base.into(),
            api_key,
        }
    }

    pub(crate) fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or(YoutubeError::MissingApiKey)
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    pub(crate) fn http_client(&self) -> &reqwest::Client {
        &self.client
    }
}
