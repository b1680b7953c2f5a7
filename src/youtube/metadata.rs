//! Video metadata resolution: title and thumbnail via `videos.list`.

use serde::{Deserialize, Serialize};

use super::{Result, YoutubeClient, YoutubeError};

/// Resolved metadata for a single video.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMeta {
    /// Video title.
    pub title: String,
    /// Best available thumbnail URL, possibly empty.
    pub thumbnail_url: String,
    /// Alternative text for the thumbnail. Upstream provides none.
    pub thumbnail_alt: String,
}

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Default, Deserialize)]
struct VideoItem {
    #[serde(default)]
    snippet: VideoSnippet,
}

#[derive(Debug, Default, Deserialize)]
struct VideoSnippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    thumbnails: ThumbnailSet,
}

#[derive(Debug, Default, Deserialize)]
struct ThumbnailSet {
    #[serde(default)]
    maxres: Option<Thumbnail>,
    #[serde(default)]
    high: Option<Thumbnail>,
    #[serde(default)]
    medium: Option<Thumbnail>,
    #[serde(rename = "default", default)]
    fallback: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    #[serde(default)]
    url: String,
}

impl ThumbnailSet {
    /// Fixed-priority resolution fallback: maxres → high → medium →
    /// default → empty.
    fn pick_url(self) -> String {
        [self.maxres, self.high, self.medium, self.fallback]
            .into_iter()
            .flatten()
            .map(|t| t.url)
            .find(|url| !url.is_empty())
            .unwrap_or_default()
    }
}

impl YoutubeClient {
    /// Resolve title and thumbnail for a video id.
    ///
    /// # Errors
    ///
    /// [`YoutubeError::VideoNotFound`] when the upstream returns zero
    /// matching items; [`YoutubeError::Api`]/[`YoutubeError::Http`] on
    /// call failure.
    pub async fn fetch_video_meta(&self, video_id: &str) -> Result<VideoMeta> {
        let api_key = self.api_key()?;

        let response = self
            .http_client()
            .get(self.url("/videos"))
            .query(&[
                ("part", "snippet"),
                ("id", video_id),
                ("key", api_key),
                ("fields", "items(id,snippet(title,thumbnails))"),
            ])
            .send()
            .await
            .map_err(|e| YoutubeError::Http(format!("videos.list failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| YoutubeError::Http(format!("videos.list read failed: {e}")))?;

        if !status.is_success() {
            return Err(YoutubeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: VideoListResponse = serde_json::from_str(&body)
            .map_err(|e| YoutubeError::Parse(format!("videos.list: {e}")))?;

        let item = parsed
            .items
            .into_iter()
            .next()
            .ok_or(YoutubeError::VideoNotFound)?;

        Ok(VideoMeta {
            title: item.snippet.title,
            thumbnail_url: item.snippet.thumbnails.pick_url(),
            thumbnail_alt: String::new(),
        })
    }
}
