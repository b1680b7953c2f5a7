//! Video-ingest endpoint: resolve metadata and collect comments for a
//! video URL.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::youtube::{extract_video_id, CommentRecord, CommentSort};

/// Query parameters for `GET /api/youtube/ingest`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestParams {
    #[serde(default)]
    video_url: Option<String>,
    #[serde(default)]
    sort_by: Option<String>,
    #[serde(default)]
    max_comments: Option<String>,
}

/// Response payload: video metadata plus the bounded comment list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestResponse {
    pub video_id: String,
    pub title: String,
    pub thumbnail_url: String,
    pub thumbnail_alt: String,
    pub comments: Vec<CommentRecord>,
}

/// `GET /api/youtube/ingest?videoUrl=...&sortBy=likes&maxComments=300`
///
/// Metadata resolution and comment collection run concurrently; either
/// failing fails the request — a video payload without title/thumbnail
/// is not useful.
pub async fn video_ingest(
    State(state): State<AppState>,
    Query(params): Query<IngestParams>,
) -> AppResult<Json<IngestResponse>> {
    let video_url = params
        .video_url
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::bad_request("videoUrl required"))?;

    let video_id = extract_video_id(video_url)
        .ok_or_else(|| AppError::bad_request("invalid videoUrl"))?;

    let sort = CommentSort::parse(params.sort_by.as_deref().unwrap_or("likes"));
    let max_comments = params
        .max_comments
        .as_deref()
        .and_then(|v| v.parse::<i64>().ok())
        .map(|v| v.clamp(0, i64::MAX) as usize)
        .unwrap_or(state.config.default_max_comments);

    tracing::debug!(%video_id, ?sort, max_comments, "ingest start");

    let (meta, comments) = tokio::join!(
        state.youtube.fetch_video_meta(&video_id),
        state.youtube.collect_comments(&video_id, sort, max_comments),
    );
    let meta = meta?;
    let comments = comments?;

    tracing::debug!(%video_id, comments = comments.len(), "ingest complete");

    Ok(Json(IngestResponse {
        video_id,
        title: meta.title,
        thumbnail_url: meta.thumbnail_url,
        thumbnail_alt: meta.thumbnail_alt,
        comments,
    }))
}
