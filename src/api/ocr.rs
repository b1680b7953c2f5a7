//! OCR passthrough endpoint.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /api/thumbnail/ocr`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrParams {
    #[serde(default)]
    image_url: Option<String>,
}

/// Response payload: the normalized extracted text.
#[derive(Debug, Serialize)]
pub struct OcrResponse {
    pub text: String,
}

/// `GET /api/thumbnail/ocr?imageUrl=...`
pub async fn thumbnail_ocr(
    State(state): State<AppState>,
    Query(params): Query<OcrParams>,
) -> AppResult<Json<OcrResponse>> {
    let image_url = params
        .image_url
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::bad_request("imageUrl required"))?;

    let text = state.ocr.extract_text(image_url).await?;
    Ok(Json(OcrResponse { text }))
}
