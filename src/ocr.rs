//! OCR passthrough client.
//!
//! Thin wrapper over a third-party OCR service configured for a fixed
//! language and engine. Unlike the search providers, a missing
//! credential here is a hard error — this path has no fallback.

use clipscout_search::text::collapse_whitespace;
use serde::Deserialize;

/// Errors from the OCR client.
#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    /// No API key configured.
    #[error("OCR API key missing")]
    MissingApiKey,

    /// Transport-level failure (connection error or timeout).
    #[error("OCR request failed: {0}")]
    Http(String),

    /// Non-success status from the OCR service.
    #[error("OCR API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be parsed.
    #[error("OCR response parse error: {0}")]
    Parse(String),
}

/// Fixed upstream parameters: Korean language pack, engine 2, with
/// image upscaling and no word-overlay geometry.
const LANGUAGE: &str = "kor";
const ENGINE: &str = "2";

#[derive(Debug, Deserialize)]
struct ParseImageResponse {
    #[serde(rename = "ParsedResults", default)]
    parsed_results: Vec<ParsedResult>,
}

#[derive(Debug, Default, Deserialize)]
struct ParsedResult {
    #[serde(rename = "ParsedText", default)]
    parsed_text: String,
}

/// Client for the OCR service.
pub struct OcrClient {
    client: reqwest::Client,
    api_base: String,
    api_key: Option<String>,
}

impl OcrClient {
    /// Create a client from a pre-built [`reqwest::Client`].
    pub fn new(client: reqwest::Client, api_base: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client,
            api_base: api_base.into(),
            api_key,
        }
    }

    /// Extract text from the image at `image_url`.
    ///
    /// Returns the whitespace-collapsed text of the first parse result,
    /// empty when the service found nothing.
    ///
    /// # Errors
    ///
    /// [`OcrError::MissingApiKey`] when no credential is configured;
    /// [`OcrError::Http`]/[`OcrError::Api`] on call failure.
    pub async fn extract_text(&self, image_url: &str) -> Result<String, OcrError> {
        let api_key = self.api_key.as_deref().ok_or(OcrError::MissingApiKey)?;

        let form = [
            ("apikey", api_key),
            ("url", image_url),
            ("language", LANGUAGE),
            ("OCREngine", ENGINE),
            ("scale", "true"),
            ("isOverlayRequired", "false"),
        ];

        let response = self
            .client
            .post(format!("{}/parse/image", self.api_base))
            .form(&form)
            .send()
            .await
            .map_err(|e| OcrError::Http(format!("parse/image failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| OcrError::Http(format!("parse/image read failed: {e}")))?;

        if !status.is_success() {
            return Err(OcrError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        parse_ocr_json(&body)
    }
}

/// Parse the OCR service response, normalizing the extracted text.
pub(crate) fn parse_ocr_json(json: &str) -> Result<String, OcrError> {
    let parsed: ParseImageResponse =
        serde_json::from_str(json).map_err(|e| OcrError::Parse(format!("parse/image: {e}")))?;

    let text = parsed
        .parsed_results
        .into_iter()
        .next()
        .map(|r| r.parsed_text)
        .unwrap_or_default();

    Ok(collapse_whitespace(&text))
}
