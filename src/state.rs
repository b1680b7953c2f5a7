//! Shared application state for axum handlers.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::ocr::OcrClient;
use crate::youtube::YoutubeClient;

/// Shared state: configuration plus the upstream API clients. Cheap to
/// clone; handlers hold it via axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub youtube: Arc<YoutubeClient>,
    pub ocr: Arc<OcrClient>,
}

impl AppState {
    /// Build the state and its HTTP clients from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the HTTP client cannot be
    /// constructed.
    pub fn new(config: Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::Internal(format!("failed to build HTTP client: {e}")))?;

        let youtube = YoutubeClient::new(
            client.clone(),
            config.youtube_api_base.clone(),
            config.search_credentials.youtube_api_key.clone(),
        );
        let ocr = OcrClient::new(
            client,
            config.ocr_api_base.clone(),
            config.ocr_api_key.clone(),
        );

        Ok(Self {
            config: Arc::new(config),
            youtube: Arc::new(youtube),
            ocr: Arc::new(ocr),
        })
    }
}
