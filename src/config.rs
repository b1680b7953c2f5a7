//! Service configuration loaded from the process environment.
//!
//! Credentials are read once at startup and passed into clients and
//! adapters explicitly — there is no module-level key state — so tests
//! can construct a [`Config`] with fakes and mock base URLs.

use clipscout_search::Credentials;

/// Default bind address when `PORT` is not set.
const DEFAULT_PORT: u16 = 8080;

/// Default bound on collected comments per ingest request.
const DEFAULT_MAX_COMMENTS: usize = 300;

/// Default per-call upstream timeout in seconds.
const DEFAULT_TIMEOUT_SECONDS: u64 = 8;

const YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";
const OCR_API_BASE: &str = "https://api.ocr.space";

/// Runtime configuration for the clipscout service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind the HTTP listener on.
    pub host: String,
    /// Port to bind the HTTP listener on. `0` auto-assigns.
    pub port: u16,
    /// Per-call upstream timeout in seconds.
    pub timeout_seconds: u64,
    /// Default `maxComments` when the caller omits the parameter.
    pub default_max_comments: usize,
    /// Credentials for the search providers (also carries the YouTube
    /// Data API key used by the ingest path).
    pub search_credentials: Credentials,
    /// OCR service API key. Absent key fails OCR requests with a 500.
    pub ocr_api_key: Option<String>,
    /// YouTube Data API base URL. Overridable for tests.
    pub youtube_api_base: String,
    /// OCR service base URL. Overridable for tests.
    pub ocr_api_base: String,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Missing provider credentials disable the corresponding provider
    /// rather than failing startup.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            search_credentials: Credentials::from_env(),
            ocr_api_key: std::env::var("OCRSPACE_API_KEY")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            default_max_comments: DEFAULT_MAX_COMMENTS,
            search_credentials: Credentials::default(),
            ocr_api_key: None,
            youtube_api_base: YOUTUBE_API_BASE.to_string(),
            ocr_api_base: OCR_API_BASE.to_string(),
        }
    }
}
