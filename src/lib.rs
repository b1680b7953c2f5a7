//! # clipscout
//!
//! Content aggregation service exposing a small set of HTTP endpoints
//! over several external content APIs:
//!
//! - `GET /api/web/search` — multi-source web search (YouTube, Google,
//!   Naver) with relevance ranking, via the embedded
//!   [`clipscout_search`] engine
//! - `GET /api/youtube/ingest` — video metadata plus a deduplicated,
//!   bounded comment collection
//! - `GET /api/thumbnail/ocr` — OCR text-extraction passthrough
//!
//! All state is request-scoped: nothing persists between requests and
//! no authentication is performed. Upstream credentials come from the
//! environment at startup; a search provider without credentials is
//! silently disabled rather than failing requests.

pub mod api;
pub mod config;
pub mod error;
pub mod ocr;
pub mod server;
pub mod state;
pub mod youtube;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use server::{create_router, Server};
pub use state::AppState;
