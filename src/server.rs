//! HTTP server: router construction and lifecycle.

use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::info;

use crate::api;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Build the application router over the given state.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/web/search", get(api::search::web_search))
        .route("/api/youtube/ingest", get(api::ingest::video_ingest))
        .route("/api/thumbnail/ocr", get(api::ocr::thumbnail_ocr))
        .with_state(state)
}

/// Running HTTP server with a background accept loop.
pub struct Server {
    /// The address the server is listening on.
    addr: SocketAddr,
    /// Handle to the background server task.
    handle: JoinHandle<()>,
}

impl Server {
    /// Bind and start serving in a background tokio task.
    ///
    /// Binds to `{config.host}:{config.port}` (use port `0` for
    /// auto-assign, handy in tests).
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP listener cannot bind.
    pub async fn start(config: Config) -> AppResult<Self> {
        let bind_addr = format!("{}:{}", config.host, config.port);
        let state = AppState::new(config)?;
        let app = create_router(state);

        let listener = TcpListener::bind(&bind_addr)
            .await
            .map_err(|e| AppError::Internal(format!("bind {bind_addr} failed: {e}")))?;
        let addr = listener
            .local_addr()
            .map_err(|e| AppError::Internal(format!("failed to get local addr: {e}")))?;

        info!("clipscout listening on http://{addr}");

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("server error: {e}");
            }
        });

        Ok(Self { addr, handle })
    }

    /// Returns the address the server is listening on.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Returns the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Wait for the accept loop to finish (it normally never does).
    pub async fn join(&mut self) {
        if let Err(e) = (&mut self.handle).await {
            if !e.is_cancelled() {
                tracing::error!("server task failed: {e}");
            }
        }
    }

    /// Abort the server task.
    pub fn shutdown(&self) {
        self.handle.abort();
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
