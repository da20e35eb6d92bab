//! HTTP binding exposing the translate operations as web endpoints.
//!
//! | Route                  | Request                  | Response                 |
//! |------------------------|--------------------------|--------------------------|
//! | `POST /translate`       | plain-text body          | plain-text translation   |
//! | `POST /translateReview` | `UserReview` JSON        | translated `UserReview`  |
//! | `GET /health`           |                          | `{"status":"ok"}`        |
//!
//! Translation failures are reported as `502 Bad Gateway` with an
//! `{"error": "..."}` body.

mod routes;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use crate::translation::{LanguagePair, TranslationClient};

pub use routes::create_router;

/// Shared, read-only state handed to every request handler.
#[derive(Debug)]
pub struct AppState {
    pub client: TranslationClient,
    pub languages: LanguagePair,
}

impl AppState {
    pub fn new(client: TranslationClient, languages: LanguagePair) -> Arc<Self> {
        Arc::new(Self { client, languages })
    }
}

/// Binds `host:port` and serves until the process is interrupted.
pub async fn serve(state: Arc<AppState>, host: &str, port: u16) -> Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind {host}:{port}"))?;

    let addr = listener.local_addr().context("Failed to read bound address")?;
    info!(
        %addr,
        from = %state.languages.from,
        to = %state.languages.to,
        endpoint = %state.client.endpoint(),
        "starting translation server"
    );
    crate::status!("Listening on http://{addr}");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // Without a signal handler, run until killed.
        std::future::pending::<()>().await;
    }
}
