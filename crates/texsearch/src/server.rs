//! HTTP search endpoint.
//!
//! - `GET /api/search?q=<query>[&limit=N]` returns a JSON array of results, best first.
//!   A missing `q` is an empty query and yields `[]`.
//! - `GET /api/health` returns `{"status":"ok"}`.
//!
//! Each request runs its own full scan on the blocking pool; requests share no mutable
//! state.

use std::{io, net::SocketAddr};

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use serde_json::{Value, json};
use texsearch_engine::{SearchResult, Searcher};
use tokio::{net::TcpListener, signal, task};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// Shared state handed to every request.
#[derive(Clone)]
struct AppState {
    /// Searcher built from the configuration at startup.
    searcher: Searcher,
}

/// Query parameters of `/api/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Free-text query.
    #[serde(default)]
    pub q: String,
    /// Result cap for this request; 0 means unlimited.
    pub limit: Option<usize>,
}

/// The scan could not complete.
#[derive(Debug)]
pub struct SearchFailed;

impl IntoResponse for SearchFailed {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Search failed" })),
        )
            .into_response()
    }
}

/// Builds the application router.
pub fn router(searcher: Searcher) -> Router {
    Router::new()
        .route("/api/search", get(search))
        .route("/api/health", get(health))
        .with_state(AppState { searcher })
        .layer(TraceLayer::new_for_http())
}

/// Binds `addr` and serves until Ctrl-C.
pub async fn serve(addr: SocketAddr, searcher: Searcher) -> io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    info!(addr = %local, "listening");
    println!("Listening on http://{local}");

    axum::serve(listener, router(searcher))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

/// `GET /api/search`
async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<SearchResult>>, SearchFailed> {
    let mut searcher = state.searcher;
    if params.limit.is_some() {
        searcher = searcher.with_limit(params.limit);
    }

    let query = params.q;
    match task::spawn_blocking(move || searcher.search(&query)).await {
        Ok(results) => Ok(Json(results)),
        Err(e) => {
            error!(error = %e, "search task failed");
            Err(SearchFailed)
        }
    }
}

/// `GET /api/health`
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Resolves when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    info!("shutting down");
}
