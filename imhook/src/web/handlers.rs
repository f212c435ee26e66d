//! Callback endpoint handlers.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Uri,
    response::Response,
    routing::{any, get},
    Json, Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::callback::Callback;
use crate::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub callback: Arc<Callback>,
}

impl AppState {
    /// Build state around a callback engine created from `config`.
    ///
    /// Register handlers through [`AppState::callback`] before serving.
    pub fn new(config: Config) -> Self {
        let callback = Callback::new(config.callback_options());
        Self {
            config: Arc::new(config),
            callback: Arc::new(callback),
        }
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// =============================================================================
// IM Callback
// =============================================================================

/// IM callback endpoint.
///
/// Only the query string and body are inspected; the method is ignored.
pub async fn im_callback(State(state): State<AppState>, uri: Uri, body: Body) -> Response {
    state.callback.listen(uri.query(), body).await
}

/// Build the router serving health checks and the callback path.
pub fn router(state: AppState) -> Router {
    let callback_path = state.config.callback_path.clone();

    Router::new()
        .route("/health", get(health))
        .route(&callback_path, any(im_callback))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
