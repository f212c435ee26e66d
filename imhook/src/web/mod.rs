//! Web server module for receiving IM platform callbacks.
//!
//! This module provides a thin axum surface over [`crate::callback::Callback`]:
//! - `GET /health` for liveness probes
//! - the configured callback path, any method, answered by `Callback::listen`

pub mod handlers;

pub use handlers::{health, im_callback, router, AppState, HealthResponse};
