//! imhook Web Server - IM platform callback receiver.
//!
//! This binary:
//! - Receives callbacks from the IM platform
//! - Verifies the signature and application id
//! - Logs every decoded event and acknowledges it
//!
//! Applications embedding the library register their own handlers instead.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use tokio::{net::TcpListener, signal};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use imhook::callback::ACK_SUCCESS_CODE;
use imhook::web::router;
use imhook::{AppState, Config, Event};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured JSON logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true))
        .init();

    info!("web_server_starting");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    info!(
        port = config.port,
        sdk_app_id = config.sdk_app_id,
        callback_path = %config.callback_path,
        callback_token_configured = config.callback_token.is_some(),
        max_body_bytes = config.max_body_bytes,
        "config_loaded"
    );

    let state = AppState::new(config.clone());

    for event in Event::ALL {
        state.callback.register(event, |ctx, ack, payload| async move {
            info!(
                event = %ctx.event,
                client_ip = ?ctx.client_ip,
                opt_platform = ?ctx.opt_platform,
                payload = ?payload,
                "callback_event"
            );
            if let Err(e) = ack.ack_success(ACK_SUCCESS_CODE, None) {
                tracing::error!(error = %e, "callback_ack_failed");
            }
        });
    }

    let app = router(state);

    // Bind to address
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!(address = %addr, "web_server_listening");

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("web_server_shutdown_complete");

    Ok(())
}

/// Create a future that completes when a shutdown signal is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT"),
        _ = terminate => info!("Received SIGTERM"),
    }

    info!("web_server_shutting_down");
}
