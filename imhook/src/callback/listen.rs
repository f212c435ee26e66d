//! The callback engine: verify, decode, dispatch, acknowledge.
//!
//! Each request runs one linear pass:
//!
//! ```text
//! signature (if token) → SdkAppid → CallbackCommand → body → decode → handler
//! ```
//!
//! Any failing step short-circuits to `AckFailure` with that step's message.
//! Every request produces exactly one acknowledgement.

use std::borrow::Cow;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use axum::{
    body::Body,
    response::{IntoResponse, Response},
    Json,
};
use futures::FutureExt;
use tracing::{error, info, warn};

use super::ack::{Ack, ACK_SUCCESS_CODE};
use super::dispatcher::Dispatcher;
use super::error::CallbackError;
use super::event::{Event, Payload};
use super::signature::{is_signature_verification_enabled, verify_signature};
use super::types::AckResponse;

pub const QUERY_APP_ID: &str = "SdkAppid";
pub const QUERY_COMMAND: &str = "CallbackCommand";
pub const QUERY_REQUEST_TIME: &str = "RequestTime";
pub const QUERY_SIGN: &str = "Sign";
pub const QUERY_CLIENT_IP: &str = "ClientIP";
pub const QUERY_OPT_PLATFORM: &str = "OptPlatform";
pub const QUERY_CONTENT_TYPE: &str = "contenttype";

/// `ErrorInfo` sent when a handler panics before answering.
pub const HANDLER_PANICKED: &str = "callback handler panicked";

/// Default upper bound on a callback body.
pub const DEFAULT_MAX_BODY_BYTES: usize = 4 * 1024 * 1024;

/// Settings for a [`Callback`] engine.
#[derive(Debug, Clone)]
pub struct CallbackOptions {
    /// Application id the platform must present as `SdkAppid`
    pub sdk_app_id: u64,
    /// Shared secret for signature checks.
    ///
    /// `None` or an empty string turns signature verification off entirely.
    pub token: Option<String>,
    /// Bodies larger than this are rejected as unreadable
    pub max_body_bytes: usize,
}

impl CallbackOptions {
    pub fn new(sdk_app_id: u64) -> Self {
        Self {
            sdk_app_id,
            token: None,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

/// Per-request information handed to handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackContext {
    pub sdk_app_id: String,
    pub command: String,
    pub event: Event,
    /// `RequestTime`, when present and numeric
    pub request_time: Option<i64>,
    pub client_ip: Option<String>,
    pub opt_platform: Option<String>,
    pub content_type: Option<String>,
}

/// Query parameters the platform attaches to a callback.
///
/// A repeated key keeps its first value.
#[derive(Debug, Default)]
struct CallbackQuery {
    sdk_app_id: Option<String>,
    command: Option<String>,
    request_time: Option<String>,
    sign: Option<String>,
    client_ip: Option<String>,
    opt_platform: Option<String>,
    content_type: Option<String>,
}

impl CallbackQuery {
    fn parse(raw: Option<&str>) -> Self {
        let mut query = Self::default();

        for (key, value) in url::form_urlencoded::parse(raw.unwrap_or_default().as_bytes()) {
            let slot = match &*key {
                QUERY_APP_ID => &mut query.sdk_app_id,
                QUERY_COMMAND => &mut query.command,
                QUERY_REQUEST_TIME => &mut query.request_time,
                QUERY_SIGN => &mut query.sign,
                QUERY_CLIENT_IP => &mut query.client_ip,
                QUERY_OPT_PLATFORM => &mut query.opt_platform,
                QUERY_CONTENT_TYPE => &mut query.content_type,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(Cow::into_owned(value));
            }
        }

        query
    }
}

/// Verifies inbound callbacks and routes them to registered handlers.
pub struct Callback {
    options: CallbackOptions,
    sdk_app_id: String,
    dispatcher: Dispatcher,
}

impl Callback {
    pub fn new(options: CallbackOptions) -> Self {
        if !is_signature_verification_enabled(&options.token) {
            warn!(
                sdk_app_id = options.sdk_app_id,
                "callback_signature_verification_disabled"
            );
        }

        Self {
            sdk_app_id: options.sdk_app_id.to_string(),
            options,
            dispatcher: Dispatcher::new(),
        }
    }

    /// Register `handler` for `event`, replacing any previous handler.
    pub fn register<F, Fut>(&self, event: Event, handler: F)
    where
        F: Fn(CallbackContext, Ack, Payload) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        info!(event = %event, "callback_handler_registered");
        self.dispatcher.register(event, handler);
    }

    /// Handle one callback request and return its acknowledgement.
    ///
    /// `query` is the raw URI query string. Events without a handler are
    /// acknowledged with `AckSuccess(0)`. A handler must answer before its
    /// future completes; an `Ack` kept past that point is answered with
    /// `AckSuccess(0)` here and any later use fails with `AckError::Closed`.
    pub async fn listen(&self, query: Option<&str>, body: Body) -> Response {
        let (ack, mut rx) = Ack::channel();
        let query = CallbackQuery::parse(query);

        match self.prepare(query, body).await {
            Err(e) => {
                warn!(
                    error = %e,
                    kind = e.kind().as_str(),
                    "callback_rejected"
                );
                let _ = ack.ack_failure(Some(e.to_string().as_str()));
            }
            Ok((ctx, payload)) => match self.dispatcher.lookup(ctx.event) {
                Some(handler) => {
                    info!(
                        event = %ctx.event,
                        client_ip = ?ctx.client_ip,
                        "callback_dispatched"
                    );
                    let event = ctx.event;
                    let outcome = AssertUnwindSafe(async move { handler(ctx, ack, payload).await })
                        .catch_unwind()
                        .await;

                    if outcome.is_err() {
                        error!(event = %event, "callback_handler_panicked");
                        if let Ok(response) = rx.try_recv() {
                            return response;
                        }
                        return Json(AckResponse::failure(Some(HANDLER_PANICKED))).into_response();
                    }
                }
                None => {
                    info!(event = %ctx.event, "callback_unhandled");
                    let _ = ack.ack_success(ACK_SUCCESS_CODE, None);
                }
            },
        }

        match rx.try_recv() {
            Ok(response) => response,
            Err(_) => {
                warn!("callback_handler_dropped_ack");
                Json(AckResponse::success(ACK_SUCCESS_CODE, None)).into_response()
            }
        }
    }

    async fn prepare(
        &self,
        query: CallbackQuery,
        body: Body,
    ) -> Result<(CallbackContext, Payload), CallbackError> {
        if let Some(token) = self.options.token.as_deref().filter(|t| !t.is_empty()) {
            let sign = query.sign.as_deref().ok_or(CallbackError::MissingSign)?;
            let request_time: i64 = query
                .request_time
                .as_deref()
                .ok_or(CallbackError::MissingRequestTime)?
                .parse()
                .map_err(|_| CallbackError::InvalidRequestTime)?;

            verify_signature(token, sign, request_time)?;
        }

        let sdk_app_id = query
            .sdk_app_id
            .filter(|id| *id == self.sdk_app_id)
            .ok_or(CallbackError::AppIdMismatch)?;

        let command = query.command.ok_or(CallbackError::MissingCommand)?;

        let body = axum::body::to_bytes(body, self.options.max_body_bytes)
            .await
            .map_err(|e| CallbackError::BodyRead(e.to_string()))?;

        info!(
            command = %command,
            body_length = body.len(),
            "callback_received"
        );

        let (event, payload) = Payload::decode(&command, &body)?;

        let ctx = CallbackContext {
            sdk_app_id,
            command,
            event,
            request_time: query.request_time.and_then(|t| t.parse().ok()),
            client_ip: query.client_ip,
            opt_platform: query.opt_platform,
            content_type: query.content_type,
        };

        Ok((ctx, payload))
    }
}
