//! Inbound IM callback engine.
//!
//! This module:
//! - Verifies the platform's `Sign` / `RequestTime` pair (when a token is set)
//! - Checks `SdkAppid` against the configured application
//! - Resolves `CallbackCommand` and decodes the body into a typed [`Payload`]
//! - Routes the payload to the handler registered for its [`Event`]
//! - Answers with exactly one [`Ack`]
//!
//! ```text
//! HTTP request → Callback::listen → Dispatcher → handler → Ack → HTTP 200
//! ```

pub mod ack;
pub mod dispatcher;
pub mod error;
pub mod event;
pub mod listen;
pub mod signature;
pub mod types;

pub use ack::{Ack, AckError, ACK_FAILURE_CODE, ACK_SUCCESS_CODE};
pub use dispatcher::{Dispatcher, EventHandler};
pub use error::{CallbackError, ErrorKind};
pub use event::{DecodeError, Event, Payload};
pub use listen::{Callback, CallbackContext, CallbackOptions, DEFAULT_MAX_BODY_BYTES};
pub use signature::{is_signature_verification_enabled, sign_request, verify_signature, SignatureError};
pub use types::AckResponse;
