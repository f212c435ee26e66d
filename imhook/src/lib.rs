//! imhook - Receiver for instant-messaging platform callbacks.
//!
//! The IM platform calls back over HTTP whenever a user logs in, a friend is
//! added, a message is sent, a group changes, and so on. This library
//! authenticates each callback, decodes its event-specific body, routes it to
//! application-registered logic, and replies with the acknowledgement the
//! platform expects.
//!
//! ## Architecture
//!
//! ```text
//! Platform → web::router → Callback::listen → Dispatcher → handler → Ack
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use imhook::callback::{Callback, CallbackOptions, Event, Payload};
//!
//! let callback = Callback::new(CallbackOptions::new(1400000000).with_token("secret"));
//! callback.register(Event::AfterGroupCreate, |_ctx, ack, payload| async move {
//!     if let Payload::AfterGroupCreate(group) = payload {
//!         println!("group created: {}", group.group_id);
//!     }
//!     let _ = ack.ack_success(0, None);
//! });
//! ```

pub mod callback;
pub mod config;
pub mod web;

// Re-export commonly used types
pub use callback::{Ack, Callback, CallbackContext, CallbackOptions, Event, Payload};
pub use config::{Config, ConfigError};
pub use web::AppState;
