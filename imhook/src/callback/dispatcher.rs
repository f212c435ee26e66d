//! Event → handler table.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock};

use futures::future::BoxFuture;
use futures::FutureExt;

use super::ack::Ack;
use super::event::{Event, Payload};
use super::listen::CallbackContext;

/// A registered callback handler.
///
/// The handler owns the [`Ack`] and must answer through it before its future
/// completes.
pub type EventHandler =
    Arc<dyn Fn(CallbackContext, Ack, Payload) -> BoxFuture<'static, ()> + Send + Sync>;

/// Concurrency-safe table of one handler per event.
///
/// Registration may race with lookups from in-flight requests. A lookup sees
/// either the old or the new handler, never a partial update.
#[derive(Default)]
pub struct Dispatcher {
    handlers: RwLock<HashMap<Event, EventHandler>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `event`, replacing any previous handler.
    pub fn register<F, Fut>(&self, event: Event, handler: F)
    where
        F: Fn(CallbackContext, Ack, Payload) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let handler: EventHandler = Arc::new(
            move |ctx: CallbackContext, ack: Ack, payload: Payload| {
                handler(ctx, ack, payload).boxed()
            },
        );

        // The map is never left half-written, so a poisoned lock is still usable.
        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(event, handler);
    }

    /// The current handler for `event`, if any.
    pub fn lookup(&self, event: Event) -> Option<EventHandler> {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&event)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::callback::types::AfterGroupFull;

    fn context() -> CallbackContext {
        CallbackContext {
            sdk_app_id: "1400000000".to_string(),
            command: Event::AfterGroupFull.as_command().to_string(),
            event: Event::AfterGroupFull,
            request_time: None,
            client_ip: None,
            opt_platform: None,
            content_type: None,
        }
    }

    fn payload() -> Payload {
        Payload::AfterGroupFull(AfterGroupFull::default())
    }

    #[test]
    fn test_lookup_missing() {
        let dispatcher = Dispatcher::new();
        for event in Event::ALL {
            assert!(dispatcher.lookup(event).is_none());
        }
    }

    #[tokio::test]
    async fn test_register_and_lookup() {
        let dispatcher = Dispatcher::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = calls.clone();
        dispatcher.register(Event::AfterGroupFull, move |_ctx, ack, _payload| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                let _ = ack.ack_success(0, None);
            }
        });

        let handler = dispatcher.lookup(Event::AfterGroupFull).unwrap();
        let (ack, rx) = Ack::channel();
        handler(context(), ack, payload()).await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(rx.await.is_ok());
        assert!(dispatcher.lookup(Event::AfterGroupCreate).is_none());
    }

    #[tokio::test]
    async fn test_last_registration_wins() {
        let dispatcher = Dispatcher::new();
        let hits = Arc::new([AtomicUsize::new(0), AtomicUsize::new(0)]);

        for slot in 0..2 {
            let hits = hits.clone();
            dispatcher.register(Event::AfterGroupFull, move |_ctx, ack, _payload| {
                let hits = hits.clone();
                async move {
                    hits[slot].fetch_add(1, Ordering::SeqCst);
                    let _ = ack.ack_success(0, None);
                }
            });
        }

        for _ in 0..3 {
            let handler = dispatcher.lookup(Event::AfterGroupFull).unwrap();
            let (ack, _rx) = Ack::channel();
            handler(context(), ack, payload()).await;
        }

        assert_eq!(hits[0].load(Ordering::SeqCst), 0);
        assert_eq!(hits[1].load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_register_concurrent_with_lookup() {
        let dispatcher = Arc::new(Dispatcher::new());
        dispatcher.register(Event::AfterGroupFull, |_ctx, ack, _payload| async move {
            let _ = ack.ack_success(0, None);
        });

        let writer = {
            let dispatcher = dispatcher.clone();
            tokio::spawn(async move {
                for _ in 0..100 {
                    dispatcher.register(Event::AfterGroupFull, |_ctx, ack, _payload| async move {
                        let _ = ack.ack_success(0, None);
                    });
                    tokio::task::yield_now().await;
                }
            })
        };

        let mut readers = Vec::new();
        for _ in 0..4 {
            let dispatcher = dispatcher.clone();
            readers.push(tokio::spawn(async move {
                for _ in 0..100 {
                    assert!(dispatcher.lookup(Event::AfterGroupFull).is_some());
                    tokio::task::yield_now().await;
                }
            }));
        }

        writer.await.unwrap();
        for reader in readers {
            reader.await.unwrap();
        }
        assert!(dispatcher.lookup(Event::AfterGroupCreate).is_none());
    }
}
