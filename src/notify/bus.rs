use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, warn};

/// Failure reported by an observer. The bus logs it and moves on.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Observer error: {0}")]
pub struct ObserverError(pub String);

/// Anything that wants to hear about order progress.
///
/// Stage-specific wording lives in the message, not in the observer type, so one
/// implementation serves every stage.
pub trait Observer: Send + Sync {
    /// Name shown in logs when this observer misbehaves.
    fn name(&self) -> &str;

    /// Receive one progress message. Must not block for long: it runs on the
    /// broadcasting order's task.
    fn notify(&self, message: &str) -> Result<(), ObserverError>;
}

/// A registered observer.
#[derive(Clone)]
pub struct Subscription {
    pub name: String,
    observer: Arc<dyn Observer>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Fan-out broadcaster for progress messages.
///
/// Subscribing needs `&mut self`; the scheduler only ever sees the bus behind an
/// `Arc`. The subscriber list is therefore complete before the first pipeline runs,
/// and broadcasts never race with subscriptions.
#[derive(Debug, Default, Clone)]
pub struct NotificationBus {
    subscribers: Vec<Subscription>,
}

impl NotificationBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `observer`. Subscribing the same observer twice delivers every
    /// message to it twice.
    pub fn subscribe(&mut self, observer: Arc<dyn Observer>) -> &mut Self {
        self.subscribers.push(Subscription {
            name: observer.name().to_string(),
            observer,
        });
        self
    }

    pub fn subscribers(&self) -> &[Subscription] {
        &self.subscribers
    }

    /// Delivers `message` to every subscriber, in subscription order, on the
    /// calling task. Returns how many subscribers accepted it.
    ///
    /// An observer that errors or panics is logged and skipped; the remaining
    /// observers still get the message and nothing reaches the caller.
    pub fn broadcast(&self, message: &str) -> usize {
        let mut delivered = 0;
        for subscription in &self.subscribers {
            let outcome =
                panic::catch_unwind(AssertUnwindSafe(|| subscription.observer.notify(message)));
            match outcome {
                Ok(Ok(())) => delivered += 1,
                Ok(Err(e)) => {
                    warn!(subscriber = %subscription.name, error = %e, "Observer failed");
                }
                Err(_) => {
                    error!(subscriber = %subscription.name, "Observer panicked");
                }
            }
        }
        delivered
    }
}
