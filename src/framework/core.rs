//! # Core Station Framework
//!
//! This module defines the generic building blocks for serialized shared resources.
//!
//! ## Key Types
//!
//! - [`StationEntity`]: The trait that every shared resource (Oven, Waiter) implements.
//! - [`StationActor`]: The generic actor that owns one entity and runs its work one request at a time.
//! - [`StationClient`]: The cloneable handle every order uses to queue work on the actor.
//! - [`FrameworkError`]: Transport errors (closed mailbox, dropped reply).

use async_trait::async_trait;
use std::fmt::{self, Debug};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any shared resource must implement to be driven by a [`StationActor`].
///
/// # Architecture Note
/// The Oven and the Waiter both need the same guarantee: many orders may ask for work
/// at once, but only one piece of work runs at a time. By putting that guarantee in
/// the actor loop, a station only has to describe *what* one unit of work is.
///
/// `handle` takes `&mut self` and is awaited inside the actor's loop, so the next
/// request is not even received until the current one has finished.
#[async_trait]
pub trait StationEntity: Send + 'static {
    /// Human-readable station name used in logs (e.g. `"Oven"`).
    const NAME: &'static str;

    /// The payload of one work request.
    type Request: Send + Debug + 'static;

    /// The value handed back to the requester when the work is done.
    type Output: Send + Debug + 'static;

    /// Station-specific failure.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Perform one unit of work.
    async fn handle(&mut self, request: Self::Request) -> Result<Self::Output, Self::Error>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the station framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to a [`StationActor`].
pub enum StationRequest<T: StationEntity> {
    /// Queue one unit of work.
    Perform {
        request: T::Request,
        respond_to: Response<T::Output>,
    },
    /// Ask how many requests the station has completed so far.
    Served { respond_to: Response<u64> },
}

impl<T: StationEntity> fmt::Debug for StationRequest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Perform { request, .. } => f
                .debug_struct("Perform")
                .field("request", request)
                .finish_non_exhaustive(),
            Self::Served { .. } => f.debug_struct("Served").finish_non_exhaustive(),
        }
    }
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that serializes access to one station.
///
/// **Concurrency Model**:
/// The actor owns its entity exclusively and processes its mailbox in a loop. The
/// mailbox is a FIFO `mpsc` channel, so requests are served in the order they were
/// accepted and every accepted request eventually runs. No `Mutex` is needed: the
/// entity is only ever touched from this task.
pub struct StationActor<T: StationEntity> {
    receiver: mpsc::Receiver<StationRequest<T>>,
    entity: T,
    served: u64,
}

impl<T: StationEntity> StationActor<T> {
    /// Creates a new `StationActor` and its associated `StationClient`.
    ///
    /// # Arguments
    ///
    /// * `entity` - The station state this actor will own.
    /// * `buffer_size` - Mailbox capacity. When the mailbox is full, callers wait
    ///   for space in the order they arrived.
    pub fn new(entity: T, buffer_size: usize) -> (Self, StationClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            entity,
            served: 0,
        };
        (actor, StationClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        let station = T::NAME;
        info!(station, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StationRequest::Perform {
                    request,
                    respond_to,
                } => {
                    debug!(station, ?request, "Perform");
                    match self.entity.handle(request).await {
                        Ok(output) => {
                            self.served += 1;
                            debug!(station, ?output, served = self.served, "Perform ok");
                            let _ = respond_to.send(Ok(output));
                        }
                        Err(e) => {
                            warn!(station, error = %e, "Perform failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                StationRequest::Served { respond_to } => {
                    let _ = respond_to.send(Ok(self.served));
                }
            }
        }

        info!(station, served = self.served, "Actor shutting down");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe handle for queueing work on a [`StationActor`].
///
/// Cloning only clones the channel sender, so every order in a batch can hold its
/// own copy while still talking to the same single station.
pub struct StationClient<T: StationEntity> {
    sender: mpsc::Sender<StationRequest<T>>,
}

impl<T: StationEntity> Clone for StationClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: StationEntity> StationClient<T> {
    pub fn new(sender: mpsc::Sender<StationRequest<T>>) -> Self {
        Self { sender }
    }

    /// Queue one unit of work and wait for it to finish.
    pub async fn perform(&self, request: T::Request) -> Result<T::Output, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StationRequest::Perform {
                request,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Number of requests the station has completed.
    pub async fn served(&self) -> Result<u64, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StationRequest::Served { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// True once the actor has stopped receiving.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    // --- Station Definition ---

    struct Counter {
        active: Arc<AtomicUsize>,
        peak: Arc<AtomicUsize>,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("counter refused {0}")]
    struct CounterError(u32);

    #[async_trait]
    impl StationEntity for Counter {
        const NAME: &'static str = "Counter";
        type Request = u32;
        type Output = u32;
        type Error = CounterError;

        async fn handle(&mut self, request: u32) -> Result<u32, CounterError> {
            if request == 0 {
                return Err(CounterError(request));
            }
            let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(5)).await;
            self.active.fetch_sub(1, Ordering::SeqCst);
            Ok(request * 2)
        }
    }

    fn counter() -> (Counter, Arc<AtomicUsize>) {
        let peak = Arc::new(AtomicUsize::new(0));
        let entity = Counter {
            active: Arc::new(AtomicUsize::new(0)),
            peak: peak.clone(),
        };
        (entity, peak)
    }

    // --- Tests ---

    #[tokio::test(start_paused = true)]
    async fn test_station_runs_one_request_at_a_time() {
        let (entity, peak) = counter();
        let (actor, client) = StationActor::new(entity, 4);
        tokio::spawn(actor.run());

        let mut handles = vec![];
        for i in 1..=8 {
            let client = client.clone();
            handles.push(tokio::spawn(async move { client.perform(i).await }));
        }
        for (i, handle) in handles.into_iter().enumerate() {
            let doubled = handle.await.unwrap().unwrap();
            assert_eq!(doubled, (i as u32 + 1) * 2);
        }

        assert_eq!(peak.load(Ordering::SeqCst), 1);
        assert_eq!(client.served().await.unwrap(), 8);
    }

    #[tokio::test]
    async fn test_entity_error_is_reported_and_not_counted() {
        let (entity, _) = counter();
        let (actor, client) = StationActor::new(entity, 4);
        tokio::spawn(actor.run());

        let result = client.perform(0).await;
        assert!(matches!(result, Err(FrameworkError::EntityError(_))));
        assert_eq!(client.served().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_perform_after_shutdown_reports_closed() {
        let (entity, _) = counter();
        let (actor, client) = StationActor::new(entity, 4);
        let handle = tokio::spawn(actor.run());
        handle.abort();
        let _ = handle.await;

        assert!(client.is_closed());
        assert!(matches!(client.perform(1).await, Err(FrameworkError::ActorClosed)));
    }
}
