//! # Mock Stations
//!
//! `MockStation<T>` hands out a real [`StationClient<T>`] whose requests are answered
//! from a queue of scripted responses instead of a running station. It lets pipeline
//! tests inject failures that are awkward to provoke with a real Oven or Waiter
//! (a closed mailbox, a dropped reply, an entity error).
//!
//! | Feature | MockStation | Real Station |
//! |---------|-------------|--------------|
//! | **Timing** | Instant | Sleeps for the configured duration |
//! | **Error Injection** | Easy (`return_err`) | Hard |
//! | **Use Case** | Testing code *around* the client | Testing serialization itself |
//!
//! ```rust,ignore
//! let mut oven = MockStation::<Oven>::new();
//! oven.expect_perform().return_err(FrameworkError::ActorClosed);
//!
//! let client = OvenClient::new(oven.client());
//! assert!(client.cook(OrderIndex(1), bus).await.is_err());
//! oven.verify();
//! ```
//!
//! For step-by-step control use [`create_mock_client`] and [`expect_perform`], which
//! expose the raw mailbox.

use super::core::{FrameworkError, StationClient, StationEntity, StationRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

enum Expectation<T: StationEntity> {
    Perform {
        response: Result<T::Output, FrameworkError>,
    },
    Served {
        response: Result<u64, FrameworkError>,
    },
}

/// A scripted stand-in for a running station.
pub struct MockStation<T: StationEntity> {
    client: StationClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StationEntity> Default for MockStation<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StationEntity> MockStation<T> {
    /// Creates a new mock station with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StationRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone
                    .lock()
                    .expect("mock expectations poisoned")
                    .pop_front();

                match (request, expectation) {
                    (
                        StationRequest::Perform { respond_to, .. },
                        Some(Expectation::Perform { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StationRequest::Served { respond_to },
                        Some(Expectation::Served { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (request, Some(_)) => {
                        panic!("Unexpected request type: {:?}", request);
                    }
                    (request, None) => {
                        panic!("No expectation set for request: {:?}", request);
                    }
                }
            }
        });

        Self {
            client: StationClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> StationClient<T> {
        self.client.clone()
    }

    /// Expect one `perform` request.
    pub fn expect_perform(&mut self) -> PerformExpectation<'_, T> {
        PerformExpectation { mock: self }
    }

    /// Expect one `served` request.
    pub fn expect_served(&mut self) -> ServedExpectation<'_, T> {
        ServedExpectation { mock: self }
    }

    /// Panics if any expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .expect("mock expectations poisoned")
            .len();
        assert_eq!(remaining, 0, "{} unmet expectation(s)", remaining);
    }

    fn push(&mut self, expectation: Expectation<T>) {
        self.expectations
            .lock()
            .expect("mock expectations poisoned")
            .push_back(expectation);
    }
}

/// Builder returned by [`MockStation::expect_perform`].
pub struct PerformExpectation<'a, T: StationEntity> {
    mock: &'a mut MockStation<T>,
}

impl<T: StationEntity> PerformExpectation<'_, T> {
    pub fn return_ok(self, output: T::Output) {
        self.mock.push(Expectation::Perform {
            response: Ok(output),
        });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.mock.push(Expectation::Perform {
            response: Err(error),
        });
    }
}

/// Builder returned by [`MockStation::expect_served`].
pub struct ServedExpectation<'a, T: StationEntity> {
    mock: &'a mut MockStation<T>,
}

impl<T: StationEntity> ServedExpectation<'_, T> {
    pub fn return_ok(self, served: u64) {
        self.mock.push(Expectation::Served {
            response: Ok(served),
        });
    }
}

/// Creates a client and the receiving end of its mailbox.
///
/// Tests drive the conversation by hand: read the request with [`expect_perform`],
/// then answer (or drop) the responder.
pub fn create_mock_client<T: StationEntity>(
    buffer_size: usize,
) -> (StationClient<T>, mpsc::Receiver<StationRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StationClient::new(sender), receiver)
}

/// Helper to take the next message if it is a Perform request.
pub async fn expect_perform<T: StationEntity>(
    receiver: &mut mpsc::Receiver<StationRequest<T>>,
) -> Option<(T::Request, oneshot::Sender<Result<T::Output, FrameworkError>>)> {
    match receiver.recv().await {
        Some(StationRequest::Perform {
            request,
            respond_to,
        }) => Some((request, respond_to)),
        _ => None,
    }
}
