//! # Shared Stations
//!
//! The kitchen has exactly one [`Oven`] and one [`Waiter`] per run. Each is owned by a
//! [`StationActor`] and reached only through its client, so every order in the batch
//! talks to the same instance and the actor loop serializes the work.
//!
//! Work arrives as a [`Ticket`]. The station announces "started" and "finished" on
//! the ticket's bus itself, so observers only ever see one pizza in the oven.
//!
//! ## Structure
//!
//! - [`oven`] - Cooking, one pizza at a time
//! - [`waiter`] - Serving, one pizza at a time
//! - [`error`] - [`StationError`]
//! - [`new_oven`] / [`new_waiter`] - Factory functions returning the actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use pizza_pipeline::clients::OvenClient;
//! use pizza_pipeline::model::OrderIndex;
//! use pizza_pipeline::notify::NotificationBus;
//! use pizza_pipeline::stations;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = stations::new_oven(Duration::from_millis(5), 8);
//!     tokio::spawn(actor.run());
//!
//!     let oven = OvenClient::new(client);
//!     let bus = Arc::new(NotificationBus::new());
//!     let cooked = oven.cook(OrderIndex(1), bus).await.unwrap();
//!     assert_eq!(cooked.order, OrderIndex(1));
//! }
//! ```

pub mod error;
pub mod oven;
pub mod waiter;

pub use error::*;
pub use oven::Oven;
pub use waiter::Waiter;

use crate::framework::{StationActor, StationClient};
use crate::model::OrderIndex;
use crate::notify::NotificationBus;
use std::sync::Arc;
use std::time::Duration;

/// One unit of station work: the order, and the bus its progress goes to.
#[derive(Debug, Clone)]
pub struct Ticket {
    pub order: OrderIndex,
    pub bus: Arc<NotificationBus>,
}

/// Creates a new Oven actor and its client.
pub fn new_oven(
    cook_time: Duration,
    buffer_size: usize,
) -> (StationActor<Oven>, StationClient<Oven>) {
    StationActor::new(Oven::new(cook_time), buffer_size)
}

/// Creates a new Waiter actor and its client.
pub fn new_waiter(
    serve_time: Duration,
    buffer_size: usize,
) -> (StationActor<Waiter>, StationClient<Waiter>) {
    StationActor::new(Waiter::new(serve_time), buffer_size)
}
