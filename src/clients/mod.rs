//! Type-safe wrappers around [`StationClient`](crate::framework::StationClient).

pub mod oven_client;
pub mod station_client;
pub mod waiter_client;

pub use oven_client::*;
pub use station_client::*;
pub use waiter_client::*;
