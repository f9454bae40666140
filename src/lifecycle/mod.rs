//! # Kitchen Lifecycle & Orchestration
//!
//! This module manages the runtime lifecycle of one kitchen: starting the shared
//! stations, wiring them into pipelines, and shutting them down.
//!
//! ## The Kitchen Pattern
//!
//! ```rust,ignore
//! impl Kitchen {
//!     pub fn new(config: &KitchenConfig) -> Self {
//!         // 1. Create exactly one actor per station kind
//!         let (oven_actor, oven) = stations::new_oven(config.cook_time(), capacity);
//!         let (waiter_actor, waiter) = stations::new_waiter(config.serve_time(), capacity);
//!
//!         // 2. Start them
//!         let handles = vec![tokio::spawn(oven_actor.run()), tokio::spawn(waiter_actor.run())];
//!         ...
//!     }
//! }
//! ```
//!
//! Every pipeline receives a clone of the *same* two clients. Because the stations
//! are built here rather than looked up globally, a new `Kitchen` always means new
//! stations.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of the mailboxes
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - Wait for both station tasks to finish
//!
//! The scheduler behind a batch holds station clients too. It only lives inside
//! [`Kitchen::run_batch`], so it is always gone by the time `shutdown` runs.
//!
//! ## Observability & Tracing
//!
//! See [`tracing`] for [`setup_tracing`] and what the log output looks like.

pub mod kitchen;
pub mod tracing;

pub use self::kitchen::*;
pub use self::tracing::*;
