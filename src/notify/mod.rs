//! # Progress Notifications
//!
//! Pipelines publish a human-readable line before and after every stage. The
//! [`NotificationBus`] fans each line out to its subscribers; logging is just one of
//! them ([`LogObserver`]).
//!
//! ```rust
//! use pizza_pipeline::notify::{LogObserver, NotificationBus, RecordingObserver};
//! use std::sync::Arc;
//!
//! let transcript = Arc::new(RecordingObserver::new("Transcript"));
//! let mut bus = NotificationBus::new();
//! bus.subscribe(Arc::new(LogObserver::new("Oven")))
//!     .subscribe(transcript.clone());
//!
//! bus.broadcast("Oven started cooking Order 1...");
//! assert_eq!(transcript.messages().len(), 1);
//! ```

pub mod bus;
pub mod observers;

pub use bus::*;
pub use observers::*;
