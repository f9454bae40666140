//! Generic actor framework for serialized shared resources.
//!
//! This module provides the building blocks for stations: shared resources that accept
//! work from many orders at once but execute it one request at a time.
//!
//! # Main Components
//!
//! - [`StationEntity`] - Trait that a shared resource implements to be driven by an actor
//! - [`StationActor`] - Generic actor owning one station and its FIFO mailbox
//! - [`StationClient`] - Cloneable handle used to queue work
//! - [`FrameworkError`] - Transport errors between client and actor
//!
//! # Testing
//!
//! See [`mock`] for a scripted station that needs no running actor.

pub mod core;
pub mod mock;

pub use core::*;
