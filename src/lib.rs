//! # Pizza Pipeline
//!
//! > **Concurrent order preparation over shared, serialized stations.**
//!
//! A batch of pizza orders runs through four stages: dough, toppings, cooking and
//! serving. Every order gets its own pipeline task, so dough and toppings overlap
//! freely across orders. There is only one Oven and one Waiter, though, and each of
//! them handles exactly one pizza at a time.
//!
//! ## 🏗️ Design
//!
//! ### Stations are actors
//!
//! The Oven and the Waiter are owned by a [`StationActor`](framework::StationActor):
//! a Tokio task with a mailbox. Orders that reach the oven queue up in that mailbox
//! and are cooked in arrival order. No locks, no global singletons; the
//! [`Kitchen`](lifecycle::Kitchen) creates one actor per station kind and hands
//! clones of the same client to every pipeline.
//!
//! ### Failures are data
//!
//! Every submitted order produces exactly one [`ReportEntry`](model::ReportEntry).
//! A malformed order, a timer failure or a closed station turns into an
//! [`OrderError`](error::OrderError) on that order's entry. The batch itself never
//! fails.
//!
//! ### Progress is a side channel
//!
//! Pipelines publish human-readable progress lines on a
//! [`NotificationBus`](notify::NotificationBus). Observers receive every line once,
//! in subscription order; an observer that errors or panics is logged and skipped.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Role**: The generic station loop and its client, plus a scripted mock.
//! - **Key items**: [`StationEntity`](framework::StationEntity), [`StationActor`](framework::StationActor), [`MockStation`](framework::mock::MockStation).
//!
//! ### 2. The Stations ([`stations`], [`clients`])
//! - **Role**: The Oven and the Waiter, and the typed clients pipelines use to reach them.
//! - **Key items**: [`OvenClient`](clients::OvenClient), [`WaiterClient`](clients::WaiterClient).
//!
//! ### 3. The Work ([`pipeline`], [`scheduler`], [`timer`])
//! - **Role**: Runs one order stage by stage; runs a batch of orders concurrently.
//! - **Key items**: [`OrderPipeline`](pipeline::OrderPipeline), [`OrderScheduler`](scheduler::OrderScheduler).
//!
//! ### 4. The Orchestrator ([`lifecycle`], [`config`])
//! - **Role**: Builds a kitchen from a [`KitchenConfig`](config::KitchenConfig), runs batches, shuts it down.
//! - **Key items**: [`Kitchen`](lifecycle::Kitchen), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ### 5. The Edges ([`notify`], [`sink`])
//! - **Role**: Progress observers and report consumers.
//! - **Key items**: [`LogObserver`](notify::LogObserver), [`ConsoleSink`](sink::ConsoleSink).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Canonical five-order batch with progress logs
//! RUST_LOG=info cargo run
//!
//! # Same, with timings from a file
//! RUST_LOG=info cargo run -- kitchen.toml
//! ```

pub mod clients;
pub mod config;
pub mod error;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod notify;
pub mod pipeline;
pub mod scheduler;
pub mod sink;
pub mod stations;
pub mod timer;
