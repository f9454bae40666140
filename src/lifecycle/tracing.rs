//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate. Log
//! lines are compact and hide the module path; spans show where a line came from.
//!
//! ## What Gets Traced
//!
//! - **Station Lifecycle**: `Actor started` / `Actor shutting down` with the station name
//! - **Batches**: a `batch` span with start, completion and per-order failures
//! - **Orders**: an `order` span around each pipeline, so every line carries its order
//! - **Progress**: messages delivered to a [`LogObserver`](crate::notify::LogObserver)
//!
//! ## Usage Examples
//!
//! ```bash
//! # Progress lines and batch summary
//! RUST_LOG=info cargo run
//!
//! # Station requests and stage timings
//! RUST_LOG=debug cargo run
//!
//! # Only the scheduler
//! RUST_LOG=pizza_pipeline::scheduler=debug cargo run
//! ```
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Actor started station="Oven"
//! INFO batch:order: Topping Chef notified: Dough chef started preparing dough for Order 1... orders=5 order=1
//! INFO batch:order: Order complete order=1 elapsed_ms=26000 orders=5 order=1
//! INFO batch: Batch complete total_ms=61000 succeeded=5 failed=0 orders=5
//! ```

/// Initializes the tracing/logging infrastructure for the application.
///
/// Set `RUST_LOG` to control verbosity (`info`, `debug`, `trace`, or per-module
/// filters such as `pizza_pipeline::framework=debug`).
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
