//! Runs one batch of orders through a fresh kitchen and prints the report.
//!
//! ```bash
//! RUST_LOG=info cargo run                  # defaults + PIZZA_* overrides
//! RUST_LOG=info cargo run -- kitchen.toml  # file + PIZZA_* overrides
//! ```

use pizza_pipeline::config::{load_config, KitchenConfig};
use pizza_pipeline::lifecycle::{setup_tracing, Kitchen};
use pizza_pipeline::notify::{LogObserver, NotificationBus};
use pizza_pipeline::sink::{publish_report, ConsoleSink};
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(&PathBuf::from(path))?,
        None => KitchenConfig::from_env()?,
    };
    info!(
        orders = config.orders.len(),
        cook_ms = config.cook_ms,
        serve_ms = config.serve_ms,
        "Opening kitchen"
    );

    let mut bus = NotificationBus::new();
    bus.subscribe(Arc::new(LogObserver::new("Topping Chef")))
        .subscribe(Arc::new(LogObserver::new("Oven")))
        .subscribe(Arc::new(LogObserver::new("Waiter")));

    let kitchen = Kitchen::new(&config);
    let report = kitchen.run_batch(Arc::new(bus), config.orders.clone()).await?;
    publish_report(&ConsoleSink, &report);

    kitchen.shutdown().await?;
    info!("Kitchen closed");
    Ok(())
}
