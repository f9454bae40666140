use crate::clients::{OvenClient, StationHandle, WaiterClient};
use crate::config::KitchenConfig;
use crate::error::OrderError;
use crate::framework::FrameworkError;
use crate::model::{BatchReport, OrderRequest};
use crate::notify::NotificationBus;
use crate::pipeline::{OrderPipeline, PrepTimings};
use crate::scheduler::OrderScheduler;
use crate::stations;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

/// Errors raised while stopping a kitchen.
#[derive(Debug, Error)]
pub enum KitchenError {
    #[error("Station task failed: {0}")]
    StationTask(String),
}

/// The per-run orchestrator for the shared stations.
///
/// `Kitchen` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the Oven and Waiter actors
/// - **Dependency Wiring**: Handing the same two station clients to every pipeline
/// - **Scoping**: Each `Kitchen` owns its own stations, so two kitchens (two runs,
///   two tests) never share an oven
///
/// # Example
///
/// ```ignore
/// let kitchen = Kitchen::new(&config);
/// let report = kitchen.run_batch(Arc::new(bus), config.orders.clone()).await?;
/// kitchen.shutdown().await?;
/// ```
pub struct Kitchen {
    /// Client for the Oven actor
    pub oven: OvenClient,

    /// Client for the Waiter actor
    pub waiter: WaiterClient,

    timings: PrepTimings,

    /// Task handles for the station actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Kitchen {
    /// Creates one Oven and one Waiter and spawns their actors.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &KitchenConfig) -> Self {
        let capacity = config.mailbox_capacity.max(1);

        let (oven_actor, oven_client) = stations::new_oven(config.cook_time(), capacity);
        let (waiter_actor, waiter_client) = stations::new_waiter(config.serve_time(), capacity);

        let oven_handle = tokio::spawn(oven_actor.run());
        let waiter_handle = tokio::spawn(waiter_actor.run());

        Self {
            oven: OvenClient::new(oven_client),
            waiter: WaiterClient::new(waiter_client),
            timings: PrepTimings::from(config),
            handles: vec![oven_handle, waiter_handle],
        }
    }

    // The scheduler holds station clients, so it must not outlive `run_batch`.
    fn scheduler(&self, bus: Arc<NotificationBus>) -> OrderScheduler {
        OrderScheduler::new(OrderPipeline::new(
            self.oven.clone(),
            self.waiter.clone(),
            bus,
            self.timings,
        ))
    }

    /// Runs one batch on this kitchen's stations. See [`OrderScheduler::run_batch`].
    pub async fn run_batch(
        &self,
        bus: Arc<NotificationBus>,
        orders: Vec<OrderRequest>,
    ) -> Result<BatchReport, OrderError> {
        self.scheduler(bus).run_batch(orders).await
    }

    /// (pizzas cooked, pizzas served) since the kitchen opened.
    pub async fn served(&self) -> Result<(u64, u64), FrameworkError> {
        Ok((self.oven.served().await?, self.waiter.served().await?))
    }

    /// Gracefully shuts down both stations.
    ///
    /// Dropping the clients closes the mailboxes; each actor drains what is queued
    /// and exits its loop.
    pub async fn shutdown(self) -> Result<(), KitchenError> {
        info!("Shutting down kitchen...");

        drop(self.oven);
        drop(self.waiter);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Station task failed: {:?}", e);
                return Err(KitchenError::StationTask(e.to_string()));
            }
        }

        info!("Kitchen shutdown complete.");
        Ok(())
    }
}
