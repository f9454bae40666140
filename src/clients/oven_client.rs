//! # Oven Client
//!
//! Provides a high-level API for the shared oven. It wraps a `StationClient<Oven>`
//! and exposes the single operation the pipeline needs.
use crate::clients::station_client::StationHandle;
use crate::error::OrderError;
use crate::framework::StationClient;
use crate::model::{OrderIndex, StageResult};
use crate::notify::NotificationBus;
use crate::stations::{Oven, Ticket};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Client for the Oven actor.
#[derive(Clone)]
pub struct OvenClient {
    inner: StationClient<Oven>,
}

impl OvenClient {
    pub fn new(inner: StationClient<Oven>) -> Self {
        Self { inner }
    }

    /// Cook `order`, waiting behind any pizzas already queued for the oven.
    #[instrument(skip(self, bus))]
    pub async fn cook(
        &self,
        order: OrderIndex,
        bus: Arc<NotificationBus>,
    ) -> Result<StageResult, OrderError> {
        debug!("Requesting oven");
        self.perform(Ticket { order, bus }).await
    }
}

impl StationHandle<Oven> for OvenClient {
    fn inner(&self) -> &StationClient<Oven> {
        &self.inner
    }
}
