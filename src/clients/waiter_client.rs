use crate::clients::station_client::StationHandle;
use crate::error::OrderError;
use crate::framework::StationClient;
use crate::model::{OrderIndex, StageResult};
use crate::notify::NotificationBus;
use crate::stations::{Waiter, Ticket};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Client for the Waiter actor.
#[derive(Clone)]
pub struct WaiterClient {
    inner: StationClient<Waiter>,
}

impl WaiterClient {
    pub fn new(inner: StationClient<Waiter>) -> Self {
        Self { inner }
    }

    /// Serve `order` once the waiter is free.
    #[instrument(skip(self, bus))]
    pub async fn serve(
        &self,
        order: OrderIndex,
        bus: Arc<NotificationBus>,
    ) -> Result<StageResult, OrderError> {
        debug!("Requesting waiter");
        self.perform(Ticket { order, bus }).await
    }
}

impl StationHandle<Waiter> for WaiterClient {
    fn inner(&self) -> &StationClient<Waiter> {
        &self.inner
    }
}
