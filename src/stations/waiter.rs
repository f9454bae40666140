//! [`StationEntity`] implementation for the single shared waiter.

use super::{StationError, Ticket};
use crate::framework::StationEntity;
use crate::model::{Stage, StageResult};
use crate::pipeline::progress;
use crate::timer;
use async_trait::async_trait;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Waiter {
    serve_time: Duration,
}

impl Waiter {
    pub fn new(serve_time: Duration) -> Self {
        Self { serve_time }
    }
}

#[async_trait]
impl StationEntity for Waiter {
    const NAME: &'static str = "Waiter";
    type Request = Ticket;
    type Output = StageResult;
    type Error = StationError;

    async fn handle(&mut self, ticket: Ticket) -> Result<StageResult, StationError> {
        ticket.bus.broadcast(&progress::serve_started(ticket.order));
        let served = timer::run(ticket.order, Stage::Serve, self.serve_time, 1.0).await?;
        ticket.bus.broadcast(&progress::serve_finished(ticket.order));
        Ok(served)
    }
}
