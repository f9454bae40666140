//! [`StationEntity`] implementation for the single shared oven.

use super::{StationError, Ticket};
use crate::framework::StationEntity;
use crate::model::{Stage, StageResult};
use crate::pipeline::progress;
use crate::timer;
use async_trait::async_trait;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Oven {
    cook_time: Duration,
}

impl Oven {
    pub fn new(cook_time: Duration) -> Self {
        Self { cook_time }
    }
}

#[async_trait]
impl StationEntity for Oven {
    const NAME: &'static str = "Oven";
    type Request = Ticket;
    type Output = StageResult;
    type Error = StationError;

    /// Cooks one pizza. The actor loop guarantees nothing else is in the oven.
    async fn handle(&mut self, ticket: Ticket) -> Result<StageResult, StationError> {
        ticket.bus.broadcast(&progress::cook_started(ticket.order));
        let cooked = timer::run(ticket.order, Stage::Cook, self.cook_time, 1.0).await?;
        ticket.bus.broadcast(&progress::cook_finished(ticket.order));
        Ok(cooked)
    }
}
