//! # Order Pipeline
//!
//! Drives one order through the kitchen:
//!
//! ```text
//! Pending -> DoughPrepared -> ToppingsApplied -> Cooked -> Served -> Complete
//!            (dough chef)     (topping chef)     (Oven)    (Waiter)
//! ```
//!
//! Dough and toppings run on the order's own task and overlap freely with other
//! orders. Cooking and serving go through the shared stations and wait their turn.
//! A progress line is broadcast before and after every stage; see [`progress`]. The
//! pipeline sends the dough and topping lines, the stations send their own once the
//! order is actually in the oven or with the waiter.
//!
//! Any stage failure ends this order's pipeline with an [`OrderError`]. Sibling
//! orders are unaffected because each pipeline runs on its own task.

pub mod progress;

use crate::clients::{OvenClient, WaiterClient};
use crate::config::KitchenConfig;
use crate::error::OrderError;
use crate::model::{CompletedOrder, Order, OrderState, PizzaBuilder, Stage};
use crate::notify::NotificationBus;
use crate::timer;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Durations of the two stages the pipeline times itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrepTimings {
    pub dough: Duration,
    pub topping: Duration,
}

impl From<&KitchenConfig> for PrepTimings {
    fn from(config: &KitchenConfig) -> Self {
        Self {
            dough: config.dough_time(),
            topping: config.topping_time(),
        }
    }
}

/// Everything one order needs to get from dough to table.
///
/// Cloning is cheap: the clients are channel senders and the bus is shared.
#[derive(Clone)]
pub struct OrderPipeline {
    oven: OvenClient,
    waiter: WaiterClient,
    bus: Arc<NotificationBus>,
    timings: PrepTimings,
}

impl OrderPipeline {
    pub fn new(
        oven: OvenClient,
        waiter: WaiterClient,
        bus: Arc<NotificationBus>,
        timings: PrepTimings,
    ) -> Self {
        Self {
            oven,
            waiter,
            bus,
            timings,
        }
    }

    /// Runs all four stages for `order` and returns the finished pizza.
    pub async fn run(&self, mut order: Order) -> Result<CompletedOrder, OrderError> {
        let index = order.index();
        let mut timeline = Vec::with_capacity(4);
        debug!(order = %index, toppings = ?order.toppings(), "Pipeline started");

        // 1. Dough
        self.bus.broadcast(&progress::dough_started(index));
        let dough = timer::run(index, Stage::Dough, self.timings.dough, 1.0)
            .await
            .map_err(|e| OrderError::stage_failure(index, Stage::Dough, e))?;
        let mut builder = PizzaBuilder::new();
        order.advance(OrderState::DoughPrepared)?;
        timeline.push(dough);
        self.bus.broadcast(&progress::dough_finished(index));

        // 2. Toppings, one unit of work per topping
        self.bus
            .broadcast(&progress::toppings_started(index, order.toppings()));
        let multiplier = order.toppings().len() as f64;
        let toppings = timer::run(index, Stage::Toppings, self.timings.topping, multiplier)
            .await
            .map_err(|e| OrderError::stage_failure(index, Stage::Toppings, e))?;
        for topping in order.toppings() {
            builder = builder.add_topping(topping.as_str());
        }
        order.advance(OrderState::ToppingsApplied)?;
        timeline.push(toppings);
        self.bus
            .broadcast(&progress::toppings_finished(index, order.toppings()));

        // 3. Oven (shared); the oven announces its own start and finish
        let cooked = self.oven.cook(index, self.bus.clone()).await?;
        order.advance(OrderState::Cooked)?;
        timeline.push(cooked);

        // 4. Waiter (shared)
        let served = self.waiter.serve(index, self.bus.clone()).await?;
        order.advance(OrderState::Served)?;
        timeline.push(served);

        order.advance(OrderState::Complete)?;
        let elapsed_ms = timeline
            .iter()
            .map(|r| r.elapsed().as_millis())
            .sum::<u128>() as u64;
        info!(order = %index, elapsed_ms, "Order complete");

        Ok(CompletedOrder {
            index,
            pizza: builder.build(),
            timeline,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockStation;
    use crate::framework::FrameworkError;
    use crate::model::{OrderIndex, StageResult};
    use crate::notify::RecordingObserver;
    use crate::stations::{self, Oven, Waiter};
    use tokio::time::Instant;

    fn timings() -> PrepTimings {
        PrepTimings {
            dough: Duration::from_millis(7),
            topping: Duration::from_millis(4),
        }
    }

    fn order(index: u32, toppings: &[&str]) -> Order {
        Order::new(
            OrderIndex(index),
            toppings.iter().map(|t| t.to_string()).collect(),
        )
        .unwrap()
    }

    fn recording_bus() -> (Arc<NotificationBus>, Arc<RecordingObserver>) {
        let transcript = Arc::new(RecordingObserver::new("transcript"));
        let mut bus = NotificationBus::new();
        bus.subscribe(transcript.clone());
        (Arc::new(bus), transcript)
    }

    #[tokio::test(start_paused = true)]
    async fn test_pipeline_runs_stages_in_order() {
        let (oven_actor, oven) = stations::new_oven(Duration::from_millis(10), 8);
        let (waiter_actor, waiter) = stations::new_waiter(Duration::from_millis(5), 8);
        tokio::spawn(oven_actor.run());
        tokio::spawn(waiter_actor.run());
        let (bus, transcript) = recording_bus();

        let pipeline = OrderPipeline::new(
            OvenClient::new(oven),
            WaiterClient::new(waiter),
            bus,
            timings(),
        );
        let done = pipeline
            .run(order(2, &["Pepperoni", "Mushrooms"]))
            .await
            .unwrap();

        assert_eq!(done.index, OrderIndex(2));
        assert_eq!(done.toppings(), ["Pepperoni", "Mushrooms"]);
        let stages: Vec<_> = done.timeline.iter().map(|r| r.stage).collect();
        assert_eq!(
            stages,
            [Stage::Dough, Stage::Toppings, Stage::Cook, Stage::Serve]
        );
        for pair in done.timeline.windows(2) {
            assert!(pair[0].finished_at <= pair[1].started_at);
        }
        assert!(done.timeline[1].elapsed() >= Duration::from_millis(8));

        assert_eq!(
            transcript.messages(),
            vec![
                "Dough chef started preparing dough for Order 2...",
                "Dough chef finished preparing dough for Order 2.",
                "Topping chef started adding Pepperoni, Mushrooms toppings for Order 2...",
                "Topping chef finished adding Pepperoni, Mushrooms toppings for Order 2.",
                "Oven started cooking Order 2...",
                "Oven finished cooking Order 2.",
                "Waiter started serving Order 2...",
                "Waiter finished serving Order 2.",
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_oven_fails_only_at_cook_stage() {
        let mut oven = MockStation::<Oven>::new();
        oven.expect_perform().return_err(FrameworkError::ActorClosed);
        let waiter = MockStation::<Waiter>::new();
        let (bus, transcript) = recording_bus();

        let pipeline = OrderPipeline::new(
            OvenClient::new(oven.client()),
            WaiterClient::new(waiter.client()),
            bus,
            timings(),
        );
        let result = pipeline.run(order(1, &["Cheese"])).await;

        assert_eq!(
            result,
            Err(OrderError::ResourceUnavailable {
                order: OrderIndex(1),
                resource: "Oven",
            })
        );
        // The oven never took the order, so it never announced it.
        let messages = transcript.messages();
        assert_eq!(
            messages.last().unwrap(),
            "Topping chef finished adding Cheese toppings for Order 1."
        );
        oven.verify();
        waiter.verify();
    }

    #[tokio::test(start_paused = true)]
    async fn test_waiter_result_is_recorded() {
        let mut oven = MockStation::<Oven>::new();
        let mut waiter = MockStation::<Waiter>::new();
        let now = Instant::now();
        oven.expect_perform().return_ok(StageResult {
            order: OrderIndex(9),
            stage: Stage::Cook,
            started_at: now,
            finished_at: now,
        });
        waiter.expect_perform().return_ok(StageResult {
            order: OrderIndex(9),
            stage: Stage::Serve,
            started_at: now,
            finished_at: now,
        });
        let (bus, _) = recording_bus();

        let pipeline = OrderPipeline::new(
            OvenClient::new(oven.client()),
            WaiterClient::new(waiter.client()),
            bus,
            timings(),
        );
        let done = pipeline.run(order(9, &["Margherita"])).await.unwrap();

        assert_eq!(done.timeline.len(), 4);
        assert_eq!(done.timeline[3].stage, Stage::Serve);
        assert_eq!(done.pizza.toppings, vec!["Margherita"]);
        oven.verify();
        waiter.verify();
    }
}
