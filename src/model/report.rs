//! Results handed from the pipeline to the scheduler, and from the scheduler to a sink.

use crate::error::OrderError;
use crate::model::{OrderIndex, Pizza, Stage, StageResult};
use std::time::Duration;

/// A successfully completed order.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedOrder {
    pub index: OrderIndex,
    pub pizza: Pizza,
    /// One entry per stage, in pipeline order.
    pub timeline: Vec<StageResult>,
}

impl CompletedOrder {
    pub fn toppings(&self) -> &[String] {
        &self.pizza.toppings
    }
}

/// One line of the batch report. Exactly one exists per submitted order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportEntry {
    pub order_index: OrderIndex,
    pub toppings: Vec<String>,
    pub error: Option<OrderError>,
    pub timeline: Vec<StageResult>,
}

impl ReportEntry {
    pub fn succeeded(order: CompletedOrder) -> Self {
        Self {
            order_index: order.index,
            toppings: order.pizza.toppings,
            error: None,
            timeline: order.timeline,
        }
    }

    pub fn failed(order_index: OrderIndex, toppings: Vec<String>, error: OrderError) -> Self {
        Self {
            order_index,
            toppings,
            error: Some(error),
            timeline: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn stage(&self, stage: Stage) -> Option<&StageResult> {
        self.timeline.iter().find(|r| r.stage == stage)
    }
}

/// Aggregate outcome of one batch run, sorted by `order_index`.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub total_elapsed: Duration,
    pub entries: Vec<ReportEntry>,
}

impl BatchReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|e| e.is_success())
    }

    pub fn failed(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|e| !e.is_success())
    }

    pub fn entry(&self, index: OrderIndex) -> Option<&ReportEntry> {
        self.entries.iter().find(|e| e.order_index == index)
    }

    /// Every recorded interval for `stage`, across all orders.
    pub fn intervals(&self, stage: Stage) -> Vec<StageResult> {
        self.entries
            .iter()
            .filter_map(|e| e.stage(stage).copied())
            .collect()
    }

    /// True if no two orders held `stage` at the same time.
    pub fn is_serialized(&self, stage: Stage) -> bool {
        let intervals = self.intervals(stage);
        intervals.iter().enumerate().all(|(i, a)| {
            intervals[i + 1..].iter().all(|b| !a.overlaps(b))
        })
    }
}
