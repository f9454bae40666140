use crate::model::OrderIndex;
use std::fmt::Display;
use std::time::Duration;
use tokio::time::Instant;

/// One timed step of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Dough,
    Toppings,
    Cook,
    Serve,
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Dough => "dough",
            Stage::Toppings => "toppings",
            Stage::Cook => "cook",
            Stage::Serve => "serve",
        };
        f.write_str(name)
    }
}

/// Outcome of one stage for one order: when it started and when it finished.
///
/// For the Oven and Waiter stages the interval is measured inside the station, so it
/// covers exactly the time the order held the resource (queueing excluded).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageResult {
    pub order: OrderIndex,
    pub stage: Stage,
    pub started_at: Instant,
    pub finished_at: Instant,
}

impl StageResult {
    pub fn elapsed(&self) -> Duration {
        self.finished_at.saturating_duration_since(self.started_at)
    }

    /// True if the two half-open intervals `[started_at, finished_at)` intersect.
    pub fn overlaps(&self, other: &StageResult) -> bool {
        self.started_at < other.finished_at && other.started_at < self.finished_at
    }
}
