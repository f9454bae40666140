//! # Stage Timer
//!
//! Models one timed unit of kitchen work. The only observable effect of running a
//! stage is elapsed time; the returned [`StageResult`] records when it started and
//! finished.
//!
//! Durations are measured on tokio's clock, so tests can run the whole kitchen on a
//! paused clock and still get exact intervals.

use crate::error::OrderError;
use crate::model::{OrderIndex, Stage, StageResult};
use std::time::Duration;
use tokio::time::Instant;
use tracing::trace;

/// Returns `nominal × multiplier`.
///
/// # Errors
/// `InvalidArgument` when the multiplier is negative, NaN or infinite, or when the
/// product does not fit in a `Duration`. Invalid input is never clamped to zero.
pub fn scaled(nominal: Duration, multiplier: f64) -> Result<Duration, OrderError> {
    if !multiplier.is_finite() || multiplier < 0.0 {
        return Err(OrderError::InvalidArgument(format!(
            "stage multiplier must be a finite, non-negative number (got {multiplier})"
        )));
    }
    let nanos = (nominal.as_nanos() as f64 * multiplier).round();
    if nanos >= u64::MAX as f64 {
        return Err(OrderError::InvalidArgument(format!(
            "{nominal:?} x {multiplier} does not fit in a duration"
        )));
    }
    Ok(Duration::from_nanos(nanos as u64))
}

/// Suspends the calling task for `nominal × multiplier`.
pub async fn run(
    order: OrderIndex,
    stage: Stage,
    nominal: Duration,
    multiplier: f64,
) -> Result<StageResult, OrderError> {
    let duration = scaled(nominal, multiplier)?;
    let started_at = Instant::now();
    trace!(%order, %stage, ?duration, "Stage timer started");
    tokio::time::sleep(duration).await;
    Ok(StageResult {
        order,
        stage,
        started_at,
        finished_at: Instant::now(),
    })
}
