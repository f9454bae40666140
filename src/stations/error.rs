//! Error types for the Oven and Waiter stations.

use crate::error::OrderError;
use thiserror::Error;

/// Errors a station can raise while working on an order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StationError {
    /// The station's timed work could not be scheduled.
    #[error("Station timer rejected the work: {0}")]
    Timer(#[from] OrderError),
}
