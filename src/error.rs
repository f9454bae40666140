//! Error types for order processing.

use crate::model::{OrderIndex, Stage};
use thiserror::Error;

/// Errors that can end up in an order's report entry.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The order (or a value derived from it) is malformed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A timed stage or a resource operation failed for this order.
    #[error("Order {order} failed: {reason}")]
    StageFailure { order: OrderIndex, reason: String },

    /// A shared resource refused new work (e.g. it has shut down).
    #[error("Order {order} could not reach the {resource}: resource unavailable")]
    ResourceUnavailable {
        order: OrderIndex,
        resource: &'static str,
    },
}

impl OrderError {
    /// Wraps any error as a failure of `stage` for `order`.
    pub fn stage_failure(order: OrderIndex, stage: Stage, cause: impl std::fmt::Display) -> Self {
        OrderError::StageFailure {
            order,
            reason: format!("{stage} stage: {cause}"),
        }
    }

    /// True for the two kinds that occur after submission.
    pub fn is_stage_failure(&self) -> bool {
        matches!(
            self,
            OrderError::StageFailure { .. } | OrderError::ResourceUnavailable { .. }
        )
    }
}
