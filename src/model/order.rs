//! Represents a pizza order moving through the kitchen.
//!
//! An [`Order`] is built from an [`OrderRequest`] at submission time. Its identity and
//! toppings never change afterwards; only its [`OrderState`] advances, one step at a
//! time, as the pipeline completes each stage.

use crate::error::OrderError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe, 1-based identifier of an order within a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderIndex(pub u32);

impl OrderIndex {
    /// Index for the order at zero-based `position` in a batch.
    pub fn from_position(position: usize) -> Result<Self, OrderError> {
        position
            .checked_add(1)
            .and_then(|n| u32::try_from(n).ok())
            .map(Self)
            .ok_or_else(|| {
                OrderError::InvalidArgument(format!("batch position {position} is out of range"))
            })
    }
}

impl Display for OrderIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Payload describing one order in a submitted batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub toppings: Vec<String>,
}

impl OrderRequest {
    pub fn new<I, S>(toppings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            toppings: toppings.into_iter().map(Into::into).collect(),
        }
    }

    /// The five orders the kitchen demo has always served.
    pub fn canonical_batch() -> Vec<OrderRequest> {
        vec![
            OrderRequest::new(["Cheese"]),
            OrderRequest::new(["Pepperoni", "Mushrooms"]),
            OrderRequest::new(["Chicken", "Onions", "Bell Peppers"]),
            OrderRequest::new(["Margherita"]),
            OrderRequest::new(["Sausage", "Olives", "Tomatoes"]),
        ]
    }
}

/// Progress of an order through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderState {
    Pending,
    DoughPrepared,
    ToppingsApplied,
    Cooked,
    Served,
    Complete,
}

impl OrderState {
    /// The only state this one may move to, if any.
    pub fn next(self) -> Option<OrderState> {
        match self {
            OrderState::Pending => Some(OrderState::DoughPrepared),
            OrderState::DoughPrepared => Some(OrderState::ToppingsApplied),
            OrderState::ToppingsApplied => Some(OrderState::Cooked),
            OrderState::Cooked => Some(OrderState::Served),
            OrderState::Served => Some(OrderState::Complete),
            OrderState::Complete => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Order {
    index: OrderIndex,
    toppings: Vec<String>,
    state: OrderState,
}

impl Order {
    /// Validates and creates a pending order.
    ///
    /// # Errors
    /// `InvalidArgument` if the index is zero, the topping list is empty, or any
    /// topping name is blank.
    pub fn new(index: OrderIndex, toppings: Vec<String>) -> Result<Self, OrderError> {
        if index.0 == 0 {
            return Err(OrderError::InvalidArgument(
                "order index must be positive".to_string(),
            ));
        }
        if toppings.is_empty() {
            return Err(OrderError::InvalidArgument(format!(
                "order {index} has no toppings"
            )));
        }
        if let Some(position) = toppings.iter().position(|t| t.trim().is_empty()) {
            return Err(OrderError::InvalidArgument(format!(
                "order {index} has an empty topping name at position {}",
                position + 1
            )));
        }
        Ok(Self {
            index,
            toppings,
            state: OrderState::Pending,
        })
    }

    pub fn index(&self) -> OrderIndex {
        self.index
    }

    pub fn toppings(&self) -> &[String] {
        &self.toppings
    }

    pub fn state(&self) -> OrderState {
        self.state
    }

    /// Moves to `to`, which must be the immediate successor of the current state.
    pub fn advance(&mut self, to: OrderState) -> Result<(), OrderError> {
        if self.state.next() != Some(to) {
            return Err(OrderError::StageFailure {
                order: self.index,
                reason: format!("illegal transition {:?} -> {:?}", self.state, to),
            });
        }
        self.state = to;
        Ok(())
    }
}
