//! The product the kitchen builds, and its builder.

use serde::{Deserialize, Serialize};

pub const DEFAULT_DOUGH: &str = "Regular Dough";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pizza {
    pub dough: String,
    pub toppings: Vec<String>,
}

impl Default for Pizza {
    fn default() -> Self {
        Self {
            dough: DEFAULT_DOUGH.to_string(),
            toppings: Vec::new(),
        }
    }
}

/// Assembles a [`Pizza`] one topping at a time.
///
/// The dough stage creates the builder; the topping stage appends every topping in
/// order; `build` is called once the order is served.
#[derive(Debug, Default)]
pub struct PizzaBuilder {
    pizza: Pizza,
}

impl PizzaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_topping(mut self, topping: impl Into<String>) -> Self {
        self.pizza.toppings.push(topping.into());
        self
    }

    pub fn build(self) -> Pizza {
        self.pizza
    }
}
