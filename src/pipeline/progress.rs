//! Progress lines broadcast by the pipeline.

use crate::model::OrderIndex;

pub fn dough_started(order: OrderIndex) -> String {
    format!("Dough chef started preparing dough for Order {order}...")
}

pub fn dough_finished(order: OrderIndex) -> String {
    format!("Dough chef finished preparing dough for Order {order}.")
}

pub fn toppings_started(order: OrderIndex, toppings: &[String]) -> String {
    format!(
        "Topping chef started adding {} toppings for Order {order}...",
        toppings.join(", ")
    )
}

pub fn toppings_finished(order: OrderIndex, toppings: &[String]) -> String {
    format!(
        "Topping chef finished adding {} toppings for Order {order}.",
        toppings.join(", ")
    )
}

// Oven and Waiter lines are sent by the stations themselves, while they hold the order.
pub fn cook_started(order: OrderIndex) -> String {
    format!("Oven started cooking Order {order}...")
}

pub fn cook_finished(order: OrderIndex) -> String {
    format!("Oven finished cooking Order {order}.")
}

pub fn serve_started(order: OrderIndex) -> String {
    format!("Waiter started serving Order {order}...")
}

pub fn serve_finished(order: OrderIndex) -> String {
    format!("Waiter finished serving Order {order}.")
}
