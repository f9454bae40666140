//! Pure data structures: orders, stages, the pizza and the batch report.

pub mod order;
pub mod pizza;
pub mod report;
pub mod stage;

pub use order::*;
pub use pizza::*;
pub use report::*;
pub use stage::*;
