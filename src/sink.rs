//! # Report Sinks
//!
//! A sink receives the finished [`BatchReport`] exactly once per run. Sinks sit
//! outside the core: [`publish_report`] is the boundary, and a failing sink is
//! logged there without reaching the scheduler.

use crate::model::BatchReport;
use std::fmt::Write as _;
use std::io::{self, Write};
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to write report: {0}")]
    Io(#[from] io::Error),
    #[error("Sink rejected report: {0}")]
    Rejected(String),
}

/// Consumer of a finished batch report (console, database, file...).
pub trait ReportSink {
    fn consume(&self, report: &BatchReport) -> Result<(), SinkError>;
}

/// Prints the classic order report to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// The report text, one line per order.
    pub fn render(report: &BatchReport) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "---- Order Report ----");
        let _ = writeln!(
            out,
            "Preparation Time (ms): {}",
            report.total_elapsed.as_millis()
        );
        for entry in &report.entries {
            match &entry.error {
                None => {
                    let _ = writeln!(
                        out,
                        "Order {}: {}",
                        entry.order_index,
                        entry.toppings.join(", ")
                    );
                }
                Some(e) => {
                    let _ = writeln!(out, "Order {}: FAILED ({})", entry.order_index, e);
                }
            }
        }
        out
    }
}

impl ReportSink for ConsoleSink {
    fn consume(&self, report: &BatchReport) -> Result<(), SinkError> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(Self::render(report).as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

/// Hands `report` to `sink`. Returns `false` (after logging) if the sink failed.
pub fn publish_report(sink: &dyn ReportSink, report: &BatchReport) -> bool {
    match sink.consume(report) {
        Ok(()) => {
            info!(entries = report.entries.len(), "Report published");
            true
        }
        Err(e) => {
            error!(error = %e, "Report sink failed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OrderError;
    use crate::model::{OrderIndex, ReportEntry};
    use std::cell::Cell;
    use std::time::Duration;

    fn report() -> BatchReport {
        BatchReport {
            total_elapsed: Duration::from_millis(1234),
            entries: vec![
                ReportEntry {
                    order_index: OrderIndex(1),
                    toppings: vec!["Pepperoni".to_string(), "Mushrooms".to_string()],
                    error: None,
                    timeline: Vec::new(),
                },
                ReportEntry::failed(
                    OrderIndex(2),
                    Vec::new(),
                    OrderError::InvalidArgument("order 2 has no toppings".to_string()),
                ),
            ],
        }
    }

    struct BrokenDatabase {
        calls: Cell<u32>,
    }

    impl ReportSink for BrokenDatabase {
        fn consume(&self, _report: &BatchReport) -> Result<(), SinkError> {
            self.calls.set(self.calls.get() + 1);
            Err(SinkError::Rejected("connection refused".to_string()))
        }
    }

    #[test]
    fn test_render_lists_every_order() {
        let text = ConsoleSink::render(&report());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "---- Order Report ----",
                "Preparation Time (ms): 1234",
                "Order 1: Pepperoni, Mushrooms",
                "Order 2: FAILED (Invalid argument: order 2 has no toppings)",
            ]
        );
    }

    #[test]
    fn test_failing_sink_is_contained() {
        let sink = BrokenDatabase {
            calls: Cell::new(0),
        };
        assert!(!publish_report(&sink, &report()));
        assert_eq!(sink.calls.get(), 1);
    }
}
