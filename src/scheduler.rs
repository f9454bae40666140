//! # Order Scheduler
//!
//! Runs a batch: validates every order, starts one pipeline task per valid order,
//! joins all of them and folds the outcomes into a [`BatchReport`].
//!
//! The join never short-circuits. A pipeline that fails, or a task that panics,
//! becomes a tagged entry in the report while every other order carries on.

use crate::error::OrderError;
use crate::model::{BatchReport, CompletedOrder, Order, OrderIndex, OrderRequest, ReportEntry};
use crate::pipeline::OrderPipeline;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{info, info_span, warn, Instrument};

/// A started pipeline: the order it runs, its toppings, and its task.
type Running = (
    OrderIndex,
    Vec<String>,
    JoinHandle<Result<CompletedOrder, OrderError>>,
);

pub struct OrderScheduler {
    pipeline: OrderPipeline,
}

impl OrderScheduler {
    pub fn new(pipeline: OrderPipeline) -> Self {
        Self { pipeline }
    }

    /// Processes `requests` concurrently and reports on every one of them.
    ///
    /// Orders are numbered by their 1-based position. Malformed orders are rejected
    /// with `InvalidArgument` before any pipeline starts; the rest of the batch
    /// still runs. Entries come back sorted by `order_index`.
    ///
    /// # Errors
    /// `InvalidArgument` if the batch has more orders than an [`OrderIndex`] can
    /// number. Nothing has been started in that case.
    pub async fn run_batch(
        &self,
        requests: Vec<OrderRequest>,
    ) -> Result<BatchReport, OrderError> {
        let span = info_span!("batch", orders = requests.len());
        self.run_batch_inner(requests).instrument(span).await
    }

    async fn run_batch_inner(
        &self,
        requests: Vec<OrderRequest>,
    ) -> Result<BatchReport, OrderError> {
        let started = Instant::now();
        let mut entries = Vec::with_capacity(requests.len());

        // Validate the whole batch before the first task is spawned.
        let mut accepted = Vec::with_capacity(requests.len());
        for (position, request) in requests.into_iter().enumerate() {
            let index = OrderIndex::from_position(position)?;
            match Order::new(index, request.toppings.clone()) {
                Ok(order) => accepted.push((request.toppings, order)),
                Err(e) => {
                    warn!(order = %index, error = %e, "Order rejected at submission");
                    entries.push(ReportEntry::failed(index, request.toppings, e));
                }
            }
        }

        let running: Vec<Running> = accepted
            .into_iter()
            .map(|(toppings, order)| {
                let index = order.index();
                let pipeline = self.pipeline.clone();
                let span = info_span!("order", order = %index);
                let handle =
                    tokio::spawn(async move { pipeline.run(order).await }.instrument(span));
                (index, toppings, handle)
            })
            .collect();
        info!(started = running.len(), rejected = entries.len(), "Batch started");

        entries.extend(join_all(running).await);
        entries.sort_by_key(|e| e.order_index);
        let report = BatchReport {
            total_elapsed: started.elapsed(),
            entries,
        };
        let stage_failures = report
            .failed()
            .filter(|e| e.error.as_ref().is_some_and(OrderError::is_stage_failure))
            .count();
        info!(
            total_ms = report.total_elapsed.as_millis() as u64,
            succeeded = report.succeeded().count(),
            rejected = report.failed().count() - stage_failures,
            stage_failures,
            "Batch complete"
        );
        Ok(report)
    }
}

/// Awaits every task in turn. A failed pipeline, a panicked task and an aborted
/// task each become a failure entry; none of them stops the others being joined.
async fn join_all(running: Vec<Running>) -> Vec<ReportEntry> {
    let mut entries = Vec::with_capacity(running.len());
    for (index, toppings, handle) in running {
        let entry = match handle.await {
            Ok(Ok(done)) => ReportEntry::succeeded(done),
            Ok(Err(e)) => {
                warn!(order = %index, error = %e, "Order failed");
                ReportEntry::failed(index, toppings, e)
            }
            Err(join_error) => {
                warn!(order = %index, error = %join_error, "Order task did not finish");
                let error = OrderError::StageFailure {
                    order: index,
                    reason: format!("pipeline task aborted: {join_error}"),
                };
                ReportEntry::failed(index, toppings, error)
            }
        };
        entries.push(entry);
    }
    entries
}
