//! Concurrent fan-out / fan-in of independent lookups.
//!
//! A logical lookup ("this instance, somewhere in these accounts and regions")
//! is split into one task per backend call. Each task posts exactly one
//! [`FanoutResult`]; the aggregator drains them until every task has reported
//! or enough results were collected, then cancels whatever is still running.
//!
//! ```text
//!   task(acct1/us-1) ──┐
//!   task(acct2/us-1) ──┼──> handoff (capacity 1) ──> results(limit) ──> FanoutOutcome
//!   task(acct2/us-2) ──┘          ^                        │
//!                                 └──── cancel scope <─────┘ (limit reached / all done)
//! ```
//!
//! Completion is tracked through the task handles themselves: every
//! [`FanoutTask`] owns a sender, so once all handles are dropped the handoff
//! closes and the drain loop knows no more results are coming.

use std::future::Future;

use log::debug;
use tokio::sync::mpsc;

use crate::context::RequestContext;
use crate::errors::{ResolverError, Status};
use crate::models::{Results, TypedObject};

/// What one task hands back: a batch of zero or more items, or one error.
pub type FanoutResult<T> = Result<Vec<T>, ResolverError>;

/// Collected output of a fan-out.
#[derive(Debug)]
pub struct FanoutOutcome<T> {
    pub items: Vec<T>,
    /// One entry per failed task, in completion order.
    pub failures: Vec<Status>,
}

impl From<FanoutOutcome<TypedObject>> for Results {
    fn from(outcome: FanoutOutcome<TypedObject>) -> Self {
        Results::new(outcome.items, outcome.failures)
    }
}

/// Runs independent lookup tasks concurrently and merges their results.
pub struct FanoutAggregator<T> {
    scope: RequestContext,
    tx: mpsc::Sender<FanoutResult<T>>,
    rx: mpsc::Receiver<FanoutResult<T>>,
    tasks: usize,
}

impl<T: Send + 'static> FanoutAggregator<T> {
    /// Create an aggregator whose tasks run in a child scope of `ctx`.
    pub fn new(ctx: &RequestContext) -> Self {
        let (tx, rx) = mpsc::channel(1);
        Self {
            scope: ctx.child(),
            tx,
            rx,
            tasks: 0,
        }
    }

    /// Register one task. Dropping the returned handle marks it finished.
    pub fn task(&mut self) -> FanoutTask<T> {
        self.tasks += 1;
        FanoutTask {
            tx: self.tx.clone(),
            scope: self.scope.clone(),
        }
    }

    /// Register a task and run `future` on the runtime.
    ///
    /// The future is abandoned at its next suspension point once the scope is
    /// cancelled; otherwise its output is posted to the aggregator.
    pub fn spawn<F>(&mut self, future: F)
    where
        F: Future<Output = FanoutResult<T>> + Send + 'static,
    {
        let task = self.task();
        tokio::spawn(async move {
            let result = tokio::select! {
                biased;
                _ = task.cancelled() => return,
                result = future => result,
            };
            task.post(result).await;
        });
    }

    /// Number of tasks registered so far.
    pub fn tasks(&self) -> usize {
        self.tasks
    }

    /// Drain results until every task has reported or `limit` items have
    /// been collected (`limit == 0` collects everything).
    ///
    /// Consumes the aggregator: results can be collected once. On return the
    /// scope is cancelled so outstanding tasks discard their results and exit.
    pub async fn results(self, limit: usize) -> FanoutOutcome<T> {
        let Self {
            scope,
            tx,
            mut rx,
            tasks,
        } = self;
        // Only task handles keep the handoff open from here on.
        drop(tx);

        let mut items = Vec::new();
        let mut failures = Vec::new();
        let mut reported = 0usize;

        loop {
            if limit > 0 && items.len() >= limit {
                break;
            }

            tokio::select! {
                biased;
                message = rx.recv() => match message {
                    Some(Ok(batch)) => {
                        reported += 1;
                        items.extend(batch);
                    }
                    Some(Err(error)) => {
                        reported += 1;
                        debug!("Fanout task failed: {}", error);
                        failures.push(error.to_status());
                    }
                    None => break,
                },
                _ = scope.cancelled() => {
                    if let Some(error) = scope.err() {
                        failures.push(error.to_status());
                    }
                    break;
                }
            }
        }

        scope.cancel();

        if limit > 0 {
            items.truncate(limit);
        }

        debug!(
            "Fanout collected {} items and {} failures from {}/{} tasks",
            items.len(),
            failures.len(),
            reported,
            tasks
        );

        FanoutOutcome { items, failures }
    }
}

/// Handle held by one fan-out task.
pub struct FanoutTask<T> {
    tx: mpsc::Sender<FanoutResult<T>>,
    scope: RequestContext,
}

impl<T> FanoutTask<T> {
    /// Completes when the aggregator no longer wants results.
    pub async fn cancelled(&self) {
        self.scope.cancelled().await
    }

    pub fn is_cancelled(&self) -> bool {
        self.scope.is_cancelled()
    }

    /// Hand the task's result to the aggregator.
    ///
    /// Returns `true` if the result was accepted and `false` if the aggregator
    /// had already cancelled, in which case the result is dropped.
    pub async fn post(self, result: FanoutResult<T>) -> bool {
        tokio::select! {
            biased;
            _ = self.scope.cancelled() => false,
            sent = self.tx.send(result) => sent.is_ok(),
        }
    }
}
