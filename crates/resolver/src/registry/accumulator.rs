//! Per-request merge of results from several resolvers.

use crate::errors::{ResolverError, Status};
use crate::models::{Results, TypedObject};

/// Accumulates results and partial failures for one request.
#[derive(Debug, Default)]
pub struct ResponseAccumulator {
    results: Vec<TypedObject>,
    partial_failures: Vec<Status>,
    limit: usize,
}

impl ResponseAccumulator {
    /// `limit == 0` means unbounded.
    pub fn new(limit: usize) -> Self {
        Self {
            results: Vec::new(),
            partial_failures: Vec::new(),
            limit,
        }
    }

    pub fn push(&mut self, results: Results) {
        self.results.extend(results.objects);
        self.partial_failures.extend(results.partial_failures);
    }

    pub fn results(&self) -> &[TypedObject] {
        &self.results
    }

    pub fn partial_failures(&self) -> &[Status] {
        &self.partial_failures
    }

    /// Cut results down to the limit.
    ///
    /// When the limit is met exactly the request is satisfied, so the
    /// remaining failures no longer matter to the caller and are dropped.
    pub fn truncate(&mut self) {
        if self.limit == 0 {
            return;
        }
        self.results.truncate(self.limit);
        if self.results.len() == self.limit {
            self.partial_failures.clear();
        }
    }

    /// Apply the error-decision rule.
    ///
    /// - any results: success, failures are returned alongside
    /// - no results, some failures: `FailedPrecondition` with every failure attached
    /// - nothing at all: `NotFound`
    pub fn finish(self, type_url: &str, searched: Vec<String>) -> Result<Results, ResolverError> {
        if !self.results.is_empty() {
            return Ok(Results::new(self.results, self.partial_failures));
        }

        if !self.partial_failures.is_empty() {
            return Err(ResolverError::LookupFailed {
                type_url: type_url.to_string(),
                searched,
                failures: self.partial_failures,
            });
        }

        Err(ResolverError::NotFound {
            type_url: type_url.to_string(),
            searched,
        })
    }
}
