//! Per-request execution scope.

use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::{CancellationToken, DropGuard};

use crate::errors::ResolverError;

/// Cancellable execution scope shared by everything serving one request.
///
/// Carries a cancellation token and an optional deadline. Child scopes
/// (see [`child`](Self::child)) are cancelled with their parent but can also
/// be cancelled on their own, which is how a fan-out stops its outstanding
/// tasks without touching the caller's scope.
#[derive(Clone, Debug, Default)]
pub struct RequestContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope that expires `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            token: CancellationToken::new(),
            deadline: Some(Instant::now() + timeout),
        }
    }

    /// Derive a scope that is cancelled when this one is.
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            deadline: self.deadline,
        }
    }

    /// Cancel this scope and every child. Idempotent.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Guard that cancels this scope when dropped, e.g. when the caller
    /// abandons the request.
    pub fn drop_guard(&self) -> DropGuard {
        self.token.clone().drop_guard()
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled() || self.deadline_passed()
    }

    fn deadline_passed(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Completes once the scope is cancelled or its deadline passes.
    pub async fn cancelled(&self) {
        match self.deadline {
            Some(deadline) => {
                tokio::select! {
                    _ = self.token.cancelled() => {}
                    _ = tokio::time::sleep_until(deadline) => {}
                }
            }
            None => self.token.cancelled().await,
        }
    }

    /// The error describing why this scope ended, if it has.
    pub fn err(&self) -> Option<ResolverError> {
        if self.deadline_passed() {
            Some(ResolverError::DeadlineExceeded)
        } else if self.token.is_cancelled() {
            Some(ResolverError::Cancelled)
        } else {
            None
        }
    }
}
