//! Request lifecycle tracking: cancellation, deadlines, and at-most-one
//! in-flight request per logical user action.
//!
//! A screen submitting an action does:
//!
//! ```ignore
//! let pending = slot.begin();
//! let outcome = pending.settle(client.find_matches(&text)).await;
//! slot.finish(&pending);
//! match outcome {
//!     None => {}                    // cancelled or superseded, apply nothing
//!     Some(Ok(results)) => { ... }  // exactly one success mutation
//!     Some(Err(err)) => { ... }     // exactly one classified error
//! }
//! ```
//!
//! Settling to `None` guarantees the call has no further observable effect:
//! neither the success path nor the error path runs for a cancelled request.

use std::future::Future;
use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

use super::ApiError;

/// Default deadline applied when settling a request.
/// Matches the client's own HTTP timeout so whichever fires first wins.
pub const REQUEST_DEADLINE: Duration = Duration::from_secs(10);

/// One in-flight call: a cancellation handle and a deadline.
///
/// Created by [`ActionSlot::begin`], destroyed when the response, error, or
/// timeout resolves.
#[derive(Debug)]
pub struct PendingRequest {
    token: CancellationToken,
    deadline: Duration,
    issued_at: Instant,
    generation: u64,
}

impl PendingRequest {
    /// Cancel this request. Any pending [`settle`](Self::settle) resolves to
    /// `None`.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Handle that can cancel this request from elsewhere.
    pub fn cancel_handle(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Drive `fut` to completion under this request's deadline and
    /// cancellation handle. The deadline is measured from issuance (the
    /// `begin` call), so only the remaining budget applies here.
    ///
    /// Returns `None` when the request was cancelled or superseded before the
    /// future resolved; the caller must then apply no state change. A missed
    /// deadline settles as `Some(Err(ApiError::Timeout))`.
    pub async fn settle<T, F>(&self, fut: F) -> Option<Result<T, ApiError>>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        if self.token.is_cancelled() {
            return None;
        }
        let remaining = match self.deadline.checked_sub(self.issued_at.elapsed()) {
            Some(remaining) => remaining,
            None => return Some(Err(ApiError::Timeout)),
        };
        tokio::select! {
            _ = self.token.cancelled() => None,
            result = tokio::time::timeout(remaining, fut) => {
                Some(result.unwrap_or(Err(ApiError::Timeout)))
            }
        }
    }
}

/// At-most-one-in-flight guard for a logical user action (submit login,
/// submit intent, ...). One slot per action.
///
/// Beginning a new request cancels the previous one, so two outcomes for the
/// same action can never race: the superseded request settles to `None` and
/// its resolution is discarded.
#[derive(Debug, Default)]
pub struct ActionSlot {
    current: Option<CancellationToken>,
    generation: u64,
}

impl ActionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a request with the default deadline, superseding any request
    /// still outstanding on this slot.
    pub fn begin(&mut self) -> PendingRequest {
        self.begin_with_deadline(REQUEST_DEADLINE)
    }

    /// Begin a request with an explicit deadline.
    pub fn begin_with_deadline(&mut self, deadline: Duration) -> PendingRequest {
        if let Some(prev) = self.current.take() {
            prev.cancel();
        }
        self.generation += 1;
        let token = CancellationToken::new();
        self.current = Some(token.clone());
        PendingRequest {
            token,
            deadline,
            issued_at: Instant::now(),
            generation: self.generation,
        }
    }

    /// Mark `pending` as resolved. A stale request (one that was superseded
    /// by a later `begin`) does not clear the slot.
    pub fn finish(&mut self, pending: &PendingRequest) {
        if pending.generation == self.generation {
            self.current = None;
        }
    }

    /// True while a request begun on this slot has neither finished nor been
    /// cancelled.
    pub fn is_busy(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|token| !token.is_cancelled())
    }
}
