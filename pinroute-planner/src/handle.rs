//! Cancellable handles for in-flight service calls.

use std::fmt;

use tokio_util::sync::CancellationToken;

/// Identifies one geocode or directions request issued by a planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub(crate) u64);

impl RequestId {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle to a request that has been dispatched but may not have finished.
///
/// Cancelling stops the underlying task at its next await point; the planner
/// then reports [`crate::PlannerEvent::Cancelled`] for it instead of
/// applying a result.
#[derive(Debug, Clone)]
pub struct RequestHandle {
    id: RequestId,
    token: CancellationToken,
}

impl RequestHandle {
    pub(crate) const fn new(id: RequestId, token: CancellationToken) -> Self {
        Self { id, token }
    }

    #[must_use]
    pub const fn id(&self) -> RequestId {
        self.id
    }

    /// Abandon the request.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub(crate) fn token(&self) -> CancellationToken {
        self.token.clone()
    }
}
