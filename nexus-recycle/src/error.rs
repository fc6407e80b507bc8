//! Error types.
//!
//! A full queue is not an error in the usual sense: [`RecyclingQueue::offer`]
//! reports it as `false`, and [`RecyclingQueue::try_offer`] hands the rejected
//! element back in [`Full`]. [`QueueError`] covers contract violations and the
//! operations a disposable queue refuses to perform.
//!
//! [`RecyclingQueue::offer`]: crate::RecyclingQueue::offer
//! [`RecyclingQueue::try_offer`]: crate::RecyclingQueue::try_offer

use thiserror::Error;

/// Result alias for fallible queue operations.
pub type Result<T> = core::result::Result<T, QueueError>;

/// Errors returned by queue operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// An absent element was offered. The queue is unchanged.
    #[error("cannot enqueue an absent element")]
    InvalidArgument,

    /// The operation has no meaning for a queue of use-once elements.
    ///
    /// Membership tests and bulk set operations always fail with this
    /// variant, regardless of the queue's contents.
    #[error("`{operation}` is not supported: queued elements are transient")]
    Unsupported {
        /// Name of the rejected operation.
        operation: &'static str,
    },
}

/// Error returned when a bounded queue is at capacity.
///
/// Carries the element that could not be enqueued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Full<T>(pub T);

impl<T> Full<T> {
    /// Returns the element that could not be enqueued.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> core::fmt::Display for Full<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "queue is full")
    }
}

impl<T: core::fmt::Debug> std::error::Error for Full<T> {}
