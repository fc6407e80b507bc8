//! Builder for [`RecyclingQueue`].

use crate::RecyclingQueue;
use crate::chain::Nodes;

/// Configures and constructs a [`RecyclingQueue`].
///
/// # Example
///
/// ```
/// use nexus_recycle::RecyclingQueue;
///
/// let mut queue: RecyclingQueue<u64> = RecyclingQueue::<u64>::builder()
///     .capacity(1024)
///     .min_retained(64)
///     .prewarm(64)
///     .build();
///
/// assert_eq!(queue.capacity(), 1024);
/// assert_eq!(queue.pooled(), 64);
///
/// // Served from the pool, no allocation.
/// queue.offer(1);
/// assert_eq!(queue.stats().reused, 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RecyclingQueueBuilder {
    capacity: usize,
    min_retained: usize,
    prewarm: usize,
}

impl RecyclingQueueBuilder {
    /// Creates a builder for an unbounded queue with no retained pool.
    pub const fn new() -> Self {
        Self {
            capacity: 0,
            min_retained: 0,
            prewarm: 0,
        }
    }

    /// Maximum number of queued elements. 0 (the default) means unbounded.
    pub const fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Number of vacated nodes the queue tries to keep for reuse.
    pub const fn min_retained(mut self, min_retained: usize) -> Self {
        self.min_retained = min_retained;
        self
    }

    /// Number of empty nodes to allocate onto the pool at construction.
    ///
    /// Clamped to the capacity for bounded queues.
    pub const fn prewarm(mut self, prewarm: usize) -> Self {
        self.prewarm = prewarm;
        self
    }

    /// Builds the queue.
    pub fn build<T>(self) -> RecyclingQueue<T> {
        let prewarm = if self.capacity == 0 {
            self.prewarm
        } else {
            self.prewarm.min(self.capacity)
        };
        let mut queue = RecyclingQueue::from_parts(
            Nodes::with_capacity(prewarm),
            self.capacity,
            self.min_retained,
        );
        queue.prewarm(prewarm);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            capacity = self.capacity,
            min_retained = self.min_retained,
            prewarm,
            "built recycling queue"
        );

        queue
    }
}
