//! Node allocation counters.

/// Running counts of node allocation and reuse.
///
/// Every node a queue owns was counted once in `allocated`; a node stops
/// being owned when it is counted in `released`. So at any point
///
/// ```text
/// allocated - released == len() + pooled()
/// ```
///
/// Under a steady offer/poll workload `allocated` stops growing and `reused`
/// climbs instead.
///
/// # Example
///
/// ```
/// use nexus_recycle::RecyclingQueue;
///
/// let mut queue = RecyclingQueue::with_limits(0, 4);
/// queue.offer(1u64);
/// queue.poll();
/// queue.offer(2);
///
/// let stats = queue.stats();
/// assert_eq!(stats.allocated, 1);
/// assert_eq!(stats.recycled, 1);
/// assert_eq!(stats.reused, 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecycleStats {
    /// Fresh nodes taken from the allocator.
    pub allocated: u64,
    /// Enqueues served by a node from the free chain.
    pub reused: u64,
    /// Vacated nodes moved onto the free chain.
    pub recycled: u64,
    /// Nodes returned to the allocator.
    pub released: u64,
}

impl RecycleStats {
    /// Nodes currently owned by the queue (live plus pooled).
    #[inline]
    pub const fn owned_nodes(&self) -> u64 {
        self.allocated - self.released
    }

    /// Fraction of enqueues that reused a pooled node, in `0.0..=1.0`.
    ///
    /// Returns `0.0` before the first enqueue.
    pub fn reuse_ratio(&self) -> f64 {
        let enqueues = self.allocated + self.reused;
        if enqueues == 0 {
            return 0.0;
        }
        self.reused as f64 / enqueues as f64
    }
}
