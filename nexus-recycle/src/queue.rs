//! FIFO queue that recycles its nodes.
//!
//! Elements are enqueued, consumed exactly once, and discarded. Rather than
//! freeing a node on removal and allocating a new one on the next insert, the
//! queue parks vacated nodes on a free chain and hands them back out on the
//! next [`offer`](RecyclingQueue::offer). Under a steady insert/remove
//! workload each node is allocated once for the life of the queue.
//!
//! # Recycling Policy
//!
//! When [`poll`](RecyclingQueue::poll) vacates a node it is kept only if
//!
//! ```text
//! pooled < min_retained  ||  pooled < len / 2
//! ```
//!
//! where `len` is the live length *before* the removal. Otherwise the node is
//! released. The pool therefore grows while the queue is large and shrinks
//! back towards `min_retained` as it drains.
//!
//! # Example
//!
//! ```
//! use nexus_recycle::RecyclingQueue;
//!
//! let mut queue = RecyclingQueue::with_limits(3, 2);
//!
//! assert!(queue.offer("a"));
//! assert!(queue.offer("b"));
//! assert!(queue.offer("c"));
//! assert!(!queue.offer("d")); // full: backpressure, not an error
//!
//! assert_eq!(queue.peek(), Some(&"a"));
//! assert_eq!(queue.poll(), Some("a"));
//! assert_eq!(queue.to_string(), "[b, c]");
//!
//! // The vacated node is pooled and reused by the next offer.
//! assert_eq!(queue.pooled(), 1);
//! queue.offer("e");
//! assert_eq!(queue.pooled(), 0);
//! ```
//!
//! # Threading
//!
//! There is no internal synchronization. The queue is `Send` when `T` is;
//! sharing it between threads requires external mutual exclusion.

use core::borrow::Borrow;
use core::fmt;
use core::iter::FusedIterator;

use crate::builder::RecyclingQueueBuilder;
use crate::chain::{Chain, Keys, Node, Nodes};
use crate::error::{Full, QueueError, Result};
use crate::stats::RecycleStats;

/// Singly-linked FIFO queue with a node free list.
///
/// # Type Parameters
///
/// - `T`: Element type
///
/// See the [module documentation](self) for the recycling policy.
pub struct RecyclingQueue<T> {
    nodes: Nodes<T>,
    live: Chain,
    free: Chain,
    /// Maximum live elements; 0 means unbounded.
    capacity: usize,
    /// Desired floor for the free chain.
    min_retained: usize,
    stats: RecycleStats,
}

impl<T> Default for RecyclingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RecyclingQueue<T> {
    /// Creates an empty, unbounded queue that keeps no minimum pool.
    #[inline]
    pub fn new() -> Self {
        Self::with_limits(0, 0)
    }

    /// Creates an empty queue holding at most `capacity` elements.
    ///
    /// A capacity of 0 means unbounded.
    #[inline]
    pub fn bounded(capacity: usize) -> Self {
        Self::with_limits(capacity, 0)
    }

    /// Creates an empty queue with the given capacity and retained pool floor.
    ///
    /// A capacity of 0 means unbounded.
    #[inline]
    pub fn with_limits(capacity: usize, min_retained: usize) -> Self {
        Self::from_parts(Nodes::new(), capacity, min_retained)
    }

    /// Returns a builder for configuring a queue.
    #[inline]
    pub fn builder() -> RecyclingQueueBuilder {
        RecyclingQueueBuilder::new()
    }

    pub(crate) fn from_parts(nodes: Nodes<T>, capacity: usize, min_retained: usize) -> Self {
        Self {
            nodes,
            live: Chain::new(),
            free: Chain::new(),
            capacity,
            min_retained,
            stats: RecycleStats::default(),
        }
    }

    /// Returns the number of queued elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.live.len()
    }

    /// Returns `true` if no elements are queued.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Returns the capacity, or 0 if unbounded.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the queue is bounded and at capacity.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.capacity != 0 && self.live.len() >= self.capacity
    }

    /// Returns the retained pool floor.
    #[inline]
    pub const fn min_retained(&self) -> usize {
        self.min_retained
    }

    /// Sets the retained pool floor.
    ///
    /// Takes effect on subsequent removals; an oversized pool is only cut
    /// back by [`clear`](Self::clear) or [`trim_pool`](Self::trim_pool).
    #[inline]
    pub fn set_min_retained(&mut self, min_retained: usize) {
        self.min_retained = min_retained;
    }

    /// Returns the number of vacated nodes waiting for reuse.
    #[inline]
    pub const fn pooled(&self) -> usize {
        self.free.len()
    }

    /// Returns the node allocation counters.
    #[inline]
    pub const fn stats(&self) -> RecycleStats {
        self.stats
    }

    /// Restarts the node allocation counters.
    ///
    /// Nodes the queue still owns (live or pooled) become the new
    /// `allocated` baseline, so `allocated - released` keeps matching
    /// `len() + pooled()` after the reset.
    #[inline]
    pub fn reset_stats(&mut self) {
        self.stats = RecycleStats {
            allocated: (self.live.len() + self.free.len()) as u64,
            ..RecycleStats::default()
        };
    }

    // ========================================================================
    // Enqueue
    // ========================================================================

    /// Enqueues an element at the tail.
    ///
    /// Returns `false` without changing the queue if it is at capacity.
    #[inline]
    pub fn offer(&mut self, element: T) -> bool {
        self.try_offer(element).is_ok()
    }

    /// Enqueues an element at the tail.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(element))` if the queue is at capacity.
    #[inline]
    pub fn try_offer(&mut self, element: T) -> core::result::Result<(), Full<T>> {
        if self.is_full() {
            return Err(Full(element));
        }

        let key = self.acquire(element);
        self.live.push_back(&mut self.nodes, key);
        Ok(())
    }

    /// Enqueues an element that may be absent.
    ///
    /// Returns `Ok(false)` if the queue is at capacity.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::InvalidArgument`] for `None`; the queue is
    /// unchanged.
    #[inline]
    pub fn offer_option(&mut self, element: Option<T>) -> Result<bool> {
        match element {
            Some(element) => Ok(self.offer(element)),
            None => Err(QueueError::InvalidArgument),
        }
    }

    /// Takes a node from the free chain, or allocates one if it is empty.
    #[inline]
    fn acquire(&mut self, element: T) -> usize {
        match self.free.pop_front(&mut self.nodes) {
            Some(key) => {
                self.nodes[key].element = Some(element);
                self.stats.reused += 1;
                key
            }
            None => {
                self.stats.allocated += 1;
                self.nodes.insert(Node::occupied(element))
            }
        }
    }

    // ========================================================================
    // Dequeue
    // ========================================================================

    /// Removes and returns the head element.
    ///
    /// Returns `None` if the queue is empty.
    #[inline]
    pub fn poll(&mut self) -> Option<T> {
        let len_before = self.live.len();
        let key = self.live.pop_front(&mut self.nodes)?;
        let element = self.nodes[key].element.take();
        self.dispose(key, len_before);
        element
    }

    /// Returns a reference to the head element without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        let key = self.live.head()?;
        self.nodes.get(key)?.element.as_ref()
    }

    /// Returns a mutable reference to the head element without removing it.
    #[inline]
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        let key = self.live.head()?;
        self.nodes.get_mut(key)?.element.as_mut()
    }

    /// Pools or releases a node just detached from the live chain.
    ///
    /// `len_before` is the live length prior to the detach.
    #[inline]
    fn dispose(&mut self, key: usize, len_before: usize) {
        let pooled = self.free.len();
        if pooled < self.min_retained || pooled < len_before / 2 {
            self.free.push_back(&mut self.nodes, key);
            self.stats.recycled += 1;
        } else {
            self.nodes.remove(key);
            self.stats.released += 1;
        }
    }

    // ========================================================================
    // Bulk operations
    // ========================================================================

    /// Removes every element, leaving the pool sized to `min_retained`.
    ///
    /// Live nodes are first used to top the pool up to `min_retained`; the
    /// pool is then cut back to `min_retained` (or emptied if it is 0), and
    /// any live nodes left over are released without being pooled.
    pub fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        let dropped = self.live.len();

        while !self.live.is_empty() && self.min_retained > self.free.len() {
            let len_before = self.live.len();
            if let Some(key) = self.live.pop_front(&mut self.nodes) {
                self.nodes[key].element = None;
                self.dispose(key, len_before);
            }
        }

        self.trim_pool();

        let released = self.live.release_all(&mut self.nodes);
        self.stats.released += released as u64;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            dropped,
            released,
            pooled = self.free.len(),
            min_retained = self.min_retained,
            "cleared recycling queue"
        );
    }

    /// Cuts the pool back to `min_retained` nodes, releasing the excess.
    ///
    /// With a floor of 0 the whole pool is released. A pool already at or
    /// below the floor is left as is. Live elements are not touched.
    pub fn trim_pool(&mut self) {
        let mut excess = self.free.truncate(&mut self.nodes, self.min_retained);
        if excess.is_empty() {
            return;
        }

        let released = excess.release_all(&mut self.nodes);
        self.stats.released += released as u64;

        #[cfg(feature = "tracing")]
        tracing::trace!(released, pooled = self.free.len(), "trimmed node pool");
    }

    /// Allocates `additional` element-less nodes straight onto the pool.
    ///
    /// Lets a latency-sensitive producer pay for allocation up front.
    pub fn prewarm(&mut self, additional: usize) {
        self.nodes.reserve(additional);
        for _ in 0..additional {
            let key = self.nodes.insert(Node::vacant());
            self.free.push_back(&mut self.nodes, key);
        }
        self.stats.allocated += additional as u64;

        #[cfg(feature = "tracing")]
        tracing::trace!(additional, pooled = self.free.len(), "prewarmed node pool");
    }

    /// Returns a destructive iterator over the queue.
    ///
    /// Each step is a [`poll`](Self::poll): advancing the iterator consumes
    /// the element. Elements not yet reached when the iterator is dropped stay
    /// queued.
    #[inline]
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { queue: self }
    }

    /// Iterates the live elements head to tail without removing them.
    #[inline]
    fn iter(&self) -> Iter<'_, T> {
        Iter {
            keys: self.live.keys(&self.nodes),
        }
    }

    // ========================================================================
    // Unsupported collection operations
    // ========================================================================

    /// Membership tests are not offered by a disposable queue.
    ///
    /// # Errors
    ///
    /// Always returns [`QueueError::Unsupported`].
    pub fn contains(&self, _element: &T) -> Result<bool> {
        Err(QueueError::Unsupported {
            operation: "contains",
        })
    }

    /// Bulk removal by collection is not offered by a disposable queue.
    ///
    /// # Errors
    ///
    /// Always returns [`QueueError::Unsupported`]; the queue is unchanged.
    pub fn remove_all<I>(&mut self, _others: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        Err(QueueError::Unsupported {
            operation: "remove_all",
        })
    }

    /// Bulk retention by collection is not offered by a disposable queue.
    ///
    /// # Errors
    ///
    /// Always returns [`QueueError::Unsupported`]; the queue is unchanged.
    pub fn retain_all<I>(&mut self, _others: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        Err(QueueError::Unsupported {
            operation: "retain_all",
        })
    }
}

impl<T> Extend<T> for RecyclingQueue<T> {
    /// Offers each element in turn, stopping at the first rejection.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            if !self.offer(element) {
                break;
            }
        }
    }
}

impl<T> FromIterator<T> for RecyclingQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> IntoIterator for RecyclingQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}

impl<T: fmt::Display> fmt::Display for RecyclingQueue<T> {
    /// Renders the elements head to tail as `[e1, e2, ..., en]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(element, f)?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for RecyclingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over live elements.
struct Iter<'a, T> {
    keys: Keys<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.keys.nodes();
        self.keys
            .by_ref()
            .find_map(|key| nodes[key].element.as_ref())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

/// Destructive iterator returned by [`RecyclingQueue::drain`].
///
/// Each call to `next` polls the queue, so the remaining length is read from
/// the queue at every step rather than fixed up front.
pub struct Drain<'a, T> {
    queue: &'a mut RecyclingQueue<T>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.queue.poll()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}

impl<T> FusedIterator for Drain<'_, T> {}

/// Owning iterator returned by [`RecyclingQueue::into_iter`].
pub struct IntoIter<T> {
    queue: RecyclingQueue<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.queue.poll()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
