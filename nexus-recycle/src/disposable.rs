//! Capability trait for use-once queues.
//!
//! [`Disposable`] deliberately exposes only what a queue of transient
//! elements can honor: enqueue, dequeue, peek, length, clear, and a
//! destructive drain. There is no membership test and no non-consuming
//! iteration, so generic code cannot expect them.

use crate::RecyclingQueue;

/// FIFO queue whose elements are consumed exactly once.
///
/// # Example
///
/// ```
/// use nexus_recycle::{Disposable, RecyclingQueue};
///
/// fn pump<Q: Disposable<u32>>(queue: &mut Q, batch: &[u32]) -> u32 {
///     for &v in batch {
///         if !queue.offer(v) {
///             break;
///         }
///     }
///     queue.drain().sum()
/// }
///
/// let mut queue = RecyclingQueue::bounded(2);
/// assert_eq!(pump(&mut queue, &[1, 2, 3]), 3);
/// assert!(queue.is_empty());
/// ```
pub trait Disposable<T> {
    /// Destructive iterator returned by [`drain`](Self::drain).
    type Drain<'a>: Iterator<Item = T>
    where
        Self: 'a;

    /// Enqueues an element, returning `false` if the queue is full.
    fn offer(&mut self, element: T) -> bool;

    /// Removes and returns the head element, or `None` if empty.
    fn poll(&mut self) -> Option<T>;

    /// Returns the head element without removing it.
    fn peek(&self) -> Option<&T>;

    /// Returns the number of queued elements.
    fn len(&self) -> usize;

    /// Returns `true` if no elements are queued.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every element.
    fn clear(&mut self);

    /// Returns an iterator that polls the queue on every step.
    fn drain(&mut self) -> Self::Drain<'_>;
}

impl<T> Disposable<T> for RecyclingQueue<T> {
    type Drain<'a>
        = crate::Drain<'a, T>
    where
        Self: 'a;

    #[inline]
    fn offer(&mut self, element: T) -> bool {
        RecyclingQueue::offer(self, element)
    }

    #[inline]
    fn poll(&mut self) -> Option<T> {
        RecyclingQueue::poll(self)
    }

    #[inline]
    fn peek(&self) -> Option<&T> {
        RecyclingQueue::peek(self)
    }

    #[inline]
    fn len(&self) -> usize {
        RecyclingQueue::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        RecyclingQueue::clear(self)
    }

    #[inline]
    fn drain(&mut self) -> Self::Drain<'_> {
        RecyclingQueue::drain(self)
    }
}
