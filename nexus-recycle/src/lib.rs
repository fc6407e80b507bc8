//! FIFO queue with a node free list, for use-once workloads.
//!
//! Bulk transforms and event mediation push elements through a queue at high
//! volume: each element is enqueued, consumed exactly once, and discarded.
//! A plain linked queue pays one allocation and one free per element. This
//! crate's [`RecyclingQueue`] parks vacated nodes on a free chain and reuses
//! them for the next enqueue instead.
//!
//! ```text
//! offer ──► [free chain] ──pop──► node ──► live chain tail
//! poll  ◄── live chain head ◄── node ──► free chain tail (or released)
//! ```
//!
//! Both chains are threaded through one `slab::Slab` arena by index, so a node
//! can only ever belong to one chain and moving it costs two link writes.
//!
//! # Quick Start
//!
//! ```
//! use nexus_recycle::RecyclingQueue;
//!
//! // Bounded to 1000 live elements, keep at least 16 nodes warm.
//! let mut queue = RecyclingQueue::with_limits(1000, 16);
//!
//! for event in 0..100u64 {
//!     assert!(queue.offer(event));
//! }
//!
//! // Consuming iteration: every step is a poll.
//! let total: u64 = queue.drain().sum();
//! assert_eq!(total, 4950);
//! assert!(queue.is_empty());
//!
//! // The pool kept enough nodes to serve the next burst without allocating.
//! assert!(queue.pooled() >= 16);
//! ```
//!
//! # Capacity and Backpressure
//!
//! A capacity of 0 means unbounded. A bounded queue at capacity rejects
//! [`offer`](RecyclingQueue::offer) with `false`; this is expected
//! steady-state backpressure, not an error. [`try_offer`](RecyclingQueue::try_offer)
//! returns the rejected element in [`Full`].
//!
//! # Retained Pool
//!
//! `min_retained` is the number of vacated nodes the queue tries to keep.
//! [`clear`](RecyclingQueue::clear) tops the pool up to that floor from the
//! nodes it is clearing and cuts anything beyond it.
//! [`stats`](RecyclingQueue::stats) reports how many nodes were allocated,
//! reused, recycled, and released.
//!
//! # Unsupported Operations
//!
//! Membership tests and bulk set operations have no sensible meaning on a
//! queue of transient elements. [`RecyclingQueue::contains`],
//! [`RecyclingQueue::remove_all`] and [`RecyclingQueue::retain_all`] exist
//! only to reject them with [`QueueError::Unsupported`]. Generic code should
//! program against [`Disposable`], which does not offer them at all.
//!
//! # Feature Flags
//!
//! - `tracing` (default) - Emit `tracing` events from `clear`, pool trimming,
//!   and construction. Enqueue and dequeue never log.

#![warn(missing_docs)]

mod chain;

pub mod builder;
pub mod disposable;
pub mod error;
pub mod queue;
pub mod stats;

pub use builder::RecyclingQueueBuilder;
pub use disposable::Disposable;
pub use error::{Full, QueueError, Result};
pub use queue::{Drain, IntoIter, RecyclingQueue};
pub use stats::RecycleStats;
