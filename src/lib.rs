//! Binary min-heap priority queue with index tracking
//!
//! This crate provides [`PrioQueue`], a priority queue that hands out its least
//! element first and tells every element where it lives in the heap. Knowing
//! the index lets callers remove an arbitrary element, or re-sort it after a
//! priority change, in O(log n).
//!
//! # Features
//!
//! - **Generic elements**: anything implementing [`Element`] (an ordering
//!   predicate plus optional index notifications)
//! - **O(n) construction** from a `Vec`, reusing its allocation
//! - **O(log n)** `push`, `pop`, `remove` and `fix`; O(1) `peek` and `len`
//! - **Checked misuse**: empty pops and out-of-range indices return
//!   [`QueueError`] instead of panicking
//! - **[`Tracked`] handles** that record their position for out-of-turn removal
//!
//! # Example
//!
//! ```rust
//! use prio::{PrioQueue, QueueError, Tracked};
//!
//! let handles: Vec<_> = [2, 4, 1, 5, 3].into_iter().map(Tracked::new).collect();
//! let mut queue = PrioQueue::new();
//! for handle in &handles {
//!     queue.push(handle.clone());
//! }
//!
//! let index = handles[0].position().unwrap();
//! assert_eq!(*queue.remove(index).unwrap().value(), 2);
//!
//! let mut order = Vec::new();
//! while let Ok(next) = queue.pop() {
//!     order.push(*next.value());
//! }
//! assert_eq!(order, vec![1, 3, 4, 5]);
//! assert!(matches!(queue.pop(), Err(QueueError::Empty)));
//! ```
//!
//! # Threading
//!
//! The queue does no locking of its own. [`Tracked`] is built on `Rc`, so a
//! queue of tracked handles stays on one thread; other element types can be
//! shared behind a `Mutex`.

pub mod queue;
pub mod tracked;
pub mod traits;

// Re-export the main types for convenience
pub use queue::PrioQueue;
pub use tracked::Tracked;
pub use traits::{Element, QueueError};
