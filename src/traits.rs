//! The element capability contract and the queue error type
//!
//! A value can live in a [`PrioQueue`](crate::PrioQueue) when it implements
//! [`Element`]: an ordering predicate plus the index notifications the queue
//! sends whenever it relocates the value. Elements that are never removed by
//! position can ignore the notifications; both hooks default to no-ops.

use std::cmp::Reverse;
use std::fmt;

/// Error type for queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// `pop` or `peek` was called on an empty queue
    Empty,
    /// The index passed to `remove` or `fix` is not in `0..len`
    InvalidIndex {
        /// The rejected index
        index: usize,
        /// The queue length at the time of the call
        len: usize,
    },
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::Empty => write!(f, "priority queue is empty"),
            QueueError::InvalidIndex { index, len } => {
                write!(f, "index {} is out of bounds for queue of length {}", index, len)
            }
        }
    }
}

impl std::error::Error for QueueError {}

/// A value that can be stored in a [`PrioQueue`](crate::PrioQueue)
///
/// `less` must be a strict weak ordering and must stay consistent for as long
/// as the value sits in a queue. Changing an element's priority in place
/// without calling [`PrioQueue::fix`](crate::PrioQueue::fix) leaves the heap
/// order undefined (memory safety is unaffected).
///
/// # Example
///
/// ```rust
/// use prio::{Element, PrioQueue};
///
/// struct Job {
///     deadline: u64,
///     slot: usize,
/// }
///
/// impl Element for Job {
///     fn less(&self, other: &Self) -> bool {
///         self.deadline < other.deadline
///     }
///
///     fn notify_index(&mut self, index: usize) {
///         self.slot = index;
///     }
/// }
///
/// let mut queue = PrioQueue::new();
/// queue.push(Job { deadline: 30, slot: 0 });
/// queue.push(Job { deadline: 10, slot: 0 });
///
/// let first = queue.peek().unwrap();
/// assert_eq!(first.deadline, 10);
/// assert_eq!(first.slot, 0);
/// ```
pub trait Element {
    /// Returns true if `self` should leave the queue before `other`
    fn less(&self, other: &Self) -> bool;

    /// Called by the queue when this element is moved to `index`
    ///
    /// Fires on insertion, on every relocation, and at the final resting
    /// position of each sift.
    #[inline]
    fn notify_index(&mut self, _index: usize) {}

    /// Called by the queue when this element leaves it through `pop`,
    /// `remove` or `clear`
    #[inline]
    fn notify_removed(&mut self) {}
}

macro_rules! impl_element_by_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                #[inline]
                fn less(&self, other: &Self) -> bool {
                    self < other
                }
            }
        )*
    };
}

impl_element_by_ord!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char, String,
);

impl Element for &str {
    #[inline]
    fn less(&self, other: &Self) -> bool {
        *self < *other
    }
}

/// Inverts the ordering, turning the min-queue into a max-queue
///
/// Notifications are forwarded to the wrapped element.
impl<E: Element> Element for Reverse<E> {
    #[inline]
    fn less(&self, other: &Self) -> bool {
        other.0.less(&self.0)
    }

    #[inline]
    fn notify_index(&mut self, index: usize) {
        self.0.notify_index(index);
    }

    #[inline]
    fn notify_removed(&mut self) {
        self.0.notify_removed();
    }
}
