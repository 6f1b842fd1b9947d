//! Shared element handles that remember their queue position
//!
//! [`Tracked`] wraps a value in an `Rc` together with the index the queue last
//! reported. The caller keeps a clone of the handle and reads
//! [`Tracked::position`] whenever it wants to remove that element out of
//! turn.
//!
//! # Example
//!
//! ```rust
//! use prio::{PrioQueue, Tracked};
//!
//! let mut queue = PrioQueue::new();
//! let late = Tracked::new(50);
//! queue.push(Tracked::new(10));
//! queue.push(late.clone());
//! queue.push(Tracked::new(30));
//!
//! let index = late.position().unwrap();
//! let removed = queue.remove(index).unwrap();
//! assert!(removed.ptr_eq(&late));
//! assert_eq!(late.position(), None);
//! ```

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::traits::Element;

struct Inner<T> {
    value: T,
    position: Cell<Option<usize>>,
}

/// A reference-counted handle to a queued value
///
/// Clones share the value and the recorded position. Handles are neither
/// `Send` nor `Sync`.
pub struct Tracked<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Tracked<T> {
    /// Creates a handle that is not in any queue yet
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                value,
                position: Cell::new(None),
            }),
        }
    }

    /// Returns the wrapped value
    pub fn value(&self) -> &T {
        &self.inner.value
    }

    /// Returns the index last reported by the queue, or `None` if the value
    /// has not been queued or has been popped or removed
    pub fn position(&self) -> Option<usize> {
        self.inner.position.get()
    }

    /// Returns true if both handles refer to the same value
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> Clone for Tracked<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Tracked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tracked")
            .field("value", &self.inner.value)
            .field("position", &self.inner.position.get())
            .finish()
    }
}

impl<T: PartialOrd> Element for Tracked<T> {
    #[inline]
    fn less(&self, other: &Self) -> bool {
        self.inner.value < other.inner.value
    }

    #[inline]
    fn notify_index(&mut self, index: usize) {
        self.inner.position.set(Some(index));
    }

    #[inline]
    fn notify_removed(&mut self) {
        self.inner.position.set(None);
    }
}
