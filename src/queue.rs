//! Binary min-heap priority queue with index notifications
//!
//! [`PrioQueue`] keeps its elements in a `Vec` laid out as an implicit binary
//! tree: the parent of position `i > 0` is `(i - 1) / 2`, and no element is
//! `less` than its parent. Every time an element changes position the queue
//! calls [`Element::notify_index`] on it, so callers that record the reported
//! index can later hand it to [`PrioQueue::remove`] or [`PrioQueue::fix`].
//!
//! # Time Complexity
//!
//! | Operation   | Complexity |
//! |-------------|------------|
//! | `from_vec`  | O(n)       |
//! | `push`      | O(log n)   |
//! | `pop`       | O(log n)   |
//! | `peek`      | O(1)       |
//! | `remove`    | O(log n)   |
//! | `fix`       | O(log n)   |
//! | `len`       | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use prio::PrioQueue;
//!
//! let mut queue = PrioQueue::from_vec(vec![5, 4, 3, 2, 1]);
//! queue.push(0);
//!
//! assert_eq!(queue.peek(), Ok(&0));
//! assert_eq!(queue.pop(), Ok(0));
//! assert_eq!(queue.pop(), Ok(1));
//! assert_eq!(queue.len(), 4);
//! ```

use log::{debug, trace};

use crate::traits::{Element, QueueError};

/// A priority queue that always yields its least element first
///
/// Elements are moved into the queue and moved back out by [`pop`](Self::pop)
/// and [`remove`](Self::remove). The queue performs no internal
/// synchronization; share it across threads behind a lock.
#[derive(Debug)]
pub struct PrioQueue<E: Element> {
    /// Heap-ordered backing storage
    data: Vec<E>,
}

impl<E: Element> PrioQueue<E> {
    /// Creates an empty queue
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty queue with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Builds a queue from `data`, reusing its allocation
    ///
    /// Every element is first told its index in the original order, then the
    /// heap order is established bottom-up.
    ///
    /// # Time Complexity
    /// O(n)
    pub fn from_vec(mut data: Vec<E>) -> Self {
        for (index, element) in data.iter_mut().enumerate() {
            element.notify_index(index);
        }
        let mut queue = Self { data };
        queue.heapify();
        queue
    }

    /// Returns the number of elements in the queue
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the queue holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn push(&mut self, element: E) {
        self.data.push(element);
        let last = self.data.len() - 1;
        self.sift_up(last);
    }

    /// Returns the least element without removing it
    ///
    /// # Errors
    /// Returns [`QueueError::Empty`] if the queue is empty.
    pub fn peek(&self) -> Result<&E, QueueError> {
        self.data.first().ok_or(QueueError::Empty)
    }

    /// Removes and returns the least element
    ///
    /// # Errors
    /// Returns [`QueueError::Empty`] if the queue is empty.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn pop(&mut self) -> Result<E, QueueError> {
        if self.data.is_empty() {
            return Err(QueueError::Empty);
        }

        let mut min = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        min.notify_removed();
        Ok(min)
    }

    /// Removes and returns the element at `index`
    ///
    /// `index` is normally the value the element last received through
    /// [`Element::notify_index`]. A stale index removes whatever element now
    /// occupies that position.
    ///
    /// # Errors
    /// Returns [`QueueError::InvalidIndex`] if `index >= len()`; the queue is
    /// left untouched.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn remove(&mut self, index: usize) -> Result<E, QueueError> {
        self.check_index(index)?;
        trace!("removing index {} of {}", index, self.data.len());

        let mut removed = self.data.swap_remove(index);
        if index < self.data.len() {
            // The former last element now sits at `index` and may be out of
            // order in either direction.
            self.restore(index);
        }
        removed.notify_removed();
        Ok(removed)
    }

    /// Re-establishes heap order after the priority of the element at `index`
    /// changed
    ///
    /// # Errors
    /// Returns [`QueueError::InvalidIndex`] if `index >= len()`.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn fix(&mut self, index: usize) -> Result<(), QueueError> {
        self.check_index(index)?;
        self.restore(index);
        Ok(())
    }

    /// Returns the element at `index` in heap order, if any
    pub fn get(&self, index: usize) -> Option<&E> {
        self.data.get(index)
    }

    /// Iterates over the elements in heap order (not priority order)
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.data.iter()
    }

    /// Removes every element, notifying each of its removal
    pub fn clear(&mut self) {
        for mut element in self.data.drain(..) {
            element.notify_removed();
        }
    }

    /// Consumes the queue and returns its backing storage in heap order
    ///
    /// Elements keep the index they were last notified of, which is also
    /// their position in the returned vector.
    pub fn into_vec(self) -> Vec<E> {
        self.data
    }

    /// Consumes the queue and returns its elements in priority order
    ///
    /// # Time Complexity
    /// O(n log n)
    pub fn into_sorted_vec(mut self) -> Vec<E> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(element) = self.pop() {
            sorted.push(element);
        }
        sorted
    }

    fn check_index(&self, index: usize) -> Result<(), QueueError> {
        let len = self.data.len();
        if index >= len {
            debug!("rejecting index {} for queue of length {}", index, len);
            return Err(QueueError::InvalidIndex { index, len });
        }
        Ok(())
    }

    /// Establish heap order over the whole vector in O(n)
    fn heapify(&mut self) {
        let len = self.data.len();
        trace!("heapifying {} elements", len);
        for index in (0..len / 2).rev() {
            self.sift_down(index);
        }
    }

    /// Restore order around `index` in both directions
    fn restore(&mut self, index: usize) {
        let settled = self.sift_down(index);
        self.sift_up(settled);
    }

    /// Move element at index up to maintain heap property
    ///
    /// Returns the element's final position.
    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.data[index].less(&self.data[parent]) {
                break;
            }
            self.data.swap(index, parent);
            self.data[index].notify_index(index);
            index = parent;
        }
        self.data[index].notify_index(index);
        index
    }

    /// Move element at index down to maintain heap property
    ///
    /// Returns the element's final position.
    fn sift_down(&mut self, mut index: usize) -> usize {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }

            // Compare against the lesser child; on a tie the right child wins.
            let right = left + 1;
            let child = if right < len && !self.data[left].less(&self.data[right]) {
                right
            } else {
                left
            };

            if !self.data[child].less(&self.data[index]) {
                break;
            }
            self.data.swap(index, child);
            self.data[index].notify_index(index);
            index = child;
        }
        self.data[index].notify_index(index);
        index
    }
}

impl<E: Element> Default for PrioQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Element> From<Vec<E>> for PrioQueue<E> {
    fn from(data: Vec<E>) -> Self {
        Self::from_vec(data)
    }
}

impl<E: Element> FromIterator<E> for PrioQueue<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<E: Element> Extend<E> for PrioQueue<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for element in iter {
            self.push(element);
        }
    }
}

impl<'a, E: Element> IntoIterator for &'a PrioQueue<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
