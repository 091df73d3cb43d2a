//! Growable circular FIFO used as the BFS work queue
//!
//! The queue is a ring over a buffer whose length is always its capacity.
//! When an insertion finds the ring full, the buffer is replaced by one of
//! twice the size holding two back-to-back copies of the old contents. With
//! `start` left unchanged, logical element `i` is found at `start + i` in the
//! doubled buffer whether or not it had wrapped in the old one, so no
//! wrap-aware copy is needed. The stale duplicate slots lie outside the live
//! range and are overwritten before they are ever read.
//!
//! Slots are plain `T` values. Unused slots hold `T::default()` or a stale
//! copy and are never observed outside the live range.

use log::trace;

use super::error::{try_reserve, Error, Result};

/// Initial capacity used by the solver unless configured otherwise
pub const DEFAULT_CAPACITY: usize = 128;

#[derive(Debug, Clone)]
pub struct RingQueue<T> {
    /// Physical index of the logical head
    start: usize,
    /// Number of live elements
    size: usize,
    /// Ring storage; `elements.len()` is the capacity
    elements: Vec<T>,
}

impl<T: Copy + Default> RingQueue<T> {
    /// Create an empty queue with room for `capacity` elements.
    ///
    /// Fails with [`Error::ZeroCapacity`] for a zero capacity and with
    /// [`Error::AllocationFailed`] if the buffer cannot be reserved.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        let mut elements = Vec::new();
        try_reserve(&mut elements, capacity)?;
        elements.resize(capacity, T::default());

        Ok(Self {
            start: 0,
            size: 0,
            elements,
        })
    }

    pub fn capacity(&self) -> usize {
        self.elements.len()
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Append `item` at the tail, doubling the buffer first if it is full.
    ///
    /// Amortized O(1). On allocation failure the queue is left untouched and
    /// the caller is expected to abandon the search.
    pub fn enqueue(&mut self, item: T) -> Result<()> {
        if self.size == self.capacity() {
            self.grow()?;
        }
        let index = (self.start + self.size) % self.capacity();
        self.elements[index] = item;
        self.size += 1;
        Ok(())
    }

    /// Remove and return the head, or `None` once the queue is drained.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.size == 0 {
            return None;
        }
        let item = self.elements[self.start];
        self.size -= 1;
        self.start = (self.start + 1) % self.capacity();
        Some(item)
    }

    /// Live elements from head to tail.
    #[cfg(test)]
    fn iter(&self) -> impl Iterator<Item = T> + '_ {
        let capacity = self.capacity();
        (0..self.size).map(move |i| self.elements[(self.start + i) % capacity])
    }

    fn grow(&mut self) -> Result<()> {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity.saturating_mul(2);

        let mut grown = Vec::new();
        try_reserve(&mut grown, new_capacity)?;
        grown.extend_from_slice(&self.elements);
        grown.extend_from_slice(&self.elements);

        trace!("queue grown from {} to {} slots", old_capacity, new_capacity);
        self.elements = grown;
        Ok(())
    }
}
