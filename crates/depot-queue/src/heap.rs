//! `MaxHeap<T>` — fixed-capacity array heap with explicit swim/sink.
//!
//! # Layout
//!
//! Entries live in a 0-based contiguous `Vec`, so for index `k`:
//!
//! ```text
//! parent(k)      = (k - 1) / 2
//! children(k)    = 2k + 1, 2k + 2
//! ```
//!
//! Invariant: for every non-root index `k`,
//! `priority(parent(k)) >= priority(k)`.
//!
//! Equal-priority entries have no defined relative order — extraction order
//! among ties is whatever the swap mechanics produce and must not be relied
//! upon.

use crate::{QueueError, QueueResult};

#[derive(Debug, Clone)]
struct Entry<T> {
    priority: i32,
    item:     T,
}

/// A bounded max-oriented binary heap of `(priority, item)` entries.
///
/// Capacity is fixed at construction; [`insert`][MaxHeap::insert] fails once
/// the heap holds `capacity` live entries.
#[derive(Debug, Clone)]
pub struct MaxHeap<T> {
    entries:  Vec<Entry<T>>,
    capacity: usize,
}

impl<T> MaxHeap<T> {
    /// Create an empty heap holding at most `capacity` entries.
    ///
    /// Storage is reserved up front so inserts never reallocate.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The fixed capacity this heap was constructed with.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Insert `item` under `priority` and swim it to its position.
    pub fn insert(&mut self, priority: i32, item: T) -> QueueResult<()> {
        if self.entries.len() == self.capacity {
            return Err(QueueError::CapacityExceeded { capacity: self.capacity });
        }
        self.entries.push(Entry { priority, item });
        self.swim(self.entries.len() - 1);
        Ok(())
    }

    /// Remove and return the highest-priority entry.
    ///
    /// The last entry replaces the root, the logical size shrinks by one,
    /// and the new root sinks until the invariant holds again.
    pub fn pop_max(&mut self) -> QueueResult<(i32, T)> {
        if self.entries.is_empty() {
            return Err(QueueError::Empty);
        }
        // swap_remove moves the last entry into slot 0 and pops the max out.
        let max = self.entries.swap_remove(0);
        if !self.entries.is_empty() {
            self.sink(0);
        }
        Ok((max.priority, max.item))
    }

    /// The highest-priority entry without removing it.
    pub fn peek_max(&self) -> Option<(i32, &T)> {
        self.entries.first().map(|e| (e.priority, &e.item))
    }

    /// Iterate live entries in storage order (NOT priority order).
    pub fn iter(&self) -> impl Iterator<Item = (i32, &T)> {
        self.entries.iter().map(|e| (e.priority, &e.item))
    }

    // ── Heap mechanics ────────────────────────────────────────────────────

    /// Swap the entry at `k` with its parent while the parent's priority is
    /// strictly lower, stopping at the root or when the invariant holds.
    fn swim(&mut self, mut k: usize) {
        while k > 0 {
            let parent = (k - 1) / 2;
            if self.entries[parent].priority >= self.entries[k].priority {
                break;
            }
            self.entries.swap(parent, k);
            k = parent;
        }
    }

    /// Swap the entry at `k` downward with its higher-priority child —
    /// among two children, the one with strictly higher priority — until
    /// neither child exceeds it or no children remain.
    fn sink(&mut self, mut k: usize) {
        let n = self.entries.len();
        loop {
            let mut child = 2 * k + 1;
            if child >= n {
                break;
            }
            if child + 1 < n && self.entries[child + 1].priority > self.entries[child].priority {
                child += 1;
            }
            if self.entries[k].priority >= self.entries[child].priority {
                break;
            }
            self.entries.swap(k, child);
            k = child;
        }
    }
}
