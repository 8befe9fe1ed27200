//! Array-backed binary min-heap.
//!
//! Items live in a dense `Vec` as an implicit binary tree: the children of
//! index `i` sit at `2i + 1` and `2i + 2`, its parent at `(i - 1) / 2`. Every
//! parent compares `<=` to both children.
//!
//! There is no decrease-key. The Dijkstra engine emulates it by draining and
//! re-inserting records (see [`crate::dijkstra`]).
//!
//! | Operation       | Complexity |
//! |-----------------|------------|
//! | `insert`        | O(log n)   |
//! | `extract_min`   | O(log n)   |
//! | `peek`          | O(1)       |
//! | `size`          | O(1)       |
//! | `is_consistent` | O(n)       |
//!
//! ```
//! use city_sssp::queue::PriorityQueue;
//!
//! let mut pq = PriorityQueue::new();
//! pq.insert(7);
//! pq.insert(3);
//! pq.insert(5);
//! assert_eq!(pq.peek(), Ok(&3));
//! assert_eq!(pq.extract_min(), Ok(3));
//! assert_eq!(pq.size(), 2);
//! ```

use crate::error::EmptyQueueError;

/// Operation counters for a queue's lifetime.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct QueueStats {
    pub pushes: u64,
    pub pops: u64,
    pub max_size: u64,
}

#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    data: Vec<T>,
    stats: QueueStats,
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> PriorityQueue<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            stats: QueueStats::default(),
        }
    }

    /// Appends `item` and sifts it up while it is strictly smaller than its
    /// parent.
    pub fn insert(&mut self, item: T) {
        self.data.push(item);
        self.stats.pushes += 1;
        self.stats.max_size = self.stats.max_size.max(self.data.len() as u64);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the smallest item.
    pub fn extract_min(&mut self) -> Result<T, EmptyQueueError> {
        let len = self.data.len();
        if len == 0 {
            return Err(EmptyQueueError);
        }
        self.data.swap(0, len - 1);
        let out = self.data.pop().ok_or(EmptyQueueError)?;
        self.stats.pops += 1;
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Ok(out)
    }

    pub fn peek(&self) -> Result<&T, EmptyQueueError> {
        self.data.first().ok_or(EmptyQueueError)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn stats(&self) -> QueueStats {
        self.stats
    }

    /// Drops every item. Counters are kept.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Items in array (heap layout) order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the queue, returning its items in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.data.len());
        while let Ok(item) = self.extract_min() {
            out.push(item);
        }
        out
    }

    /// True when every parent is `<=` each of its in-range children.
    pub fn is_consistent(&self) -> bool {
        let n = self.data.len();
        (0..n).all(|parent| {
            let left = 2 * parent + 1;
            let right = left + 1;
            (left >= n || self.data[parent] <= self.data[left])
                && (right >= n || self.data[parent] <= self.data[right])
        })
    }

    /// Panics if the heap property is broken. No-op in release builds.
    #[inline]
    pub fn debug_validate_invariants(&self) {
        debug_assert!(self.is_consistent(), "binary heap property violated");
    }

    /// Moves the entry at `idx` up while it is strictly smaller than its parent.
    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.data[idx] < self.data[parent] {
                self.data.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    /// Moves the entry at `idx` down while it is strictly greater than the
    /// smaller of its children; equal entries stay where they are.
    fn sift_down(&mut self, mut idx: usize) {
        let n = self.data.len();
        loop {
            let left = idx * 2 + 1;
            if left >= n {
                break;
            }
            let right = left + 1;
            let mut best = left;
            if right < n && self.data[right] < self.data[left] {
                best = right;
            }
            if self.data[best] < self.data[idx] {
                self.data.swap(idx, best);
                idx = best;
            } else {
                break;
            }
        }
    }
}

impl<T: Ord> Extend<T> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut pq = PriorityQueue::new();
        pq.extend(iter);
        pq
    }
}
