//! Bounded max-priority queue used to order region service.
//!
//! An array-backed binary heap keyed on hunger level. Capacity is fixed at
//! construction and the live length belongs to each queue instance, so two
//! queues built in the same pass never share state.
//!
//! # Tie-break
//!
//! Entries with equal priority come out in an unspecified order: whichever
//! survives the heap's structural swaps. Callers must not rely on FIFO or
//! id order among equal priorities. Strictly higher priorities always come
//! out first.

use crate::id::RegionId;
use crate::network::MAX_REGIONS;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors raised by the priority queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    #[error("priority queue is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },
    #[error("priority queue is empty")]
    Empty,
}

// ---------------------------------------------------------------------------
// QueueEntry
// ---------------------------------------------------------------------------

/// A region and the hunger level it had when it was queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueEntry {
    pub id: RegionId,
    pub priority: i32,
}

// ---------------------------------------------------------------------------
// PriorityQueue
// ---------------------------------------------------------------------------

/// Fixed-capacity binary max-heap of [`QueueEntry`] values.
#[derive(Debug, Clone)]
pub struct PriorityQueue {
    /// Heap-ordered storage. Never grows past `capacity`.
    heap: Vec<QueueEntry>,
    capacity: usize,
}

impl Default for PriorityQueue {
    fn default() -> Self {
        Self::with_region_capacity()
    }
}

impl PriorityQueue {
    /// Create an empty queue holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Create an empty queue sized for one entry per possible region.
    pub fn with_region_capacity() -> Self {
        Self::new(MAX_REGIONS)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.capacity
    }

    /// The entry `extract_max` would return next, without removing it.
    pub fn peek(&self) -> Option<&QueueEntry> {
        self.heap.first()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Live entries in heap order (not priority order).
    pub fn iter(&self) -> impl Iterator<Item = &QueueEntry> {
        self.heap.iter()
    }

    /// Add an entry, restoring the heap property by sifting up.
    ///
    /// A full queue rejects the entry and is left unchanged.
    pub fn insert(&mut self, id: RegionId, priority: i32) -> Result<(), QueueError> {
        if self.is_full() {
            return Err(QueueError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let entry = QueueEntry { id, priority };
        self.heap.push(entry);

        // Sift up: pull strictly-lower parents down into the hole.
        let mut i = self.heap.len() - 1;
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[parent].priority >= priority {
                break;
            }
            self.heap[i] = self.heap[parent];
            i = parent;
        }
        self.heap[i] = entry;

        Ok(())
    }

    /// Remove and return the highest-priority entry.
    pub fn extract_max(&mut self) -> Result<QueueEntry, QueueError> {
        let last = self.heap.pop().ok_or(QueueError::Empty)?;
        if self.heap.is_empty() {
            return Ok(last);
        }

        let top = std::mem::replace(&mut self.heap[0], last);
        self.sift_down(0);
        Ok(top)
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * i + 1;
            if left >= len {
                break;
            }
            let right = left + 1;

            let mut largest = i;
            if self.heap[left].priority > self.heap[largest].priority {
                largest = left;
            }
            if right < len && self.heap[right].priority > self.heap[largest].priority {
                largest = right;
            }
            if largest == i {
                break;
            }

            self.heap.swap(i, largest);
            i = largest;
        }
    }
}
