//! FIFO queue of incoming food batches.
//!
//! Batches are recorded in arrival order and handed back the same way. The
//! allocation engine does not read this queue; it exists for intake code
//! that stages shipments before they are written into an [`Inventory`].
//!
//! [`Inventory`]: crate::inventory::Inventory

use crate::id::{FoodTypeId, RegionId};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A shipment of one food type bound for one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodBatch {
    pub region: RegionId,
    pub food_type: FoodTypeId,
    pub quantity: u32,
    /// Days until the batch spoils. Carried as data only.
    pub expiry_days: u32,
}

/// First-in first-out queue of [`FoodBatch`] values.
#[derive(Debug, Clone, Default)]
pub struct BatchQueue {
    pending: VecDeque<FoodBatch>,
}

impl BatchQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a batch at the back.
    pub fn enqueue(&mut self, batch: FoodBatch) {
        self.pending.push_back(batch);
    }

    /// Remove the oldest batch, or `None` if nothing is queued.
    pub fn dequeue(&mut self) -> Option<FoodBatch> {
        self.pending.pop_front()
    }

    pub fn front(&self) -> Option<&FoodBatch> {
        self.pending.front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Queued batches, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &FoodBatch> {
        self.pending.iter()
    }
}

impl Extend<FoodBatch> for BatchQueue {
    fn extend<I: IntoIterator<Item = FoodBatch>>(&mut self, iter: I) {
        self.pending.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(region: u32, quantity: u32) -> FoodBatch {
        FoodBatch {
            region: RegionId(region),
            food_type: FoodTypeId(0),
            quantity,
            expiry_days: 5,
        }
    }

    #[test]
    fn dequeue_in_arrival_order() {
        let mut q = BatchQueue::new();
        q.enqueue(batch(0, 10));
        q.enqueue(batch(1, 20));
        q.enqueue(batch(2, 30));
        assert_eq!(q.len(), 3);
        assert_eq!(q.dequeue().map(|b| b.quantity), Some(10));
        assert_eq!(q.dequeue().map(|b| b.quantity), Some(20));
        assert_eq!(q.front().map(|b| b.region), Some(RegionId(2)));
    }

    #[test]
    fn empty_queue_dequeues_none() {
        let mut q = BatchQueue::new();
        assert!(q.dequeue().is_none());
        q.enqueue(batch(0, 1));
        q.dequeue();
        assert!(q.dequeue().is_none());
        assert!(q.is_empty());
    }

    #[test]
    fn refill_after_draining() {
        let mut q = BatchQueue::new();
        q.enqueue(batch(0, 1));
        q.dequeue();
        q.extend([batch(3, 4), batch(4, 5)]);
        let regions: Vec<RegionId> = q.iter().map(|b| b.region).collect();
        assert_eq!(regions, vec![RegionId(3), RegionId(4)]);
    }
}
