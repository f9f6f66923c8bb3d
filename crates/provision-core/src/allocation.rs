//! The allocation pass: serve regions hungriest-first, consuming all stock.
//!
//! A pass snapshots every region's hunger level into a fresh
//! [`PriorityQueue`], then drains it. Each extracted region has its food
//! slots scanned in ascending food-type order; every positive slot is
//! recorded as an [`AllocationEvent`] and zeroed in the same step.
//!
//! Capacity is checked before the first insert, so a pass that cannot fit
//! its regions fails without touching the inventory.

use crate::id::{FoodTypeId, RegionId};
use crate::inventory::Inventory;
use crate::network::{FoodNetwork, MAX_REGIONS};
use crate::queue::{PriorityQueue, QueueError};
use crate::region::ValidationError;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that abort an allocation pass.
///
/// `Queue` and `InventoryTooSmall` are raised before any stock is consumed.
/// `Inventory` cannot occur once those checks pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AllocationError {
    #[error(transparent)]
    Queue(#[from] QueueError),
    #[error("inventory covers {inventory_regions} regions but the network has {network_regions}")]
    InventoryTooSmall {
        inventory_regions: usize,
        network_regions: usize,
    },
    #[error(transparent)]
    Inventory(#[from] ValidationError),
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// One food-type slot consumed for one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationEvent {
    pub region: RegionId,
    pub food_type: FoodTypeId,
    /// Slot contents at the moment of service.
    pub quantity: u32,
}

/// A region's turn in the pass. Regions with no stock still get a visit
/// with an empty event list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionVisit {
    pub region: RegionId,
    /// Hunger level captured when the region was queued.
    pub hunger_level: i32,
    pub events: Vec<AllocationEvent>,
}

/// Everything one pass did, in service order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllocationReport {
    pub visits: Vec<RegionVisit>,
}

impl AllocationReport {
    /// All events of the pass, flattened in emission order.
    pub fn events(&self) -> impl Iterator<Item = &AllocationEvent> {
        self.visits.iter().flat_map(|v| v.events.iter())
    }

    pub fn event_count(&self) -> usize {
        self.visits.iter().map(|v| v.events.len()).sum()
    }

    /// Region ids in the order they were served.
    pub fn visit_order(&self) -> Vec<RegionId> {
        self.visits.iter().map(|v| v.region).collect()
    }

    /// Total units handed out across all regions.
    pub fn total_distributed(&self) -> u64 {
        self.events().map(|e| u64::from(e.quantity)).sum()
    }

    pub fn visit(&self, region: RegionId) -> Option<&RegionVisit> {
        self.visits.iter().find(|v| v.region == region)
    }
}

// ---------------------------------------------------------------------------
// Pass
// ---------------------------------------------------------------------------

/// Run one allocation pass with a queue sized for [`MAX_REGIONS`].
pub fn distribute(
    network: &FoodNetwork,
    inventory: &mut Inventory,
) -> Result<AllocationReport, AllocationError> {
    distribute_with_capacity(network, inventory, MAX_REGIONS)
}

/// Run one allocation pass with a queue of the given capacity.
///
/// Fails with [`QueueError::CapacityExceeded`] if the network has more
/// regions than `capacity`, and with [`AllocationError::InventoryTooSmall`]
/// if the inventory lacks a row for some region. Both checks happen before
/// the inventory is touched.
pub fn distribute_with_capacity(
    network: &FoodNetwork,
    inventory: &mut Inventory,
    capacity: usize,
) -> Result<AllocationReport, AllocationError> {
    let num_regions = network.num_regions();
    if num_regions > capacity {
        return Err(QueueError::CapacityExceeded { capacity }.into());
    }
    if inventory.num_regions() < num_regions {
        return Err(AllocationError::InventoryTooSmall {
            inventory_regions: inventory.num_regions(),
            network_regions: num_regions,
        });
    }

    let mut queue = PriorityQueue::new(capacity);
    for region in network.regions() {
        queue.insert(region.id(), region.hunger_level())?;
    }

    let mut report = AllocationReport {
        visits: Vec::with_capacity(num_regions),
    };

    while !queue.is_empty() {
        let entry = queue.extract_max()?;
        log::debug!(
            "serving region {:?} (hunger {})",
            entry.id,
            entry.priority
        );

        let events = consume_region(inventory, entry.id)?;
        report.visits.push(RegionVisit {
            region: entry.id,
            hunger_level: entry.priority,
            events,
        });
    }

    log::info!(
        "allocation pass served {} regions, {} slots, {} units",
        report.visits.len(),
        report.event_count(),
        report.total_distributed()
    );
    Ok(report)
}

/// Zero every slot of one region, recording each positive one.
///
/// The row is taken in one step; the region was bounds-checked against the
/// inventory before the pass began.
fn consume_region(
    inventory: &mut Inventory,
    region: RegionId,
) -> Result<Vec<AllocationEvent>, ValidationError> {
    let row = inventory.take_row(region)?;
    let events = row
        .iter()
        .enumerate()
        .filter(|&(_, &quantity)| quantity > 0)
        .map(|(slot, &quantity)| {
            log::debug!("  {region:?} food type {slot}: {quantity} units");
            AllocationEvent {
                region,
                food_type: FoodTypeId(slot as u32),
                quantity,
            }
        })
        .collect();
    Ok(events)
}
