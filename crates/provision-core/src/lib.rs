//! Provision Core -- prioritized food distribution across regions.
//!
//! Regions compete for food by hunger level. An allocation pass serves the
//! hungriest region first and fully consumes every food type it has in
//! stock, reporting one event per consumed slot.
//!
//! # Allocation Pass
//!
//! Each call to [`allocation::distribute`] runs one pass:
//!
//! 1. **Validate** -- Check the region count against the queue capacity and
//!    the inventory against the network. Nothing is mutated on failure.
//! 2. **Queue** -- Snapshot every region's hunger level into a fresh
//!    bounded [`queue::PriorityQueue`].
//! 3. **Drain** -- Extract regions highest-priority first. For each, zero
//!    every positive food slot in ascending food-type order, recording an
//!    [`allocation::AllocationEvent`] per slot.
//!
//! ```rust,ignore
//! let mut network = FoodNetwork::new();
//! let a = network.add_region("Region A", 5)?;
//! let mut inventory = network.empty_inventory();
//! inventory.set_quantity(a, FoodTypeId(1), 100)?;
//! let report = network.distribute(&mut inventory)?;
//! ```
//!
//! # Key Types
//!
//! - [`network::FoodNetwork`] -- Regions plus the symmetric
//!   [`graph::RouteGraph`] between them.
//! - [`inventory::Inventory`] -- Per-region stock, one slot per food type.
//! - [`queue::PriorityQueue`] -- Fixed-capacity binary max-heap. Tie order
//!   among equal hunger levels is unspecified.
//! - [`batch::BatchQueue`] -- FIFO staging queue for incoming food batches.
//! - [`allocation::AllocationReport`] -- Per-region visits and their events.
//!
//! The route graph and batch queue are not read by the allocation pass.

pub mod allocation;
pub mod batch;
#[cfg(feature = "data-loader")]
pub mod data_loader;
pub mod graph;
pub mod id;
pub mod inventory;
pub mod network;
pub mod queue;
pub mod region;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
