//! Shared test helpers for integration tests and benchmarks.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]` so these helpers
//! are available in unit tests, integration tests, and benchmarks (via the
//! `test-utils` feature).

use crate::id::*;
use crate::inventory::Inventory;
use crate::network::FoodNetwork;

// ===========================================================================
// Food types
// ===========================================================================

pub fn grain() -> FoodTypeId {
    FoodTypeId(0)
}
pub fn rice() -> FoodTypeId {
    FoodTypeId(1)
}
pub fn water() -> FoodTypeId {
    FoodTypeId(2)
}

// ===========================================================================
// Builders
// ===========================================================================

/// Build a network from `(name, hunger_level)` pairs. Ids follow slice order.
pub fn build_network(regions: &[(&str, i32)]) -> FoodNetwork {
    let mut network = FoodNetwork::new();
    for &(name, hunger) in regions {
        network
            .add_region(name, hunger)
            .expect("test region should be valid");
    }
    network
}

/// Set one inventory slot, panicking on invalid input.
pub fn stock(inventory: &mut Inventory, region: RegionId, food_type: FoodTypeId, quantity: u32) {
    inventory
        .set_quantity(region, food_type, i64::from(quantity))
        .expect("test stock should be valid");
}

/// A network of `n` regions named `R0..` with hunger levels from `hunger`,
/// each stocked with `quantity` of every food type in `food_types`.
pub fn stocked_network(
    n: usize,
    hunger: impl Fn(usize) -> i32,
    food_types: &[FoodTypeId],
    quantity: u32,
) -> (FoodNetwork, Inventory) {
    let mut network = FoodNetwork::new();
    for i in 0..n {
        network
            .add_region(&format!("R{i}"), hunger(i))
            .expect("test region should be valid");
    }
    let mut inventory = network.empty_inventory();
    for i in 0..n {
        for &ft in food_types {
            stock(&mut inventory, RegionId(i as u32), ft, quantity);
        }
    }
    (network, inventory)
}

// ===========================================================================
// Scenarios
// ===========================================================================

/// The reference three-region drill:
///
/// | Region   | Hunger | Stock          |
/// |----------|--------|----------------|
/// | Region A | 5      | food type 1: 100 |
/// | Region B | 8      | food type 2: 200 |
/// | Region C | 3      | none           |
pub fn relief_drill() -> (FoodNetwork, Inventory) {
    let network = build_network(&[("Region A", 5), ("Region B", 8), ("Region C", 3)]);
    let mut inventory = network.empty_inventory();
    stock(&mut inventory, RegionId(0), FoodTypeId(1), 100);
    stock(&mut inventory, RegionId(1), FoodTypeId(2), 200);
    (network, inventory)
}
