//! Data-driven scenario loading from JSON.
//!
//! Feature-gated behind `data-loader`. Regions are listed in id order and
//! referenced by name from the stock and route tables.

use crate::id::{FoodTypeId, RegionId};
use crate::inventory::Inventory;
use crate::network::{FoodNetwork, NetworkError};
use crate::region::ValidationError;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur during data loading.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
    #[error("network error: {0}")]
    Network(#[from] NetworkError),
    #[error("invalid stock: {0}")]
    Validation(#[from] ValidationError),
    #[error("unknown region reference: {0}")]
    UnknownRegion(String),
    #[error("region name declared more than once: {0}")]
    DuplicateRegion(String),
}

// ---------------------------------------------------------------------------
// JSON data structures
// ---------------------------------------------------------------------------

/// Top-level scenario structure for JSON deserialization.
#[derive(Debug, serde::Deserialize)]
pub struct ScenarioData {
    pub regions: Vec<RegionData>,
    #[serde(default)]
    pub stock: Vec<StockData>,
    #[serde(default)]
    pub routes: Vec<RouteData>,
}

#[derive(Debug, serde::Deserialize)]
pub struct RegionData {
    pub name: String,
    pub hunger_level: i32,
}

/// Initial quantity of one food type in one region.
#[derive(Debug, serde::Deserialize)]
pub struct StockData {
    pub region: String, // references region by name
    pub food_type: u32,
    pub quantity: i64,
}

#[derive(Debug, serde::Deserialize)]
pub struct RouteData {
    pub from: String,
    pub to: String,
    pub weight: u32,
}

/// A ready-to-run network and its starting inventory.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub network: FoodNetwork,
    pub inventory: Inventory,
}

// ---------------------------------------------------------------------------
// Loading functions
// ---------------------------------------------------------------------------

/// Load a scenario from a JSON string.
pub fn load_scenario_json(json: &str) -> Result<Scenario, DataLoadError> {
    let data: ScenarioData = serde_json::from_str(json)?;
    build_scenario(data)
}

/// Load a scenario from JSON bytes.
pub fn load_scenario_json_bytes(bytes: &[u8]) -> Result<Scenario, DataLoadError> {
    let data: ScenarioData = serde_json::from_slice(bytes)?;
    build_scenario(data)
}

fn resolve(network: &FoodNetwork, name: &str) -> Result<RegionId, DataLoadError> {
    network
        .region_by_name(name)
        .map(|r| r.id())
        .ok_or_else(|| DataLoadError::UnknownRegion(name.to_string()))
}

fn build_scenario(data: ScenarioData) -> Result<Scenario, DataLoadError> {
    let mut network = FoodNetwork::new();

    // Phase 1: regions, in file order; names must be unique to be referenced
    for region in &data.regions {
        if network.region_by_name(&region.name).is_some() {
            return Err(DataLoadError::DuplicateRegion(region.name.clone()));
        }
        network.add_region(&region.name, region.hunger_level)?;
    }

    // Phase 2: stock (resolve region refs by name)
    let mut inventory = network.empty_inventory();
    for entry in &data.stock {
        let region = resolve(&network, &entry.region)?;
        let food_type = FoodTypeId::new(entry.food_type)?;
        inventory.set_quantity(region, food_type, entry.quantity)?;
    }

    // Phase 3: routes
    for route in &data.routes {
        let from = resolve(&network, &route.from)?;
        let to = resolve(&network, &route.to)?;
        network.add_route(from, to, route.weight)?;
    }

    log::info!(
        "loaded scenario: {} regions, {} stock entries, {} routes",
        network.num_regions(),
        data.stock.len(),
        data.routes.len()
    );
    Ok(Scenario { network, inventory })
}
