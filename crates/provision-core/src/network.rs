use crate::allocation::{AllocationError, AllocationReport, distribute};
use crate::graph::{GraphError, RouteGraph};
use crate::id::RegionId;
use crate::inventory::Inventory;
use crate::region::{Region, RegionName, ValidationError};
use std::collections::HashMap;

/// Upper bound on regions in one network, and the priority queue capacity.
pub const MAX_REGIONS: usize = 100;

/// Errors that can occur while assembling a network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    #[error("network already holds the maximum of {max} regions")]
    TooManyRegions { max: usize },
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Regions plus the route graph between them.
///
/// Region ids are dense and assigned in insertion order, so they double as
/// row indices into an [`Inventory`] built for the same network.
#[derive(Debug, Clone)]
pub struct FoodNetwork {
    regions: Vec<Region>,
    name_to_id: HashMap<String, RegionId>,
    graph: RouteGraph,
}

impl Default for FoodNetwork {
    fn default() -> Self {
        Self::new()
    }
}

impl FoodNetwork {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
            name_to_id: HashMap::new(),
            graph: RouteGraph::new(0),
        }
    }

    /// Register a region and return its id.
    ///
    /// The route graph grows to cover the new region with no routes to it.
    pub fn add_region(&mut self, name: &str, hunger_level: i32) -> Result<RegionId, NetworkError> {
        if self.regions.len() >= MAX_REGIONS {
            return Err(NetworkError::TooManyRegions { max: MAX_REGIONS });
        }
        let name = RegionName::new(name)?;
        let id = RegionId(self.regions.len() as u32);

        // First registration wins lookups by name.
        self.name_to_id.entry(name.as_str().to_string()).or_insert(id);
        self.regions.push(Region::new(id, name, hunger_level));
        self.graph.grow_to(self.regions.len());

        log::debug!("registered region {id:?} (hunger {hunger_level})");
        Ok(id)
    }

    /// Add a bidirectional route between two registered regions.
    pub fn add_route(&mut self, a: RegionId, b: RegionId, weight: u32) -> Result<(), NetworkError> {
        self.graph.add_edge(a, b, weight).map_err(|e| {
            log::warn!("rejected route {a:?} <-> {b:?}: {e}");
            NetworkError::from(e)
        })
    }

    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(id.index())
    }

    pub fn region_by_name(&self, name: &str) -> Option<&Region> {
        self.name_to_id.get(name).and_then(|&id| self.region(id))
    }

    /// All regions in id order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn num_regions(&self) -> usize {
        self.regions.len()
    }

    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    /// An all-zero inventory with one row per registered region.
    pub fn empty_inventory(&self) -> Inventory {
        Inventory::new(self.regions.len())
    }

    /// Run one allocation pass over this network. See [`distribute`].
    pub fn distribute(&self, inventory: &mut Inventory) -> Result<AllocationReport, AllocationError> {
        distribute(self, inventory)
    }
}
