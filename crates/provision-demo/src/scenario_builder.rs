use std::path::Path;

use provision_core::allocation::AllocationReport;
use provision_core::id::{FoodTypeId, RegionId};
use provision_core::inventory::Inventory;
use provision_core::network::FoodNetwork;

use crate::error::DemoError;
use crate::scenario_schema::ScenarioData;

/// A fully constructed scenario ready to run.
#[derive(Debug, Clone)]
pub struct ActiveScenario {
    pub network: FoodNetwork,
    pub inventory: Inventory,
    pub scenario_data: ScenarioData,
}

impl ActiveScenario {
    /// Run one allocation pass against the scenario's inventory.
    pub fn run_pass(&mut self) -> Result<AllocationReport, DemoError> {
        Ok(self.network.distribute(&mut self.inventory)?)
    }

    /// Run the configured number of passes, returning one report per pass.
    pub fn run_all(&mut self) -> Result<Vec<AllocationReport>, DemoError> {
        (0..self.scenario_data.run.passes)
            .map(|_| self.run_pass())
            .collect()
    }
}

/// Load and build a scenario from a `.ron` file.
pub fn build_scenario(path: &Path) -> Result<ActiveScenario, DemoError> {
    let content = std::fs::read_to_string(path)?;
    let scenario_data: ScenarioData = ron::from_str(&content).map_err(|e| DemoError::Parse {
        file: path.to_path_buf(),
        detail: e.to_string(),
    })?;
    log::info!("loaded scenario '{}' from {}", scenario_data.title, path.display());
    build_from_data(scenario_data)
}

/// Build a scenario from already-parsed data.
pub fn build_from_data(scenario_data: ScenarioData) -> Result<ActiveScenario, DemoError> {
    // 1. Regions, in declaration order
    let mut network = FoodNetwork::new();
    for region in &scenario_data.regions {
        if network.region_by_name(&region.name).is_some() {
            return Err(DemoError::DuplicateRegion {
                name: region.name.clone(),
            });
        }
        network.add_region(&region.name, region.hunger_level)?;
    }

    // 2. Stock, names resolved against the network
    let mut inventory = network.empty_inventory();
    for entry in &scenario_data.stock {
        let region = resolve_region(&network, &entry.region)?;
        let food_type = FoodTypeId::new(entry.food_type)?;
        inventory.set_quantity(region, food_type, entry.quantity)?;
    }

    // 3. Routes
    for route in &scenario_data.routes {
        let from = resolve_region(&network, &route.from)?;
        let to = resolve_region(&network, &route.to)?;
        network.add_route(from, to, route.weight)?;
    }

    Ok(ActiveScenario {
        network,
        inventory,
        scenario_data,
    })
}

fn resolve_region(network: &FoodNetwork, name: &str) -> Result<RegionId, DemoError> {
    network
        .region_by_name(name)
        .map(|r| r.id())
        .ok_or_else(|| DemoError::RegionNotFound {
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use provision_core::region::ValidationError;

    fn parse(input: &str) -> ScenarioData {
        ron::from_str(input).unwrap()
    }

    #[test]
    fn builds_network_and_inventory() {
        let scenario = build_from_data(parse(
            r#"(
                title: "Pair",
                regions: [(name: "N", hunger_level: 1), (name: "S", hunger_level: 2)],
                stock: [(region: "S", food_type: 4, quantity: 9)],
                routes: [(from: "N", to: "S", weight: 3)],
            )"#,
        ))
        .unwrap();

        assert_eq!(scenario.network.num_regions(), 2);
        assert_eq!(
            scenario.inventory.quantity(RegionId(1), FoodTypeId(4)).unwrap(),
            9
        );
        assert_eq!(scenario.network.graph().weight(RegionId(0), RegionId(1)), Some(3));
    }

    #[test]
    fn unknown_stock_region() {
        let result = build_from_data(parse(
            r#"(
                title: "Typo",
                regions: [(name: "North", hunger_level: 1)],
                stock: [(region: "Nrth", food_type: 0, quantity: 1)],
            )"#,
        ));
        match result {
            Err(DemoError::RegionNotFound { name }) => assert_eq!(name, "Nrth"),
            other => panic!("expected RegionNotFound, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_region_name_is_rejected() {
        let result = build_from_data(parse(
            r#"(
                title: "Twins",
                regions: [(name: "X", hunger_level: 1), (name: "X", hunger_level: 9)],
                stock: [(region: "X", food_type: 0, quantity: 5)],
            )"#,
        ));
        match result {
            Err(DemoError::DuplicateRegion { name }) => assert_eq!(name, "X"),
            other => panic!("expected DuplicateRegion, got {other:?}"),
        }
    }

    #[test]
    fn negative_stock_is_an_inventory_error() {
        let result = build_from_data(parse(
            r#"(
                title: "Debt",
                regions: [(name: "North", hunger_level: 1)],
                stock: [(region: "North", food_type: 0, quantity: -3)],
            )"#,
        ));
        assert!(matches!(
            result,
            Err(DemoError::Inventory(ValidationError::NegativeQuantity { quantity: -3 }))
        ));
    }

    #[test]
    fn run_all_honours_pass_count() {
        let mut scenario = build_from_data(parse(
            r#"(
                title: "Twice",
                regions: [(name: "A", hunger_level: 1)],
                stock: [(region: "A", food_type: 0, quantity: 5)],
                run: (passes: 2),
            )"#,
        ))
        .unwrap();

        let reports = scenario.run_all().unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].event_count(), 1);
        assert_eq!(reports[1].event_count(), 0);
    }
}
