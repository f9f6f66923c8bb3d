use serde::Deserialize;

/// Top-level scenario definition loaded from a `.ron` file.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioData {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Regions in id order.
    pub regions: Vec<RegionDef>,
    #[serde(default)]
    pub stock: Vec<StockDef>,
    #[serde(default)]
    pub routes: Vec<RouteDef>,
    #[serde(default)]
    pub run: RunConfig,
}

/// A region and its hunger level.
#[derive(Debug, Clone, Deserialize)]
pub struct RegionDef {
    pub name: String,
    pub hunger_level: i32,
}

/// Starting quantity of one food type in one region.
#[derive(Debug, Clone, Deserialize)]
pub struct StockDef {
    /// Must match a region name in `regions`.
    pub region: String,
    pub food_type: u32,
    /// Signed so that negative entries reach validation instead of failing
    /// as a parse error.
    pub quantity: i64,
}

/// A bidirectional route between two named regions.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteDef {
    pub from: String,
    pub to: String,
    pub weight: u32,
}

/// How the runner drives the scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    /// Allocation passes to run back to back.
    #[serde(default = "default_passes")]
    pub passes: u32,
}

fn default_passes() -> u32 {
    1
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            passes: default_passes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_scenario_data() {
        let input = r#"(
            title: "Relief Drill",
            description: "Three regions.",
            regions: [
                (name: "Region A", hunger_level: 5),
                (name: "Region B", hunger_level: 8),
            ],
            stock: [
                (region: "Region A", food_type: 1, quantity: 100),
            ],
            routes: [
                (from: "Region A", to: "Region B", weight: 12),
            ],
            run: (passes: 2),
        )"#;

        let scenario: ScenarioData = ron::from_str(input).unwrap();
        assert_eq!(scenario.title, "Relief Drill");
        assert_eq!(scenario.regions.len(), 2);
        assert_eq!(scenario.regions[1].hunger_level, 8);
        assert_eq!(scenario.stock[0].region, "Region A");
        assert_eq!(scenario.stock[0].quantity, 100);
        assert_eq!(scenario.routes[0].weight, 12);
        assert_eq!(scenario.run.passes, 2);
    }

    #[test]
    fn optional_sections_default() {
        let input = r#"(
            title: "Bare",
            regions: [(name: "Only", hunger_level: -1)],
        )"#;
        let scenario: ScenarioData = ron::from_str(input).unwrap();
        assert!(scenario.description.is_empty());
        assert!(scenario.stock.is_empty());
        assert!(scenario.routes.is_empty());
        assert_eq!(scenario.run.passes, 1);
    }

    #[test]
    fn run_config_defaults_from_empty_struct() {
        let run: RunConfig = ron::from_str("()").unwrap();
        assert_eq!(run.passes, 1);
    }
}
