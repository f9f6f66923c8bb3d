//! Headless demo runner for the Provision allocation engine.
//!
//! Loads a scenario from a RON file, builds the network and inventory, runs
//! allocation passes and renders the results as console text.
//!
//! # Usage
//!
//! ```rust,ignore
//! use provision_demo::scenario_builder::build_scenario;
//! use provision_demo::report::render_report;
//!
//! let mut scenario = build_scenario(Path::new("scenarios/relief_drill.ron"))?;
//! let report = scenario.run_pass()?;
//! print!("{}", render_report(&scenario.network, &report));
//! ```

pub mod error;
pub mod report;
pub mod scenario_builder;
pub mod scenario_schema;

pub use error::DemoError;
pub use report::{render_report, render_visit};
pub use scenario_builder::{ActiveScenario, build_from_data, build_scenario};
pub use scenario_schema::ScenarioData;
