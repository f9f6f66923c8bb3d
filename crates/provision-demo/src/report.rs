//! Console rendering of allocation reports.
//!
//! One header line per region visit, then one indented line per consumed
//! food type.

use provision_core::allocation::{AllocationReport, RegionVisit};
use provision_core::network::FoodNetwork;

/// Render a whole pass, one line per visit header and per event.
pub fn render_report(network: &FoodNetwork, report: &AllocationReport) -> String {
    let mut out = String::new();
    for visit in &report.visits {
        render_visit(&mut out, network, visit);
    }
    out
}

/// Append the lines for a single region visit.
pub fn render_visit(out: &mut String, network: &FoodNetwork, visit: &RegionVisit) {
    let name = network
        .region(visit.region)
        .map(|r| r.name().as_str())
        .unwrap_or("<unknown>");
    out.push_str(&format!(
        "Distributing food to region {name} (Hunger Level: {})\n",
        visit.hunger_level
    ));
    for event in &visit.events {
        out.push_str(&format!(
            "  - Food Type {}: {} units distributed\n",
            event.food_type.0, event.quantity
        ));
    }
}
