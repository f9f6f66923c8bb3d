use std::path::Path;

use provision_core::id::RegionId;
use provision_demo::{DemoError, build_scenario, render_report};

fn scenarios_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/scenarios"))
}

// -----------------------------------------------------------------------
// build_scenario tests
// -----------------------------------------------------------------------

#[test]
fn bundled_drill_builds() {
    let scenario = build_scenario(&scenarios_dir().join("relief_drill.ron")).unwrap();
    assert_eq!(scenario.scenario_data.title, "Relief Drill");
    assert_eq!(scenario.network.num_regions(), 3);
    assert_eq!(scenario.inventory.total(RegionId(1)).unwrap(), 200);
    assert_eq!(scenario.scenario_data.run.passes, 1);
}

#[test]
fn bundled_drill_prints_reference_report() {
    let mut scenario = build_scenario(&scenarios_dir().join("relief_drill.ron")).unwrap();
    let report = scenario.run_pass().unwrap();
    let text = render_report(&scenario.network, &report);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Distributing food to region Region B (Hunger Level: 8)",
            "  - Food Type 2: 200 units distributed",
            "Distributing food to region Region A (Hunger Level: 5)",
            "  - Food Type 1: 100 units distributed",
            "Distributing food to region Region C (Hunger Level: 3)",
        ]
    );
}

#[test]
fn missing_file_is_io_error() {
    let result = build_scenario(&scenarios_dir().join("does_not_exist.ron"));
    assert!(matches!(result, Err(DemoError::Io(_))));
}

#[test]
fn malformed_file_is_parse_error() {
    let dir = std::env::temp_dir().join("provision-demo-tests");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("broken.ron");
    std::fs::write(&path, "(title: \"Broken\", regions: [").unwrap();

    match build_scenario(&path) {
        Err(DemoError::Parse { file, .. }) => assert_eq!(file, path),
        other => panic!("expected Parse error, got {other:?}"),
    }
}
