//! Run a scenario file and print each allocation pass.
//!
//! Run with: `cargo run --package provision-demo -- [SCENARIO_PATH]`
//! (defaults to the bundled `scenarios/relief_drill.ron`).

use std::path::PathBuf;
use std::process::ExitCode;

use provision_demo::{DemoError, build_scenario, render_report};

const DEFAULT_SCENARIO: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/scenarios/relief_drill.ron");

fn run(path: PathBuf) -> Result<(), DemoError> {
    let mut scenario = build_scenario(&path)?;
    let passes = scenario.run_all()?;
    let multi = passes.len() > 1;

    for (i, report) in passes.iter().enumerate() {
        if multi {
            println!("--- pass {} ---", i + 1);
        }
        print!("{}", render_report(&scenario.network, report));
    }
    Ok(())
}

fn main() -> ExitCode {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SCENARIO));

    match run(path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
