//! Scenario test runner CLI
//!
//! Usage:
//!   cargo run --bin test-scenarios                  # Run all scenarios
//!   cargo run --bin test-scenarios -- scoring/      # Run one directory
//!   cargo run --bin test-scenarios -- wall_bounce   # Run matching files
//!   cargo run --bin test-scenarios -- --verbose     # Expected/actual on failure

use std::env;
use std::path::Path;
use std::process::ExitCode;

use pong::testing::{SCENARIOS_DIR, ScenarioOutcome, TestResult, run_all};

fn main() -> ExitCode {
    let mut verbose = false;
    let mut filter = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--verbose" | "-v" => verbose = true,
            _ if !arg.starts_with('-') => filter = Some(arg),
            _ => eprintln!("ignoring unknown flag {arg}"),
        }
    }

    let outcomes = run_all(Path::new(SCENARIOS_DIR), filter.as_deref());
    if outcomes.is_empty() {
        eprintln!(
            "no scenarios under {SCENARIOS_DIR}{}",
            filter.map(|f| format!(" matching '{f}'")).unwrap_or_default()
        );
        return ExitCode::FAILURE;
    }

    for outcome in &outcomes {
        report(outcome, verbose);
    }

    let passed = outcomes.iter().filter(|o| o.passed()).count();
    let failed = outcomes.len() - passed;
    println!("\n{passed}/{} scenarios passed", outcomes.len());

    if failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn report(outcome: &ScenarioOutcome, verbose: bool) {
    let name = outcome.path.with_extension("");
    let name = name.display();

    match &outcome.result {
        TestResult::Pass { frames } => println!("ok    {name} ({frames} ticks)"),
        TestResult::Fail { error } if verbose => println!("FAIL  {name}\n      {error}"),
        TestResult::Fail { error } => println!("FAIL  {name}: {}", error.message),
        TestResult::Error { message } => println!("ERROR {name}: {message}"),
    }
}
