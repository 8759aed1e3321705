//! Scenario testing system for deterministic game testing
//!
//! Provides infrastructure for running scripted key presses against the
//! headless simulation to verify game mechanics.

pub mod assertions;
pub mod input;
pub mod parser;
pub mod runner;

use std::fs;
use std::path::{Path, PathBuf};

pub use assertions::{AssertionError, CapturedEvent, WorldState, check_sequence, check_state};
pub use input::ScriptedInputs;
pub use parser::{
    BallDef, ExpectedEvent, FrameInput, InputSnapshot, PaddleDef, ScoreDef, StateAssertion,
    TestDefinition, TestExpectations, TestSetup, parse_test_file,
};
pub use runner::{TestResult, run_test};

/// Default path for test scenarios
pub const SCENARIOS_DIR: &str = "tests/scenarios";

/// Outcome of one scenario file
#[derive(Debug)]
pub struct ScenarioOutcome {
    /// Path relative to the scenarios directory
    pub path: PathBuf,
    pub result: TestResult,
}

impl ScenarioOutcome {
    pub fn passed(&self) -> bool {
        matches!(self.result, TestResult::Pass { .. })
    }
}

/// Parse and run every scenario under `base` matching `filter`, in path order.
///
/// Files that fail to parse are reported as [`TestResult::Error`].
pub fn run_all(base: &Path, filter: Option<&str>) -> Vec<ScenarioOutcome> {
    discover_tests(base, filter)
        .into_iter()
        .map(|path| {
            let result = match parse_test_file(&path) {
                Ok(test) => run_test(&test),
                Err(message) => TestResult::Error { message },
            };
            ScenarioOutcome {
                path: path.strip_prefix(base).unwrap_or(&path).to_path_buf(),
                result,
            }
        })
        .collect()
}

/// Find all `.toml` scenarios under `base`, sorted, optionally filtered by
/// a substring of their path relative to `base`
pub fn discover_tests(base: &Path, filter: Option<&str>) -> Vec<PathBuf> {
    let mut tests = Vec::new();
    discover_tests_recursive(base, base, filter, &mut tests);
    tests.sort();
    tests
}

fn discover_tests_recursive(
    base: &Path,
    current: &Path,
    filter: Option<&str>,
    tests: &mut Vec<PathBuf>,
) {
    let entries = match fs::read_dir(current) {
        Ok(e) => e,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let path = entry.path();

        if path.is_dir() {
            discover_tests_recursive(base, &path, filter, tests);
        } else if path.extension().map(|e| e == "toml").unwrap_or(false) {
            if let Some(f) = filter {
                let rel = path.strip_prefix(base).unwrap_or(&path).to_string_lossy();

                if !rel.contains(f) {
                    continue;
                }
            }

            tests.push(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenarios_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join(SCENARIOS_DIR)
    }

    #[test]
    fn test_discover_filters_by_relative_path() {
        let all = discover_tests(&scenarios_dir(), None);
        let scoring = discover_tests(&scenarios_dir(), Some("scoring/"));

        assert!(!scoring.is_empty());
        assert!(scoring.len() < all.len());
        assert!(scoring.iter().all(|p| p.to_string_lossy().contains("scoring")));
    }

    #[test]
    fn test_run_all_reports_relative_paths() {
        let outcomes = run_all(&scenarios_dir(), Some("paddle/"));

        assert!(!outcomes.is_empty());
        for outcome in &outcomes {
            assert!(outcome.path.starts_with("paddle"));
            assert!(outcome.passed(), "{}: {:?}", outcome.path.display(), outcome.result);
        }
    }

    #[test]
    fn test_missing_directory_runs_nothing() {
        assert!(run_all(Path::new("no/such/scenarios"), None).is_empty());
    }
}
