//! TOML test file parsing

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Complete test definition from TOML file
#[derive(Debug, Deserialize)]
pub struct TestDefinition {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub setup: TestSetup,
    #[serde(default)]
    pub input: Vec<FrameInput>,
    #[serde(default)]
    pub expect: TestExpectations,
}

/// Starting state, applied on top of the default court
#[derive(Debug, Default, Deserialize)]
pub struct TestSetup {
    pub ball: Option<BallDef>,
    pub left_paddle: Option<PaddleDef>,
    pub right_paddle: Option<PaddleDef>,
    pub score: Option<ScoreDef>,
    /// Minimum number of ticks to run
    pub frames: Option<u64>,
}

/// Ball placement (screen space); velocity defaults to the serve velocity
#[derive(Debug, Clone, Deserialize)]
pub struct BallDef {
    pub x: f32,
    pub y: f32,
    pub velocity_x: Option<f32>,
    pub velocity_y: Option<f32>,
}

/// Paddle placement (top edge, screen space)
#[derive(Debug, Clone, Deserialize)]
pub struct PaddleDef {
    pub y: f32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreDef {
    #[serde(default)]
    pub left: u32,
    #[serde(default)]
    pub right: u32,
}

/// Key changes taking effect before the given tick (1 = first tick)
#[derive(Debug, Deserialize)]
pub struct FrameInput {
    pub frame: u64,
    #[serde(flatten)]
    pub keys: InputSnapshot,
}

/// Held state for each movement key; unset keys keep their previous state
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputSnapshot {
    pub left_up: Option<bool>,
    pub left_down: Option<bool>,
    pub right_up: Option<bool>,
    pub right_down: Option<bool>,
}

/// Expected test outcomes
#[derive(Debug, Default, Deserialize)]
pub struct TestExpectations {
    #[serde(default)]
    pub sequence: Vec<ExpectedEvent>,
    /// Multiple state assertions at different frames (uses [[expect.state]] TOML syntax)
    #[serde(default)]
    pub state: Vec<StateAssertion>,
}

/// Expected event in sequence
#[derive(Debug, Deserialize)]
pub struct ExpectedEvent {
    pub event: String,
    pub side: Option<String>,
    pub frame_min: Option<u64>,
    pub frame_max: Option<u64>,
}

/// State assertion after a given tick (0 = before the first tick)
#[derive(Debug, Clone, Deserialize)]
pub struct StateAssertion {
    pub after_frame: u64,
    #[serde(default)]
    pub checks: Vec<String>,
}

/// Parse a test file from path
pub fn parse_test_file(path: &Path) -> Result<TestDefinition, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    toml::from_str(&content).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
}
