//! Test execution engine

use bevy::prelude::*;

use crate::ball::Ball;
use crate::events::EventBus;
use crate::input::KeyBindings;
use crate::paddle::{Paddle, Side};
use crate::scoring::Score;
use crate::simulation::{HeadlessAppBuilder, run_tick};

use super::assertions::{AssertionError, CapturedEvent, WorldState, check_sequence, check_state};
use super::input::{ScriptedInputs, apply_held_keys};
use super::parser::{StateAssertion, TestDefinition, TestSetup};

/// Frames run when a test names no frame at all
const DEFAULT_FRAMES: u64 = 60;

/// Result of running a test
#[derive(Debug)]
pub enum TestResult {
    Pass { frames: u64 },
    Fail { error: AssertionError },
    Error { message: String },
}

/// Run a single test and return the result
pub fn run_test(test: &TestDefinition) -> TestResult {
    let mut scripted = ScriptedInputs::from_inputs(&test.input);

    // Run long enough for every assertion to be reachable
    for state in &test.expect.state {
        scripted.set_max_frame(state.after_frame);
    }
    for event in &test.expect.sequence {
        if let Some(max) = event.frame_max {
            scripted.set_max_frame(max);
        }
    }
    if let Some(frames) = test.setup.frames {
        scripted.set_max_frame(frames);
    }
    if scripted.max_frame == 0 {
        scripted.max_frame = DEFAULT_FRAMES;
    }

    let mut app = HeadlessAppBuilder::new()
        .with_minimal_threads()
        .with_events()
        .build();

    if let Err(message) = apply_setup(app.world_mut(), &test.setup) {
        return TestResult::Error { message };
    }

    if let Err(result) = check_frame(app.world_mut(), &test.expect.state, 0) {
        return result;
    }

    let bindings = *app.world().resource::<KeyBindings>();
    let mut captured = Vec::new();

    while scripted.should_continue() {
        let held = scripted.advance_frame();
        apply_held_keys(
            &mut app.world_mut().resource_mut::<ButtonInput<KeyCode>>(),
            &bindings,
            held,
        );

        run_tick(&mut app);

        let drained = app.world_mut().resource_mut::<EventBus>().drain();
        captured.extend(drained.iter().map(CapturedEvent::from_bus_event));

        if let Err(result) = check_frame(app.world_mut(), &test.expect.state, scripted.current_frame)
        {
            return result;
        }
    }

    if let Err(error) = check_sequence(&test.expect.sequence, &captured) {
        return TestResult::Fail { error };
    }

    TestResult::Pass {
        frames: scripted.current_frame,
    }
}

/// Run every state assertion scheduled for `frame`
fn check_frame(world: &mut World, assertions: &[StateAssertion], frame: u64) -> Result<(), TestResult> {
    let due: Vec<_> = assertions.iter().filter(|a| a.after_frame == frame).collect();
    if due.is_empty() {
        return Ok(());
    }

    let state = extract_world_state(world).map_err(|message| TestResult::Error { message })?;
    for assertion in due {
        check_state(assertion, &state).map_err(|error| TestResult::Fail { error })?;
    }

    Ok(())
}

/// Override the spawned court with the test's starting state
fn apply_setup(world: &mut World, setup: &TestSetup) -> Result<(), String> {
    if let Some(def) = &setup.ball {
        let mut query = world.query::<&mut Ball>();
        let mut ball = query
            .single_mut(world)
            .map_err(|e| format!("Ball not found: {e}"))?;
        ball.position = Vec2::new(def.x, def.y);
        if let Some(x) = def.velocity_x {
            ball.velocity.x = x;
        }
        if let Some(y) = def.velocity_y {
            ball.velocity.y = y;
        }
    }

    for (side, def) in [(Side::Left, &setup.left_paddle), (Side::Right, &setup.right_paddle)] {
        let Some(def) = def else { continue };

        let mut query = world.query::<&mut Paddle>();
        let mut paddle = query
            .iter_mut(world)
            .find(|p| p.side == side)
            .ok_or_else(|| format!("{side} paddle not found"))?;
        paddle.position.y = def.y;
    }

    if let Some(def) = &setup.score {
        *world.resource_mut::<Score>() = Score {
            left: def.left,
            right: def.right,
        };
    }

    Ok(())
}

/// Extract world state for assertions
fn extract_world_state(world: &mut World) -> Result<WorldState, String> {
    let mut ball_query = world.query::<&Ball>();
    let ball = *ball_query
        .single(world)
        .map_err(|e| format!("Ball not found: {e}"))?;

    let mut paddle_query = world.query::<&Paddle>();
    let paddles: Vec<Paddle> = paddle_query.iter(world).copied().collect();
    let find = |side: Side| {
        paddles
            .iter()
            .find(|p| p.side == side)
            .copied()
            .ok_or_else(|| format!("{side} paddle not found"))
    };

    Ok(WorldState {
        ball,
        left: find(Side::Left)?,
        right: find(Side::Right)?,
        score: *world.resource::<Score>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> TestDefinition {
        toml::from_str(toml).unwrap()
    }

    #[test]
    fn test_initial_state_check() {
        let test = parse(
            r#"
name = "initial"
[[expect.state]]
after_frame = 0
checks = ["ball.x == 350", "left.y == 200", "score.left == 0"]
"#,
        );
        assert!(matches!(run_test(&test), TestResult::Pass { frames: 60 }));
    }

    #[test]
    fn test_failing_check_reports_fail() {
        let test = parse(
            r#"
name = "wrong"
[[expect.state]]
after_frame = 2
checks = ["ball.x == 100"]
"#,
        );
        match run_test(&test) {
            TestResult::Fail { error } => assert_eq!(error.actual, "354.00"),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn test_held_key_moves_paddle() {
        let test = parse(
            r#"
name = "hold"
[[input]]
frame = 1
right_up = true

[[input]]
frame = 6
right_up = false

[[expect.state]]
after_frame = 10
checks = ["right.y == 180", "left.y == 200"]
"#,
        );
        assert!(matches!(run_test(&test), TestResult::Pass { frames: 10 }));
    }

    #[test]
    fn test_setup_overrides_court() {
        let test = parse(
            r#"
name = "setup"
[setup]
ball = { x = 100.0, y = 120.0, velocity_x = -2.0, velocity_y = 1.0 }
left_paddle = { y = 0.0 }
score = { right = 7 }

[[expect.state]]
after_frame = 1
checks = ["ball.x == 98", "ball.y == 121", "left.y == 0", "score.right == 7"]
"#,
        );
        assert!(matches!(run_test(&test), TestResult::Pass { .. }));
    }
}
