//! Assertion checking for test expectations

use super::parser::{ExpectedEvent, StateAssertion};
use crate::ball::Ball;
use crate::events::BusEvent;
use crate::paddle::Paddle;
use crate::scoring::Score;

/// Float equality tolerance for `==` and `!=` checks
const FLOAT_TOLERANCE: f32 = 0.01;

/// Error when an assertion fails
#[derive(Debug)]
pub struct AssertionError {
    pub message: String,
    pub expected: String,
    pub actual: String,
}

impl std::fmt::Display for AssertionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n    Expected: {}\n    Actual: {}", self.message, self.expected, self.actual)
    }
}

/// Captured event with timing info
#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub frame: u64,
    pub event_type: String,
    pub side: Option<String>,
}

impl CapturedEvent {
    pub fn from_bus_event(event: &BusEvent) -> Self {
        Self {
            frame: event.tick,
            event_type: event.event.kind().to_string(),
            side: event.event.side().map(|s| s.name().to_string()),
        }
    }
}

/// Check if captured events match expected sequence
pub fn check_sequence(expected: &[ExpectedEvent], captured: &[CapturedEvent]) -> Result<(), AssertionError> {
    let mut captured_idx = 0;

    for (i, exp) in expected.iter().enumerate() {
        // Find matching event starting from current position
        let found = captured[captured_idx..].iter().enumerate().find(|(_, cap)| {
            cap.event_type == exp.event
                && exp.side.as_ref().is_none_or(|side| cap.side.as_ref() == Some(side))
        });

        match found {
            Some((offset, cap)) => {
                if let Some(min) = exp.frame_min
                    && cap.frame < min
                {
                    return Err(AssertionError {
                        message: format!("Event #{} '{}' occurred too early", i + 1, exp.event),
                        expected: format!("frame >= {}", min),
                        actual: format!("frame {}", cap.frame),
                    });
                }
                if let Some(max) = exp.frame_max
                    && cap.frame > max
                {
                    return Err(AssertionError {
                        message: format!("Event #{} '{}' occurred too late", i + 1, exp.event),
                        expected: format!("frame <= {}", max),
                        actual: format!("frame {}", cap.frame),
                    });
                }
                captured_idx += offset + 1;
            }
            None => {
                let side_str = exp.side.as_ref().map(|s| format!(" (side: {})", s)).unwrap_or_default();
                return Err(AssertionError {
                    message: format!("Event #{} '{}'{} not found", i + 1, exp.event, side_str),
                    expected: format!("'{}' event in sequence", exp.event),
                    actual: format!(
                        "events after position {}: {:?}",
                        captured_idx,
                        captured[captured_idx..].iter().map(|e| &e.event_type).collect::<Vec<_>>()
                    ),
                });
            }
        }
    }

    Ok(())
}

/// World state for assertions
#[derive(Debug, Clone, Copy)]
pub struct WorldState {
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    pub score: Score,
}

impl WorldState {
    /// Look up a checkable value by path (e.g. `ball.velocity_x`, `left.y`)
    fn value(&self, path: &str) -> Option<f32> {
        let value = match path {
            "ball.x" => self.ball.position.x,
            "ball.y" => self.ball.position.y,
            "ball.velocity_x" => self.ball.velocity.x,
            "ball.velocity_y" => self.ball.velocity.y,
            "left.x" => self.left.position.x,
            "left.y" => self.left.position.y,
            "right.x" => self.right.position.x,
            "right.y" => self.right.position.y,
            "score.left" => self.score.left as f32,
            "score.right" => self.score.right as f32,
            _ => return None,
        };
        Some(value)
    }
}

/// Parse a check string into (path, operator, value)
fn parse_check(check: &str) -> Option<(&str, &str, &str)> {
    // Try operators in order of specificity (>= before >, etc.)
    for op in &["==", ">=", "<=", "!=", "=", ">", "<"] {
        if let Some(idx) = check.find(op) {
            let path = check[..idx].trim();
            let value = check[idx + op.len()..].trim();
            return Some((path, op, value));
        }
    }
    None
}

/// Check state assertions against world state
pub fn check_state(assertion: &StateAssertion, state: &WorldState) -> Result<(), AssertionError> {
    for check in &assertion.checks {
        let (path, operator, expected_value) = parse_check(check).ok_or_else(|| AssertionError {
            message: format!("Invalid check syntax: {}", check),
            expected: "format: 'object.property == value' or 'object.property > value'".to_string(),
            actual: check.clone(),
        })?;

        let actual = state.value(path).ok_or_else(|| AssertionError {
            message: format!("Unknown check path '{}'", path),
            expected: "ball.{x,y,velocity_x,velocity_y}, left.{x,y}, right.{x,y}, score.{left,right}"
                .to_string(),
            actual: path.to_string(),
        })?;

        check_float_comparison(path, actual, operator, expected_value)?;
    }

    Ok(())
}

/// Check float comparison with operator
fn check_float_comparison(path: &str, actual: f32, operator: &str, expected_str: &str) -> Result<(), AssertionError> {
    let value: f32 = expected_str.trim().parse().map_err(|_| AssertionError {
        message: format!("Invalid value for {}", path),
        expected: "number".to_string(),
        actual: expected_str.to_string(),
    })?;

    let pass = match operator {
        ">=" => actual >= value,
        "<=" => actual <= value,
        ">" => actual > value,
        "<" => actual < value,
        "!=" => (actual - value).abs() >= FLOAT_TOLERANCE,
        _ => (actual - value).abs() < FLOAT_TOLERANCE,
    };

    if !pass {
        return Err(AssertionError {
            message: format!("Check failed: {} {} {} (actual: {:.2})", path, operator, expected_str, actual),
            expected: format!("{} {} {}", path, operator, value),
            actual: format!("{:.2}", actual),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::GameEvent;
    use crate::paddle::Side;
    use bevy::prelude::*;

    fn world_state() -> WorldState {
        WorldState {
            ball: Ball::new(Vec2::new(350.0, 250.0), 7.0, 2.0),
            left: Paddle::new(Side::Left, Vec2::new(10.0, 200.0), Vec2::new(20.0, 100.0), 4.0),
            right: Paddle::new(Side::Right, Vec2::new(670.0, 200.0), Vec2::new(20.0, 100.0), 4.0),
            score: Score { left: 3, right: 1 },
        }
    }

    fn assertion(checks: &[&str]) -> StateAssertion {
        StateAssertion {
            after_frame: 0,
            checks: checks.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn captured(frame: u64, event_type: &str, side: Option<&str>) -> CapturedEvent {
        CapturedEvent {
            frame,
            event_type: event_type.to_string(),
            side: side.map(str::to_string),
        }
    }

    fn expected(event: &str, side: Option<&str>, frame_max: Option<u64>) -> ExpectedEvent {
        ExpectedEvent {
            event: event.to_string(),
            side: side.map(str::to_string),
            frame_min: None,
            frame_max,
        }
    }

    #[test]
    fn test_parse_check_operators() {
        assert_eq!(parse_check("ball.x == 352"), Some(("ball.x", "==", "352")));
        assert_eq!(parse_check("ball.x = 352"), Some(("ball.x", "=", "352")));
        assert_eq!(parse_check("left.y >= 0"), Some(("left.y", ">=", "0")));
        assert_eq!(parse_check("ball.y < 10"), Some(("ball.y", "<", "10")));
        assert_eq!(parse_check("ball.y"), None);
    }

    #[test]
    fn test_check_state_passes() {
        let state = world_state();
        let checks = assertion(&[
            "ball.x == 350",
            "ball.velocity_x == 2",
            "ball.velocity_y != 1",
            "left.y <= 200",
            "right.x > 600",
            "score.left == 3",
            "score.right < 2",
        ]);
        assert!(check_state(&checks, &state).is_ok());
    }

    #[test]
    fn test_check_state_reports_actual() {
        let err = check_state(&assertion(&["ball.y == 100"]), &world_state()).unwrap_err();
        assert_eq!(err.actual, "250.00");
    }

    #[test]
    fn test_check_state_rejects_unknown_path() {
        let err = check_state(&assertion(&["ball.spin == 0"]), &world_state()).unwrap_err();
        assert!(err.message.contains("ball.spin"));
    }

    #[test]
    fn test_captured_from_bus_event() {
        let event = BusEvent {
            tick: 9,
            event: GameEvent::PaddleHit {
                side: Side::Right,
                offset: 0.0,
                y_vel: 0.0,
            },
        };
        let cap = CapturedEvent::from_bus_event(&event);
        assert_eq!(cap.frame, 9);
        assert_eq!(cap.event_type, "PaddleHit");
        assert_eq!(cap.side.as_deref(), Some("right"));
    }

    #[test]
    fn test_sequence_in_order() {
        let events = vec![
            captured(1, "PaddleHit", Some("right")),
            captured(40, "WallBounce", None),
            captured(90, "Point", Some("right")),
        ];
        let seq = vec![
            expected("PaddleHit", Some("right"), Some(1)),
            expected("Point", Some("right"), None),
        ];
        assert!(check_sequence(&seq, &events).is_ok());
    }

    #[test]
    fn test_sequence_failures() {
        let events = vec![captured(5, "Point", Some("left"))];

        let wrong_side = vec![expected("Point", Some("right"), None)];
        assert!(check_sequence(&wrong_side, &events).is_err());

        let too_late = vec![expected("Point", None, Some(4))];
        let err = check_sequence(&too_late, &events).unwrap_err();
        assert!(err.message.contains("too late"));

        let out_of_order = vec![expected("Point", None, None), expected("Point", None, None)];
        assert!(check_sequence(&out_of_order, &events).is_err());
    }
}
