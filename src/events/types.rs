//! Event type definitions

use serde::{Deserialize, Serialize};

use crate::paddle::Side;

/// Everything noteworthy that happens during a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the ceiling or floor
    WallBounce { x: f32, y: f32 },
    /// Ball was returned by a paddle
    PaddleHit { side: Side, offset: f32, y_vel: f32 },
    /// Ball left the court; `scorer` gets the point
    Point {
        scorer: Side,
        score_left: u32,
        score_right: u32,
    },
    /// A side reached the declared winning score (play continues)
    WinningScoreReached { side: Side, score: u32 },
}

impl GameEvent {
    /// Short name used by scenario expectations
    pub fn kind(&self) -> &'static str {
        match self {
            GameEvent::WallBounce { .. } => "WallBounce",
            GameEvent::PaddleHit { .. } => "PaddleHit",
            GameEvent::Point { .. } => "Point",
            GameEvent::WinningScoreReached { .. } => "WinningScoreReached",
        }
    }

    /// Side the event belongs to, if any
    pub fn side(&self) -> Option<Side> {
        match self {
            GameEvent::WallBounce { .. } => None,
            GameEvent::PaddleHit { side, .. } => Some(*side),
            GameEvent::Point { scorer, .. } => Some(*scorer),
            GameEvent::WinningScoreReached { side, .. } => Some(*side),
        }
    }
}
