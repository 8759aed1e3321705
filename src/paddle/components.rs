//! Paddle-related components

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::settings::GameSettings;
use crate::world::Arena;

/// Which side of the court a paddle (or a point) belongs to
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn name(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Player-controlled rectangle, screen space (position is the top-left corner)
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub position: Vec2,
    pub size: Vec2,
    /// Vertical pixels moved per tick
    pub speed: f32,
}

impl Paddle {
    pub fn new(side: Side, position: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            side,
            position,
            size,
            speed,
        }
    }

    /// Paddle at its starting spot: vertically centered, `margin` in from its edge
    pub fn spawn(side: Side, arena: &Arena, settings: &GameSettings) -> Self {
        let size = Vec2::new(settings.paddle_width, settings.paddle_height);
        let x = match side {
            Side::Left => settings.paddle_margin,
            Side::Right => arena.width - size.x - settings.paddle_margin,
        };
        let y = (arena.height - size.y) / 2.0;
        Self::new(side, Vec2::new(x, y), size, settings.paddle_speed)
    }

    pub fn top(&self) -> f32 {
        self.position.y
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    pub fn left_edge(&self) -> f32 {
        self.position.x
    }

    pub fn right_edge(&self) -> f32 {
        self.position.x + self.size.x
    }

    pub fn center_y(&self) -> f32 {
        self.position.y + self.size.y / 2.0
    }

    pub fn half_height(&self) -> f32 {
        self.size.y / 2.0
    }

    pub fn move_up(&mut self) {
        self.position.y -= self.speed;
    }

    pub fn move_down(&mut self) {
        self.position.y += self.speed;
    }
}
