//! Ball-related components

use bevy::prelude::*;

use crate::settings::GameSettings;
use crate::world::Arena;

/// The ball, screen space (position is the center)
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub position: Vec2,
    /// Pixels per tick
    pub velocity: Vec2,
    pub radius: f32,
    /// Horizontal speed, and the bound on vertical speed
    pub max_speed: f32,
    /// Spawn point restored on every reset
    pub origin: Vec2,
}

impl Ball {
    /// Ball at `origin`, heading right at full speed
    pub fn new(origin: Vec2, radius: f32, max_speed: f32) -> Self {
        Self {
            position: origin,
            velocity: Vec2::new(max_speed, 0.0),
            radius,
            max_speed,
            origin,
        }
    }

    /// Ball at the center of the arena
    pub fn spawn(arena: &Arena, settings: &GameSettings) -> Self {
        Self::new(arena.center(), settings.ball_radius, settings.ball_max_speed)
    }

    /// One Euler step
    pub fn advance(&mut self) {
        self.position += self.velocity;
    }

    /// Back to the spawn point, serving the other way with no vertical speed
    pub fn reset(&mut self) {
        self.position = self.origin;
        self.velocity.x = -self.velocity.x;
        self.velocity.y = 0.0;
    }

    pub fn top(&self) -> f32 {
        self.position.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.radius
    }

    pub fn left_edge(&self) -> f32 {
        self.position.x - self.radius
    }

    pub fn right_edge(&self) -> f32 {
        self.position.x + self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_at_center() {
        let ball = Ball::spawn(&Arena::default(), &GameSettings::default());
        assert_eq!(ball.position, Vec2::new(350.0, 250.0));
        assert_eq!(ball.velocity, Vec2::new(2.0, 0.0));
        assert_eq!(ball.origin, ball.position);
    }

    #[test]
    fn test_advance_one_step() {
        let mut ball = Ball::new(Vec2::new(350.0, 250.0), 7.0, 2.0);
        ball.advance();
        assert_eq!(ball.position, Vec2::new(352.0, 250.0));
    }

    #[test]
    fn test_reset_restores_origin_and_flips_direction() {
        let mut ball = Ball::new(Vec2::new(350.0, 250.0), 7.0, 2.0);
        ball.position = Vec2::new(12.0, 77.0);
        ball.velocity = Vec2::new(-2.0, 1.25);

        ball.reset();
        assert_eq!(ball.position, Vec2::new(350.0, 250.0));
        assert_eq!(ball.velocity, Vec2::new(2.0, 0.0));

        ball.reset();
        assert_eq!(ball.velocity, Vec2::new(-2.0, 0.0));
    }
}
