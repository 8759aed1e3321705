//! Ball physics systems

use bevy::prelude::*;

use crate::ball::components::Ball;
use crate::events::{EventBus, GameEvent};
use crate::paddle::{Paddle, Side};
use crate::world::Arena;

/// What the ball hit this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Collision {
    /// Ceiling or floor
    Wall,
    /// Paddle return; `offset` is paddle center minus ball center (screen space)
    Paddle { side: Side, offset: f32 },
}

/// Return the ball off a paddle if its center is within the paddle's vertical span.
///
/// Horizontal velocity is inverted. Vertical velocity becomes proportional to
/// how far from the paddle center the ball hit: half the paddle height away
/// maps to full `max_speed`, pointing away from the center.
/// Returns the contact offset, or None when the ball missed.
pub fn deflect_off_paddle(ball: &mut Ball, paddle: &Paddle) -> Option<f32> {
    let y = ball.position.y;
    if y < paddle.top() || y > paddle.bottom() {
        return None;
    }

    ball.velocity.x = -ball.velocity.x;

    let offset = paddle.center_y() - y;
    ball.velocity.y = -(offset * ball.max_speed / paddle.half_height());
    Some(offset)
}

/// Resolve at most one kind of collision for this tick.
///
/// Ceiling/floor contact wins over paddles. Paddles are only checked when the
/// ball is travelling toward them and its leading edge has reached the
/// paddle's near edge.
pub fn resolve_collisions(
    ball: &mut Ball,
    left: &Paddle,
    right: &Paddle,
    arena_height: f32,
) -> Option<Collision> {
    if ball.top() <= 0.0 || ball.bottom() >= arena_height {
        ball.velocity.y = -ball.velocity.y;
        return Some(Collision::Wall);
    }

    let mut hit = None;

    if ball.velocity.x < 0.0
        && ball.left_edge() <= left.right_edge()
        && let Some(offset) = deflect_off_paddle(ball, left)
    {
        hit = Some(Collision::Paddle {
            side: Side::Left,
            offset,
        });
    }

    if ball.velocity.x > 0.0
        && ball.right_edge() >= right.left_edge()
        && let Some(offset) = deflect_off_paddle(ball, right)
    {
        hit = Some(Collision::Paddle {
            side: Side::Right,
            offset,
        });
    }

    hit
}

/// Integrate ball position
pub fn advance_ball(mut balls: Query<&mut Ball>) {
    for mut ball in &mut balls {
        ball.advance();
    }
}

/// Handle ball collisions with walls and paddles
pub fn ball_collisions(
    arena: Res<Arena>,
    mut bus: ResMut<EventBus>,
    mut balls: Query<&mut Ball>,
    paddles: Query<&Paddle>,
) {
    let left = paddles.iter().find(|p| p.side == Side::Left);
    let right = paddles.iter().find(|p| p.side == Side::Right);
    let (Some(left), Some(right)) = (left, right) else {
        return;
    };

    for mut ball in &mut balls {
        match resolve_collisions(&mut ball, left, right, arena.height) {
            Some(Collision::Wall) => bus.emit(GameEvent::WallBounce {
                x: ball.position.x,
                y: ball.position.y,
            }),
            Some(Collision::Paddle { side, offset }) => bus.emit(GameEvent::PaddleHit {
                side,
                offset,
                y_vel: ball.velocity.y,
            }),
            None => {}
        }
    }
}
