//! Paddle movement systems

use bevy::prelude::*;

use crate::input::{PaddleInput, PaddleIntent};
use crate::paddle::components::Paddle;
use crate::world::Arena;

/// Apply one tick of input to a paddle, staying within `[0, arena_height - height]`.
///
/// Up and down are checked independently. With both held (and room on both
/// sides) the two moves cancel out.
pub fn apply_paddle_intent(paddle: &mut Paddle, intent: PaddleIntent, arena_height: f32) {
    if intent.up && paddle.top() - paddle.speed >= 0.0 {
        paddle.move_up();
    }
    if intent.down && paddle.bottom() + paddle.speed <= arena_height {
        paddle.move_down();
    }
}

/// Move both paddles from the captured input
pub fn move_paddles(
    input: Res<PaddleInput>,
    arena: Res<Arena>,
    mut paddles: Query<&mut Paddle>,
) {
    for mut paddle in &mut paddles {
        let intent = input.intent(paddle.side);
        apply_paddle_intent(&mut paddle, intent, arena.height);
    }
}
