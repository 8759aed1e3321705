//! Simulation module - the per-tick game loop
//!
//! Everything that mutates game state lives in one chained FixedUpdate set,
//! so each tick runs input → paddles → ball → collisions → scoring in order.
//! The windowed game and the headless builder both install it through
//! [`SimulationPlugin`].
//!
//! The windowed game also caps catch-up with [`configure_frame_clock`]: a
//! slow frame never runs more than one tick, so the ball moves at most one
//! step between two rendered frames.

pub mod app_builder;

pub use app_builder::{HeadlessAppBuilder, run_tick};

use bevy::prelude::*;
use std::time::Duration;

use crate::ball::{Ball, advance_ball, ball_collisions};
use crate::events::{EventBus, advance_event_tick};
use crate::input::{KeyBindings, PaddleInput, capture_input};
use crate::paddle::{Paddle, Side, move_paddles};
use crate::scoring::{Score, WinningScore, announce_winning_score, check_scoring};
use crate::settings::GameSettings;
use crate::world::Arena;

/// System set containing one full simulation step
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct TickSet;

/// Game state resources, court spawning, and the tick systems
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let settings = app
            .world()
            .get_resource::<GameSettings>()
            .cloned()
            .unwrap_or_default();

        if !app.world().contains_resource::<EventBus>() {
            app.insert_resource(EventBus::new());
        }

        app.insert_resource(Arena::from_settings(&settings))
            .insert_resource(WinningScore::new(settings.winning_score))
            .insert_resource(settings)
            .init_resource::<Score>()
            .init_resource::<PaddleInput>()
            .init_resource::<KeyBindings>()
            .init_resource::<ButtonInput<KeyCode>>()
            .add_systems(Startup, spawn_court)
            .add_systems(
                FixedUpdate,
                (
                    advance_event_tick,
                    capture_input,
                    move_paddles,
                    advance_ball,
                    ball_collisions,
                    check_scoring,
                    announce_winning_score,
                )
                    .chain()
                    .in_set(TickSet),
            );
    }
}

/// Length of one simulation tick
pub fn tick_duration(fps: u32) -> Duration {
    Duration::from_secs_f64(1.0 / f64::from(fps.max(1)))
}

/// Run FixedUpdate at `fps` Hz with at most one tick per rendered frame.
///
/// Virtual time advances by no more than one tick per frame, so the fixed
/// accumulator never holds two ticks' worth after a stall.
pub fn configure_frame_clock(app: &mut App, fps: u32) {
    let tick = tick_duration(fps);
    app.insert_resource(Time::<Fixed>::from_duration(tick))
        .insert_resource(Time::<Virtual>::from_max_delta(tick));
}

/// Spawn both paddles and the ball at their starting positions
pub fn spawn_court(mut commands: Commands, arena: Res<Arena>, settings: Res<GameSettings>) {
    for side in Side::BOTH {
        commands.spawn(Paddle::spawn(side, &arena, &settings));
    }
    commands.spawn(Ball::spawn(&arena, &settings));

    info!(
        "Court ready: {}x{} at {} ticks/s, winning score {}",
        arena.width, arena.height, settings.fps, settings.winning_score
    );
}
