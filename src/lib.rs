//! Pong - a two-player Pong game built with Bevy
//!
//! This crate provides the game components, resources, and systems organized into modules.

// Core modules
pub mod constants;
pub mod error;
pub mod events;
pub mod settings;
pub mod simulation;
pub mod testing;

// Game logic modules
pub mod ball;
pub mod input;
pub mod paddle;
pub mod scoring;
pub mod ui;
pub mod world;

// Re-export commonly used types for convenience
pub use ball::{Ball, Collision, deflect_off_paddle, resolve_collisions};
pub use constants::*;
pub use error::SettingsError;
pub use events::{BusEvent, EventBus, GameEvent};
pub use input::{KeyBindings, PaddleInput, PaddleIntent};
pub use paddle::{Paddle, Side, apply_paddle_intent};
pub use scoring::{Score, WinningScore, out_of_bounds, score_ball};
pub use settings::GameSettings;
pub use simulation::{HeadlessAppBuilder, SimulationPlugin, run_tick};
pub use world::Arena;
