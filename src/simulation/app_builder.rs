//! Headless App Builder
//!
//! Builds a windowless Bevy app running the same simulation as the game.
//! Used by the scenario runner and ECS-level tests.
//!
//! There is no time plugin: ticks are driven explicitly with [`run_tick`],
//! one FixedUpdate run per call, so results never depend on wall-clock time.
//!
//! Game events are dropped unless [`HeadlessAppBuilder::with_events`] is
//! used. Nothing in a headless app drains the bus, so callers that record
//! events must drain [`EventBus`] themselves.

use bevy::prelude::*;

use crate::events::EventBus;
use crate::settings::GameSettings;

use super::SimulationPlugin;

/// Builder for creating headless Bevy apps
pub struct HeadlessAppBuilder {
    settings: GameSettings,
    minimal_threads: bool,
    record_events: bool,
}

impl Default for HeadlessAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessAppBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            settings: GameSettings::default(),
            minimal_threads: false,
            record_events: false,
        }
    }

    /// Use custom game settings (window size, speeds, ...)
    pub fn with_settings(mut self, settings: GameSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Enable minimal thread mode (task pools = 1)
    pub fn with_minimal_threads(mut self) -> Self {
        self.minimal_threads = true;
        self
    }

    /// Record game events; the caller drains them after each tick
    pub fn with_events(mut self) -> Self {
        self.record_events = true;
        self
    }

    /// Build the app and run startup (court spawned, no ticks run yet)
    pub fn build(self) -> App {
        let mut app = App::new();

        if self.minimal_threads {
            app.add_plugins(TaskPoolPlugin {
                task_pool_options: TaskPoolOptions::with_num_threads(1),
            });
        } else {
            app.add_plugins(TaskPoolPlugin::default());
        }

        app.insert_resource(if self.record_events {
            EventBus::new()
        } else {
            EventBus::disabled()
        });
        app.insert_resource(self.settings);
        app.add_plugins(SimulationPlugin);

        // Runs Startup once; without a time plugin FixedUpdate is not reached
        app.update();

        app
    }
}

/// Run exactly one simulation tick
pub fn run_tick(app: &mut App) {
    app.world_mut().run_schedule(FixedUpdate);
}
