//! Pong - two-player Pong built with Bevy
//!
//! Main entry point: settings, window, and system registration.

use bevy::prelude::*;
use bevy::window::WindowResolution;

use pong::constants::BACKGROUND_COLOR;
use pong::events::log_game_events;
use pong::settings::GameSettings;
use pong::simulation::{SimulationPlugin, configure_frame_clock};
use pong::ui::{spawn_score_board, update_score_text};
use pong::world::{attach_visuals, spawn_scenery, sync_transforms};

fn main() -> AppExit {
    let settings = GameSettings::load();
    if let Err(e) = settings.validate() {
        eprintln!("pong: cannot start: {e}");
        return AppExit::error();
    }

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            // Scale factor pinned so one screen unit is one pixel on HiDPI displays
            resolution: WindowResolution::new(
                settings.window_width as u32,
                settings.window_height as u32,
            )
            .with_scale_factor_override(1.0),
            title: settings.window_title.clone(),
            resizable: false,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(ClearColor(BACKGROUND_COLOR));
    configure_frame_clock(&mut app, settings.fps);

    app.insert_resource(settings)
        .add_plugins(SimulationPlugin)
        // Rendering: read-only views of the simulated state
        .add_systems(Startup, (spawn_scenery, spawn_score_board))
        .add_systems(PostStartup, attach_visuals)
        .add_systems(
            Update,
            (sync_transforms, update_score_text, log_game_events),
        );

    app.run()
}
