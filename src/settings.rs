//! Game settings loaded at startup
//!
//! Reads optional overrides from config/pong_settings.json. A missing file
//! means defaults; an unreadable or malformed file is reported and defaults
//! are used. Validation failures are fatal.

use bevy::asset::io::file::FileAssetReader;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::error::SettingsError;

/// Path to the settings file
pub const SETTINGS_FILE: &str = "config/pong_settings.json";

/// Window, tick rate, and entity geometry for one run of the game
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub window_width: f32,
    pub window_height: f32,
    pub window_title: String,
    /// Simulation ticks per second
    pub fps: u32,
    pub winning_score: u32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Pixels per tick
    pub paddle_speed: f32,
    pub paddle_margin: f32,
    pub ball_radius: f32,
    /// Pixels per tick
    pub ball_max_speed: f32,
    /// Score font, relative to the assets directory (None = engine default font)
    pub score_font: Option<String>,
    pub score_font_size: f32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            window_title: WINDOW_TITLE.to_string(),
            fps: FPS,
            winning_score: WINNING_SCORE,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_margin: PADDLE_MARGIN,
            ball_radius: BALL_RADIUS,
            ball_max_speed: BALL_MAX_SPEED,
            score_font: None,
            score_font_size: SCORE_FONT_SIZE,
        }
    }
}

impl GameSettings {
    /// Load settings from the default file, or return defaults
    pub fn load() -> Self {
        Self::load_from(Path::new(SETTINGS_FILE))
    }

    /// Load settings from `path`, or return defaults if it is missing or unreadable
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No {} found, using defaults", path.display());
            return Self::default();
        }

        match Self::read_from(path) {
            Ok(settings) => {
                info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                warn!("{}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Read and parse a settings file
    pub fn read_from(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Reject settings the game cannot start with
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.validate_geometry()?;

        if let Some(font) = self.score_font_path()
            && !font.exists()
        {
            return Err(SettingsError::MissingFont(font));
        }

        Ok(())
    }

    /// Geometry and tick-rate checks (no filesystem access)
    pub fn validate_geometry(&self) -> Result<(), SettingsError> {
        // Window is created in whole pixels; `!(x >= 1.0)` also rejects NaN
        if !(self.window_width >= 1.0) || !(self.window_height >= 1.0) {
            return Err(SettingsError::InvalidWindowSize {
                width: self.window_width,
                height: self.window_height,
            });
        }

        if self.fps == 0 {
            return Err(SettingsError::InvalidFps(self.fps));
        }

        if !(self.paddle_width > 0.0) || !(self.paddle_height > 0.0) || !(self.paddle_speed > 0.0) {
            return Err(SettingsError::InvalidPaddle {
                width: self.paddle_width,
                height: self.paddle_height,
                speed: self.paddle_speed,
            });
        }

        if self.paddle_height > self.window_height {
            return Err(SettingsError::PaddleTooTall {
                paddle_height: self.paddle_height,
                window_height: self.window_height,
            });
        }

        if !(self.ball_radius > 0.0) || !(self.ball_max_speed > 0.0) {
            return Err(SettingsError::InvalidBall {
                radius: self.ball_radius,
                max_speed: self.ball_max_speed,
            });
        }

        Ok(())
    }

    /// Filesystem path of the configured score font, if any.
    ///
    /// Resolved against the same root the asset server's file reader uses.
    pub fn score_font_path(&self) -> Option<PathBuf> {
        self.score_font
            .as_ref()
            .map(|font| FileAssetReader::new(ASSETS_DIR).root_path().join(font))
    }
}
