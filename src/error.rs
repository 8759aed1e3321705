//! Startup error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or validating game settings.
///
/// Validation variants are fatal at startup. `Io` and `Json` come from
/// reading the settings file, which falls back to defaults instead.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Window dimensions must both be at least one pixel.
    #[error("invalid window size {width}x{height}: both dimensions must be at least 1")]
    InvalidWindowSize { width: f32, height: f32 },

    /// The fixed tick rate must be non-zero.
    #[error("invalid tick rate {0}: fps must be at least 1")]
    InvalidFps(u32),

    /// Paddle geometry or speed is not positive.
    #[error("invalid paddle: width {width}, height {height}, speed {speed} must all be positive")]
    InvalidPaddle { width: f32, height: f32, speed: f32 },

    /// Paddle does not fit inside the window vertically.
    #[error("paddle height {paddle_height} does not fit in window height {window_height}")]
    PaddleTooTall {
        paddle_height: f32,
        window_height: f32,
    },

    /// Ball geometry or speed is not positive.
    #[error("invalid ball: radius {radius} and max speed {max_speed} must be positive")]
    InvalidBall { radius: f32, max_speed: f32 },

    /// Configured score font is not present under the assets directory.
    #[error("score font not found: {}", .0.display())]
    MissingFont(PathBuf),

    #[error("cannot read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse settings file: {0}")]
    Json(#[from] serde_json::Error),
}
