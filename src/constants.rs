//! Default constants for pong
//!
//! These are the values used when no settings file overrides them.

use bevy::prelude::*;

// =============================================================================
// WINDOW
// =============================================================================

pub const WINDOW_WIDTH: f32 = 700.0;
pub const WINDOW_HEIGHT: f32 = 500.0;
pub const WINDOW_TITLE: &str = "Pong";
pub const FPS: u32 = 60;

// =============================================================================
// COLORS
// =============================================================================

pub const BACKGROUND_COLOR: Color = Color::srgb_u8(205, 182, 228); // Lavender
pub const PADDLE_COLOR: Color = Color::WHITE;
pub const BALL_COLOR: Color = Color::BLACK;
pub const SCORE_COLOR: Color = Color::WHITE;
pub const CENTER_LINE_COLOR: Color = Color::WHITE;

// =============================================================================
// SCORE BOARD
// =============================================================================

pub const SCORE_FONT_SIZE: f32 = 50.0;
pub const SCORE_TEXT_TOP: f32 = 20.0;
/// Declared threshold; announced when reached, never ends the match
pub const WINNING_SCORE: u32 = 50;

// =============================================================================
// PADDLES
// =============================================================================

pub const PADDLE_WIDTH: f32 = 20.0;
pub const PADDLE_HEIGHT: f32 = 100.0;
pub const PADDLE_SPEED: f32 = 4.0; // Pixels per tick
pub const PADDLE_MARGIN: f32 = 10.0; // Gap between paddle and window edge

// =============================================================================
// BALL
// =============================================================================

pub const BALL_RADIUS: f32 = 7.0;
pub const BALL_MAX_SPEED: f32 = 2.0; // Pixels per tick, both axes

// =============================================================================
// CENTER LINE
// =============================================================================

pub const CENTER_LINE_SLOTS: usize = 25; // Odd slots are drawn
pub const CENTER_LINE_WIDTH: f32 = 10.0;

// =============================================================================
// RENDER LAYERS
// =============================================================================

pub const Z_CENTER_LINE: f32 = 0.0;
pub const Z_PADDLE: f32 = 1.0;
pub const Z_BALL: f32 = 2.0;

// =============================================================================
// FILES
// =============================================================================

pub const ASSETS_DIR: &str = "assets";
