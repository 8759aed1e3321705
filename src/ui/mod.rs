//! UI module - score board

mod hud;

pub use hud::*;
