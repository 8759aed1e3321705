//! Game event bus
//!
//! Simulation systems emit tick-stamped events; the logging system drains
//! them once per rendered frame and the scenario runner drains them after
//! every tick to check event sequences.

mod bus;
mod types;

pub use bus::{BusEvent, EventBus, advance_event_tick, log_game_events};
pub use types::GameEvent;
