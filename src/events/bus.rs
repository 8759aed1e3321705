//! Event Bus - tick-stamped hub between simulation and observers
//!
//! - Collision systems emit WallBounce / PaddleHit
//! - Scoring emits Point / WinningScoreReached
//! - `log_game_events` drains the bus and writes the log

use bevy::prelude::*;

use super::types::GameEvent;

/// Event stamped with the tick that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct BusEvent {
    /// Simulation tick (1 = first step)
    pub tick: u64,
    pub event: GameEvent,
}

/// Central event bus
#[derive(Resource, Default)]
pub struct EventBus {
    /// Events emitted since the last drain
    pending: Vec<BusEvent>,

    /// Current simulation tick
    tick: u64,

    /// Whether the bus records events
    enabled: bool,
}

impl EventBus {
    /// Create a new enabled event bus
    pub fn new() -> Self {
        Self {
            enabled: true,
            ..Default::default()
        }
    }

    /// Create a disabled event bus (events are dropped)
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Start the next simulation tick
    pub fn advance_tick(&mut self) {
        self.tick += 1;
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Emit an event stamped with the current tick
    pub fn emit(&mut self, event: GameEvent) {
        if !self.enabled {
            return;
        }
        self.pending.push(BusEvent {
            tick: self.tick,
            event,
        });
    }

    /// Take all pending events
    pub fn drain(&mut self) -> Vec<BusEvent> {
        std::mem::take(&mut self.pending)
    }
}

/// First system of every tick
pub fn advance_event_tick(mut bus: ResMut<EventBus>) {
    bus.advance_tick();
}

/// Drain the bus into the log (once per rendered frame)
pub fn log_game_events(mut bus: ResMut<EventBus>) {
    for BusEvent { tick, event } in bus.drain() {
        match event {
            GameEvent::WallBounce { x, y } => {
                debug!("[{tick}] wall bounce at ({x:.1}, {y:.1})");
            }
            GameEvent::PaddleHit { side, offset, y_vel } => {
                debug!("[{tick}] {side} paddle hit, offset {offset:.1}, y_vel {y_vel:.2}");
            }
            GameEvent::Point {
                scorer,
                score_left,
                score_right,
            } => {
                info!("[{tick}] point to {scorer}! Left: {score_left} Right: {score_right}");
            }
            GameEvent::WinningScoreReached { side, score } => {
                info!("[{tick}] {side} reached the winning score ({score}); play continues");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paddle::Side;

    #[test]
    fn test_emit_and_drain() {
        let mut bus = EventBus::new();
        bus.advance_tick();
        bus.advance_tick();

        bus.emit(GameEvent::WallBounce { x: 10.0, y: 7.0 });

        let events = bus.drain();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].tick, 2);
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_disabled_bus() {
        let mut bus = EventBus::disabled();
        bus.emit(GameEvent::Point {
            scorer: Side::Left,
            score_left: 1,
            score_right: 0,
        });
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_event_kind_and_side() {
        let event = GameEvent::PaddleHit {
            side: Side::Right,
            offset: 0.0,
            y_vel: 0.0,
        };
        assert_eq!(event.kind(), "PaddleHit");
        assert_eq!(event.side(), Some(Side::Right));
        assert_eq!(GameEvent::WallBounce { x: 0.0, y: 0.0 }.side(), None);
    }
}
