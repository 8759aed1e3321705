//! Input module - key bindings, PaddleInput resource, and capture_input system

use bevy::prelude::*;

use crate::paddle::Side;

/// Up/down intent for one paddle this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub up: bool,
    pub down: bool,
}

/// Held movement keys for both paddles, overwritten every tick
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PaddleInput {
    pub left: PaddleIntent,
    pub right: PaddleIntent,
}

impl PaddleInput {
    pub fn intent(&self, side: Side) -> PaddleIntent {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Keyboard keys driving each paddle
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub left_up: KeyCode,
    pub left_down: KeyCode,
    pub right_up: KeyCode,
    pub right_down: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left_up: KeyCode::KeyW,
            left_down: KeyCode::KeyS,
            right_up: KeyCode::ArrowUp,
            right_down: KeyCode::ArrowDown,
        }
    }
}

impl KeyBindings {
    /// (up, down) keys for a side
    pub fn keys(&self, side: Side) -> (KeyCode, KeyCode) {
        match side {
            Side::Left => (self.left_up, self.left_down),
            Side::Right => (self.right_up, self.right_down),
        }
    }

    /// Read the held state of all four keys
    pub fn read(&self, keyboard: &ButtonInput<KeyCode>) -> PaddleInput {
        PaddleInput {
            left: PaddleIntent {
                up: keyboard.pressed(self.left_up),
                down: keyboard.pressed(self.left_down),
            },
            right: PaddleIntent {
                up: keyboard.pressed(self.right_up),
                down: keyboard.pressed(self.right_down),
            },
        }
    }
}

/// Runs first in the tick: snapshot held keys into PaddleInput
pub fn capture_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut input: ResMut<PaddleInput>,
) {
    *input = bindings.read(&keyboard);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_held_keys() {
        let bindings = KeyBindings::default();
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::KeyW);
        keyboard.press(KeyCode::ArrowDown);

        let input = bindings.read(&keyboard);
        assert_eq!(input.left, PaddleIntent { up: true, down: false });
        assert_eq!(input.right, PaddleIntent { up: false, down: true });
    }

    #[test]
    fn test_both_keys_held() {
        let bindings = KeyBindings::default();
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::KeyW);
        keyboard.press(KeyCode::KeyS);

        let input = bindings.read(&keyboard);
        assert_eq!(input.intent(Side::Left), PaddleIntent { up: true, down: true });
        assert_eq!(input.intent(Side::Right), PaddleIntent::default());
    }

    #[test]
    fn test_released_key_clears_intent() {
        let bindings = KeyBindings::default();
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::ArrowUp);
        keyboard.release(KeyCode::ArrowUp);

        assert_eq!(bindings.read(&keyboard), PaddleInput::default());
    }
}
