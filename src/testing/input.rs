//! Scripted key presses for tests

use bevy::prelude::*;
use std::collections::HashMap;

use super::parser::{FrameInput, InputSnapshot};
use crate::input::{KeyBindings, PaddleInput};
use crate::paddle::Side;

/// Scripted key state for a test run
#[derive(Resource, Default)]
pub struct ScriptedInputs {
    /// Map of frame -> key changes
    pub frames: HashMap<u64, InputSnapshot>,
    /// Keys currently held (persists between frames)
    pub held: PaddleInput,
    /// Last frame handed out by `advance_frame`
    pub current_frame: u64,
    /// Maximum frame to run
    pub max_frame: u64,
}

impl ScriptedInputs {
    /// Create from parsed frame inputs
    pub fn from_inputs(inputs: &[FrameInput]) -> Self {
        let mut frames = HashMap::new();
        let mut max_frame = 0u64;

        for fi in inputs {
            max_frame = max_frame.max(fi.frame);
            frames.insert(fi.frame, fi.keys.clone());
        }

        Self {
            frames,
            held: PaddleInput::default(),
            current_frame: 0,
            max_frame,
        }
    }

    /// Set max frame (for state assertions)
    pub fn set_max_frame(&mut self, frame: u64) {
        self.max_frame = self.max_frame.max(frame);
    }

    /// Advance to the next frame and return the keys held during it
    pub fn advance_frame(&mut self) -> PaddleInput {
        self.current_frame += 1;

        if let Some(snapshot) = self.frames.get(&self.current_frame) {
            let held = &mut self.held;
            if let Some(pressed) = snapshot.left_up {
                held.left.up = pressed;
            }
            if let Some(pressed) = snapshot.left_down {
                held.left.down = pressed;
            }
            if let Some(pressed) = snapshot.right_up {
                held.right.up = pressed;
            }
            if let Some(pressed) = snapshot.right_down {
                held.right.down = pressed;
            }
        }

        self.held
    }

    /// Check if simulation should continue
    pub fn should_continue(&self) -> bool {
        self.current_frame < self.max_frame
    }
}

/// Press or release the bound keys so the keyboard matches `held`
pub fn apply_held_keys(keyboard: &mut ButtonInput<KeyCode>, bindings: &KeyBindings, held: PaddleInput) {
    for side in Side::BOTH {
        let (up_key, down_key) = bindings.keys(side);
        let intent = held.intent(side);
        for (key, pressed) in [(up_key, intent.up), (down_key, intent.down)] {
            if pressed {
                keyboard.press(key);
            } else {
                keyboard.release(key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PaddleIntent;

    fn frame(frame: u64, keys: InputSnapshot) -> FrameInput {
        FrameInput { frame, keys }
    }

    #[test]
    fn test_keys_persist_until_changed() {
        let mut scripted = ScriptedInputs::from_inputs(&[
            frame(
                2,
                InputSnapshot {
                    left_up: Some(true),
                    ..default()
                },
            ),
            frame(
                4,
                InputSnapshot {
                    left_up: Some(false),
                    right_down: Some(true),
                    ..default()
                },
            ),
        ]);
        assert_eq!(scripted.max_frame, 4);

        assert_eq!(scripted.advance_frame(), PaddleInput::default());
        assert!(scripted.advance_frame().left.up);
        assert!(scripted.advance_frame().left.up);

        let held = scripted.advance_frame();
        assert!(!held.left.up);
        assert_eq!(held.right, PaddleIntent { up: false, down: true });
        assert!(!scripted.should_continue());
    }

    #[test]
    fn test_apply_held_keys() {
        let bindings = KeyBindings::default();
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::ArrowUp);

        let held = PaddleInput {
            left: PaddleIntent { up: true, down: true },
            right: PaddleIntent::default(),
        };
        apply_held_keys(&mut keyboard, &bindings, held);

        assert!(keyboard.pressed(KeyCode::KeyW));
        assert!(keyboard.pressed(KeyCode::KeyS));
        assert!(!keyboard.pressed(KeyCode::ArrowUp));
        assert_eq!(bindings.read(&keyboard), held);
    }
}
