// crates/engine_core/src/input/config.rs

use engine_shared::HostEvent;
use winit::keyboard::KeyCode;

use crate::input::InputMap;

/// Centralized defaults for input configuration.
pub struct InputDefaults;

impl InputDefaults {
    /// Hotbar slots on the digit row, so slot 0 is `1`.
    pub const HOTBAR_KEYS: [KeyCode; 7] = [
        KeyCode::Digit1,
        KeyCode::Digit2,
        KeyCode::Digit3,
        KeyCode::Digit4,
        KeyCode::Digit5,
        KeyCode::Digit6,
        KeyCode::Digit7,
    ];

    /// Escape and Backspace leave the current view; the digit row picks
    /// hotbar slots.
    pub fn setup(input_map: &mut InputMap) {
        input_map.bind(KeyCode::Escape, HostEvent::Back);
        input_map.bind(KeyCode::Backspace, HostEvent::Back);

        for (slot, key) in Self::HOTBAR_KEYS.into_iter().enumerate() {
            input_map.bind(key, HostEvent::HotbarSlot(slot));
        }
    }

    pub fn input_map() -> InputMap {
        let mut input_map = InputMap::default();
        Self::setup(&mut input_map);
        input_map
    }
}
