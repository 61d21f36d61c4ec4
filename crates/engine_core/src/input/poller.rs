// crates/engine_core/src/input/poller.rs

use glam::Vec2;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::keyboard::PhysicalKey;

use crate::input::InputMap;
use engine_shared::HostEvent;

/// Window pixels to clip space: [-1, 1] on both axes, y up.
pub fn clip_from_cursor(cursor: Vec2, window_size: Vec2) -> Vec2 {
    if window_size.x <= 0.0 || window_size.y <= 0.0 {
        return Vec2::ZERO;
    }
    let unit = cursor / window_size;
    Vec2::new(unit.x * 2.0 - 1.0, 1.0 - unit.y * 2.0)
}

/// Low-level input collector. Turns winit window events into host events
/// and keeps raw device state out of the platform runner.
pub struct InputPoller {
    window_size: Vec2,
}

impl InputPoller {
    pub fn new(window_size: Vec2) -> Self {
        Self { window_size }
    }

    pub fn handle_event(&mut self, event: &WindowEvent, input_map: &InputMap) -> Option<HostEvent> {
        match event {
            WindowEvent::Resized(size) => {
                self.window_size = Vec2::new(size.width as f32, size.height as f32);
                None
            }
            WindowEvent::CursorMoved { position, .. } => {
                let cursor = Vec2::new(position.x as f32, position.y as f32);
                Some(HostEvent::PointerMoved { clip: clip_from_cursor(cursor, self.window_size) })
            }
            WindowEvent::MouseInput { state: ElementState::Pressed, button: MouseButton::Left, .. } => {
                Some(HostEvent::PointerPressed)
            }
            WindowEvent::KeyboardInput { event: key_event, .. } => {
                self.handle_keyboard_input(key_event, input_map)
            }
            _ => None,
        }
    }

    fn handle_keyboard_input(&self, key_event: &KeyEvent, input_map: &InputMap) -> Option<HostEvent> {
        if key_event.state != ElementState::Pressed || key_event.repeat {
            return None;
        }
        match key_event.physical_key {
            PhysicalKey::Code(keycode) => input_map.map_key(keycode),
            PhysicalKey::Unidentified(_) => None,
        }
    }
}
