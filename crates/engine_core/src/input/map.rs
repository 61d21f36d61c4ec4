// crates/engine_core/src/input/map.rs
use std::collections::HashMap;

use engine_shared::HostEvent;
use winit::keyboard::KeyCode;

/// Key bindings: a physical key press produces one host event.
#[derive(Debug, Default, Clone)]
pub struct InputMap {
    key_bindings: HashMap<KeyCode, HostEvent>,
}

impl InputMap {
    pub fn bind(&mut self, key: KeyCode, event: HostEvent) {
        self.key_bindings.insert(key, event);
    }

    pub fn unbind(&mut self, key: KeyCode) {
        self.key_bindings.remove(&key);
    }

    pub fn map_key(&self, key: KeyCode) -> Option<HostEvent> {
        self.key_bindings.get(&key).copied()
    }
}
