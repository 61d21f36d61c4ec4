// crates/engine_core/src/app.rs

use serde::{Deserialize, Serialize};

use engine_shared::GameLogic;

use crate::error::HostError;
use crate::input::{InputDefaults, InputMap};
use crate::platform_runner::PlatformRunner;

/// The `[window]` section of the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { title: "Escape Room".to_string(), width: 1280, height: 720 }
    }
}

/// Host settings: the window and the key bindings.
pub struct App {
    pub window: WindowConfig,
    pub input_map: InputMap,
}

impl App {
    pub fn new(window: WindowConfig) -> Self {
        Self { window, input_map: InputDefaults::input_map() }
    }

    /// Opens the window and runs `game` until it is closed.
    pub fn run<G: GameLogic>(self, game: G) -> Result<(), HostError> {
        PlatformRunner::new(self).start(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_shared::HostEvent;
    use winit::keyboard::KeyCode;

    #[test]
    fn new_app_carries_default_bindings() {
        let app = App::new(WindowConfig::default());
        assert_eq!(app.window.width, 1280);
        assert_eq!(app.input_map.map_key(KeyCode::Escape), Some(HostEvent::Back));
    }
}
