// crates/launcher/src/settings.rs

use std::path::Path;

use anyhow::{Context, Result};
use engine_core::WindowConfig;
use escape_room::GameConfig;
use serde::Deserialize;

/// Everything one config file can hold: the host's `[window]` plus the
/// room's `[camera]` and `[puzzles.*]`.
#[derive(Debug, Default, PartialEq)]
pub struct Settings {
    pub window: WindowConfig,
    pub game: GameConfig,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct WindowSection {
    window: WindowConfig,
}

impl Settings {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let window = toml::from_str::<WindowSection>(text)
            .context("parsing [window]")?
            .window;
        let game = GameConfig::from_toml_str(text)?;
        Ok(Self { window, game })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in config {}", path.display()))
    }
}
