// crates/escape_room/src/config.rs

//! Room configuration. Every field has a default, so an empty file (or no
//! file) yields the stock room.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::puzzles::SubmitMode;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub camera: CameraConfig,
    pub puzzles: PuzzleConfig,
}

impl GameConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// World units visible across the window at zoom 1.
    pub viewport: Vec2,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self { viewport: Vec2::new(32.0, 18.0) }
    }
}

/// Each `[puzzles.*]` section overrides only the keys it names; the rest
/// keep that puzzle's stock values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PuzzleOverrides")]
pub struct PuzzleConfig {
    pub terminal: KeypadConfig,
    pub safe: KeypadConfig,
    pub candles: ToggleConfig,
    pub saw: SequenceConfig,
    pub screws: RemovalConfig,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            terminal: KeypadConfig { code: "2429".into(), submit: SubmitMode::OnLength },
            safe: KeypadConfig { code: "150893".into(), submit: SubmitMode::Explicit },
            candles: ToggleConfig {
                initial: vec![true, false, false, true, true, false, false],
                target: vec![true, false, true, false, true, true, true],
            },
            saw: SequenceConfig { buttons: 4, target: vec![2, 0, 3, 1] },
            screws: RemovalConfig { count: 4 },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeypadConfig {
    pub code: String,
    pub submit: SubmitMode,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToggleConfig {
    pub initial: Vec<bool>,
    pub target: Vec<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceConfig {
    pub buttons: usize,
    pub target: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemovalConfig {
    pub count: usize,
}

/// On-disk shape of `[puzzles]`: every key optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PuzzleOverrides {
    terminal: KeypadOverrides,
    safe: KeypadOverrides,
    candles: ToggleOverrides,
    saw: SequenceOverrides,
    screws: RemovalOverrides,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct KeypadOverrides {
    code: Option<String>,
    submit: Option<SubmitMode>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ToggleOverrides {
    initial: Option<Vec<bool>>,
    target: Option<Vec<bool>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SequenceOverrides {
    buttons: Option<usize>,
    target: Option<Vec<usize>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RemovalOverrides {
    count: Option<usize>,
}

impl From<PuzzleOverrides> for PuzzleConfig {
    fn from(overrides: PuzzleOverrides) -> Self {
        let mut config = PuzzleConfig::default();
        overrides.terminal.apply(&mut config.terminal);
        overrides.safe.apply(&mut config.safe);

        let candles = overrides.candles;
        if let Some(initial) = candles.initial {
            config.candles.initial = initial;
        }
        if let Some(target) = candles.target {
            config.candles.target = target;
        }

        let saw = overrides.saw;
        if let Some(buttons) = saw.buttons {
            config.saw.buttons = buttons;
        }
        if let Some(target) = saw.target {
            config.saw.target = target;
        }

        if let Some(count) = overrides.screws.count {
            config.screws.count = count;
        }
        config
    }
}

impl KeypadOverrides {
    fn apply(self, keypad: &mut KeypadConfig) {
        if let Some(code) = self.code {
            keypad.code = code;
        }
        if let Some(submit) = self.submit {
            keypad.submit = submit;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_is_the_stock_room() {
        assert_eq!(GameConfig::from_toml_str("").unwrap(), GameConfig::default());
    }

    #[test]
    fn sections_override_independently() {
        let config = GameConfig::from_toml_str(
            r#"
            [window]
            title = "ignored here"

            [camera]
            viewport = [16.0, 9.0]

            [puzzles.safe]
            code = "0000"

            [puzzles.screws]
            count = 2
            "#,
        )
        .unwrap();

        assert_eq!(config.camera.viewport, Vec2::new(16.0, 9.0));
        assert_eq!(config.puzzles.safe.code, "0000");
        assert_eq!(config.puzzles.safe.submit, SubmitMode::Explicit);
        assert_eq!(config.puzzles.screws.count, 2);
        assert_eq!(config.puzzles.terminal.code, "2429");
    }

    #[test]
    fn missing_keys_keep_the_stock_puzzle() {
        let stock = PuzzleConfig::default();

        let safe = GameConfig::from_toml_str("[puzzles.safe]\nsubmit = \"on_length\"\n").unwrap();
        assert_eq!(safe.puzzles.safe.code, stock.safe.code);
        assert_eq!(safe.puzzles.safe.submit, SubmitMode::OnLength);

        let candles =
            GameConfig::from_toml_str("[puzzles.candles]\ntarget = [true, true]\n").unwrap();
        assert_eq!(candles.puzzles.candles.initial, stock.candles.initial);
        assert_eq!(candles.puzzles.candles.target, vec![true, true]);

        let saw = GameConfig::from_toml_str("[puzzles.saw]\ntarget = [1, 0]\n").unwrap();
        assert_eq!(saw.puzzles.saw.buttons, stock.saw.buttons);
        assert_eq!(saw.puzzles.screws, stock.screws);

        let empty = GameConfig::from_toml_str("[puzzles.screws]\n").unwrap();
        assert_eq!(empty.puzzles, stock);
    }

    #[test]
    fn submit_mode_uses_snake_case() {
        let config = GameConfig::from_toml_str(
            "[puzzles.terminal]\ncode = \"12\"\nsubmit = \"explicit\"\n",
        )
        .unwrap();
        assert_eq!(config.puzzles.terminal.submit, SubmitMode::Explicit);
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = GameConfig::from_toml_str("[puzzles.saw]\nbuttons = \"four\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[puzzles.terminal]\ncode = \"7777\"").unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.puzzles.terminal.code, "7777");

        let missing = GameConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io { .. }));
    }
}
