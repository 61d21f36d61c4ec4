// crates/escape_room/src/puzzles/mod.rs

//! The four puzzle state machines and the room's instance of each.
//!
//! All of them share one shape: inputs accumulate until a fixed length (or,
//! for toggles, after every input), then the accumulated value is compared
//! against a fixed target. The machines know nothing about items or views;
//! preconditions come in as plain booleans from `rules`.

pub mod keypad;
pub mod removal;
pub mod sequence;
pub mod toggle;

pub use keypad::{Keypad, KeypadKey, SubmitMode};
pub use removal::Removal;
pub use sequence::ClickSequence;
pub use toggle::ToggleCombination;

use crate::config::PuzzleConfig;
use crate::error::SetupError;

/// Result of feeding one input to a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Input rejected; nothing changed.
    Ignored,
    /// Input recorded; no comparison yet (or no match yet, for toggles).
    Accumulating,
    Solved,
    /// Compared and wrong; the accumulator was cleared.
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadId {
    Terminal,
    Safe,
}

#[derive(Debug, Clone)]
pub struct Puzzles {
    pub terminal: Keypad,
    pub safe: Keypad,
    pub candles: ToggleCombination,
    pub saw: ClickSequence,
    pub screws: Removal,
    /// The saw panel's broken wire has been taped. Gates `saw`.
    pub wire_repaired: bool,
}

impl Puzzles {
    pub fn from_config(config: &PuzzleConfig) -> Result<Self, SetupError> {
        Ok(Self {
            terminal: Keypad::new("terminal", &config.terminal.code, config.terminal.submit)?,
            safe: Keypad::new("safe", &config.safe.code, config.safe.submit)?,
            candles: ToggleCombination::new(
                config.candles.initial.clone(),
                config.candles.target.clone(),
            )?,
            saw: ClickSequence::new(config.saw.buttons, config.saw.target.clone())?,
            screws: Removal::new(config.screws.count)?,
            wire_repaired: false,
        })
    }

    pub fn keypad(&self, id: KeypadId) -> &Keypad {
        match id {
            KeypadId::Terminal => &self.terminal,
            KeypadId::Safe => &self.safe,
        }
    }

    pub fn keypad_mut(&mut self, id: KeypadId) -> &mut Keypad {
        match id {
            KeypadId::Terminal => &mut self.terminal,
            KeypadId::Safe => &mut self.safe,
        }
    }

    /// Clears every submission buffer. Toggle state, the screw counter and
    /// the wire repair are world state and survive.
    pub fn reset_transient(&mut self) {
        self.terminal.clear();
        self.safe.clear();
        self.saw.clear();
    }
}
