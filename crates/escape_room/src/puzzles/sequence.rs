// crates/escape_room/src/puzzles/sequence.rs
use super::Progress;
use crate::error::SetupError;

/// Ordered button presses compared once the required count is reached.
#[derive(Debug, Clone)]
pub struct ClickSequence {
    buttons: usize,
    target: Vec<usize>,
    buffer: Vec<usize>,
    solved: bool,
}

impl ClickSequence {
    pub fn new(buttons: usize, target: Vec<usize>) -> Result<Self, SetupError> {
        if target.is_empty() {
            return Err(SetupError::puzzle("saw", "empty target sequence"));
        }
        if let Some(bad) = target.iter().find(|index| **index >= buttons) {
            return Err(SetupError::puzzle(
                "saw",
                format!("button {bad} does not exist (only {buttons} buttons)"),
            ));
        }
        Ok(Self { buttons, target, buffer: Vec::new(), solved: false })
    }

    /// `powered` is the prerequisite; unpowered presses do not accumulate.
    pub fn press(&mut self, button: usize, powered: bool) -> Progress {
        if self.solved || !powered || button >= self.buttons {
            return Progress::Ignored;
        }

        self.buffer.push(button);
        if self.buffer.len() < self.target.len() {
            return Progress::Accumulating;
        }

        let matched = self.buffer == self.target;
        self.buffer.clear();
        if matched {
            self.solved = true;
            Progress::Solved
        } else {
            Progress::Failed
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn entered(&self) -> &[usize] {
        &self.buffer
    }

    pub fn buttons(&self) -> usize {
        self.buttons
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }
}
