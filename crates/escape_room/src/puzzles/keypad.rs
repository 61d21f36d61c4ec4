// crates/escape_room/src/puzzles/keypad.rs
use serde::{Deserialize, Serialize};

use super::Progress;
use crate::error::SetupError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitMode {
    /// Compared as soon as the last digit lands.
    #[default]
    OnLength,
    /// Compared only when the enter key is pressed.
    Explicit,
}

/// One physical key on a keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadKey {
    Digit(u8),
    Enter,
}

/// Numeric code entry. The buffer is a submission accumulator and is
/// cleared on every evaluation and every view switch.
#[derive(Debug, Clone)]
pub struct Keypad {
    code: Vec<u8>,
    buffer: Vec<u8>,
    submit: SubmitMode,
    solved: bool,
}

impl Keypad {
    pub fn new(puzzle: &'static str, code: &str, submit: SubmitMode) -> Result<Self, SetupError> {
        if code.is_empty() {
            return Err(SetupError::puzzle(puzzle, "code is empty"));
        }
        let code = code
            .chars()
            .map(|c| c.to_digit(10).map(|d| d as u8))
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(|| SetupError::puzzle(puzzle, format!("code `{code}` is not all digits")))?;

        Ok(Self { code, buffer: Vec::new(), submit, solved: false })
    }

    /// Appends a digit. `armed` is the reward precondition, checked only
    /// if this press triggers an evaluation: a correct code while unarmed
    /// still burns the attempt.
    pub fn press(&mut self, digit: u8, armed: bool) -> Progress {
        if self.solved || digit > 9 || self.buffer.len() >= self.code.len() {
            return Progress::Ignored;
        }

        self.buffer.push(digit);
        if self.submit == SubmitMode::OnLength && self.buffer.len() == self.code.len() {
            self.evaluate(armed)
        } else {
            Progress::Accumulating
        }
    }

    /// The enter key. Short buffers are left alone and never compared.
    pub fn enter(&mut self, armed: bool) -> Progress {
        if self.solved
            || self.submit != SubmitMode::Explicit
            || self.buffer.len() < self.code.len()
        {
            return Progress::Ignored;
        }
        self.evaluate(armed)
    }

    fn evaluate(&mut self, armed: bool) -> Progress {
        let matched = self.buffer == self.code;
        self.buffer.clear();

        if matched && armed {
            self.solved = true;
            Progress::Solved
        } else {
            Progress::Failed
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Digits entered so far, as text.
    pub fn entered(&self) -> String {
        self.buffer.iter().map(|d| char::from(b'0' + d)).collect()
    }

    pub fn code_len(&self) -> usize {
        self.code.len()
    }

    pub fn submit_mode(&self) -> SubmitMode {
        self.submit
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_code(pad: &mut Keypad, code: &str, armed: bool) -> Vec<Progress> {
        code.bytes().map(|b| pad.press(b - b'0', armed)).collect()
    }

    #[test]
    fn on_length_compares_when_the_last_digit_lands() {
        let mut pad = Keypad::new("terminal", "2429", SubmitMode::OnLength).unwrap();
        let steps = type_code(&mut pad, "2429", true);
        assert_eq!(
            steps,
            vec![Progress::Accumulating, Progress::Accumulating, Progress::Accumulating, Progress::Solved]
        );
        assert_eq!(pad.entered(), "");
        assert!(pad.is_solved());
    }

    #[test]
    fn wrong_code_fails_and_clears() {
        let mut pad = Keypad::new("terminal", "2429", SubmitMode::OnLength).unwrap();
        assert_eq!(type_code(&mut pad, "2428", true).last(), Some(&Progress::Failed));
        assert_eq!(pad.entered(), "");
        assert!(!pad.is_solved());
    }

    #[test]
    fn right_code_while_unarmed_burns_the_attempt() {
        let mut pad = Keypad::new("terminal", "2429", SubmitMode::OnLength).unwrap();
        assert_eq!(type_code(&mut pad, "2429", false).last(), Some(&Progress::Failed));
        assert_eq!(pad.entered(), "");
        assert_eq!(type_code(&mut pad, "2429", true).last(), Some(&Progress::Solved));
    }

    #[test]
    fn explicit_mode_waits_for_enter_and_caps_the_buffer() {
        let mut pad = Keypad::new("safe", "1508", SubmitMode::Explicit).unwrap();
        assert_eq!(pad.enter(true), Progress::Ignored);

        type_code(&mut pad, "150", true);
        assert_eq!(pad.enter(true), Progress::Ignored);
        assert_eq!(pad.entered(), "150");

        assert_eq!(pad.press(8, true), Progress::Accumulating);
        assert_eq!(pad.press(9, true), Progress::Ignored);
        assert_eq!(pad.entered(), "1508");
        assert_eq!(pad.enter(true), Progress::Solved);
        assert_eq!(pad.entered(), "");
    }

    #[test]
    fn solved_keypad_ignores_further_input() {
        let mut pad = Keypad::new("terminal", "1", SubmitMode::OnLength).unwrap();
        assert_eq!(pad.press(1, true), Progress::Solved);
        assert_eq!(pad.press(1, true), Progress::Ignored);
        assert_eq!(pad.entered(), "");
    }

    #[test]
    fn bad_codes_are_setup_errors() {
        assert!(Keypad::new("safe", "", SubmitMode::Explicit).is_err());
        assert!(Keypad::new("safe", "12a4", SubmitMode::Explicit).is_err());
    }
}
