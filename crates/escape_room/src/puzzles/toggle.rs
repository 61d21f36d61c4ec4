// crates/escape_room/src/puzzles/toggle.rs
use super::Progress;
use crate::error::SetupError;

/// Row of on/off toggles compared against a target after every flip.
///
/// The array is world state, not a submission buffer: view switches leave
/// it alone.
#[derive(Debug, Clone)]
pub struct ToggleCombination {
    state: Vec<bool>,
    target: Vec<bool>,
    solved: bool,
}

impl ToggleCombination {
    pub fn new(initial: Vec<bool>, target: Vec<bool>) -> Result<Self, SetupError> {
        if initial.is_empty() {
            return Err(SetupError::puzzle("candles", "no toggles"));
        }
        if initial.len() != target.len() {
            return Err(SetupError::puzzle(
                "candles",
                format!("{} toggles but a target of {}", initial.len(), target.len()),
            ));
        }
        Ok(Self { state: initial, target, solved: false })
    }

    /// Flips one toggle. Once solved the row no longer responds.
    pub fn flip(&mut self, index: usize) -> Progress {
        if self.solved || index >= self.state.len() {
            return Progress::Ignored;
        }

        self.state[index] = !self.state[index];
        if self.state == self.target {
            self.solved = true;
            Progress::Solved
        } else {
            Progress::Accumulating
        }
    }

    pub fn state(&self) -> &[bool] {
        &self.state
    }

    pub fn is_on(&self, index: usize) -> bool {
        self.state.get(index).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: bool = true;
    const F: bool = false;

    #[test]
    fn reward_fires_on_the_flip_that_matches() {
        let mut candles =
            ToggleCombination::new(vec![T, F, F, T, T, F, F], vec![T, F, T, F, T, T, T]).unwrap();

        for index in [2, 3, 5] {
            assert_eq!(candles.flip(index), Progress::Accumulating);
        }
        assert_eq!(candles.state(), &[T, F, T, F, T, T, F]);
        assert!(!candles.is_solved());

        assert_eq!(candles.flip(6), Progress::Solved);
        assert!(candles.is_solved());
        assert_eq!(candles.flip(0), Progress::Ignored);
        assert_eq!(candles.state(), &[T, F, T, F, T, T, T]);
    }

    #[test]
    fn out_of_range_flip_is_ignored() {
        let mut candles = ToggleCombination::new(vec![F], vec![T]).unwrap();
        assert_eq!(candles.flip(1), Progress::Ignored);
        assert!(!candles.is_on(0));
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        assert!(ToggleCombination::new(vec![T, F], vec![T]).is_err());
        assert!(ToggleCombination::new(vec![], vec![]).is_err());
    }
}
