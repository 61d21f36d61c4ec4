// crates/escape_room/src/puzzles/removal.rs
use super::Progress;
use crate::error::SetupError;

/// N parts, each removable once, counted down to zero.
#[derive(Debug, Clone)]
pub struct Removal {
    removed: Vec<bool>,
    remaining: usize,
}

impl Removal {
    pub fn new(count: usize) -> Result<Self, SetupError> {
        if count == 0 {
            return Err(SetupError::puzzle("screws", "nothing to remove"));
        }
        Ok(Self { removed: vec![false; count], remaining: count })
    }

    /// `tool_ready` gates every removal. Returns `Solved` exactly once, on
    /// the removal that brings the counter to zero. Never returns `Failed`:
    /// a part is either removable or ignored.
    pub fn remove(&mut self, part: usize, tool_ready: bool) -> Progress {
        if !tool_ready || self.removed.get(part) != Some(&false) {
            return Progress::Ignored;
        }

        self.removed[part] = true;
        self.remaining -= 1;
        if self.remaining == 0 {
            Progress::Solved
        } else {
            Progress::Accumulating
        }
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn is_removed(&self, part: usize) -> bool {
        self.removed.get(part).copied().unwrap_or(false)
    }

    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    pub fn len(&self) -> usize {
        self.removed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.removed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_and_solves_on_the_last_part() {
        let mut screws = Removal::new(4).unwrap();
        let mut counts = Vec::new();
        for part in 0..4 {
            let progress = screws.remove(part, true);
            counts.push(screws.remaining());
            assert_eq!(progress == Progress::Solved, part == 3);
        }
        assert_eq!(counts, vec![3, 2, 1, 0]);
        assert!(screws.is_complete());
    }

    #[test]
    fn parts_come_out_once_and_only_with_the_tool() {
        let mut screws = Removal::new(2).unwrap();
        assert_eq!(screws.remove(0, false), Progress::Ignored);
        assert_eq!(screws.remove(0, true), Progress::Accumulating);
        assert_eq!(screws.remove(0, true), Progress::Ignored);
        assert_eq!(screws.remove(7, true), Progress::Ignored);
        assert_eq!(screws.remaining(), 1);
    }

    #[test]
    fn no_removal_attempt_fails() {
        let mut screws = Removal::new(3).unwrap();
        let attempts = [(0, false), (0, true), (0, true), (9, true), (2, true), (1, false), (1, true), (1, true)];
        for (part, tool_ready) in attempts {
            assert_ne!(screws.remove(part, tool_ready), Progress::Failed);
        }
        assert!(screws.is_complete());
    }
}
