// crates/escape_room/src/cues.rs

/// Audio feedback requested by the game logic. Playing them is the host's
/// concern; the game only queues them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Any button or key acknowledged, whether or not it did anything.
    Click,
    Pickup,
    Success,
    Failure,
}

#[derive(Debug, Default)]
pub struct CueQueue {
    pending: Vec<Cue>,
}

impl CueQueue {
    pub fn push(&mut self, cue: Cue) {
        self.pending.push(cue);
    }

    pub fn pending(&self) -> &[Cue] {
        &self.pending
    }

    pub fn take(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.pending)
    }
}
