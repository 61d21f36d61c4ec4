// crates/escape_room/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

use crate::view::View;

/// Configuration faults caught while building the room. Any of these aborts
/// setup; there is no runtime recovery path for them.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("interactive object `{label}` has no reactions")]
    NoReactions { label: &'static str },

    #[error("view {0} has no members")]
    EmptyView(View),

    #[error("invalid {puzzle} puzzle: {reason}")]
    InvalidPuzzle { puzzle: &'static str, reason: String },

    #[error("scene was already built")]
    AlreadyLoaded,
}

impl SetupError {
    pub(crate) fn puzzle(puzzle: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidPuzzle { puzzle, reason: reason.into() }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing config: {0}")]
    Parse(#[from] toml::de::Error),
}
