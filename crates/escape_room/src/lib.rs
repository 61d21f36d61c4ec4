// crates/escape_room/src/lib.rs

//! Controller layer of a single-screen point-and-click escape room: view
//! switching, click dispatch, the inventory and the puzzle state machines.
//! The `World` is owned by the host and lent to `Game` on every call.

pub mod config;
pub mod cues;
pub mod error;
pub mod game;
pub mod hotbar;
pub mod interaction;
pub mod inventory;
pub mod puzzles;
pub mod scene;
pub mod view;

mod rules;
mod systems;

pub use config::{GameConfig, PuzzleConfig};
pub use cues::Cue;
pub use error::{ConfigError, SetupError};
pub use game::{register_components, Game};
pub use hotbar::{Hotbar, HotbarSlot};
pub use interaction::{CInteractive, Reaction};
pub use inventory::{Inventory, InventoryState, Item, UnknownItem};
pub use puzzles::{KeypadId, KeypadKey, Progress, SubmitMode};
pub use scene::{KeypadHandles, SceneHandles};
pub use view::{CView, View, ViewRegistry};
