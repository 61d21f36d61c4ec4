// crates/engine_core/src/input/mod.rs
pub mod config;
pub mod map;
pub mod poller;

pub use config::InputDefaults;
pub use map::InputMap;
pub use poller::{clip_from_cursor, InputPoller};
