// crates/escape_room/src/systems/mod.rs

pub mod peephole;
