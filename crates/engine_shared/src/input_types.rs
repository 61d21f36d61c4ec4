// crates/engine_shared/src/input_types.rs
//! Input types exchanged between the host and the game.

use glam::Vec2;

/// Continuous pointer state sampled once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    /// Clip space, [-1, 1] on both axes, y up.
    pub clip: Vec2,
    /// Same point after the camera transform.
    pub world: Vec2,
}

/// Discrete events the game reacts to. Clicks arrive already converted to
/// world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Click { world: Vec2 },
    /// The "exit current view" affordance of the shell.
    Back,
    /// Click on the n-th (0-based) occupied hotbar slot.
    HotbarSlot(usize),
}

/// Raw events as the platform produces them, before the camera transform.
/// These are funnelled through one queue so clicks and frames never overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    PointerMoved { clip: Vec2 },
    PointerPressed,
    /// A click already in world space, bypassing the pointer. Used by
    /// scripted and headless drivers.
    WorldClick(Vec2),
    Back,
    HotbarSlot(usize),
}
