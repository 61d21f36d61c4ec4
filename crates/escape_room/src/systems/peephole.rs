// crates/escape_room/src/systems/peephole.rs

//! Keyhole parallax. The keyhole mask drifts against the pointer and the
//! room behind it drifts with it, faster, so the player can look around.

use engine_ecs::{Entity, World};
use engine_shared::CTransform;
use glam::Vec2;

use crate::view;

/// Repositions the keyhole mask and the backdrop from the pointer's clip
/// position. Does nothing while the keyhole is not on screen.
pub fn update_peephole(world: &mut World, keyhole: Entity, backdrop: Entity, clip: Vec2) {
    if !view::is_visible(world, keyhole) {
        return;
    }

    if let Some(transform) = world.get_component_mut::<CTransform>(keyhole) {
        transform.pos = Vec2::new(-clip.x / 2.0, clip.y / 2.0);
    }
    if let Some(transform) = world.get_component_mut::<CTransform>(backdrop) {
        transform.pos = Vec2::new(clip.x * 8.0, -clip.y * 4.0);
    }
}
