// crates/engine_core/src/scene.rs
use engine_ecs::World;
use engine_shared::{CCamera, CLabel, CSprite, CTransform};

/// Registers the components the host itself reads: transforms and sprites
/// for drawing, cameras for the pointer transform, labels for logs.
pub fn setup_default_world(world: &mut World) {
    world.register_component::<CTransform>();
    world.register_component::<CSprite>();
    world.register_component::<CCamera>();
    world.register_component::<CLabel>();
}
