// crates/engine_core/src/camera.rs
use engine_ecs::World;
use engine_shared::{CCamera, CTransform};
use glam::Vec2;

/// The first camera in the world and where it sits. Worlds without one get
/// a default camera at the origin.
pub fn active_camera(world: &World) -> (Vec2, CCamera) {
    world
        .query_pair::<CCamera, CTransform>()
        .into_iter()
        .next()
        .map(|(_, camera, transform)| (transform.pos, *camera))
        .unwrap_or((Vec2::ZERO, CCamera::default()))
}

/// Clip space ([-1, 1], y up) to world space through the active camera.
pub fn clip_to_world(world: &World, clip: Vec2) -> Vec2 {
    let (eye, camera) = active_camera(world);
    camera.clip_to_world(eye, clip)
}
