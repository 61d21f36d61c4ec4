// crates/engine_shared/src/lib.rs

pub mod components;
pub mod input_types;

pub use components::{CCamera, CLabel, CSprite, CTransform};
pub use input_types::{GameEvent, HostEvent, PointerState};

use engine_ecs::World;

/// Contract between the host loop and a game. The host owns the `World`
/// and lends it for every call; the game owns everything else.
pub trait GameLogic {
    /// Setup fault reported by `on_load`. The host aborts on it.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Called once before the first frame. Scene construction goes here.
    fn on_load(&mut self, world: &mut World) -> Result<(), Self::Error>;

    /// Called for every discrete event, in arrival order.
    fn on_event(&mut self, world: &mut World, event: &GameEvent);

    /// Called once per frame after the frame has been drawn.
    fn update(&mut self, world: &mut World, pointer: &PointerState, dt: f32);

    fn on_unload(&mut self, _world: &mut World) {}
}
