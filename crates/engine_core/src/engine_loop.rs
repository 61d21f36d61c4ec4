// crates/engine_core/src/engine_loop.rs

use std::time::Instant;

use engine_ecs::World;
use engine_shared::{GameEvent, GameLogic, HostEvent, PointerState};
use tracing::trace;

use crate::camera;
use crate::renderer::Renderer;

/// Frame bookkeeping: timing and the pointer as of the last move.
pub struct EngineLoop {
    last_frame_time: Instant,
    pointer: PointerState,
    frame: u64,
}

impl Default for EngineLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineLoop {
    pub fn new() -> Self {
        Self {
            last_frame_time: Instant::now(),
            pointer: PointerState::default(),
            frame: 0,
        }
    }

    /// Update the frame timer and return the clamped frame delta.
    /// Clamps to 0.25s to avoid giant spikes when dragging the window,
    /// hitting breakpoints, etc.
    pub fn tick_timer(&mut self) -> f32 {
        let now = Instant::now();
        let frame_dt = now
            .duration_since(self.last_frame_time)
            .as_secs_f32();
        self.last_frame_time = now;

        frame_dt.min(0.25)
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Turns a raw host event into what the game sees. Pointer moves only
    /// update the pointer; presses become clicks at its world position.
    pub fn translate(&mut self, world: &World, event: HostEvent) -> Option<GameEvent> {
        match event {
            HostEvent::PointerMoved { clip } => {
                self.pointer = PointerState { clip, world: camera::clip_to_world(world, clip) };
                None
            }
            HostEvent::PointerPressed => Some(GameEvent::Click { world: self.pointer.world }),
            HostEvent::WorldClick(point) => Some(GameEvent::Click { world: point }),
            HostEvent::Back => Some(GameEvent::Back),
            HostEvent::HotbarSlot(slot) => Some(GameEvent::HotbarSlot(slot)),
        }
    }

    /// One frame: queued events in order, then the draw, then the game's
    /// per-frame update with the live pointer.
    pub fn run_frame<G, R, I>(&mut self, world: &mut World, game: &mut G, renderer: &mut R, events: I, dt: f32)
    where
        G: GameLogic,
        R: Renderer + ?Sized,
        I: IntoIterator<Item = HostEvent>,
    {
        self.frame += 1;

        for event in events {
            if let Some(event) = self.translate(world, event) {
                trace!(frame = self.frame, ?event, "dispatch");
                game.on_event(world, &event);
            }
        }

        renderer.draw(world);
        game.update(world, &self.pointer, dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawListRenderer;
    use crate::scene::setup_default_world;
    use glam::Vec2;

    #[derive(Default)]
    struct Recorder {
        events: Vec<GameEvent>,
        updates: Vec<PointerState>,
    }

    impl GameLogic for Recorder {
        type Error = std::io::Error;

        fn on_load(&mut self, _world: &mut World) -> Result<(), Self::Error> {
            Ok(())
        }

        fn on_event(&mut self, _world: &mut World, event: &GameEvent) {
            self.events.push(*event);
        }

        fn update(&mut self, _world: &mut World, pointer: &PointerState, _dt: f32) {
            self.updates.push(*pointer);
        }
    }

    #[test]
    fn presses_click_where_the_pointer_last_was() {
        let mut world = World::new();
        setup_default_world(&mut world);
        let mut engine = EngineLoop::new();
        let mut game = Recorder::default();
        let mut renderer = DrawListRenderer::new();

        let events = [
            HostEvent::PointerPressed,
            HostEvent::PointerMoved { clip: Vec2::new(0.5, 0.5) },
            HostEvent::PointerPressed,
            HostEvent::WorldClick(Vec2::new(-1.0, 2.0)),
            HostEvent::Back,
            HostEvent::HotbarSlot(3),
        ];
        engine.run_frame(&mut world, &mut game, &mut renderer, events, 0.016);

        assert_eq!(
            game.events,
            vec![
                GameEvent::Click { world: Vec2::ZERO },
                GameEvent::Click { world: Vec2::new(8.0, 4.5) },
                GameEvent::Click { world: Vec2::new(-1.0, 2.0) },
                GameEvent::Back,
                GameEvent::HotbarSlot(3),
            ]
        );
        assert_eq!(game.updates, vec![PointerState { clip: Vec2::new(0.5, 0.5), world: Vec2::new(8.0, 4.5) }]);
        assert_eq!(renderer.frames(), 1);
        assert_eq!(engine.frame(), 1);
    }

    #[test]
    fn frame_delta_is_clamped() {
        let mut engine = EngineLoop::new();
        let dt = engine.tick_timer();
        assert!((0.0..=0.25).contains(&dt));
    }
}
