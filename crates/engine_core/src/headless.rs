// crates/engine_core/src/headless.rs

//! A host without a window. Same queue, same frame order as the platform
//! runner; the caller decides when frames happen.

use crossbeam_channel::Sender;
use engine_ecs::World;
use engine_shared::{GameLogic, HostEvent, PointerState};
use tracing::info;

use crate::engine_loop::EngineLoop;
use crate::error::HostError;
use crate::host::EventQueue;
use crate::renderer::{DrawListRenderer, Renderer};
use crate::scene;

/// Frame delta used when the caller does not supply one.
pub const FIXED_DT: f32 = 1.0 / 60.0;

pub struct HeadlessHost<G: GameLogic, R: Renderer = DrawListRenderer> {
    world: World,
    game: G,
    renderer: R,
    engine_loop: EngineLoop,
    queue: EventQueue,
}

impl<G: GameLogic> HeadlessHost<G> {
    pub fn new(game: G) -> Result<Self, HostError> {
        Self::with_renderer(game, DrawListRenderer::new())
    }
}

impl<G: GameLogic, R: Renderer> HeadlessHost<G, R> {
    /// Sets up the world and loads `game` into it.
    pub fn with_renderer(mut game: G, renderer: R) -> Result<Self, HostError> {
        let mut world = World::new();
        scene::setup_default_world(&mut world);
        game.on_load(&mut world).map_err(HostError::load)?;

        Ok(Self { world, game, renderer, engine_loop: EngineLoop::new(), queue: EventQueue::new() })
    }

    pub fn push(&self, event: HostEvent) {
        self.queue.push(event);
    }

    pub fn sender(&self) -> Sender<HostEvent> {
        self.queue.sender()
    }

    /// Runs one frame over everything queued so far.
    pub fn frame(&mut self, dt: f32) {
        let events = self.queue.drain();
        self.engine_loop
            .run_frame(&mut self.world, &mut self.game, &mut self.renderer, events, dt);
    }

    pub fn frames(&mut self, count: u32) {
        for _ in 0..count {
            self.frame(FIXED_DT);
        }
    }

    /// Events queued but not yet handled by a frame.
    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    pub fn frame_count(&self) -> u64 {
        self.engine_loop.frame()
    }

    pub fn pointer(&self) -> PointerState {
        self.engine_loop.pointer()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Unloads the game and hands it back.
    pub fn shutdown(mut self) -> G {
        self.game.on_unload(&mut self.world);
        info!(frames = self.engine_loop.frame(), "headless session over");
        self.game
    }
}
