// crates/engine_core/src/platform_runner.rs

use std::time::{Duration, Instant};

use glam::Vec2;
use tracing::{error, info};
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use engine_ecs::World;
use engine_shared::GameLogic;

use crate::app::App;
use crate::engine_loop::EngineLoop;
use crate::error::HostError;
use crate::host::EventQueue;
use crate::input::InputPoller;
use crate::renderer::{DrawListRenderer, Renderer};
use crate::scene;

const FRAME_BUDGET: Duration = Duration::from_micros(16_667);

/// Owns App and runs the platform (winit) event loop.
/// This isolates OS interaction from the engine core.
pub struct PlatformRunner {
    app: App,
}

impl PlatformRunner {
    pub fn new(app: App) -> Self {
        Self { app }
    }

    pub fn start<G: GameLogic>(self, game: G) -> Result<(), HostError> {
        self.start_with(game, DrawListRenderer::new())
    }

    pub fn start_with<G, R>(self, mut game: G, mut renderer: R) -> Result<(), HostError>
    where
        G: GameLogic,
        R: Renderer,
    {
        let event_loop = EventLoop::new()?;
        let window = WindowBuilder::new()
            .with_title(&self.app.window.title)
            .with_inner_size(LogicalSize::new(self.app.window.width, self.app.window.height))
            .build(&event_loop)?;

        let mut world = World::new();
        scene::setup_default_world(&mut world);
        game.on_load(&mut world).map_err(HostError::load)?;

        let size = window.inner_size();
        let mut input_poller = InputPoller::new(Vec2::new(size.width as f32, size.height as f32));
        let mut engine_loop = EngineLoop::new();
        let queue = EventQueue::new();
        let input_map = self.app.input_map;

        info!(title = %self.app.window.title, "window open");

        event_loop.run(move |event, elwt| {
            match event {
                Event::WindowEvent { event: win_event, .. } => match win_event {
                    WindowEvent::CloseRequested => {
                        game.on_unload(&mut world);
                        elwt.exit();
                    }

                    WindowEvent::RedrawRequested => {
                        let frame_dt = engine_loop.tick_timer();
                        engine_loop.run_frame(&mut world, &mut game, &mut renderer, queue.drain(), frame_dt);
                    }

                    other => {
                        if let Some(host_event) = input_poller.handle_event(&other, &input_map) {
                            queue.push(host_event);
                        }
                    }
                },

                Event::AboutToWait => {
                    window.request_redraw();
                    elwt.set_control_flow(ControlFlow::WaitUntil(Instant::now() + FRAME_BUDGET));
                }

                Event::LoopExiting => info!(frames = engine_loop.frame(), "event loop exiting"),

                _ => {}
            }
        })
        .map_err(|err| {
            error!(%err, "event loop failed");
            HostError::from(err)
        })
    }
}
