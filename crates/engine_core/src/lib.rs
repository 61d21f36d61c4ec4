// crates/engine_core/src/lib.rs

// Logic Modules
pub mod app;
pub mod camera;
pub mod engine_loop;
pub mod error;
pub mod headless;
pub mod host;
pub mod input;
pub mod logging;
pub mod platform_runner;
pub mod renderer;
pub mod scene;

// Re-export App so the launcher crate can find it easily
pub use app::{App, WindowConfig};
pub use engine_loop::EngineLoop;
pub use error::HostError;
pub use headless::HeadlessHost;
pub use host::EventQueue;
pub use logging::init_logging;
pub use renderer::{DrawItem, DrawListRenderer, Renderer};
