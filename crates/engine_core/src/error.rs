// crates/engine_core/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    /// Platform errors are kept as text: winit's own types are not
    /// guaranteed to be `Send` on every backend.
    #[error("event loop: {0}")]
    EventLoop(String),

    #[error("creating the window: {0}")]
    Window(String),

    #[error("game failed to load: {0}")]
    Load(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("a global logger is already installed")]
    LoggerInstalled,
}

impl HostError {
    pub(crate) fn load(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Load(Box::new(err))
    }
}

impl From<winit::error::EventLoopError> for HostError {
    fn from(err: winit::error::EventLoopError) -> Self {
        Self::EventLoop(err.to_string())
    }
}

impl From<winit::error::OsError> for HostError {
    fn from(err: winit::error::OsError) -> Self {
        Self::Window(err.to_string())
    }
}
