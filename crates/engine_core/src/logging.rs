// crates/engine_core/src/logging.rs
use tracing_subscriber::EnvFilter;

use crate::error::HostError;

/// Installs the global `fmt` subscriber. An explicit `filter` wins over
/// `RUST_LOG`; with neither, everything at `info` and above is shown.
pub fn init_logging(filter: Option<&str>) -> Result<(), HostError> {
    let filter = match filter {
        Some(directives) => EnvFilter::try_new(directives)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|_| HostError::LoggerInstalled)
}
