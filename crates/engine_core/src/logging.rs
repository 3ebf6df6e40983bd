// crates/engine_core/src/logging.rs

use tracing::Level;

/// Installs the global fmt subscriber. `level` is a tracing level name
/// ("trace" .. "error"); anything unparsable falls back to INFO. Calling
/// this twice is harmless.
pub fn init(level: &str) {
    let max_level = level.parse::<Level>().unwrap_or(Level::INFO);

    if tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_target(false)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}
