// crates/engine_core/src/lib.rs

// Logic Modules
pub mod app;
pub mod config;
pub mod engine_loop;
pub mod host;
pub mod input;
pub mod logging;
pub mod platform_runner;
pub mod scene;

// Re-export App so the playground crate can find it easily
pub use app::App;
pub use platform_runner::PlatformRunner;
