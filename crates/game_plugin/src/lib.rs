// crates/game_plugin/src/lib.rs

pub mod state;
pub mod systems;
pub mod timers;

pub use state::PlaygroundGame;
