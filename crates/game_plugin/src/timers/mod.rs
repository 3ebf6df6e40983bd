// crates/game_plugin/src/timers/mod.rs
//! Engine-agnostic state machines advanced by an external tick.

pub mod gesture;
pub mod interpolation;

pub use gesture::{DragSignal, GestureTimer, HoldState, TargetBinding};
pub use interpolation::InterpolationTimer;
