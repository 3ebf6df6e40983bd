// crates/game_plugin/src/systems/mod.rs
pub mod audio;
pub mod hierarchy;
pub mod hold_drag;
pub mod inventory;
pub mod menu;
pub mod shockwave;

pub use hold_drag::CHoldToDrag;
pub use shockwave::CShockwave;
