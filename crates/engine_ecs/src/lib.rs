// crates/engine_ecs/src/lib.rs

mod entity;
mod storage;
mod world;

pub use entity::Entity;
pub use storage::{SparseSet, Storage};
pub use world::World;
