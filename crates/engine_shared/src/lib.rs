// crates/engine_shared/src/lib.rs

pub mod components;
pub mod config;
pub mod events;
pub mod host_api;
pub mod input_types;

pub use components::*;
pub use config::{GameConfig, ShockwaveConfig};
pub use events::{EventHub, GameEvent, ReleaseNotifier};
pub use host_api::{AudioOutput, HostContext, Material, MaterialHandle, MaterialLibrary};
pub use input_types::{ActionId, InputState, ACTION_NOT_FOUND};

use engine_ecs::World;

/// The contract between the host loop and gameplay code.
/// The host calls `on_load` once after the scene is set up, then `update`
/// once per fixed simulation step.
pub trait GameLogic {
    fn on_load(&mut self, world: &mut World, host: &mut HostContext<'_>);
    fn update(&mut self, world: &mut World, host: &mut HostContext<'_>, input: &InputState, dt: f32);
    fn on_unload(&mut self, _world: &mut World) {
        tracing::info!("game logic unloaded");
    }
}
