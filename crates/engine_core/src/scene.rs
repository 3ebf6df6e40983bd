// crates/engine_core/src/scene.rs
use engine_ecs::World;
use engine_shared::{
    CAudioTrigger, CDisableChildrenOnLoad, CDraggable, CInventorySlot, CMenuToggle, CTransform,
};

/// Registers every component type the shared crate defines. Gameplay code
/// registers its own types in `GameLogic::on_load`.
pub fn setup_default_world(world: &mut World) {
    world.register_component::<CTransform>();
    world.register_component::<CDraggable>();
    world.register_component::<CInventorySlot>();
    world.register_component::<CMenuToggle>();
    world.register_component::<CDisableChildrenOnLoad>();
    world.register_component::<CAudioTrigger>();
}
