// crates/game_plugin/src/systems/hierarchy.rs

use engine_ecs::{Entity, World};
use engine_shared::CDisableChildrenOnLoad;

/// Sets the active flag on every direct child of `parent`.
pub fn set_children_active(world: &mut World, parent: Entity, active: bool) {
    let children = world.children(parent).to_vec();
    for child in children {
        world.set_active(child, active);
    }
}

pub fn disable_children_on_load(world: &mut World) {
    let parents: Vec<Entity> = world
        .query::<CDisableChildrenOnLoad>()
        .map(|set| set.iter().map(|(e, _)| *e).collect())
        .unwrap_or_default();

    for parent in parents {
        set_children_active(world, parent, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_direct_children_are_touched() {
        let mut world = World::new();
        world.register_component::<CDisableChildrenOnLoad>();
        let root = world.spawn();
        world.add_component(root, CDisableChildrenOnLoad);
        let child = world.spawn();
        let grandchild = world.spawn();
        world.set_parent(child, root);
        world.set_parent(grandchild, child);

        disable_children_on_load(&mut world);

        assert!(world.is_active_self(root));
        assert!(!world.is_active_self(child));
        assert!(world.is_active_self(grandchild));
        assert!(!world.is_active(grandchild));

        set_children_active(&mut world, root, true);
        assert!(world.is_active(grandchild));
    }
}
