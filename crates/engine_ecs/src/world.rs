// crates/engine_ecs/src/world.rs

use std::any::{TypeId, type_name};
use std::collections::HashMap;

use crate::entity::Entity;
use crate::storage::{SparseSet, Storage};

/// Per-slot bookkeeping that is not a component: hierarchy links and the
/// local active flag.
#[derive(Default, Clone)]
struct Node {
    parent: Option<Entity>,
    children: Vec<Entity>,
    active: bool,
}

pub struct World {
    entities: Vec<Entity>,
    // Map Component Type -> Storage
    components: HashMap<TypeId, Box<dyn Storage>>,
    nodes: Vec<Node>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            components: HashMap::new(),
            nodes: Vec::new(),
        }
    }

    /// Register a component type with the world.
    /// This MUST be called exactly once per component type.
    pub fn register_component<T: 'static>(&mut self) {
        let type_id = TypeId::of::<T>();

        if self.components.contains_key(&type_id) {
            panic!(
                "Component {} registered twice. \
                 Ensure you only call world.register_component::<{}>() once.",
                type_name::<T>(),
                type_name::<T>(),
            );
        }

        self.components
            .insert(type_id, Box::new(SparseSet::<T>::new()));
    }

    pub fn is_registered<T: 'static>(&self) -> bool {
        self.components.contains_key(&TypeId::of::<T>())
    }

    /// Spawns an active, parentless entity.
    pub fn spawn(&mut self) -> Entity {
        let entity = Entity::new(self.entities.len() as u32, 0);
        self.entities.push(entity);
        self.nodes.push(Node { active: true, ..Node::default() });
        entity
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.entities.get(entity.index()) == Some(&entity)
    }

    /// STRICT MODE: adding a component to an unregistered type is a hard error.
    pub fn add_component<T: 'static>(&mut self, entity: Entity, component: T) {
        let sparse_set = self.query_mut::<T>().unwrap_or_else(|| {
            // LOUD FAILURE: a missing registration is a setup bug, not a runtime condition.
            panic!(
                "Component {} was not registered! \
                 Call world.register_component::<{}>() during setup (e.g. scene::setup_default_world).",
                type_name::<T>(),
                type_name::<T>(),
            )
        });

        sparse_set.insert(entity, component);
    }

    /// Returns a shared reference to the component `T` for `entity`, or `None` if not present.
    pub fn get_component<T: 'static>(&self, entity: Entity) -> Option<&T> {
        self.query::<T>()?.get(entity)
    }

    pub fn get_component_mut<T: 'static>(&mut self, entity: Entity) -> Option<&mut T> {
        self.query_mut::<T>()?.get_mut(entity)
    }

    pub fn has_component<T: 'static>(&self, entity: Entity) -> bool {
        self.query::<T>().is_some_and(|set| set.contains(entity))
    }

    /// Read-only access to the full storage of a component type.
    pub fn query<T: 'static>(&self) -> Option<&SparseSet<T>> {
        let type_id = TypeId::of::<T>();
        self.components
            .get(&type_id)
            .and_then(|boxed| boxed.as_any().downcast_ref::<SparseSet<T>>())
    }

    /// Mutable access to the full storage of a component type.
    pub fn query_mut<T: 'static>(&mut self) -> Option<&mut SparseSet<T>> {
        let type_id = TypeId::of::<T>();
        self.components
            .get_mut(&type_id)
            .and_then(|boxed| boxed.as_any_mut().downcast_mut::<SparseSet<T>>())
    }

    // --- Hierarchy ---

    /// Attaches `child` under `parent`, detaching it from any previous parent.
    /// Returns false (and changes nothing) if the link would create a cycle.
    pub fn set_parent(&mut self, child: Entity, parent: Entity) -> bool {
        if !self.is_alive(child) || !self.is_alive(parent) {
            return false;
        }
        if child == parent || self.is_ancestor_of(child, parent) {
            return false;
        }

        self.detach(child);
        self.nodes[parent.index()].children.push(child);
        self.nodes[child.index()].parent = Some(parent);
        true
    }

    /// Removes `child` from its parent's child list. No-op for roots.
    pub fn detach(&mut self, child: Entity) {
        let Some(old_parent) = self.parent(child) else { return };
        self.nodes[old_parent.index()].children.retain(|&c| c != child);
        self.nodes[child.index()].parent = None;
    }

    pub fn parent(&self, entity: Entity) -> Option<Entity> {
        if !self.is_alive(entity) {
            return None;
        }
        self.nodes[entity.index()].parent
    }

    /// Direct children in attachment order.
    pub fn children(&self, entity: Entity) -> &[Entity] {
        if !self.is_alive(entity) {
            return &[];
        }
        &self.nodes[entity.index()].children
    }

    pub fn first_child(&self, entity: Entity) -> Option<Entity> {
        self.children(entity).first().copied()
    }

    fn is_ancestor_of(&self, ancestor: Entity, entity: Entity) -> bool {
        let mut current = self.parent(entity);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    // --- Active flags ---

    pub fn set_active(&mut self, entity: Entity, active: bool) {
        if self.is_alive(entity) {
            self.nodes[entity.index()].active = active;
        }
    }

    /// The entity's own flag, ignoring ancestors.
    pub fn is_active_self(&self, entity: Entity) -> bool {
        self.is_alive(entity) && self.nodes[entity.index()].active
    }

    /// True only when the entity and every ancestor are active.
    pub fn is_active(&self, entity: Entity) -> bool {
        let mut current = Some(entity);
        while let Some(node) = current {
            if !self.is_active_self(node) {
                return false;
            }
            current = self.parent(node);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker(u8);

    #[test]
    fn components_round_through_storage() {
        let mut world = World::new();
        world.register_component::<Marker>();
        let e = world.spawn();
        world.add_component(e, Marker(3));

        assert!(world.has_component::<Marker>(e));
        if let Some(m) = world.get_component_mut::<Marker>(e) {
            m.0 = 9;
        }
        assert_eq!(world.get_component::<Marker>(e).map(|m| m.0), Some(9));
    }

    #[test]
    #[should_panic(expected = "was not registered")]
    fn unregistered_component_is_loud() {
        let mut world = World::new();
        let e = world.spawn();
        world.add_component(e, Marker(1));
    }

    #[test]
    fn reparenting_moves_child() {
        let mut world = World::new();
        let a = world.spawn();
        let b = world.spawn();
        let child = world.spawn();

        assert!(world.set_parent(child, a));
        assert_eq!(world.first_child(a), Some(child));

        assert!(world.set_parent(child, b));
        assert!(world.children(a).is_empty());
        assert_eq!(world.children(b), &[child]);
        assert_eq!(world.parent(child), Some(b));
    }

    #[test]
    fn cycles_are_refused() {
        let mut world = World::new();
        let root = world.spawn();
        let mid = world.spawn();
        let leaf = world.spawn();
        world.set_parent(mid, root);
        world.set_parent(leaf, mid);

        assert!(!world.set_parent(root, leaf));
        assert!(!world.set_parent(root, root));
        assert_eq!(world.parent(root), None);
    }

    #[test]
    fn inactive_parent_hides_children() {
        let mut world = World::new();
        let parent = world.spawn();
        let child = world.spawn();
        world.set_parent(child, parent);

        world.set_active(parent, false);
        assert!(world.is_active_self(child));
        assert!(!world.is_active(child));

        world.set_active(parent, true);
        assert!(world.is_active(child));
    }
}
