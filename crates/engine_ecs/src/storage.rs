// crates/engine_ecs/src/storage.rs
use crate::Entity;

// The trait allows us to treat different component storages generically
pub trait Storage {
    fn as_any(&self) -> &dyn std::any::Any;
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any;
}

pub struct SparseSet<T> {
    dense: Vec<T>,                  // Tightly packed data
    entities: Vec<Entity>,          // The entity that owns the data at 'dense[i]'
    sparse: Vec<Option<usize>>,     // Maps Entity Index -> Dense Index
}

impl<T: 'static> Default for SparseSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> SparseSet<T> {
    pub fn new() -> Self {
        Self {
            dense: Vec::new(),
            entities: Vec::new(),
            sparse: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.dense.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    pub fn insert(&mut self, entity: Entity, value: T) {
        let index = entity.index();

        if index >= self.sparse.len() {
            self.sparse.resize(index + 1, None);
        }

        // If this entity already has this component, overwrite it
        if let Some(dense_index) = self.sparse[index] {
            self.dense[dense_index] = value;
            self.entities[dense_index] = entity;
        } else {
            let dense_index = self.dense.len();
            self.dense.push(value);
            self.entities.push(entity);
            self.sparse[index] = Some(dense_index);
        }
    }

    fn dense_index(&self, entity: Entity) -> Option<usize> {
        let dense_index = (*self.sparse.get(entity.index())?)?;
        // Generation check: a stale handle must not alias a reused slot.
        (self.entities[dense_index].generation() == entity.generation()).then_some(dense_index)
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.dense_index(entity).is_some()
    }

    pub fn get(&self, entity: Entity) -> Option<&T> {
        self.dense_index(entity).map(|i| &self.dense[i])
    }

    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        self.dense_index(entity).map(move |i| &mut self.dense[i])
    }

    pub fn as_slice(&self) -> &[T] {
        &self.dense
    }

    // Iterate over (Entity, Component) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&Entity, &T)> {
        self.entities.iter().zip(self.dense.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&Entity, &mut T)> {
        self.entities.iter().zip(self.dense.iter_mut())
    }
}

impl<T: 'static> Storage for SparseSet<T> {
    fn as_any(&self) -> &dyn std::any::Any { self }
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any { self }
}
