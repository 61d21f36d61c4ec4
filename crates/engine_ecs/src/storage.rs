// crates/engine_ecs/src/storage.rs
use std::any::Any;

use crate::Entity;

// Type-erased view of a component storage, so the World can despawn an entity
// from every storage without knowing the concrete component types.
pub trait Storage {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn remove_entity(&mut self, entity: Entity) -> bool;
}

pub struct SparseSet<T> {
    dense: Vec<T>,                 // Tightly packed data
    entities: Vec<Entity>,         // Owner of dense[i]
    sparse: Vec<Option<usize>>,    // Entity index -> dense index
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

    pub fn insert(&mut self, entity: Entity, value: T) {
        let index = entity.index();

        if index >= self.sparse.len() {
            self.sparse.resize(index + 1, None);
        }

        if let Some(dense_index) = self.sparse[index] {
            // Overwrite (also re-homes a stale slot to the new generation)
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
        // Generation check: a stale handle must not see its successor's data.
        (self.entities[dense_index] == entity).then_some(dense_index)
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.dense_index(entity).is_some()
    }

    pub fn get(&self, entity: Entity) -> Option<&T> {
        self.dense_index(entity).map(|i| &self.dense[i])
    }

    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        self.dense_index(entity).map(|i| &mut self.dense[i])
    }

    /// Removes and returns the component. The last dense element is swapped
    /// into the hole, so iteration order is not stable across removals.
    pub fn remove(&mut self, entity: Entity) -> Option<T> {
        let dense_index = self.dense_index(entity)?;
        self.sparse[entity.index()] = None;

        let last = self.dense.len() - 1;
        if dense_index != last {
            let moved = self.entities[last];
            self.sparse[moved.index()] = Some(dense_index);
        }

        self.entities.swap_remove(dense_index);
        Some(self.dense.swap_remove(dense_index))
    }

    pub fn len(&self) -> usize {
        self.dense.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
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
    fn as_any(&self) -> &dyn Any { self }
    fn as_any_mut(&mut self) -> &mut dyn Any { self }

    fn remove_entity(&mut self, entity: Entity) -> bool {
        self.remove(entity).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_keeps_sparse_index_consistent() {
        let mut set = SparseSet::new();
        let a = Entity::new(0, 0);
        let b = Entity::new(1, 0);
        let c = Entity::new(2, 0);
        set.insert(a, "a");
        set.insert(b, "b");
        set.insert(c, "c");

        assert_eq!(set.remove(a), Some("a"));
        assert_eq!(set.get(c), Some(&"c"));
        assert_eq!(set.get(b), Some(&"b"));
        assert!(!set.contains(a));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn stale_generation_is_not_visible() {
        let mut set = SparseSet::new();
        set.insert(Entity::new(3, 1), 10u32);
        assert_eq!(set.get(Entity::new(3, 0)), None);
        assert_eq!(set.get(Entity::new(3, 1)), Some(&10));
    }
}
