// crates/engine_ecs/src/world.rs

use std::any::{TypeId, type_name};
use std::collections::HashMap;

use crate::entity::Entity;
use crate::storage::{SparseSet, Storage};

pub struct World {
    // Map Component Type -> Storage
    components: HashMap<TypeId, Box<dyn Storage>>,
    free_indices: Vec<u32>,
    generations: Vec<u32>,
    alive: Vec<bool>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    pub fn new() -> Self {
        Self {
            components: HashMap::new(),
            free_indices: Vec::new(),
            generations: Vec::new(),
            alive: Vec::new(),
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

    pub fn spawn(&mut self) -> Entity {
        let index = if let Some(idx) = self.free_indices.pop() {
            idx
        } else {
            self.generations.push(0);
            self.alive.push(false);
            (self.generations.len() - 1) as u32
        };

        self.alive[index as usize] = true;
        Entity::new(index, self.generations[index as usize])
    }

    /// Destroys the entity and drops every component it holds.
    /// Returns false if the handle was already dead.
    pub fn despawn(&mut self, entity: Entity) -> bool {
        if !self.is_alive(entity) {
            return false;
        }

        for storage in self.components.values_mut() {
            storage.remove_entity(entity);
        }

        let index = entity.index();
        self.alive[index] = false;
        self.generations[index] = self.generations[index].wrapping_add(1);
        self.free_indices.push(index as u32);
        true
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        let index = entity.index();
        index < self.alive.len()
            && self.alive[index]
            && self.generations[index] == entity.generation()
    }

    pub fn entity_count(&self) -> usize {
        self.alive.iter().filter(|alive| **alive).count()
    }

    /// STRICT MODE: adding a component of an unregistered type is a hard error.
    pub fn add_component<T: 'static>(&mut self, entity: Entity, component: T) {
        if !self.is_alive(entity) {
            panic!(
                "add_component::<{}> on dead entity {:?}",
                type_name::<T>(),
                entity,
            );
        }

        match self.storage_mut::<T>() {
            Some(sparse_set) => sparse_set.insert(entity, component),
            None => {
                // LOUD FAILURE: a missing registration is a setup bug.
                panic!(
                    "Component {} was not registered! \
                     Call world.register_component::<{}>() during setup.",
                    type_name::<T>(),
                    type_name::<T>(),
                );
            }
        }
    }

    pub fn remove_component<T: 'static>(&mut self, entity: Entity) -> Option<T> {
        self.storage_mut::<T>()?.remove(entity)
    }

    /// Returns a shared reference to the component `T` for `entity`, or `None` if not present.
    pub fn get_component<T: 'static>(&self, entity: Entity) -> Option<&T> {
        self.query::<T>()?.get(entity)
    }

    pub fn get_component_mut<T: 'static>(&mut self, entity: Entity) -> Option<&mut T> {
        self.storage_mut::<T>()?.get_mut(entity)
    }

    /// Read-only access to the full storage of a component type.
    pub fn query<T: 'static>(&self) -> Option<&SparseSet<T>> {
        self.components
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.as_any().downcast_ref::<SparseSet<T>>())
    }

    /// Mutable access to the full storage of a component type.
    pub fn query_mut<T: 'static>(&mut self) -> Option<&mut SparseSet<T>> {
        self.storage_mut::<T>()
    }

    /// Joins two component types: every entity holding both `A` and `B`,
    /// in `A`'s storage order.
    pub fn query_pair<A: 'static, B: 'static>(&self) -> Vec<(Entity, &A, &B)> {
        let (Some(left), Some(right)) = (self.query::<A>(), self.query::<B>()) else {
            return Vec::new();
        };

        left.iter()
            .filter_map(|(entity, a)| right.get(*entity).map(|b| (*entity, a, b)))
            .collect()
    }

    fn storage_mut<T: 'static>(&mut self) -> Option<&mut SparseSet<T>> {
        let storage = self.components.get_mut(&TypeId::of::<T>())?;
        let sparse_set = storage
            .as_any_mut()
            .downcast_mut::<SparseSet<T>>()
            .unwrap_or_else(|| {
                panic!(
                    "Component storage type mismatch for {}.",
                    type_name::<T>(),
                )
            });
        Some(sparse_set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Pos(i32);
    #[derive(Debug, PartialEq)]
    struct Tag;

    fn world() -> World {
        let mut world = World::new();
        world.register_component::<Pos>();
        world.register_component::<Tag>();
        world
    }

    #[test]
    fn despawn_removes_components_and_bumps_generation() {
        let mut world = world();
        let e = world.spawn();
        world.add_component(e, Pos(1));
        world.add_component(e, Tag);

        assert!(world.despawn(e));
        assert!(!world.is_alive(e));
        assert!(world.get_component::<Pos>(e).is_none());
        assert!(!world.despawn(e));

        let reused = world.spawn();
        assert_eq!(reused.index(), e.index());
        assert_ne!(reused.generation(), e.generation());
        assert!(world.get_component::<Pos>(reused).is_none());
    }

    #[test]
    fn query_pair_joins_on_both_components() {
        let mut world = world();
        let a = world.spawn();
        let b = world.spawn();
        world.add_component(a, Pos(1));
        world.add_component(b, Pos(2));
        world.add_component(b, Tag);

        let joined = world.query_pair::<Pos, Tag>();
        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].0, b);
        assert_eq!(joined[0].1, &Pos(2));
    }

    #[test]
    #[should_panic(expected = "was not registered")]
    fn unregistered_component_is_loud() {
        let mut world = World::new();
        let e = world.spawn();
        world.add_component(e, Pos(0));
    }
}
