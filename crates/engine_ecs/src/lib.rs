// crates/engine_ecs/src/lib.rs
//! Minimal sparse-set ECS: generational entities, one `SparseSet` per
//! component type, strict registration.

mod entity;
mod storage;
mod world;

pub use entity::Entity;
pub use storage::{SparseSet, Storage};
pub use world::World;
