// crates/engine_core/src/renderer.rs

//! The draw seam. Pixels are someone else's problem: a `Renderer` receives
//! the world once per frame and decides what to do with it. The stock
//! `DrawListRenderer` extracts the visible sprites, back to front, and logs
//! them.

use engine_ecs::{Entity, World};
use engine_shared::{CLabel, CSprite, CTransform};
use glam::{Mat4, Quat, Vec3};
use tracing::trace;

pub trait Renderer {
    fn draw(&mut self, world: &World);
}

/// One sprite instance, ready for a backend.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub entity: Entity,
    pub label: &'static str,
    pub image: String,
    pub depth: i32,
    pub model: Mat4,
}

/// Every visible sprite with a transform, furthest first. Ties keep storage
/// order.
pub fn build_draw_list(world: &World) -> Vec<DrawItem> {
    let mut items = Vec::new();

    if let (Some(transforms), Some(sprites)) =
        (world.query::<CTransform>(), world.query::<CSprite>())
    {
        for (entity, transform) in transforms.iter() {
            let Some(sprite) = sprites.get(*entity) else {
                continue;
            };
            if sprite.hidden {
                continue;
            }

            let model = Mat4::from_scale_rotation_translation(
                Vec3::new(transform.scale.x, transform.scale.y, 1.0),
                Quat::from_rotation_z(transform.rotation.to_radians()),
                Vec3::new(transform.pos.x, transform.pos.y, 0.0),
            );
            items.push(DrawItem {
                entity: *entity,
                label: world.get_component::<CLabel>(*entity).map_or("", |l| l.0),
                image: sprite.image.clone(),
                depth: sprite.depth,
                model,
            });
        }
    }

    items.sort_by(|a, b| b.depth.cmp(&a.depth));
    items
}

#[derive(Debug, Default)]
pub struct DrawListRenderer {
    last: Vec<DrawItem>,
    frames: u64,
}

impl DrawListRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// What the most recent frame drew.
    pub fn last_frame(&self) -> &[DrawItem] {
        &self.last
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for DrawListRenderer {
    fn draw(&mut self, world: &World) {
        self.last = build_draw_list(world);
        self.frames += 1;

        trace!(frame = self.frames, sprites = self.last.len(), "draw");
        for item in &self.last {
            trace!(label = item.label, image = %item.image, depth = item.depth, "sprite");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::setup_default_world;
    use glam::Vec2;

    fn sprite(world: &mut World, label: &'static str, depth: i32, hidden: bool) -> Entity {
        let entity = world.spawn();
        world.add_component(entity, CTransform::at(Vec2::ZERO, Vec2::ONE));
        world.add_component(entity, CSprite { hidden, ..CSprite::new(format!("./{label}.png")).with_depth(depth) });
        world.add_component(entity, CLabel(label));
        entity
    }

    #[test]
    fn draws_visible_sprites_back_to_front() {
        let mut world = World::new();
        setup_default_world(&mut world);
        sprite(&mut world, "door", 5, false);
        sprite(&mut world, "backdrop", 10, false);
        sprite(&mut world, "ghost", 0, true);
        sprite(&mut world, "card", 1, false);

        let labels: Vec<_> = build_draw_list(&world).iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["backdrop", "door", "card"]);
    }

    #[test]
    fn sprites_without_transforms_are_skipped() {
        let mut world = World::new();
        setup_default_world(&mut world);
        let loose = world.spawn();
        world.add_component(loose, CSprite::new("./loose.png"));

        assert!(build_draw_list(&world).is_empty());
    }

    #[test]
    fn model_matrix_places_the_quad() {
        let mut world = World::new();
        setup_default_world(&mut world);
        let entity = world.spawn();
        world.add_component(entity, CTransform::at(Vec2::new(3.0, -2.0), Vec2::new(4.0, 2.0)));
        world.add_component(entity, CSprite::new("./box.png"));

        let items = build_draw_list(&world);
        let corner = items[0].model.transform_point3(Vec3::new(0.5, 0.5, 0.0));
        assert_eq!(corner, Vec3::new(5.0, -1.0, 0.0));
    }

    #[test]
    fn renderer_keeps_the_last_frame() {
        let mut world = World::new();
        setup_default_world(&mut world);
        sprite(&mut world, "door", 0, false);

        let mut renderer = DrawListRenderer::new();
        renderer.draw(&world);
        renderer.draw(&world);
        assert_eq!(renderer.frames(), 2);
        assert_eq!(renderer.last_frame().len(), 1);
    }
}
