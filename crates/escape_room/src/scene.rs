// crates/escape_room/src/scene.rs

//! Builds the room. Every sprite and hit box is placed here; behaviour is
//! wired in as thin reactions over the `rules` methods on `Game`.
//!
//! Hit boxes inside one view never overlap, so click dispatch order only
//! matters for a broken layout.

use engine_ecs::{Entity, World};
use engine_shared::{CCamera, CLabel, CSprite, CTransform};
use glam::Vec2;
use tracing::debug;

use crate::config::GameConfig;
use crate::error::SetupError;
use crate::game::Game;
use crate::interaction::CInteractive;
use crate::inventory::Item;
use crate::puzzles::{KeypadId, KeypadKey, SubmitMode};
use crate::view::{View, ViewRegistry};

const BACKDROP_DEPTH: i32 = 10;

/// Keys of one keypad: `digits[d]` is the key for digit `d`.
#[derive(Debug, Clone)]
pub struct KeypadHandles {
    pub digits: Vec<Entity>,
    /// Only spawned for keypads that submit explicitly.
    pub enter: Option<Entity>,
}

impl KeypadHandles {
    pub fn all(&self) -> impl Iterator<Item = Entity> + '_ {
        self.digits.iter().copied().chain(self.enter)
    }

    pub fn key(&self, key: KeypadKey) -> Option<Entity> {
        match key {
            KeypadKey::Digit(digit) => self.digits.get(usize::from(digit)).copied(),
            KeypadKey::Enter => self.enter,
        }
    }
}

/// Entities the rules (and tests) need to reach by name.
#[derive(Debug, Clone)]
pub struct SceneHandles {
    pub camera: Entity,

    // Front room
    pub door: Entity,
    pub card: Entity,
    pub blueprint: Entity,
    pub chair_intact: Entity,
    pub chair_broken: Entity,
    pub stick: Entity,
    pub sofa_gap: Entity,
    pub terminal: Entity,
    pub candelabra: Entity,
    pub saw_panel: Entity,
    pub painting_frame: Entity,

    // Keyhole
    pub backroom: Entity,
    pub keyhole: Entity,

    pub terminal_keys: KeypadHandles,

    pub candles: Vec<Entity>,
    pub flames: Vec<Entity>,

    pub wire_broken: Entity,
    pub wire_fixed: Entity,
    pub saw_buttons: Vec<Entity>,

    pub painting: Entity,
    pub screws: Vec<Entity>,
    pub safe_closed: Entity,
    pub safe_open: Entity,
    pub safe_keys: KeypadHandles,
}

struct Builder<'a> {
    world: &'a mut World,
    views: &'a mut ViewRegistry,
}

impl Builder<'_> {
    /// Visual-only member of `view`.
    fn prop(&mut self, view: View, label: &'static str, transform: CTransform, sprite: CSprite) -> Entity {
        let entity = self.world.spawn();
        self.world.add_component(entity, transform);
        self.world.add_component(entity, sprite);
        self.world.add_component(entity, CLabel(label));
        self.views.assign(self.world, entity, view);
        entity
    }

    /// Clickable member of `view` with a single reaction.
    fn button<F>(
        &mut self,
        view: View,
        label: &'static str,
        transform: CTransform,
        sprite: CSprite,
        reaction: F,
    ) -> Entity
    where
        F: Fn(&mut Game, &mut World, Entity) + 'static,
    {
        let entity = self.prop(view, label, transform, sprite);
        self.world.add_component(entity, CInteractive::new().on_click(reaction));
        entity
    }

    fn backdrop(&mut self, view: View, image: &str, size: Vec2) -> Entity {
        self.prop(
            view,
            "backdrop",
            CTransform::at(Vec2::ZERO, size),
            CSprite::new(image).with_depth(BACKDROP_DEPTH),
        )
    }

    /// Phone layout: 1-2-3 on top, 0 under 8, enter right of 0.
    fn keypad(
        &mut self,
        view: View,
        pad: KeypadId,
        submit: SubmitMode,
        center: Vec2,
        pitch: f32,
        depth: i32,
    ) -> KeypadHandles {
        let size = Vec2::splat(pitch * 0.8);
        let slot = |row: usize, col: usize| {
            center + Vec2::new((col as f32 - 1.0) * pitch, (1.5 - row as f32) * pitch)
        };

        let mut digits = Vec::with_capacity(10);
        for digit in 0..10u8 {
            let (row, col) = match digit {
                0 => (3, 1),
                d => (usize::from(d - 1) / 3, usize::from(d - 1) % 3),
            };
            let key = self.button(
                view,
                "keypad digit",
                CTransform::at(slot(row, col), size),
                CSprite::new(format!("./key_{digit}.png")).with_depth(depth),
                move |game, world, _| game.press_key(world, pad, KeypadKey::Digit(digit)),
            );
            digits.push(key);
        }

        let enter = (submit == SubmitMode::Explicit).then(|| {
            self.button(
                view,
                "keypad enter",
                CTransform::at(slot(3, 2), size),
                CSprite::new("./key_enter.png").with_depth(depth),
                move |game, world, _| game.press_key(world, pad, KeypadKey::Enter),
            )
        });

        KeypadHandles { digits, enter }
    }
}

/// Offset of item `index` in a row of `count` items spaced `pitch` apart,
/// centred on zero.
fn row_offset(index: usize, count: usize, pitch: f32) -> f32 {
    (index as f32 - (count as f32 - 1.0) / 2.0) * pitch
}

pub fn build(
    world: &mut World,
    views: &mut ViewRegistry,
    config: &GameConfig,
) -> Result<SceneHandles, SetupError> {
    let puzzles = &config.puzzles;

    let camera = world.spawn();
    world.add_component(camera, CTransform::default());
    world.add_component(camera, CCamera { viewport: config.camera.viewport, zoom: 1.0 });
    world.add_component(camera, CLabel("camera"));

    let mut b = Builder { world, views };
    let room = Vec2::new(32.0, 18.0);
    let closeup = Vec2::new(26.0, 14.0);

    // Front room
    b.backdrop(View::FrontRoom, "./front_room.png", room);

    let door = b.button(
        View::FrontRoom,
        "door",
        CTransform::at(Vec2::new(0.0, -0.7), Vec2::new(6.0, 8.0)),
        CSprite::new("./door.png").with_depth(5),
        |game, world, _| game.try_door(world),
    );
    let card = b.button(
        View::FrontRoom,
        "card",
        CTransform::at(Vec2::new(-4.0, -5.5), Vec2::new(0.4, 0.6)).with_rotation(-80.0),
        CSprite::new("./card.png").with_depth(1),
        |game, world, me| game.pick_up(world, me, Item::Card),
    );
    let blueprint = b.button(
        View::FrontRoom,
        "blueprint",
        CTransform::at(Vec2::new(6.0, -2.5), Vec2::new(1.2, 0.8)),
        CSprite::new("./blueprint_small.png").with_depth(1),
        |game, world, me| game.pick_up(world, me, Item::Blueprint),
    );
    let terminal = b.button(
        View::FrontRoom,
        "card terminal",
        CTransform::at(Vec2::new(5.0, 5.0), Vec2::splat(1.5)).with_rotation(-60.0),
        CSprite::new("./terminal_small.png").with_depth(4),
        |game, world, _| game.show(world, View::CardTerminal),
    );
    let candelabra = b.button(
        View::FrontRoom,
        "candelabra",
        CTransform::at(Vec2::new(-8.0, 1.0), Vec2::new(2.0, 3.0)),
        CSprite::new("./candelabra_small.png").with_depth(4),
        |game, world, _| game.show(world, View::Candelabra),
    );
    let saw_panel = b.button(
        View::FrontRoom,
        "saw panel",
        CTransform::at(Vec2::new(9.0, -1.0), Vec2::splat(2.0)),
        CSprite::new("./saw_panel_small.png").with_depth(4),
        |game, world, _| game.show(world, View::SawPuzzle),
    );
    let painting_frame = b.button(
        View::FrontRoom,
        "painting",
        CTransform::at(Vec2::new(-11.0, 4.0), Vec2::new(3.0, 2.5)),
        CSprite::new("./painting_small.png").with_depth(4),
        |game, world, _| game.show(world, View::Painting),
    );

    let chair_transform = CTransform::at(Vec2::new(11.0, -4.5), Vec2::new(3.0, 4.0));
    let chair_intact = b.prop(
        View::FrontRoom,
        "chair",
        chair_transform,
        CSprite::new("./chair.png").with_depth(3),
    );
    let chair_broken = b.prop(
        View::FrontRoom,
        "broken chair",
        chair_transform,
        CSprite::new("./chair_broken.png").with_depth(3),
    );
    let stick = b.button(
        View::FrontRoom,
        "stick",
        CTransform::at(Vec2::new(11.0, -5.8), Vec2::new(2.0, 0.5)),
        CSprite::new("./stick.png").with_depth(2),
        |game, world, me| game.pick_up(world, me, Item::Stick),
    );

    b.prop(
        View::FrontRoom,
        "sofa",
        CTransform::at(Vec2::new(-8.0, -4.5), Vec2::new(6.0, 3.0)),
        CSprite::new("./sofa.png").with_depth(3),
    );
    let sofa_gap = b.button(
        View::FrontRoom,
        "gap under the sofa",
        CTransform::at(Vec2::new(-8.0, -6.0), Vec2::new(4.0, 0.6)),
        CSprite::new("./sofa_gap.png").with_depth(2),
        |game, world, me| game.fish_under_sofa(world, me),
    );

    // Keyhole: the back room slides under a fixed-size keyhole mask.
    let backroom = b.prop(
        View::BackRoom,
        "back room",
        CTransform::at(Vec2::ZERO, room),
        CSprite::new("./back_room.png").with_depth(1),
    );
    let keyhole = b.prop(
        View::BackRoom,
        "keyhole",
        CTransform::at(Vec2::ZERO, room),
        CSprite::new("./keyhole.png"),
    );

    // Card terminal
    b.backdrop(View::CardTerminal, "./terminal.png", closeup);
    let terminal_keys = b.keypad(
        View::CardTerminal,
        KeypadId::Terminal,
        puzzles.terminal.submit,
        Vec2::ZERO,
        2.5,
        0,
    );

    // Candelabra
    b.backdrop(View::Candelabra, "./candelabra.png", closeup);
    let count = puzzles.candles.initial.len();
    let mut candles = Vec::with_capacity(count);
    let mut flames = Vec::with_capacity(count);
    for index in 0..count {
        let x = row_offset(index, count, 2.0);
        candles.push(b.button(
            View::Candelabra,
            "candle",
            CTransform::at(Vec2::new(x, -2.0), Vec2::new(1.0, 4.0)),
            CSprite::new("./candle.png").with_depth(1),
            move |game, world, _| game.flip_candle(world, index),
        ));
        flames.push(b.prop(
            View::Candelabra,
            "flame",
            CTransform::at(Vec2::new(x, 0.8), Vec2::new(0.6, 1.0)),
            CSprite::new("./flame.png"),
        ));
    }

    // Saw puzzle
    b.backdrop(View::SawPuzzle, "./saw_panel.png", closeup);
    let wire_transform = CTransform::at(Vec2::new(0.0, 3.0), Vec2::new(8.0, 1.0));
    let wire_broken = b.button(
        View::SawPuzzle,
        "broken wire",
        wire_transform,
        CSprite::new("./wire_broken.png").with_depth(1),
        |game, world, _| game.repair_wire(world),
    );
    let wire_fixed = b.prop(
        View::SawPuzzle,
        "taped wire",
        wire_transform,
        CSprite::new("./wire_fixed.png").with_depth(1),
    );
    let buttons = puzzles.saw.buttons;
    let saw_buttons: Vec<Entity> = (0..buttons)
        .map(|index| {
            b.button(
                View::SawPuzzle,
                "saw button",
                CTransform::at(Vec2::new(row_offset(index, buttons, 3.0), -3.0), Vec2::splat(2.0)),
                CSprite::new(format!("./saw_button_{index}.png")).with_depth(1),
                move |game, _, _| game.press_saw_button(index),
            )
        })
        .collect();

    // Painting and the safe behind it. Keys sit in front of the safe but
    // behind the painting; screws on top of everything.
    b.backdrop(View::Painting, "./wall.png", closeup);
    let safe_closed = b.prop(
        View::Painting,
        "safe",
        CTransform::at(Vec2::ZERO, Vec2::splat(8.0)),
        CSprite::new("./safe_closed.png").with_depth(3),
    );
    let safe_open = b.prop(
        View::Painting,
        "open safe",
        CTransform::at(Vec2::ZERO, Vec2::splat(8.0)),
        CSprite::new("./safe_open.png").with_depth(3),
    );
    let safe_keys = b.keypad(
        View::Painting,
        KeypadId::Safe,
        puzzles.safe.submit,
        Vec2::ZERO,
        1.5,
        2,
    );
    let painting = b.prop(
        View::Painting,
        "painting",
        CTransform::at(Vec2::ZERO, Vec2::new(14.0, 10.0)),
        CSprite::new("./painting.png").with_depth(1),
    );
    let count = puzzles.screws.count;
    let screws: Vec<Entity> = (0..count)
        .map(|index| {
            let x = if count > 1 { -6.5 + 13.0 * index as f32 / (count - 1) as f32 } else { 0.0 };
            let y = if index % 2 == 0 { 4.5 } else { -4.5 };
            b.button(
                View::Painting,
                "screw",
                CTransform::at(Vec2::new(x, y), Vec2::ONE),
                CSprite::new("./screw.png"),
                move |game, world, me| game.remove_screw(world, me, index),
            )
        })
        .collect();

    debug!(entities = b.world.entity_count(), "scene built");

    Ok(SceneHandles {
        camera,
        door,
        card,
        blueprint,
        chair_intact,
        chair_broken,
        stick,
        sofa_gap,
        terminal,
        candelabra,
        saw_panel,
        painting_frame,
        backroom,
        keyhole,
        terminal_keys,
        candles,
        flames,
        wire_broken,
        wire_fixed,
        saw_buttons,
        painting,
        screws,
        safe_closed,
        safe_open,
        safe_keys,
    })
}

/// Rejects scenes that could never be played through: interactive objects
/// that do nothing and views with nothing in them.
pub fn validate(world: &World, views: &ViewRegistry) -> Result<(), SetupError> {
    if let Some(interactives) = world.query::<CInteractive>() {
        for (entity, interactive) in interactives.iter() {
            if interactive.reactions().is_empty() {
                let label = world.get_component::<CLabel>(*entity).map_or("unnamed", |l| l.0);
                return Err(SetupError::NoReactions { label });
            }
        }
    }

    match views.empty_views().first() {
        Some(view) => Err(SetupError::EmptyView(*view)),
        None => Ok(()),
    }
}

/// Despawns everything `build` spawned into `views`, plus the camera.
pub fn discard(world: &mut World, views: &ViewRegistry, handles: &SceneHandles) {
    for view in View::ALL {
        for entity in views.members(view) {
            world.despawn(*entity);
        }
    }
    world.despawn(handles.camera);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::register_components;

    fn built() -> (World, ViewRegistry, SceneHandles) {
        let mut world = World::new();
        register_components(&mut world);
        let mut views = ViewRegistry::new();
        let handles = build(&mut world, &mut views, &GameConfig::default()).unwrap();
        (world, views, handles)
    }

    #[test]
    fn stock_scene_validates() {
        let (world, views, _) = built();
        validate(&world, &views).unwrap();
    }

    #[test]
    fn hit_boxes_within_a_view_do_not_overlap() {
        let (world, views, _) = built();

        for view in View::ALL {
            let boxes: Vec<CTransform> = views
                .members(view)
                .iter()
                .filter(|e| world.get_component::<CInteractive>(**e).is_some())
                .filter_map(|e| world.get_component::<CTransform>(*e).copied())
                .collect();

            for (i, a) in boxes.iter().enumerate() {
                for b in &boxes[i + 1..] {
                    let gap = (a.pos - b.pos).abs() - (a.scale + b.scale) / 2.0;
                    assert!(gap.x > 0.0 || gap.y > 0.0, "{view}: {a:?} overlaps {b:?}");
                }
            }
        }
    }

    #[test]
    fn keypads_follow_their_submit_mode() {
        let (_, _, handles) = built();
        assert_eq!(handles.terminal_keys.digits.len(), 10);
        assert!(handles.terminal_keys.enter.is_none());
        assert!(handles.safe_keys.enter.is_some());
        assert_eq!(handles.safe_keys.all().count(), 11);
    }

    #[test]
    fn puzzle_sizes_come_from_config() {
        let (_, _, handles) = built();
        assert_eq!(handles.candles.len(), 7);
        assert_eq!(handles.flames.len(), 7);
        assert_eq!(handles.saw_buttons.len(), 4);
        assert_eq!(handles.screws.len(), 4);
    }

    #[test]
    fn object_without_reactions_is_rejected() {
        let (mut world, mut views, _) = built();
        let dud = world.spawn();
        world.add_component(dud, CLabel("dud"));
        world.add_component(dud, CInteractive::new());
        views.assign(&mut world, dud, View::FrontRoom);

        let err = validate(&world, &views).unwrap_err();
        assert!(matches!(err, SetupError::NoReactions { label: "dud" }));
    }

    #[test]
    fn discarded_scene_can_be_built_again() {
        let (mut world, views, handles) = built();
        let full = world.entity_count();

        discard(&mut world, &views, &handles);
        assert_eq!(world.entity_count(), 0);

        let mut game = Game::new(GameConfig::default()).unwrap();
        game.setup(&mut world).unwrap();
        assert_eq!(world.entity_count(), full);
        assert!(game.handles().is_some());
    }

    #[test]
    fn empty_view_is_rejected() {
        let mut world = World::new();
        register_components(&mut world);
        let views = ViewRegistry::new();
        let err = validate(&world, &views).unwrap_err();
        assert!(matches!(err, SetupError::EmptyView(View::FrontRoom)));
    }
}
