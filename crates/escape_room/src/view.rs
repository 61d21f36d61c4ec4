// crates/escape_room/src/view.rs

//! View registry: mutually exclusive visibility/enablement groups.
//!
//! Every visual or interactive object carries a `CView` tag. `show` is the
//! only transition: it hides and disables everything, then reveals the
//! members of the requested view that have not been retired.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use engine_ecs::{Entity, World};
use engine_shared::CSprite;
use tracing::info;

use crate::interaction::CInteractive;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum View {
    FrontRoom,
    /// Peeking through the keyhole of the front door.
    BackRoom,
    CardTerminal,
    Candelabra,
    SawPuzzle,
    Painting,
}

impl View {
    pub const TOP_LEVEL: View = View::FrontRoom;

    pub const ALL: [View; 6] = [
        View::FrontRoom,
        View::BackRoom,
        View::CardTerminal,
        View::Candelabra,
        View::SawPuzzle,
        View::Painting,
    ];

    /// Where the "exit" affordance leads. `None` for the top-level view.
    pub fn parent(self) -> Option<View> {
        match self {
            View::FrontRoom => None,
            _ => Some(View::FrontRoom),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            View::FrontRoom => "front room",
            View::BackRoom => "back room",
            View::CardTerminal => "card terminal",
            View::Candelabra => "candelabra",
            View::SawPuzzle => "saw puzzle",
            View::Painting => "painting",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Group membership tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CView(pub View);

#[derive(Debug, Default)]
pub struct ViewRegistry {
    active: Option<View>,
    members: BTreeMap<View, Vec<Entity>>,
    retired: HashSet<Entity>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&mut self, world: &mut World, entity: Entity, view: View) {
        world.add_component(entity, CView(view));
        self.members.entry(view).or_default().push(entity);
    }

    pub fn members(&self, view: View) -> &[Entity] {
        self.members.get(&view).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn active(&self) -> Option<View> {
        self.active
    }

    pub fn is_active(&self, view: View) -> bool {
        self.active == Some(view)
    }

    /// The sole transition operator. Returns the previously active view.
    ///
    /// Transient puzzle state and view-specific side effects are the
    /// caller's job (`Game::show`); this only flips visibility.
    pub fn show(&mut self, world: &mut World, view: View) -> Option<View> {
        if let Some(sprites) = world.query_mut::<CSprite>() {
            for (_, sprite) in sprites.iter_mut() {
                sprite.hidden = true;
            }
        }
        if let Some(interactives) = world.query_mut::<CInteractive>() {
            for (_, interactive) in interactives.iter_mut() {
                interactive.enabled = false;
            }
        }

        for entity in self.members.get(&view).into_iter().flatten() {
            if !self.retired.contains(entity) {
                set_presence(world, *entity, true);
            }
        }

        let previous = self.active.replace(view);
        info!(from = ?previous, to = %view, "view shown");
        previous
    }

    /// Permanently hides and disables `entity` without destroying it. A
    /// retired object is never revealed again by `show`.
    pub fn retire(&mut self, world: &mut World, entity: Entity) {
        self.retired.insert(entity);
        set_presence(world, entity, false);
        if let Some(interactive) = world.get_component_mut::<CInteractive>(entity) {
            interactive.disabled = true;
        }
    }

    pub fn is_retired(&self, entity: Entity) -> bool {
        self.retired.contains(&entity)
    }

    /// Drops every trace of an entity that is about to be despawned.
    pub fn forget(&mut self, entity: Entity) {
        for members in self.members.values_mut() {
            members.retain(|member| *member != entity);
        }
        self.retired.remove(&entity);
    }

    /// Views without a single member, in declaration order.
    pub fn empty_views(&self) -> Vec<View> {
        View::ALL
            .into_iter()
            .filter(|view| self.members(*view).is_empty())
            .collect()
    }
}

/// Shows or hides one object: sprite visibility and click enablement move
/// together.
pub fn set_presence(world: &mut World, entity: Entity, present: bool) {
    if let Some(sprite) = world.get_component_mut::<CSprite>(entity) {
        sprite.hidden = !present;
    }
    if let Some(interactive) = world.get_component_mut::<CInteractive>(entity) {
        interactive.enabled = present;
    }
}

pub fn is_visible(world: &World, entity: Entity) -> bool {
    world
        .get_component::<CSprite>(entity)
        .is_some_and(|sprite| !sprite.hidden)
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_shared::CTransform;

    fn world() -> World {
        let mut world = World::new();
        world.register_component::<CSprite>();
        world.register_component::<CTransform>();
        world.register_component::<CView>();
        world.register_component::<CInteractive>();
        world
    }

    fn member(world: &mut World, views: &mut ViewRegistry, view: View) -> Entity {
        let entity = world.spawn();
        world.add_component(entity, CSprite::new("x.png"));
        world.add_component(entity, CInteractive::new().on_click(|_, _, _| {}));
        views.assign(world, entity, view);
        entity
    }

    #[test]
    fn show_reveals_only_the_requested_group() {
        let mut world = world();
        let mut views = ViewRegistry::new();
        let front = member(&mut world, &mut views, View::FrontRoom);
        let back = member(&mut world, &mut views, View::BackRoom);

        assert_eq!(views.show(&mut world, View::FrontRoom), None);
        assert!(is_visible(&world, front));
        assert!(!is_visible(&world, back));
        assert!(world.get_component::<CInteractive>(front).unwrap().is_clickable());
        assert!(!world.get_component::<CInteractive>(back).unwrap().is_clickable());

        assert_eq!(views.show(&mut world, View::BackRoom), Some(View::FrontRoom));
        assert!(!is_visible(&world, front));
        assert!(is_visible(&world, back));
        assert_eq!(views.active(), Some(View::BackRoom));
    }

    #[test]
    fn retired_members_stay_hidden_across_reentry() {
        let mut world = world();
        let mut views = ViewRegistry::new();
        let tool = member(&mut world, &mut views, View::Painting);

        views.show(&mut world, View::Painting);
        views.retire(&mut world, tool);
        views.show(&mut world, View::FrontRoom);
        views.show(&mut world, View::Painting);

        assert!(!is_visible(&world, tool));
        assert!(!world.get_component::<CInteractive>(tool).unwrap().is_clickable());
    }

    #[test]
    fn forget_removes_membership() {
        let mut world = world();
        let mut views = ViewRegistry::new();
        let card = member(&mut world, &mut views, View::FrontRoom);
        views.forget(card);
        assert!(views.members(View::FrontRoom).is_empty());
        assert!(views.empty_views().contains(&View::FrontRoom));
    }
}
