// crates/escape_room/src/interaction.rs

//! Click dispatch: world-space point -> enabled interactive object -> its
//! reactions, in registration order.

use std::fmt;
use std::rc::Rc;

use engine_ecs::{Entity, World};
use engine_shared::{CLabel, CTransform};
use glam::Vec2;
use tracing::debug;

use crate::game::Game;

/// A click handler. Gets the game, the world and the clicked entity.
pub type Reaction = Rc<dyn Fn(&mut Game, &mut World, Entity)>;

pub struct CInteractive {
    /// Derived from view membership; rewritten by every view switch.
    pub enabled: bool,
    /// Individually switched off. Survives view switches.
    pub disabled: bool,
    reactions: Vec<Reaction>,
}

impl Default for CInteractive {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CInteractive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CInteractive")
            .field("enabled", &self.enabled)
            .field("disabled", &self.disabled)
            .field("reactions", &self.reactions.len())
            .finish()
    }
}

impl CInteractive {
    pub fn new() -> Self {
        Self { enabled: false, disabled: false, reactions: Vec::new() }
    }

    pub fn on_click<F>(mut self, reaction: F) -> Self
    where
        F: Fn(&mut Game, &mut World, Entity) + 'static,
    {
        self.register(reaction);
        self
    }

    pub fn register<F>(&mut self, reaction: F)
    where
        F: Fn(&mut Game, &mut World, Entity) + 'static,
    {
        self.reactions.push(Rc::new(reaction));
    }

    pub fn reactions(&self) -> &[Reaction] {
        &self.reactions
    }

    pub fn is_clickable(&self) -> bool {
        self.enabled && !self.disabled
    }
}

/// First clickable object whose box contains `point`, in storage order.
/// Hit boxes of one view are laid out not to overlap, so the order only
/// matters for broken layouts.
pub fn hit_test(world: &World, point: Vec2) -> Option<Entity> {
    world
        .query_pair::<CInteractive, CTransform>()
        .into_iter()
        .find(|(_, interactive, transform)| {
            interactive.is_clickable() && transform.contains(point)
        })
        .map(|(entity, _, _)| entity)
}

/// Runs every reaction of the object under `point`. Returns the object, or
/// `None` when the click hit nothing.
pub fn dispatch_click(game: &mut Game, world: &mut World, point: Vec2) -> Option<Entity> {
    let Some(target) = hit_test(world, point) else {
        debug!(x = point.x, y = point.y, "click hit nothing");
        return None;
    };

    // Cloned so reactions can freely mutate (or despawn) the target.
    let reactions: Vec<Reaction> = world
        .get_component::<CInteractive>(target)
        .map(|interactive| interactive.reactions.clone())
        .unwrap_or_default();

    let label = world.get_component::<CLabel>(target).map_or("unnamed", |l| l.0);
    debug!(?target, label, reactions = reactions.len(), "click dispatched");

    for reaction in reactions {
        reaction(game, world, target);
    }
    Some(target)
}
