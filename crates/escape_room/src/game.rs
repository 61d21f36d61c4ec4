// crates/escape_room/src/game.rs

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use engine_ecs::{Entity, World};
use engine_shared::{CCamera, CLabel, CSprite, CTransform, GameEvent, GameLogic, PointerState};
use glam::Vec2;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::cues::{Cue, CueQueue};
use crate::error::SetupError;
use crate::hotbar::Hotbar;
use crate::interaction::{self, CInteractive};
use crate::inventory::Inventory;
use crate::puzzles::Puzzles;
use crate::scene::{self, SceneHandles};
use crate::systems;
use crate::view::{self, CView, View, ViewRegistry};

/// Everything the room knows apart from the `World` itself, which the host
/// owns and lends to every call.
pub struct Game {
    config: GameConfig,
    pub(crate) inventory: Inventory,
    pub(crate) views: ViewRegistry,
    pub(crate) puzzles: Puzzles,
    pub(crate) cues: CueQueue,
    pub(crate) handles: Option<SceneHandles>,
    pub(crate) escaped: bool,
    hotbar: Rc<RefCell<Hotbar>>,
    exit_visible: bool,
    pointer: PointerState,
}

impl Game {
    /// Validates the puzzle configuration and wires the hotbar to the
    /// inventory. The scene itself is built by `setup`.
    pub fn new(config: GameConfig) -> Result<Self, SetupError> {
        let puzzles = Puzzles::from_config(&config.puzzles)?;

        let hotbar = Rc::new(RefCell::new(Hotbar::default()));
        let mut inventory = Inventory::new();
        let sink = Rc::clone(&hotbar);
        inventory.subscribe(move |state| sink.borrow_mut().rebuild(state));

        Ok(Self {
            config,
            inventory,
            views: ViewRegistry::new(),
            puzzles,
            cues: CueQueue::default(),
            handles: None,
            escaped: false,
            hotbar,
            exit_visible: false,
            pointer: PointerState::default(),
        })
    }

    /// Builds the room into `world`, checks it, and shows the top-level
    /// view. Fails fast on any configuration fault; a rejected scene is
    /// despawned again, leaving `world` and `self` as they were.
    pub fn setup(&mut self, world: &mut World) -> Result<(), SetupError> {
        if self.handles.is_some() {
            return Err(SetupError::AlreadyLoaded);
        }

        register_components(world);
        let mut views = ViewRegistry::new();
        let handles = scene::build(world, &mut views, &self.config)?;
        if let Err(err) = scene::validate(world, &views) {
            scene::discard(world, &views, &handles);
            return Err(err);
        }
        self.views = views;
        self.handles = Some(handles);

        self.show(world, View::TOP_LEVEL);
        info!(entities = world.entity_count(), "escape room ready");
        Ok(())
    }

    /// Switches the active view. Re-showing the active view is a reset:
    /// partial codes and sequences are dropped either way.
    pub fn show(&mut self, world: &mut World, view: View) {
        self.views.show(world, view);
        self.puzzles.reset_transient();
        self.exit_visible = view != View::TOP_LEVEL;
        self.refresh_world_state(world, view);
    }

    /// The shell's "exit" affordance: back to the parent view.
    pub fn exit_view(&mut self, world: &mut World) {
        match self.views.active().and_then(View::parent) {
            Some(parent) => self.show(world, parent),
            None => debug!("exit requested on the top-level view"),
        }
    }

    pub fn click(&mut self, world: &mut World, point: Vec2) -> Option<Entity> {
        interaction::dispatch_click(self, world, point)
    }

    /// A click on the n-th hotbar slot toggles that item's selection.
    pub fn select_slot(&mut self, slot: usize) {
        let item = self.hotbar.borrow().item_at(slot);
        match item {
            Some(item) => self.inventory.toggle_selection(item),
            None => debug!(slot, "empty hotbar slot"),
        }
    }

    /// Re-derives the visuals of state-dependent objects in `view` from
    /// puzzle state. Only meaningful while `view` is active.
    pub(crate) fn refresh_world_state(&self, world: &mut World, view: View) {
        let Some(handles) = &self.handles else {
            return;
        };

        match view {
            View::FrontRoom => {
                let broken = self.puzzles.saw.is_solved();
                self.present(world, handles.chair_intact, !broken);
                self.present(world, handles.chair_broken, broken);
                self.present(world, handles.stick, broken);
            }
            View::Candelabra => {
                for (index, flame) in handles.flames.iter().enumerate() {
                    self.present(world, *flame, self.puzzles.candles.is_on(index));
                }
            }
            View::SawPuzzle => {
                let repaired = self.puzzles.wire_repaired;
                self.present(world, handles.wire_broken, !repaired);
                self.present(world, handles.wire_fixed, repaired);
            }
            View::Painting => {
                let open = self.puzzles.safe.is_solved();
                self.present(world, handles.safe_closed, !open);
                self.present(world, handles.safe_open, open);
            }
            View::BackRoom | View::CardTerminal => {}
        }
    }

    /// Presence change that never resurrects a retired or despawned object.
    pub(crate) fn present(&self, world: &mut World, entity: Entity, present: bool) {
        if world.is_alive(entity) && !self.views.is_retired(entity) {
            view::set_presence(world, entity, present);
        }
    }

    pub(crate) fn despawn(&mut self, world: &mut World, entity: Entity) {
        self.views.forget(entity);
        world.despawn(entity);
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn views(&self) -> &ViewRegistry {
        &self.views
    }

    pub fn active_view(&self) -> Option<View> {
        self.views.active()
    }

    pub fn puzzles(&self) -> &Puzzles {
        &self.puzzles
    }

    pub fn hotbar(&self) -> Ref<'_, Hotbar> {
        self.hotbar.borrow()
    }

    pub fn handles(&self) -> Option<&SceneHandles> {
        self.handles.as_ref()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Whether the shell should offer its "exit current view" button.
    pub fn exit_visible(&self) -> bool {
        self.exit_visible
    }

    pub fn escaped(&self) -> bool {
        self.escaped
    }

    pub fn pending_cues(&self) -> &[Cue] {
        self.cues.pending()
    }

    pub fn take_cues(&mut self) -> Vec<Cue> {
        self.cues.take()
    }
}

/// Registers every component the room uses. Types the host already
/// registered are left alone.
pub fn register_components(world: &mut World) {
    fn ensure<T: 'static>(world: &mut World) {
        if !world.is_registered::<T>() {
            world.register_component::<T>();
        }
    }

    ensure::<CTransform>(world);
    ensure::<CSprite>(world);
    ensure::<CCamera>(world);
    ensure::<CLabel>(world);
    ensure::<CView>(world);
    ensure::<CInteractive>(world);
}

impl GameLogic for Game {
    type Error = SetupError;

    fn on_load(&mut self, world: &mut World) -> Result<(), SetupError> {
        self.setup(world)
    }

    fn on_event(&mut self, world: &mut World, event: &GameEvent) {
        match *event {
            GameEvent::Click { world: point } => {
                self.click(world, point);
            }
            GameEvent::Back => self.exit_view(world),
            GameEvent::HotbarSlot(slot) => self.select_slot(slot),
        }
    }

    fn update(&mut self, world: &mut World, pointer: &PointerState, _dt: f32) {
        self.pointer = *pointer;

        if let Some(handles) = &self.handles {
            systems::peephole::update_peephole(world, handles.keyhole, handles.backroom, pointer.clip);
        }

        for cue in self.cues.take() {
            debug!(target: "audio", ?cue, "play cue");
        }
    }

    fn on_unload(&mut self, _world: &mut World) {
        info!(escaped = self.escaped, "escape room unloaded");
    }
}
