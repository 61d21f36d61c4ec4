// crates/escape_room/src/rules.rs

//! What each kind of object does when clicked. Scene reactions are thin
//! closures over these methods.

use engine_ecs::{Entity, World};
use tracing::{debug, info};

use crate::cues::Cue;
use crate::game::Game;
use crate::inventory::Item;
use crate::puzzles::{KeypadId, KeypadKey, Progress};
use crate::view::View;

impl Game {
    pub(crate) fn pick_up(&mut self, world: &mut World, entity: Entity, item: Item) {
        self.despawn(world, entity);
        self.inventory.set_owned(item, true);
        self.cues.push(Cue::Pickup);
        info!(%item, "picked up");
    }

    /// Front door: with the key armed the player walks out, otherwise they
    /// peek through the keyhole.
    pub(crate) fn try_door(&mut self, world: &mut World) {
        if self.inventory.is_armed(Item::Key) {
            self.escaped = true;
            self.cues.push(Cue::Success);
            info!("door unlocked, room escaped");
        } else {
            self.show(world, View::BackRoom);
        }
    }

    pub(crate) fn press_key(&mut self, world: &mut World, pad: KeypadId, key: KeypadKey) {
        self.cues.push(Cue::Click);

        if pad == KeypadId::Safe && !self.puzzles.screws.is_complete() {
            debug!("safe is still behind the painting");
            return;
        }

        let armed = match pad {
            KeypadId::Terminal => self.inventory.is_armed(Item::Card),
            KeypadId::Safe => true,
        };

        let keypad = self.puzzles.keypad_mut(pad);
        let progress = match key {
            KeypadKey::Digit(digit) => keypad.press(digit, armed),
            KeypadKey::Enter => keypad.enter(armed),
        };

        match progress {
            Progress::Solved => self.keypad_solved(world, pad),
            Progress::Failed => {
                self.cues.push(Cue::Failure);
                info!(?pad, armed, "code rejected");
            }
            Progress::Accumulating | Progress::Ignored => {}
        }
    }

    fn keypad_solved(&mut self, world: &mut World, pad: KeypadId) {
        self.cues.push(Cue::Success);
        match pad {
            KeypadId::Terminal => {
                self.inventory.set_owned(Item::Card, false);
                self.inventory.set_owned(Item::Receipt, true);
                info!("card terminal printed a receipt");
            }
            KeypadId::Safe => {
                if let Some(handles) = &self.handles {
                    for key in handles.safe_keys.all() {
                        self.views.retire(world, key);
                    }
                }
                self.inventory.set_owned(Item::Key, true);
                self.refresh_world_state(world, View::Painting);
                info!("safe opened");
            }
        }
    }

    pub(crate) fn flip_candle(&mut self, world: &mut World, index: usize) {
        self.cues.push(Cue::Click);

        let progress = self.puzzles.candles.flip(index);
        if progress == Progress::Ignored {
            return;
        }

        if let Some(flame) = self.handles.as_ref().and_then(|h| h.flames.get(index).copied()) {
            self.present(world, flame, self.puzzles.candles.is_on(index));
        }

        if progress == Progress::Solved {
            self.inventory.set_owned(Item::Tape, true);
            self.cues.push(Cue::Success);
            info!("candle pattern matched, tape found");
        }
    }

    pub(crate) fn repair_wire(&mut self, world: &mut World) {
        if !self.inventory.is_armed(Item::Tape) {
            self.cues.push(Cue::Click);
            debug!("wire needs tape");
            return;
        }

        self.puzzles.wire_repaired = true;
        self.inventory.set_owned(Item::Tape, false);
        self.cues.push(Cue::Success);
        self.refresh_world_state(world, View::SawPuzzle);
        info!("wire taped, saw panel powered");
    }

    pub(crate) fn press_saw_button(&mut self, index: usize) {
        // Acknowledged even without power.
        self.cues.push(Cue::Click);

        match self.puzzles.saw.press(index, self.puzzles.wire_repaired) {
            Progress::Solved => {
                self.cues.push(Cue::Success);
                info!("saw ran, the chair is in pieces");
            }
            Progress::Failed => {
                self.cues.push(Cue::Failure);
                info!("wrong saw sequence");
            }
            Progress::Ignored => debug!(index, "saw panel has no power"),
            Progress::Accumulating => {}
        }
    }

    pub(crate) fn remove_screw(&mut self, world: &mut World, entity: Entity, index: usize) {
        let tool_ready = self.inventory.is_armed(Item::Screwdriver);
        match self.puzzles.screws.remove(index, tool_ready) {
            Progress::Ignored => {
                self.cues.push(Cue::Click);
                debug!(index, tool_ready, "screw stays put");
            }
            Progress::Accumulating => {
                self.views.retire(world, entity);
                self.cues.push(Cue::Click);
                info!(remaining = self.puzzles.screws.remaining(), "screw removed");
            }
            Progress::Solved => {
                self.views.retire(world, entity);
                if let Some(painting) = self.handles.as_ref().map(|h| h.painting) {
                    self.despawn(world, painting);
                }
                self.cues.push(Cue::Success);
                info!("last screw out, painting removed");
            }
            // Removal has no failure state.
            Progress::Failed => {}
        }
    }

    /// The gap under the sofa: the stick fishes out the screwdriver.
    pub(crate) fn fish_under_sofa(&mut self, world: &mut World, entity: Entity) {
        if !self.inventory.is_armed(Item::Stick) {
            self.cues.push(Cue::Click);
            debug!("something glints under the sofa, out of reach");
            return;
        }

        self.views.retire(world, entity);
        self.inventory.set_owned(Item::Stick, false);
        self.inventory.set_owned(Item::Screwdriver, true);
        self.cues.push(Cue::Pickup);
        info!("fished the screwdriver out from under the sofa");
    }
}
