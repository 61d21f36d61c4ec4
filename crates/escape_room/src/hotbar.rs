// crates/escape_room/src/hotbar.rs

//! Hotbar model: what the inventory UI shows. Rebuilt from scratch by an
//! inventory subscriber after every mutation.

use crate::inventory::{InventoryState, Item};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotbarSlot {
    pub item: Item,
    pub selected: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hotbar {
    slots: Vec<HotbarSlot>,
    preview: Option<Item>,
    revision: u64,
}

impl Hotbar {
    pub fn rebuild(&mut self, state: &InventoryState) {
        self.slots = state
            .owned_items()
            .map(|item| HotbarSlot { item, selected: state.is_selected(item) })
            .collect();
        self.preview = state
            .selected()
            .filter(|item| item.is_previewable() && state.owns(*item));
        self.revision += 1;
    }

    pub fn slots(&self) -> &[HotbarSlot] {
        &self.slots
    }

    pub fn item_at(&self, slot: usize) -> Option<Item> {
        self.slots.get(slot).map(|s| s.item)
    }

    /// Item shown in the large preview panel, if any.
    pub fn preview(&self) -> Option<Item> {
        self.preview
    }

    pub fn preview_image(&self) -> Option<String> {
        self.preview.map(|item| format!("./{item}.png"))
    }

    /// Bumped on every rebuild, so a UI can skip redundant redraws.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::Inventory;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn wired() -> (Inventory, Rc<RefCell<Hotbar>>) {
        let hotbar = Rc::new(RefCell::new(Hotbar::default()));
        let mut inventory = Inventory::new();
        let sink = Rc::clone(&hotbar);
        inventory.subscribe(move |state| sink.borrow_mut().rebuild(state));
        (inventory, hotbar)
    }

    #[test]
    fn slots_track_owned_items_and_selection() {
        let (mut inventory, hotbar) = wired();
        inventory.set_owned(Item::Tape, true);
        inventory.set_owned(Item::Card, true);
        inventory.set_selected(Some(Item::Tape));

        let hotbar = hotbar.borrow();
        assert_eq!(
            hotbar.slots(),
            &[
                HotbarSlot { item: Item::Card, selected: false },
                HotbarSlot { item: Item::Tape, selected: true },
            ]
        );
        assert_eq!(hotbar.revision(), 3);
        assert_eq!(hotbar.preview(), None);
    }

    #[test]
    fn previewable_selection_opens_the_panel() {
        let (mut inventory, hotbar) = wired();
        inventory.set_owned(Item::Receipt, true);
        inventory.toggle_selection(Item::Receipt);
        assert_eq!(hotbar.borrow().preview_image().as_deref(), Some("./receipt.png"));

        inventory.toggle_selection(Item::Receipt);
        assert_eq!(hotbar.borrow().preview(), None);
    }
}
