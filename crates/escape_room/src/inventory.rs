// crates/escape_room/src/inventory.rs

//! Inventory store: one ownership flag per item plus a single selection slot.
//!
//! Every mutation goes through a setter that notifies all subscribers, in
//! registration order, after the state has changed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Item {
    Card,
    Receipt,
    Tape,
    Stick,
    Screwdriver,
    Key,
    Blueprint,
}

impl Item {
    pub const COUNT: usize = 7;

    pub const ALL: [Item; Item::COUNT] = [
        Item::Card,
        Item::Receipt,
        Item::Tape,
        Item::Stick,
        Item::Screwdriver,
        Item::Key,
        Item::Blueprint,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Item::Card => "card",
            Item::Receipt => "receipt",
            Item::Tape => "tape",
            Item::Stick => "stick",
            Item::Screwdriver => "screwdriver",
            Item::Key => "key",
            Item::Blueprint => "blueprint",
        }
    }

    /// Items that open the large preview panel while selected.
    pub fn is_previewable(self) -> bool {
        matches!(self, Item::Receipt | Item::Blueprint)
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown item `{0}`")]
pub struct UnknownItem(pub String);

impl FromStr for Item {
    type Err = UnknownItem;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Item::ALL
            .into_iter()
            .find(|item| item.name() == s)
            .ok_or_else(|| UnknownItem(s.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryState {
    owned: [bool; Item::COUNT],
    selected: Option<Item>,
}

impl InventoryState {
    pub fn owns(&self, item: Item) -> bool {
        self.owned[item.slot()]
    }

    pub fn selected(&self) -> Option<Item> {
        self.selected
    }

    pub fn is_selected(&self, item: Item) -> bool {
        self.selected == Some(item)
    }

    /// Owned items in declaration order.
    pub fn owned_items(&self) -> impl Iterator<Item = Item> + '_ {
        Item::ALL.into_iter().filter(|item| self.owns(*item))
    }
}

pub type Subscriber = Box<dyn FnMut(&InventoryState)>;

#[derive(Default)]
pub struct Inventory {
    state: InventoryState,
    subscribers: Vec<Subscriber>,
}

impl fmt::Debug for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inventory")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&InventoryState) + 'static,
    {
        self.subscribers.push(Box::new(callback));
    }

    pub fn set_owned(&mut self, item: Item, owned: bool) {
        self.state.owned[item.slot()] = owned;
        debug!(%item, owned, "inventory flag set");
        self.notify();
    }

    /// Name-based variant for scripts and config. Unknown names are ignored
    /// and nobody is notified.
    pub fn set_owned_by_name(&mut self, name: &str, owned: bool) -> bool {
        match name.parse::<Item>() {
            Ok(item) => {
                self.set_owned(item, owned);
                true
            }
            Err(err) => {
                debug!(%err, "ignoring inventory update");
                false
            }
        }
    }

    /// Ownership is not checked: any item can be armed.
    pub fn set_selected(&mut self, item: Option<Item>) {
        self.state.selected = item;
        debug!(selected = ?item, "inventory selection set");
        self.notify();
    }

    /// Hotbar behaviour: clicking the selected item deselects it, clicking
    /// anything else selects it.
    pub fn toggle_selection(&mut self, item: Item) {
        if self.state.is_selected(item) {
            self.set_selected(None);
        } else {
            self.set_selected(Some(item));
        }
    }

    pub fn state(&self) -> &InventoryState {
        &self.state
    }

    pub fn owns(&self, item: Item) -> bool {
        self.state.owns(item)
    }

    pub fn selected(&self) -> Option<Item> {
        self.state.selected()
    }

    /// True when `item` is both selected and owned.
    pub fn is_armed(&self, item: Item) -> bool {
        self.state.is_selected(item) && self.state.owns(item)
    }

    fn notify(&mut self) {
        for subscriber in self.subscribers.iter_mut() {
            subscriber(&self.state);
        }
    }
}
