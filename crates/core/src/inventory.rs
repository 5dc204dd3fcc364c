//! Inventory - item counts as a pure value
//!
//! Every operation returns a new inventory. A missing key counts as zero, and
//! a count decremented to zero stays in the map.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::library::RuntimePiece;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: BTreeMap<String, u32>,
}

/// Outcome of taking one item out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    Removed(Inventory),
    Unavailable,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current count, zero when absent
    pub fn count(&self, item_type: &str) -> u32 {
        self.items.get(item_type).copied().unwrap_or(0)
    }

    /// Copy with `count` more of `item_type`
    pub fn add_item(&self, item_type: &str, count: u32) -> Inventory {
        let mut next = self.clone();
        let entry = next.items.entry(item_type.to_string()).or_insert(0);
        *entry = entry.saturating_add(count);
        next
    }

    /// Copy with one fewer `item_type`, or `Unavailable` when there is none
    pub fn remove_item(&self, item_type: &str) -> Removal {
        if self.count(item_type) == 0 {
            return Removal::Unavailable;
        }
        let mut next = self.clone();
        if let Some(count) = next.items.get_mut(item_type) {
            *count -= 1;
        }
        Removal::Removed(next)
    }

    pub fn has_item(&self, item_type: &str) -> bool {
        self.count(item_type) > 0
    }

    /// Item types and counts, including zero counts
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.items.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

impl<'a> FromIterator<(&'a str, u32)> for Inventory {
    fn from_iter<I: IntoIterator<Item = (&'a str, u32)>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
        }
    }
}

/// Free-function form of [`Inventory::add_item`]
pub fn add_item(inventory: &Inventory, item_type: &str, count: u32) -> Inventory {
    inventory.add_item(item_type, count)
}

/// Free-function form of [`Inventory::remove_item`]
pub fn remove_item(inventory: &Inventory, item_type: &str) -> Removal {
    inventory.remove_item(item_type)
}

/// Free-function form of [`Inventory::has_item`]
pub fn has_item(inventory: &Inventory, item_type: &str) -> bool {
    inventory.has_item(item_type)
}

/// Whether placing `piece` should count towards a bomb reward
pub fn is_red_piece(piece: &RuntimePiece) -> bool {
    piece.is_red()
}
