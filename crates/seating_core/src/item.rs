//! Placed items and their identifiers.
//!
//! An [`ItemId`] is a lightweight `u64` handle allocated when an item is
//! placed. It stays stable for as long as the item is on the grid; an item
//! that is removed and placed again gets a fresh ID.

use serde::{Deserialize, Serialize};

use crate::grid::{Cell, Footprint};
use crate::kind::{Blueprint, BuildingKind, ItemKind, PlayerSize};

/// Handle of a placed item, shown as `Item(n)` in logs and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u64);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Item({})", self.0)
    }
}

/// Hands out item handles in placement order, starting from `Item(1)`.
///
/// A layout owns one allocator for its whole life, so a handle kept by a
/// collaborator after removal never names a later item.
#[derive(Debug, Clone, Default)]
pub struct ItemIdAllocator {
    issued: u64,
}

impl ItemIdAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> ItemId {
        self.issued += 1;
        ItemId(self.issued)
    }
}

/// A player or building committed to the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub kind: ItemKind,
    pub footprint: Footprint,
    /// Side of the concentric influence ring, alliance cities only.
    pub ring_size: Option<u32>,
    pub is_fixed: bool,
}

impl Item {
    /// Materialises `blueprint` at `origin` under the given ID.
    #[must_use]
    pub fn from_blueprint(id: ItemId, blueprint: Blueprint, origin: Cell) -> Self {
        let footprint = blueprint.footprint_at(origin);
        Self {
            id,
            name: blueprint.name,
            kind: blueprint.kind,
            footprint,
            ring_size: blueprint.ring_size,
            is_fixed: blueprint.fixed,
        }
    }

    /// The blueprint this item would be re-placed from.
    #[must_use]
    pub fn blueprint(&self) -> Blueprint {
        Blueprint {
            name: self.name.clone(),
            kind: self.kind,
            width: self.footprint.width,
            height: self.footprint.height,
            ring_size: self.ring_size,
            fixed: self.is_fixed,
        }
    }

    #[must_use]
    pub const fn origin(&self) -> Cell {
        self.footprint.origin
    }

    #[must_use]
    pub const fn subtype(&self) -> Option<BuildingKind> {
        self.kind.building()
    }

    #[must_use]
    pub const fn is_player(&self) -> bool {
        self.kind.is_player()
    }

    /// The keep size of a player item, if its footprint is a known size.
    #[must_use]
    pub const fn player_size(&self) -> Option<PlayerSize> {
        if !self.is_player() || !self.footprint.is_square() {
            return None;
        }
        PlayerSize::from_side(self.footprint.width)
    }

    /// Size in the `"{w}x{h}"` form.
    #[must_use]
    pub fn size_label(&self) -> String {
        self.footprint.size_label()
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) {}",
            self.name,
            self.size_label(),
            self.footprint.origin
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocator_counts_from_one() {
        let mut alloc = ItemIdAllocator::new();
        let ids: Vec<ItemId> = (0..3).map(|_| alloc.allocate()).collect();
        assert_eq!(ids, vec![ItemId(1), ItemId(2), ItemId(3)]);
        assert_eq!(ids[1].to_string(), "Item(2)");
    }

    #[test]
    fn test_item_from_blueprint() {
        let item = Item::from_blueprint(
            ItemId(7),
            Blueprint::player("Bryn", PlayerSize::Large),
            Cell::new(4, 9),
        );
        assert_eq!(item.footprint, Footprint::at(4, 9, 3, 3));
        assert_eq!(item.player_size(), Some(PlayerSize::Large));
        assert_eq!(item.subtype(), None);
        assert_eq!(item.blueprint(), Blueprint::player("Bryn", PlayerSize::Large));
    }

    #[test]
    fn test_item_display() {
        let item = Item::from_blueprint(
            ItemId(1),
            Blueprint::building(BuildingKind::Warehouse),
            Cell::new(0, 3),
        );
        assert_eq!(item.to_string(), "Warehouse (2x2) R0,C3");
    }
}
