//! The authoritative set of placed items.
//!
//! Items are stored by ID with a cell → ID map alongside, so a point or
//! footprint query never scans the item list. Insertion order is kept for
//! listing. Mutation is crate-private: only [`Layout`](crate::Layout) may
//! change the index, and only after validation.

use std::collections::HashMap;

use seating_core::{BuildingKind, Cell, Footprint, Item, ItemId};
use seating_geometry::CellOccupancy;

#[derive(Debug, Clone, Default)]
pub struct OccupancyIndex {
    /// Item IDs in insertion order.
    order: Vec<ItemId>,
    items: HashMap<ItemId, Item>,
    /// Every footprint cell, mapped to the item covering it.
    cells: HashMap<Cell, ItemId>,
}

impl OccupancyIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    /// The item whose footprint covers `cell`, if any.
    #[must_use]
    pub fn occupant(&self, cell: Cell) -> Option<ItemId> {
        self.cells.get(&cell).copied()
    }

    #[must_use]
    pub fn find_at(&self, cell: Cell) -> Option<&Item> {
        self.occupant(cell).and_then(|id| self.items.get(&id))
    }

    /// Items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.order.iter().filter_map(|id| self.items.get(id))
    }

    /// The first cell of `footprint` (row-major) already covered by an item
    /// other than `ignore`.
    #[must_use]
    pub fn first_overlap(
        &self,
        footprint: &Footprint,
        ignore: Option<ItemId>,
    ) -> Option<(Cell, ItemId)> {
        footprint.cells().find_map(|cell| {
            self.occupant(cell)
                .filter(|occupant| Some(*occupant) != ignore)
                .map(|occupant| (cell, occupant))
        })
    }

    /// Number of placed items of the given building subtype.
    #[must_use]
    pub fn count_subtype(&self, kind: BuildingKind) -> usize {
        self.items
            .values()
            .filter(|item| item.subtype() == Some(kind))
            .count()
    }

    /// The fixed item, if one is placed.
    #[must_use]
    pub fn fixed_item(&self) -> Option<&Item> {
        self.iter().find(|item| item.is_fixed)
    }

    /// Appends a validated item. Returns its position in the listing.
    pub(crate) fn insert(&mut self, item: Item) -> usize {
        let position = self.order.len();
        self.insert_at(position, item);
        position
    }

    /// Inserts a validated item at `position` in the listing.
    pub(crate) fn insert_at(&mut self, position: usize, item: Item) {
        debug_assert!(
            self.first_overlap(&item.footprint, None).is_none(),
            "inserting {} over an occupied cell",
            item.id
        );
        for cell in item.footprint.cells() {
            self.cells.insert(cell, item.id);
        }
        let position = position.min(self.order.len());
        self.order.insert(position, item.id);
        self.items.insert(item.id, item);
    }

    /// Removes an item, returning its listing position and the item.
    pub(crate) fn remove(&mut self, id: ItemId) -> Option<(usize, Item)> {
        let item = self.items.remove(&id)?;
        for cell in item.footprint.cells() {
            self.cells.remove(&cell);
        }
        let position = self.order.iter().position(|other| *other == id)?;
        self.order.remove(position);
        Some((position, item))
    }
}

impl CellOccupancy for OccupancyIndex {
    fn is_occupied(&self, cell: Cell) -> bool {
        self.cells.contains_key(&cell)
    }
}
