//! Border geometry: perimeter outlines and influence rings.
//!
//! Two independent derivations drive the chart's outlines:
//!
//! - **Perimeter outline** — every cell on the edge of an item's footprint,
//!   tagged with the side(s) it lies on. A pure function of the footprint.
//! - **Ring outline** — for ring-bearing items, the perimeter of a square box
//!   centred on the footprint and clamped to the grid. Ring cells never sit on
//!   an item footprint, and when two rings cross the item that claims a cell
//!   first keeps it.
//!
//! Because suppression and first-claim depend on the whole layout, rings are
//! reconciled as one pass over all items ([`reconcile_rings`]) after every
//! mutation rather than derived per item in isolation.

use std::collections::HashMap;

use seating_core::{Cell, Footprint, GridSpace, Item, ItemId};
use serde::{Deserialize, Serialize};

/// Which sides of a cell carry an outline segment. Corner cells carry two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edges {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Edges {
    pub const NONE: Edges = Edges {
        top: false,
        bottom: false,
        left: false,
        right: false,
    };

    /// Edges of `cell` that lie on the boundary of the inclusive box
    /// `[row_start, row_end] x [col_start, col_end]`.
    #[must_use]
    pub fn on_box(cell: Cell, row_start: i64, row_end: i64, col_start: i64, col_end: i64) -> Self {
        let (r, c) = (i64::from(cell.row), i64::from(cell.col));
        Self {
            top: r == row_start,
            bottom: r == row_end,
            left: c == col_start,
            right: c == col_end,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !(self.top || self.bottom || self.left || self.right)
    }

    /// Names of the set edges in top, bottom, left, right order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + use<> {
        [
            (self.top, "top"),
            (self.bottom, "bottom"),
            (self.left, "left"),
            (self.right, "right"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
    }
}

/// A cell that carries part of an item's perimeter outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineCell {
    pub cell: Cell,
    pub edges: Edges,
}

/// Visual style of a ring outline, selected by ring size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RingVariant {
    /// Rings narrower than 20 cells (the level-3 city's 16x16 ring).
    Standard,
    /// Rings 20 cells or wider (the level-4 city's 20x20 ring).
    Wide,
}

impl RingVariant {
    #[must_use]
    pub const fn for_ring_size(ring_size: u32) -> Self {
        if ring_size >= 20 {
            RingVariant::Wide
        } else {
            RingVariant::Standard
        }
    }
}

/// A cell that carries part of an item's ring outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingCell {
    pub cell: Cell,
    pub edges: Edges,
    pub variant: RingVariant,
}

/// Inclusive, grid-clamped bounding box of an influence ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingBox {
    /// Cells between the footprint and the ring on each side, before clamping.
    pub offset: i64,
    pub row_start: i32,
    pub col_start: i32,
    pub row_end: i32,
    pub col_end: i32,
}

impl RingBox {
    /// Perimeter cells of the box in row-major order. Interior cells are
    /// never part of the ring.
    #[must_use]
    pub fn perimeter(&self) -> Vec<OutlineCell> {
        let (rs, re) = (i64::from(self.row_start), i64::from(self.row_end));
        let (cs, ce) = (i64::from(self.col_start), i64::from(self.col_end));
        let mut cells = Vec::new();
        for row in self.row_start..=self.row_end {
            for col in self.col_start..=self.col_end {
                let cell = Cell::new(row, col);
                let edges = Edges::on_box(cell, rs, re, cs, ce);
                if !edges.is_empty() {
                    cells.push(OutlineCell { cell, edges });
                }
            }
        }
        cells
    }
}

/// Tags every edge cell of `footprint` with the side(s) it lies on.
///
/// Independent of grid state: the outline follows the footprint alone.
#[must_use]
pub fn perimeter_outline(footprint: &Footprint) -> Vec<OutlineCell> {
    let (rs, re) = (i64::from(footprint.row()), footprint.bottom_row());
    let (cs, ce) = (i64::from(footprint.col()), footprint.right_col());
    footprint
        .cells()
        .filter_map(|cell| {
            let edges = Edges::on_box(cell, rs, re, cs, ce);
            (!edges.is_empty()).then_some(OutlineCell { cell, edges })
        })
        .collect()
}

/// Computes the ring box for a square `footprint` with a ring of side
/// `ring_size`.
///
/// `offset = floor((ring_size - width) / 2)`. Each of the four sides is
/// clamped to the grid on its own, so a ring near a grid edge comes out
/// asymmetric. Returns `None` if the box misses the grid entirely.
#[must_use]
pub fn ring_box(grid: &GridSpace, footprint: &Footprint, ring_size: u32) -> Option<RingBox> {
    let offset = (i64::from(ring_size) - i64::from(footprint.width)).div_euclid(2);
    let max = i64::from(grid.max_index());
    let (top, left) = (
        i64::from(footprint.row()) - offset,
        i64::from(footprint.col()) - offset,
    );
    let (bottom, right) = (
        footprint.row_end() + offset - 1,
        footprint.col_end() + offset - 1,
    );
    if max < 0 || top > bottom || left > right || bottom < 0 || right < 0 || top > max || left > max
    {
        return None;
    }
    Some(RingBox {
        offset,
        row_start: grid.clamp_index(top),
        col_start: grid.clamp_index(left),
        row_end: grid.clamp_index(bottom),
        col_end: grid.clamp_index(right),
    })
}

/// Read-only view of which cells are covered by item footprints.
pub trait CellOccupancy {
    fn is_occupied(&self, cell: Cell) -> bool;
}

impl CellOccupancy for std::collections::HashSet<Cell> {
    fn is_occupied(&self, cell: Cell) -> bool {
        self.contains(&cell)
    }
}

/// Ring cells keyed by cell, remembering which item claimed each one first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RingClaims {
    claims: HashMap<Cell, (ItemId, RingCell)>,
}

impl RingClaims {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `ring.cell` for `owner` unless another item already holds it.
    ///
    /// Returns `true` if `owner` holds the cell afterwards.
    pub fn claim(&mut self, owner: ItemId, ring: RingCell) -> bool {
        let (holder, _) = *self.claims.entry(ring.cell).or_insert((owner, ring));
        holder == owner
    }

    /// The item holding `cell`, if any.
    #[must_use]
    pub fn owner(&self, cell: Cell) -> Option<ItemId> {
        self.claims.get(&cell).map(|(owner, _)| *owner)
    }

    /// The ring cell drawn at `cell`, if any.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<&RingCell> {
        self.claims.get(&cell).map(|(_, ring)| ring)
    }

    /// All ring cells held by `owner`, in row-major order.
    #[must_use]
    pub fn cells_for(&self, owner: ItemId) -> Vec<RingCell> {
        let mut cells: Vec<RingCell> = self
            .claims
            .values()
            .filter(|(holder, _)| *holder == owner)
            .map(|(_, ring)| *ring)
            .collect();
        cells.sort_by_key(|ring| ring.cell);
        cells
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}

/// Recomputes every ring from scratch.
///
/// Items are visited in the order given, which decides who wins a cell two
/// rings both cover. Cells under any footprint are skipped.
#[must_use]
pub fn reconcile_rings<'a>(
    grid: &GridSpace,
    items: impl IntoIterator<Item = &'a Item>,
    occupancy: &impl CellOccupancy,
) -> RingClaims {
    let mut claims = RingClaims::new();
    for item in items {
        let Some(ring_size) = item.ring_size else {
            continue;
        };
        let Some(bounds) = ring_box(grid, &item.footprint, ring_size) else {
            continue;
        };
        let variant = RingVariant::for_ring_size(ring_size);
        for outline in bounds.perimeter() {
            if occupancy.is_occupied(outline.cell) {
                continue;
            }
            claims.claim(
                item.id,
                RingCell {
                    cell: outline.cell,
                    edges: outline.edges,
                    variant,
                },
            );
        }
    }
    claims
}

/// The outline cells to decorate for one item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Borders {
    pub perimeter: Vec<OutlineCell>,
    pub ring: Vec<RingCell>,
}

impl Borders {
    /// Perimeter of `item` plus the ring cells it currently holds in `claims`.
    #[must_use]
    pub fn for_item(item: &Item, claims: &RingClaims) -> Self {
        Self {
            perimeter: perimeter_outline(&item.footprint),
            ring: claims.cells_for(item.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use seating_core::{AllianceCityLevel, Blueprint, BuildingKind};

    use super::*;

    fn city(id: u64, level: AllianceCityLevel) -> Item {
        Item::from_blueprint(ItemId(id), level.blueprint(), level.footprint().origin)
    }

    fn occupancy_of(items: &[&Item]) -> HashSet<Cell> {
        items.iter().flat_map(|item| item.footprint.cells()).collect()
    }

    #[test]
    fn test_perimeter_of_3x3() {
        let outline = perimeter_outline(&Footprint::at(2, 2, 3, 3));
        // Every cell except the centre.
        assert_eq!(outline.len(), 8);
        assert!(!outline.iter().any(|o| o.cell == Cell::new(3, 3)));

        let corner = outline.iter().find(|o| o.cell == Cell::new(2, 2)).unwrap();
        assert!(corner.edges.top && corner.edges.left);
        assert!(!corner.edges.bottom && !corner.edges.right);

        let bottom_mid = outline.iter().find(|o| o.cell == Cell::new(4, 3)).unwrap();
        assert_eq!(
            bottom_mid.edges,
            Edges {
                bottom: true,
                ..Edges::NONE
            }
        );
    }

    #[test]
    fn test_perimeter_of_single_cell_has_all_edges() {
        let outline = perimeter_outline(&Footprint::at(0, 0, 1, 1));
        assert_eq!(outline.len(), 1);
        assert_eq!(
            outline[0].edges.names().collect::<Vec<_>>(),
            ["top", "bottom", "left", "right"]
        );
    }

    #[test]
    fn test_ring_box_lv4() {
        let grid = GridSpace::default();
        let bounds = ring_box(&grid, &Footprint::at(13, 13, 4, 4), 20).unwrap();
        assert_eq!(bounds.offset, 8);
        assert_eq!(
            (bounds.row_start, bounds.col_start, bounds.row_end, bounds.col_end),
            (5, 5, 24, 24)
        );
    }

    #[test]
    fn test_ring_box_lv3() {
        let grid = GridSpace::default();
        let bounds = ring_box(&grid, &Footprint::at(14, 14, 2, 2), 16).unwrap();
        assert_eq!(bounds.offset, 7);
        assert_eq!(
            (bounds.row_start, bounds.col_start, bounds.row_end, bounds.col_end),
            (7, 7, 22, 22)
        );
    }

    #[test]
    fn test_ring_box_clamps_each_edge_independently() {
        let grid = GridSpace::default();
        // 4x4 near the bottom-right corner: top/left unclamped, bottom/right clamped.
        let bounds = ring_box(&grid, &Footprint::at(24, 25, 4, 4), 20).unwrap();
        assert_eq!((bounds.row_start, bounds.col_start), (16, 17));
        assert_eq!((bounds.row_end, bounds.col_end), (29, 29));

        // Near the top-left corner the opposite sides clamp.
        let bounds = ring_box(&grid, &Footprint::at(1, 3, 2, 2), 16).unwrap();
        assert_eq!((bounds.row_start, bounds.col_start), (0, 0));
        assert_eq!((bounds.row_end, bounds.col_end), (9, 11));
    }

    #[test]
    fn test_ring_offset_floors_odd_difference() {
        let grid = GridSpace::default();
        let bounds = ring_box(&grid, &Footprint::at(10, 10, 2, 2), 5).unwrap();
        assert_eq!(bounds.offset, 1);
    }

    #[test]
    fn test_ring_box_off_grid_is_none() {
        let grid = GridSpace::default();
        assert!(ring_box(&grid, &Footprint::at(40, 40, 2, 2), 4).is_none());
        assert!(ring_box(&grid, &Footprint::at(-9, 3, 2, 2), 4).is_none());
        assert!(ring_box(&GridSpace::new(0), &Footprint::at(0, 0, 1, 1), 3).is_none());
        // Partly on the grid still yields a clamped box.
        let bounds = ring_box(&grid, &Footprint::at(-2, 0, 2, 2), 4).unwrap();
        assert_eq!((bounds.row_start, bounds.row_end), (0, 0));
    }

    #[test]
    fn test_ring_box_perimeter_only() {
        let grid = GridSpace::default();
        let bounds = ring_box(&grid, &Footprint::at(14, 14, 2, 2), 16).unwrap();
        let cells = bounds.perimeter();
        // 16x16 box: 4 * 16 - 4 perimeter cells.
        assert_eq!(cells.len(), 60);
        assert!(cells.iter().all(|o| !o.edges.is_empty()));
        assert!(!cells.iter().any(|o| o.cell == Cell::new(10, 10)));
    }

    #[test]
    fn test_reconcile_skips_footprint_cells() {
        let grid = GridSpace::default();
        let lv3 = city(1, AllianceCityLevel::Lv3);
        // A warehouse sitting on the ring's top edge.
        let warehouse = Item::from_blueprint(
            ItemId(2),
            Blueprint::building(BuildingKind::Warehouse),
            Cell::new(7, 10),
        );
        let occupancy = occupancy_of(&[&lv3, &warehouse]);
        let claims = reconcile_rings(&grid, [&lv3, &warehouse], &occupancy);

        assert_eq!(claims.owner(Cell::new(7, 10)), None);
        assert_eq!(claims.owner(Cell::new(7, 11)), None);
        assert_eq!(claims.owner(Cell::new(7, 12)), Some(lv3.id));
        // Interior and footprint cells are never ring cells.
        assert_eq!(claims.owner(Cell::new(14, 14)), None);
        assert_eq!(claims.len(), 58);
    }

    #[test]
    fn test_first_claim_wins() {
        let grid = GridSpace::default();
        let first = Item::from_blueprint(
            ItemId(1),
            AllianceCityLevel::Lv3.blueprint(),
            Cell::new(5, 5),
        );
        let second = Item::from_blueprint(
            ItemId(2),
            AllianceCityLevel::Lv3.blueprint(),
            Cell::new(5, 12),
        );
        let occupancy = occupancy_of(&[&first, &second]);
        let claims = reconcile_rings(&grid, [&first, &second], &occupancy);

        // Both rings cover row 0 at column 5..=12; the first item keeps them.
        assert_eq!(claims.owner(Cell::new(0, 8)), Some(first.id));
        let reversed = reconcile_rings(&grid, [&second, &first], &occupancy);
        assert_eq!(reversed.owner(Cell::new(0, 8)), Some(second.id));
    }

    #[test]
    fn test_ring_variant_selection() {
        assert_eq!(RingVariant::for_ring_size(16), RingVariant::Standard);
        assert_eq!(RingVariant::for_ring_size(20), RingVariant::Wide);
        let grid = GridSpace::default();
        let lv4 = city(1, AllianceCityLevel::Lv4);
        let claims = reconcile_rings(&grid, [&lv4], &occupancy_of(&[&lv4]));
        assert!(
            claims
                .cells_for(lv4.id)
                .iter()
                .all(|ring| ring.variant == RingVariant::Wide)
        );
    }

    #[test]
    fn test_borders_for_item_without_ring() {
        let grid = GridSpace::default();
        let tile = Item::from_blueprint(
            ItemId(4),
            Blueprint::building(BuildingKind::RssTile),
            Cell::new(0, 0),
        );
        let claims = reconcile_rings(&grid, [&tile], &occupancy_of(&[&tile]));
        let borders = Borders::for_item(&tile, &claims);
        assert_eq!(borders.perimeter.len(), 4);
        assert!(borders.ring.is_empty());
    }
}
