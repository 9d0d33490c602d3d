//! Grid ↔ in-game coordinate transform.
//!
//! Grid rows grow downward while the game's Y axis grows upward, so the row
//! is flipped; the game's X axis tracks the grid column directly. An item is
//! labelled by its bottom-left cell.

use glam::IVec2;
use seating_core::{Cell, Footprint, GridSpace, Item};
use serde::{Deserialize, Serialize};

/// Maps grid cells onto the game's world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinateMapper {
    /// Game X of grid column 0.
    pub x_min: i32,
    /// Game Y of the bottom grid row.
    pub y_min: i32,
    /// Grid side length.
    pub side: u32,
}

impl CoordinateMapper {
    /// Game X of the region's left edge.
    pub const DEFAULT_X_MIN: i32 = 545;

    /// Game Y of the region's bottom edge.
    pub const DEFAULT_Y_MIN: i32 = 624;

    #[must_use]
    pub const fn new(x_min: i32, y_min: i32, grid: GridSpace) -> Self {
        Self {
            x_min,
            y_min,
            side: grid.side(),
        }
    }

    /// Game coordinates of a single cell.
    ///
    /// Saturates at the `i32` limits rather than wrapping; layout
    /// configurations are range-checked so real grids never get there.
    #[must_use]
    pub const fn cell_to_game(&self, cell: Cell) -> IVec2 {
        let flipped_row = self.last_row().saturating_sub(cell.row);
        IVec2::new(
            self.x_min.saturating_add(cell.col),
            self.y_min.saturating_add(flipped_row),
        )
    }

    /// Game coordinates of a footprint: those of its bottom-left cell.
    #[must_use]
    pub const fn footprint_to_game(&self, footprint: &Footprint) -> IVec2 {
        self.cell_to_game(footprint.bottom_left())
    }

    /// Game coordinates shown for a placed item.
    #[must_use]
    pub const fn to_game_coordinates(&self, item: &Item) -> IVec2 {
        self.footprint_to_game(&item.footprint)
    }

    /// Inverse of [`cell_to_game`](Self::cell_to_game).
    #[must_use]
    pub const fn game_to_cell(&self, point: IVec2) -> Cell {
        let flipped_row = point.y.saturating_sub(self.y_min);
        Cell::new(
            self.last_row().saturating_sub(flipped_row),
            point.x.saturating_sub(self.x_min),
        )
    }

    /// Inverse of [`footprint_to_game`](Self::footprint_to_game): the
    /// footprint of the given size whose bottom-left cell sits at `point`.
    #[must_use]
    pub const fn game_to_footprint(&self, point: IVec2, width: u32, height: u32) -> Footprint {
        let bottom_left = self.game_to_cell(point);
        let top = bottom_left.row as i64 - (height as i64 - 1);
        let top = if top < i32::MIN as i64 {
            i32::MIN
        } else if top > i32::MAX as i64 {
            i32::MAX
        } else {
            top as i32
        };
        Footprint::at(top, bottom_left.col, width, height)
    }

    const fn last_row(&self) -> i32 {
        (self.side as i32).saturating_sub(1)
    }

    /// Label text in the chart's `x:{x} y:{y}` form.
    #[must_use]
    pub fn label(point: IVec2) -> String {
        format!("x:{} y:{}", point.x, point.y)
    }
}

impl Default for CoordinateMapper {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_X_MIN,
            Self::DEFAULT_Y_MIN,
            GridSpace::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bottom_left_cell_maps_to_origin() {
        let mapper = CoordinateMapper::default();
        let fp = Footprint::at(29, 0, 1, 1);
        assert_eq!(mapper.footprint_to_game(&fp), IVec2::new(545, 624));
    }

    #[test]
    fn test_top_right_cell() {
        let mapper = CoordinateMapper::default();
        let fp = Footprint::at(0, 29, 1, 1);
        assert_eq!(mapper.footprint_to_game(&fp), IVec2::new(574, 653));
    }

    #[test]
    fn test_multi_cell_item_uses_bottom_left() {
        let mapper = CoordinateMapper::default();
        // A 3x3 at (10, 4) has its bottom-left cell at (12, 4).
        let fp = Footprint::at(10, 4, 3, 3);
        assert_eq!(mapper.footprint_to_game(&fp), IVec2::new(549, 641));
    }

    #[test]
    fn test_round_trip() {
        let mapper = CoordinateMapper::default();
        for fp in [
            Footprint::at(0, 0, 2, 2),
            Footprint::at(13, 13, 4, 4),
            Footprint::at(27, 5, 3, 3),
        ] {
            let point = mapper.footprint_to_game(&fp);
            assert_eq!(mapper.game_to_footprint(point, fp.width, fp.height), fp);
        }
    }

    #[test]
    fn test_custom_origin_and_side() {
        let mapper = CoordinateMapper::new(100, 200, GridSpace::new(10));
        assert_eq!(mapper.cell_to_game(Cell::new(9, 0)), IVec2::new(100, 200));
        assert_eq!(mapper.cell_to_game(Cell::new(0, 9)), IVec2::new(109, 209));
    }

    #[test]
    fn test_extreme_origin_saturates() {
        let mapper = CoordinateMapper::new(i32::MAX, i32::MIN, GridSpace::default());
        assert_eq!(
            mapper.cell_to_game(Cell::new(0, 5)),
            IVec2::new(i32::MAX, i32::MIN + 29)
        );
        assert_eq!(mapper.game_to_cell(IVec2::new(i32::MIN, i32::MAX)).col, i32::MIN);
    }

    #[test]
    fn test_label_format() {
        assert_eq!(CoordinateMapper::label(IVec2::new(545, 624)), "x:545 y:624");
    }
}
