//! Grid addressing: [`Cell`], [`Footprint`] and the bounds authority [`GridSpace`].
//!
//! Rows grow downward and columns grow to the right. Signed coordinates are
//! used so that a request that starts left of or above the grid can be
//! expressed and rejected as [`PlacementError::OutOfBounds`] rather than
//! being unrepresentable.

use serde::{Deserialize, Serialize};

use crate::error::PlacementError;

/// A single grid cell address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "R{},C{}", self.row, self.col)
    }
}

/// A rectangular span of cells anchored at its top-left `origin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Footprint {
    /// Top-left cell.
    pub origin: Cell,
    /// Width in cells (columns).
    pub width: u32,
    /// Height in cells (rows).
    pub height: u32,
}

impl Footprint {
    #[must_use]
    pub const fn new(origin: Cell, width: u32, height: u32) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// Shorthand for `Footprint::new(Cell::new(row, col), width, height)`.
    #[must_use]
    pub const fn at(row: i32, col: i32, width: u32, height: u32) -> Self {
        Self::new(Cell::new(row, col), width, height)
    }

    #[must_use]
    pub const fn row(&self) -> i32 {
        self.origin.row
    }

    #[must_use]
    pub const fn col(&self) -> i32 {
        self.origin.col
    }

    /// Exclusive end row, widened so huge sizes cannot overflow.
    #[must_use]
    pub const fn row_end(&self) -> i64 {
        self.origin.row as i64 + self.height as i64
    }

    /// Exclusive end column, widened so huge sizes cannot overflow.
    #[must_use]
    pub const fn col_end(&self) -> i64 {
        self.origin.col as i64 + self.width as i64
    }

    /// Last row covered by the footprint.
    #[must_use]
    pub const fn bottom_row(&self) -> i64 {
        self.row_end() - 1
    }

    /// Last column covered by the footprint.
    #[must_use]
    pub const fn right_col(&self) -> i64 {
        self.col_end() - 1
    }

    /// The bottom-left cell, used as the footprint's external reference point.
    #[must_use]
    pub const fn bottom_left(&self) -> Cell {
        Cell::new(self.bottom_row() as i32, self.origin.col)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[must_use]
    pub const fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Same size, different origin.
    #[must_use]
    pub const fn moved_to(self, origin: Cell) -> Self {
        Self { origin, ..self }
    }

    /// Iterates the footprint's cells in row-major order without any grid
    /// bounds check. Cells past `i32::MAX` cannot be addressed and are not
    /// produced. Use [`GridSpace::cells_of`] for validated enumeration.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let limit = i64::from(i32::MAX) + 1;
        let rows = i64::from(self.origin.row)..self.row_end().min(limit);
        let cols = i64::from(self.origin.col)..self.col_end().min(limit);
        cell_range(rows, cols)
    }

    /// Size label in the `"{w}x{h}"` form used for display.
    #[must_use]
    pub fn size_label(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

/// Row-major cells of `rows x cols`. Both ranges must lie within `i32`.
fn cell_range(
    rows: std::ops::Range<i64>,
    cols: std::ops::Range<i64>,
) -> impl Iterator<Item = Cell> {
    rows.flat_map(move |r| cols.clone().map(move |c| Cell::new(r as i32, c as i32)))
}

impl std::fmt::Display for Footprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{} at {}", self.width, self.height, self.origin)
    }
}

/// The fixed N×N addressable cell space.
///
/// A pure value type: it owns no items and never mutates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpace {
    side: u32,
}

impl GridSpace {
    /// Side length of the map region the tool was built for.
    pub const DEFAULT_SIDE: u32 = 30;

    #[must_use]
    pub const fn new(side: u32) -> Self {
        Self { side }
    }

    #[must_use]
    pub const fn side(&self) -> u32 {
        self.side
    }

    /// Largest valid row or column index.
    #[must_use]
    pub const fn max_index(&self) -> i32 {
        self.side as i32 - 1
    }

    #[must_use]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        let side = i64::from(self.side);
        (0..side).contains(&i64::from(row)) && (0..side).contains(&i64::from(col))
    }

    /// Returns `true` if every cell of `footprint` is inside the grid.
    #[must_use]
    pub fn contains_footprint(&self, footprint: &Footprint) -> bool {
        let side = i64::from(self.side);
        footprint.origin.row >= 0
            && footprint.origin.col >= 0
            && footprint.row_end() <= side
            && footprint.col_end() <= side
    }

    /// Clamps a (possibly out-of-range) row or column index into `[0, N)`.
    /// Meaningless for an empty grid.
    #[must_use]
    pub fn clamp_index(&self, index: i64) -> i32 {
        index.min(i64::from(self.max_index())).max(0) as i32
    }

    /// The cells of `footprint` that lie on the grid, in row-major order.
    /// Never fails; parts hanging off any edge are simply dropped.
    pub fn clip(&self, footprint: &Footprint) -> impl Iterator<Item = Cell> + use<> {
        let side = i64::from(self.side);
        let rows = i64::from(footprint.row()).max(0)..footprint.row_end().min(side);
        let cols = i64::from(footprint.col()).max(0)..footprint.col_end().min(side);
        cell_range(rows, cols)
    }

    /// Enumerates the cells of `footprint` in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::InvalidArgument`] for a zero-sized footprint
    /// and [`PlacementError::OutOfBounds`] if any produced cell would fall
    /// outside `[0, N)`.
    pub fn cells_of(&self, footprint: &Footprint) -> Result<Vec<Cell>, PlacementError> {
        if footprint.is_empty() {
            return Err(PlacementError::InvalidArgument(format!(
                "footprint must be at least 1x1, got {}",
                footprint.size_label()
            )));
        }
        if !self.contains_footprint(footprint) {
            return Err(PlacementError::OutOfBounds(*footprint));
        }
        Ok(footprint.cells().collect())
    }
}

impl Default for GridSpace {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIDE)
    }
}
