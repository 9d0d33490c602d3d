//! Placement rule checks.
//!
//! Checks run in a fixed order: structural preconditions, grid bounds,
//! overlap with existing footprints, then per-subtype quantity caps. The
//! first failure is reported.

use seating_core::{Blueprint, Cell, Footprint, GridSpace, ItemId, PlacementError};

use crate::occupancy::OccupancyIndex;

/// Which quantity caps apply to a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotaPolicy {
    /// A new item: every cap applies.
    Enforce,
    /// Replacing the fixed item: subtype caps apply, the fixed-item cap does
    /// not.
    ReplacingFixed,
    /// An item moving within the grid already owns its slot.
    Moving,
}

/// Validates candidate placements against the grid and current occupancy.
#[derive(Debug, Clone, Copy)]
pub struct PlacementValidator {
    grid: GridSpace,
}

impl PlacementValidator {
    #[must_use]
    pub const fn new(grid: GridSpace) -> Self {
        Self { grid }
    }

    #[must_use]
    pub const fn grid(&self) -> &GridSpace {
        &self.grid
    }

    /// Checks `blueprint` at `origin`, treating cells covered by `ignore` as
    /// free. Returns the candidate footprint on success.
    ///
    /// # Errors
    ///
    /// Returns the first [`PlacementError`] the candidate runs into.
    pub fn check(
        &self,
        index: &OccupancyIndex,
        blueprint: &Blueprint,
        origin: Cell,
        policy: QuotaPolicy,
        ignore: Option<ItemId>,
    ) -> Result<Footprint, PlacementError> {
        blueprint.validate()?;
        let footprint = blueprint.footprint_at(origin);
        self.grid.cells_of(&footprint)?;

        if let Some((cell, occupant)) = index.first_overlap(&footprint, ignore) {
            return Err(PlacementError::Overlap { cell, occupant });
        }

        self.check_quota(index, blueprint, policy)?;
        Ok(footprint)
    }

    fn check_quota(
        &self,
        index: &OccupancyIndex,
        blueprint: &Blueprint,
        policy: QuotaPolicy,
    ) -> Result<(), PlacementError> {
        if policy == QuotaPolicy::Moving {
            return Ok(());
        }
        let Some(kind) = blueprint.kind.building() else {
            return Ok(());
        };
        if kind.is_singleton() && index.count_subtype(kind) > 0 {
            return Err(PlacementError::QuantityExceeded(kind));
        }
        if blueprint.fixed && policy == QuotaPolicy::Enforce && index.fixed_item().is_some() {
            return Err(PlacementError::QuantityExceeded(kind));
        }
        Ok(())
    }
}
