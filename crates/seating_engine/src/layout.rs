//! The placement engine.
//!
//! [`Layout`] owns the occupancy index and the ring-claim set and exposes the
//! only operations that change them: [`try_place`](Layout::try_place),
//! [`remove`](Layout::remove), [`relocate`](Layout::relocate) and
//! [`configure_alliance_city`](Layout::configure_alliance_city). Every one of
//! them either commits completely or leaves the layout exactly as it was, and
//! every one ends by reconciling ring borders against the new occupancy.
//!
//! Operations run synchronously to completion; the layout is not shared
//! across threads.

use seating_core::{
    AllianceCityLevel, Blueprint, BuildingKind, Cell, Footprint, GridSpace, Item, ItemId,
    ItemIdAllocator, PlacementError, RelocationError, RemovalError,
};
use seating_geometry::{Borders, CoordinateMapper, IVec2, RingClaims, reconcile_rings};
use tracing::{debug, trace, warn};

use crate::config::LayoutConfig;
use crate::occupancy::OccupancyIndex;
use crate::validator::{PlacementValidator, QuotaPolicy};

/// Outcome of hovering an item over a new origin during a drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    /// The footprint the item would take.
    pub footprint: Footprint,
    /// The part of that footprint that lies inside the grid.
    pub cells: Vec<Cell>,
    /// Why dropping here would be refused, if it would.
    pub rejection: Option<RelocationError>,
}

impl Preview {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.rejection.is_none()
    }
}

/// Items on the grid plus the derived ring borders.
#[derive(Debug, Clone)]
pub struct Layout {
    config: LayoutConfig,
    grid: GridSpace,
    mapper: CoordinateMapper,
    validator: PlacementValidator,
    index: OccupancyIndex,
    allocator: ItemIdAllocator,
    rings: RingClaims,
}

impl Layout {
    #[must_use]
    pub fn new(config: LayoutConfig) -> Self {
        let grid = config.grid();
        Self {
            config,
            grid,
            mapper: config.mapper(),
            validator: PlacementValidator::new(grid),
            index: OccupancyIndex::new(),
            allocator: ItemIdAllocator::new(),
            rings: RingClaims::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    #[must_use]
    pub fn grid(&self) -> &GridSpace {
        &self.grid
    }

    #[must_use]
    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    #[must_use]
    pub fn index(&self) -> &OccupancyIndex {
        &self.index
    }

    /// Current ring claims, as of the last mutation.
    #[must_use]
    pub fn ring_claims(&self) -> &RingClaims {
        &self.rings
    }

    // -- Mutations --

    /// Validates `blueprint` at `origin` and commits it as a new item.
    ///
    /// # Errors
    ///
    /// [`PlacementError::OutOfBounds`], [`PlacementError::Overlap`] or
    /// [`PlacementError::QuantityExceeded`] per the placement rules, and
    /// [`PlacementError::InvalidArgument`] for a malformed blueprint. The
    /// layout is unchanged on error.
    pub fn try_place(&mut self, blueprint: Blueprint, origin: Cell) -> Result<Item, PlacementError> {
        self.validator
            .check(&self.index, &blueprint, origin, QuotaPolicy::Enforce, None)?;
        Ok(self.commit(blueprint, origin))
    }

    /// Removes a non-fixed item and hands it back.
    ///
    /// # Errors
    ///
    /// [`RemovalError::NotFound`] for an unknown ID and
    /// [`RemovalError::Protected`] for the fixed item.
    pub fn remove(&mut self, id: ItemId) -> Result<Item, RemovalError> {
        let item = self.index.get(id).ok_or(RemovalError::NotFound(id))?;
        if item.is_fixed {
            return Err(RemovalError::Protected(id));
        }
        let (_, item) = self.index.remove(id).ok_or(RemovalError::NotFound(id))?;
        self.reconcile_borders();
        debug!(item = %id, name = %item.name, "item removed");
        Ok(item)
    }

    /// Moves an item to `new_origin` as one all-or-nothing step.
    ///
    /// The item keeps its ID and its place in the listing. If the new
    /// position is rejected the item is restored exactly where it was.
    ///
    /// # Errors
    ///
    /// [`RelocationError::NotFound`], [`RelocationError::Protected`] for the
    /// fixed item, or [`RelocationError::Rejected`] carrying the validator's
    /// reason.
    pub fn relocate(&mut self, id: ItemId, new_origin: Cell) -> Result<Item, RelocationError> {
        let item = self.index.get(id).ok_or(RelocationError::NotFound(id))?;
        if item.is_fixed {
            return Err(RelocationError::Protected(id));
        }

        let (position, original) = self
            .index
            .remove(id)
            .ok_or(RelocationError::NotFound(id))?;
        let blueprint = original.blueprint();

        match self
            .validator
            .check(&self.index, &blueprint, new_origin, QuotaPolicy::Moving, None)
        {
            Ok(footprint) => {
                let moved = Item {
                    footprint,
                    ..original
                };
                self.index.insert_at(position, moved.clone());
                self.reconcile_borders();
                debug!(
                    item = %id,
                    row = new_origin.row,
                    col = new_origin.col,
                    "item relocated"
                );
                Ok(moved)
            }
            Err(reason) => {
                let from = original.origin();
                self.index.insert_at(position, original);
                self.reconcile_borders();
                warn!(
                    item = %id,
                    from = %from,
                    to = %new_origin,
                    %reason,
                    "relocation rejected, item restored"
                );
                Err(RelocationError::Rejected { item: id, reason })
            }
        }
    }

    /// Replaces the alliance city with `level`, or removes it for `None`.
    ///
    /// The new city sits centred on the grid and follows the normal
    /// placement rules except the single-fixed-item cap. If it cannot be
    /// placed the previous city is put back and the error returned.
    ///
    /// # Errors
    ///
    /// Any [`PlacementError`] from validating the new city.
    pub fn configure_alliance_city(
        &mut self,
        level: Option<AllianceCityLevel>,
    ) -> Result<Option<Item>, PlacementError> {
        let previous = self
            .index
            .fixed_item()
            .map(|item| item.id)
            .and_then(|id| self.index.remove(id));

        let Some(level) = level else {
            self.reconcile_borders();
            if let Some((_, old)) = &previous {
                debug!(item = %old.id, name = %old.name, "alliance city removed");
            }
            return Ok(None);
        };

        let blueprint = level.blueprint();
        let origin = level.footprint_in(&self.grid).origin;
        match self.validator.check(
            &self.index,
            &blueprint,
            origin,
            QuotaPolicy::ReplacingFixed,
            None,
        ) {
            Ok(_) => Ok(Some(self.commit(blueprint, origin))),
            Err(err) => {
                if let Some((position, old)) = previous {
                    self.index.insert_at(position, old);
                }
                self.reconcile_borders();
                warn!(?level, %err, "alliance city could not be placed, previous kept");
                Err(err)
            }
        }
    }

    /// Removes every non-fixed item, returning them in listing order.
    pub fn clear(&mut self) -> Vec<Item> {
        let ids: Vec<ItemId> = self
            .index
            .iter()
            .filter(|item| !item.is_fixed)
            .map(|item| item.id)
            .collect();
        let removed: Vec<Item> = ids
            .into_iter()
            .filter_map(|id| self.index.remove(id).map(|(_, item)| item))
            .collect();
        self.reconcile_borders();
        debug!(count = removed.len(), "layout cleared");
        removed
    }

    fn commit(&mut self, blueprint: Blueprint, origin: Cell) -> Item {
        let id = self.allocator.allocate();
        let item = Item::from_blueprint(id, blueprint, origin);
        self.index.insert(item.clone());
        self.reconcile_borders();
        debug!(
            item = %id,
            name = %item.name,
            row = origin.row,
            col = origin.col,
            size = %item.size_label(),
            "item placed"
        );
        item
    }

    fn reconcile_borders(&mut self) {
        self.rings = reconcile_rings(&self.grid, self.index.iter(), &self.index);
        trace!(
            items = self.index.len(),
            ring_cells = self.rings.len(),
            "borders reconciled"
        );
    }

    // -- Queries --

    /// The item covering `(row, col)`, if any.
    #[must_use]
    pub fn find_at(&self, row: i32, col: i32) -> Option<&Item> {
        self.index.find_at(Cell::new(row, col))
    }

    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.index.get(id)
    }

    /// All placed items in listing order.
    pub fn all_items(&self) -> impl Iterator<Item = &Item> {
        self.index.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// The fixed alliance city, if one is configured.
    #[must_use]
    pub fn alliance_city(&self) -> Option<&Item> {
        self.index.fixed_item()
    }

    /// Perimeter and ring outline cells for `item` under the current layout.
    #[must_use]
    pub fn compute_borders(&self, item: &Item) -> Borders {
        Borders::for_item(item, &self.rings)
    }

    #[must_use]
    pub fn to_game_coordinates(&self, item: &Item) -> IVec2 {
        self.mapper.to_game_coordinates(item)
    }

    /// Whether another building of `kind` may still be added.
    #[must_use]
    pub fn can_add(&self, kind: BuildingKind) -> bool {
        if kind.is_singleton() && self.index.count_subtype(kind) > 0 {
            return false;
        }
        !(kind.is_alliance_city() && self.index.fixed_item().is_some())
    }

    /// What would happen if `id` were dropped at `origin`, without moving it.
    ///
    /// # Errors
    ///
    /// [`RelocationError::NotFound`] for an unknown ID.
    pub fn preview(&self, id: ItemId, origin: Cell) -> Result<Preview, RelocationError> {
        let item = self.index.get(id).ok_or(RelocationError::NotFound(id))?;
        let footprint = item.footprint.moved_to(origin);
        let cells = self.grid.clip(&footprint).collect();
        let rejection = if item.is_fixed {
            Some(RelocationError::Protected(id))
        } else {
            self.validator
                .check(
                    &self.index,
                    &item.blueprint(),
                    origin,
                    QuotaPolicy::Moving,
                    Some(id),
                )
                .err()
                .map(|reason| RelocationError::Rejected { item: id, reason })
        };
        Ok(Preview {
            footprint,
            cells,
            rejection,
        })
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}
