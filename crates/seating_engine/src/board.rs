//! The roster and the layout, wired together.
//!
//! [`Board`] is what a front end drives. It moves players between the roster
//! and the grid, and never touches occupancy except through [`Layout`].

use seating_core::{
    AllianceCityLevel, Blueprint, BuildingKind, Cell, Item, ItemId, PlacementError, PlayerSize,
    RelocationError, RemovalError,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::LayoutConfig;
use crate::layout::Layout;
use crate::roster::{Roster, RosterEntry, RosterError};

/// Any error a board operation can return.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error(transparent)]
    Removal(#[from] RemovalError),

    #[error(transparent)]
    Relocation(#[from] RelocationError),
}

/// Player counts shown in the sidebar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub total: usize,
    pub unassigned: usize,
    pub placed: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Board {
    layout: Layout,
    roster: Roster,
}

impl Board {
    #[must_use]
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            layout: Layout::new(config),
            roster: Roster::new(),
        }
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The placed player item named `name`, if any.
    #[must_use]
    pub fn placed_player(&self, name: &str) -> Option<&Item> {
        let name = name.trim();
        self.layout
            .all_items()
            .find(|item| item.is_player() && item.name == name)
    }

    /// Adds an unassigned player.
    ///
    /// # Errors
    ///
    /// [`RosterError::EmptyName`], or [`RosterError::Duplicate`] if the name
    /// is taken by an unassigned or a placed player.
    pub fn add_player(&mut self, name: &str, size: PlayerSize) -> Result<&RosterEntry, BoardError> {
        if self.placed_player(name).is_some() {
            return Err(RosterError::Duplicate(name.trim().to_string()).into());
        }
        Ok(self.roster.add(name, size)?)
    }

    /// Seats an unassigned player with its top-left cell at `origin`.
    ///
    /// The player stays in the roster if the placement is rejected.
    ///
    /// # Errors
    ///
    /// [`RosterError::NotFound`] or the layout's [`PlacementError`].
    pub fn place_player(&mut self, name: &str, origin: Cell) -> Result<Item, BoardError> {
        let entry = self.roster.take(name)?;
        let blueprint = Blueprint::player(entry.name.clone(), entry.size);
        match self.layout.try_place(blueprint, origin) {
            Ok(item) => Ok(item),
            Err(err) => {
                self.roster.put_back(entry);
                Err(err.into())
            }
        }
    }

    /// Places a non-fixed building with its default size.
    ///
    /// # Errors
    ///
    /// [`PlacementError::InvalidArgument`] for an alliance city, which goes
    /// through [`set_alliance_city`](Self::set_alliance_city); otherwise the
    /// layout's [`PlacementError`].
    pub fn place_building(&mut self, kind: BuildingKind, origin: Cell) -> Result<Item, BoardError> {
        if kind.is_alliance_city() {
            return Err(PlacementError::InvalidArgument(format!(
                "{kind} has a fixed position; configure it instead"
            ))
            .into());
        }
        Ok(self.layout.try_place(Blueprint::building(kind), origin)?)
    }

    /// Removes a placed item. Players go back to the roster.
    ///
    /// # Errors
    ///
    /// The layout's [`RemovalError`].
    pub fn remove_item(&mut self, id: ItemId) -> Result<Item, BoardError> {
        let item = self.layout.remove(id)?;
        self.return_to_roster(&item);
        Ok(item)
    }

    /// Drags a placed item to `origin`.
    ///
    /// # Errors
    ///
    /// The layout's [`RelocationError`]; the item stays where it was.
    pub fn move_item(&mut self, id: ItemId, origin: Cell) -> Result<Item, BoardError> {
        Ok(self.layout.relocate(id, origin)?)
    }

    /// Replaces or removes the alliance city.
    ///
    /// # Errors
    ///
    /// The layout's [`PlacementError`]; the previous city is kept.
    pub fn set_alliance_city(
        &mut self,
        level: Option<AllianceCityLevel>,
    ) -> Result<Option<Item>, BoardError> {
        Ok(self.layout.configure_alliance_city(level)?)
    }

    /// Empties the grid except for the alliance city. Placed players go
    /// back to the roster.
    pub fn clear_all(&mut self) -> Vec<Item> {
        let removed = self.layout.clear();
        for item in &removed {
            self.return_to_roster(item);
        }
        info!(removed = removed.len(), "board cleared");
        removed
    }

    /// Deletes a player from the roster and from the grid.
    ///
    /// # Errors
    ///
    /// [`RosterError::NotFound`] if the player is in neither.
    pub fn delete_player(&mut self, name: &str) -> Result<(), BoardError> {
        let in_roster = self.roster.remove(name);
        let placed = self.placed_player(name).map(|item| item.id);
        if let Some(id) = placed {
            self.layout.remove(id)?;
        }
        if !in_roster && placed.is_none() {
            return Err(RosterError::NotFound(name.trim().to_string()).into());
        }
        debug!(name = name.trim(), "player deleted");
        Ok(())
    }

    /// Deletes every player, unassigned and placed. Buildings stay.
    /// Returns how many players were deleted.
    pub fn delete_all_players(&mut self) -> usize {
        let placed: Vec<ItemId> = self
            .layout
            .all_items()
            .filter(|item| item.is_player())
            .map(|item| item.id)
            .collect();
        let mut deleted = self.roster.len();
        self.roster.clear();
        for id in placed {
            if self.layout.remove(id).is_ok() {
                deleted += 1;
            }
        }
        info!(deleted, "all players deleted");
        deleted
    }

    #[must_use]
    pub fn stats(&self) -> PlayerStats {
        let unassigned = self.roster.len();
        let placed = self.layout.all_items().filter(|item| item.is_player()).count();
        PlayerStats {
            total: unassigned + placed,
            unassigned,
            placed,
        }
    }

    fn return_to_roster(&mut self, item: &Item) {
        if let Some(size) = item.player_size() {
            self.roster.put_back(RosterEntry::new(item.name.clone(), size));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(players: &[(&str, PlayerSize)]) -> Board {
        let mut board = Board::default();
        for (name, size) in players {
            board.add_player(name, *size).unwrap();
        }
        board
    }

    #[test]
    fn test_place_player_moves_out_of_roster() {
        let mut board = board_with(&[("Aria", PlayerSize::Large)]);
        let item = board.place_player("Aria", Cell::new(2, 2)).unwrap();
        assert_eq!(item.size_label(), "3x3");
        assert!(board.roster().is_empty());
        assert_eq!(
            board.stats(),
            PlayerStats {
                total: 1,
                unassigned: 0,
                placed: 1,
            }
        );
    }

    #[test]
    fn test_rejected_placement_keeps_player_in_roster() {
        let mut board = board_with(&[("Aria", PlayerSize::Small)]);
        let err = board.place_player("Aria", Cell::new(29, 29)).unwrap_err();
        assert!(matches!(
            err,
            BoardError::Placement(PlacementError::OutOfBounds(_))
        ));
        assert!(board.roster().contains("Aria"));
    }

    #[test]
    fn test_remove_returns_player_intact() {
        let mut board = board_with(&[("Bryn", PlayerSize::Large)]);
        let item = board.place_player("Bryn", Cell::new(0, 0)).unwrap();
        board.remove_item(item.id).unwrap();
        assert_eq!(
            board.roster().get("Bryn"),
            Some(&RosterEntry::new("Bryn", PlayerSize::Large))
        );
        assert!(board.layout().is_empty());
    }

    #[test]
    fn test_removed_building_does_not_enter_roster() {
        let mut board = Board::default();
        let tile = board
            .place_building(BuildingKind::RssTile, Cell::new(0, 0))
            .unwrap();
        board.remove_item(tile.id).unwrap();
        assert!(board.roster().is_empty());
    }

    #[test]
    fn test_placed_names_stay_unique() {
        let mut board = board_with(&[("Aria", PlayerSize::Small)]);
        board.place_player("Aria", Cell::new(0, 0)).unwrap();
        assert_eq!(
            board.add_player("Aria", PlayerSize::Small).unwrap_err(),
            BoardError::Roster(RosterError::Duplicate("Aria".to_string()))
        );
    }

    #[test]
    fn test_alliance_city_only_through_configuration() {
        let mut board = Board::default();
        assert!(matches!(
            board.place_building(BuildingKind::AllianceCityLv3, Cell::new(0, 0)),
            Err(BoardError::Placement(PlacementError::InvalidArgument(_)))
        ));
        let city = board
            .set_alliance_city(Some(AllianceCityLevel::Lv3))
            .unwrap()
            .unwrap();
        assert_eq!(
            board.remove_item(city.id).unwrap_err(),
            BoardError::Removal(RemovalError::Protected(city.id))
        );
    }

    #[test]
    fn test_clear_all_returns_players() {
        let mut board = board_with(&[("a", PlayerSize::Small), ("b", PlayerSize::Large)]);
        board.set_alliance_city(Some(AllianceCityLevel::Lv4)).unwrap();
        board.place_player("a", Cell::new(0, 0)).unwrap();
        board.place_player("b", Cell::new(0, 5)).unwrap();
        board
            .place_building(BuildingKind::DeadSpot, Cell::new(29, 29))
            .unwrap();

        let removed = board.clear_all();
        assert_eq!(removed.len(), 3);
        assert_eq!(board.roster().len(), 2);
        assert_eq!(board.layout().len(), 1);
        assert!(board.layout().alliance_city().is_some());
    }

    #[test]
    fn test_delete_player_from_grid_and_roster() {
        let mut board = board_with(&[("a", PlayerSize::Small), ("b", PlayerSize::Small)]);
        board.place_player("a", Cell::new(0, 0)).unwrap();

        board.delete_player("a").unwrap();
        assert!(board.layout().find_at(0, 0).is_none());
        assert!(!board.roster().contains("a"));

        board.delete_player("b").unwrap();
        assert!(board.roster().is_empty());

        assert_eq!(
            board.delete_player("c").unwrap_err(),
            BoardError::Roster(RosterError::NotFound("c".to_string()))
        );
    }

    #[test]
    fn test_delete_all_players_keeps_buildings() {
        let mut board = board_with(&[
            ("a", PlayerSize::Small),
            ("b", PlayerSize::Small),
            ("c", PlayerSize::Large),
        ]);
        board.place_player("a", Cell::new(0, 0)).unwrap();
        board
            .place_building(BuildingKind::Warehouse, Cell::new(10, 10))
            .unwrap();

        assert_eq!(board.delete_all_players(), 3);
        assert_eq!(board.stats(), PlayerStats::default());
        assert_eq!(board.layout().len(), 1);
    }

    #[test]
    fn test_move_item_rejection_surfaces_reason() {
        let mut board = board_with(&[("a", PlayerSize::Small), ("b", PlayerSize::Small)]);
        let a = board.place_player("a", Cell::new(5, 5)).unwrap();
        board.place_player("b", Cell::new(5, 8)).unwrap();
        let err = board.move_item(a.id, Cell::new(5, 8)).unwrap_err();
        let BoardError::Relocation(relocation) = err else {
            panic!("expected a relocation error, got {err:?}");
        };
        assert!(matches!(
            relocation.reason(),
            Some(PlacementError::Overlap { .. })
        ));
        assert_eq!(board.layout().find_at(5, 5).map(|i| i.id), Some(a.id));
    }
}
