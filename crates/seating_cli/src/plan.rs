//! Seating plan files.
//!
//! A plan is a JSON document describing a session: the layout config, the
//! alliance city, the roster, then placements, moves and removals applied in
//! that order. Steps that the board rejects are logged and skipped, the way
//! a rejected drop leaves the chart untouched.

use seating_core::{AllianceCityLevel, BuildingKind, Cell};
use seating_engine::{Board, LayoutConfig, RosterEntry};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Plan {
    pub config: LayoutConfig,
    pub alliance_city: Option<AllianceCityLevel>,
    pub players: Vec<RosterEntry>,
    pub placements: Vec<Placement>,
    pub moves: Vec<Move>,
    /// Cells whose occupant should be removed.
    pub removals: Vec<Cell>,
}

/// Something to put on the grid, with its top-left cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Placement {
    Player { name: String, at: Cell },
    Building { kind: BuildingKind, at: Cell },
}

/// Drag whatever covers `from` so its top-left cell lands on `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Cell,
    pub to: Cell,
}

/// How many steps of each section went through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Applied {
    pub accepted: usize,
    pub rejected: usize,
}

impl Applied {
    fn record<T, E: std::fmt::Display>(&mut self, step: &str, result: Result<T, E>) {
        match result {
            Ok(_) => self.accepted += 1,
            Err(err) => {
                self.rejected += 1;
                warn!(step, %err, "step rejected");
            }
        }
    }
}

impl Plan {
    /// Builds a fresh board from this plan.
    #[must_use]
    pub fn apply(&self) -> (Board, Applied) {
        let mut board = Board::new(self.config);
        let mut applied = Applied::default();

        if self.alliance_city.is_some() {
            applied.record(
                "alliance city",
                board.set_alliance_city(self.alliance_city),
            );
        }

        for player in &self.players {
            applied.record("add player", board.add_player(&player.name, player.size));
        }

        for placement in &self.placements {
            let result = match placement {
                Placement::Player { name, at } => board.place_player(name, *at),
                Placement::Building { kind, at } => board.place_building(*kind, *at),
            };
            applied.record("place", result);
        }

        for step in &self.moves {
            let result = match board.layout().find_at(step.from.row, step.from.col) {
                Some(item) => {
                    let id = item.id;
                    board.move_item(id, step.to).map_err(|err| err.to_string())
                }
                None => Err(format!("nothing at {}", step.from)),
            };
            applied.record("move", result);
        }

        for cell in &self.removals {
            let result = match board.layout().find_at(cell.row, cell.col) {
                Some(item) => {
                    let id = item.id;
                    board.remove_item(id).map_err(|err| err.to_string())
                }
                None => Err(format!("nothing at {cell}")),
            };
            applied.record("remove", result);
        }

        info!(
            accepted = applied.accepted,
            rejected = applied.rejected,
            items = board.layout().len(),
            "plan applied"
        );
        (board, applied)
    }
}
