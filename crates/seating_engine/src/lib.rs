//! # seating_engine
//!
//! The stateful half of the seating chart: which items are on the grid, and
//! the only operations allowed to change that.
//!
//! This crate provides:
//!
//! - [`OccupancyIndex`] — the authoritative item set with a cell lookup.
//! - [`PlacementValidator`] — bounds, overlap and quantity checks.
//! - [`Layout`] — `try_place`, `remove`, `relocate` and the queries built on
//!   them, with ring borders reconciled after every mutation.
//! - [`LayoutConfig`] — grid size and game-coordinate origin.
//! - [`Roster`] and [`Board`] — the unassigned-player list and the
//!   composition that moves players between it and the grid.

pub mod board;
pub mod config;
pub mod layout;
pub mod occupancy;
pub mod roster;
pub mod validator;

pub use board::{Board, BoardError, PlayerStats};
pub use config::{ConfigError, LayoutConfig};
pub use layout::{Layout, Preview};
pub use occupancy::OccupancyIndex;
pub use roster::{Roster, RosterEntry, RosterError};
pub use validator::{PlacementValidator, QuotaPolicy};
