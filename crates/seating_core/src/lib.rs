//! # seating_core
//!
//! The value types every other seating crate is built on.
//!
//! This crate provides:
//!
//! - [`GridSpace`] — the fixed N×N cell space and its bounds authority.
//! - [`Cell`] and [`Footprint`] — grid addresses and rectangular cell spans.
//! - [`Item`] — a placed player or building, identified by an [`ItemId`].
//! - [`ItemIdAllocator`] — monotonically increasing ID allocator.
//! - [`Blueprint`] — everything a placement needs except its origin.
//! - [`error`] — the placement, removal and relocation error taxonomy.

pub mod error;
pub mod grid;
pub mod item;
pub mod kind;

pub use error::{PlacementError, RelocationError, RemovalError};
pub use grid::{Cell, Footprint, GridSpace};
pub use item::{Item, ItemId, ItemIdAllocator};
pub use kind::{AllianceCityLevel, Blueprint, BuildingKind, ItemKind, PlayerSize};
