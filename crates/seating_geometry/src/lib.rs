//! # seating_geometry
//!
//! Stateless derivations over placed items. Nothing here owns or mutates
//! layout state; callers pass in the grid, the items and an occupancy view.
//!
//! - [`border`] — perimeter outlines, influence-ring boxes and first-claim
//!   ring reconciliation.
//! - [`coords`] — the grid ↔ in-game coordinate transform.

pub mod border;
pub mod coords;

// Re-export glam's integer vector for convenience.
pub use glam::IVec2;

pub use border::{
    Borders, CellOccupancy, Edges, OutlineCell, RingBox, RingCell, RingClaims, RingVariant,
    perimeter_outline, reconcile_rings, ring_box,
};
pub use coords::CoordinateMapper;
