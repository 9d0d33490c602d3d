//! Placement, removal and relocation error types.
//!
//! Every variant is an expected outcome of a user action. Collaborators turn
//! them into feedback; the engine never panics on them.

use crate::grid::{Cell, Footprint};
use crate::item::ItemId;
use crate::kind::BuildingKind;

/// Why a placement request was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// Some cell of the requested footprint falls outside the grid.
    #[error("footprint {0} extends outside the grid")]
    OutOfBounds(Footprint),

    /// Some cell of the requested footprint already belongs to another item.
    #[error("cell {cell} is already occupied by {occupant}")]
    Overlap { cell: Cell, occupant: ItemId },

    /// The subtype's quantity cap is already used up.
    #[error("maximum of one {0} already placed")]
    QuantityExceeded(BuildingKind),

    /// The request is structurally malformed (zero size, bad ring shape).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Why a removal request was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemovalError {
    #[error("{0} not found")]
    NotFound(ItemId),

    /// Fixed items are only replaced through alliance-city configuration.
    #[error("{0} is fixed and cannot be removed")]
    Protected(ItemId),
}

/// Why a relocation request was refused. The layout is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelocationError {
    #[error("{0} not found")]
    NotFound(ItemId),

    #[error("{0} is fixed and cannot be moved")]
    Protected(ItemId),

    /// The new position failed validation; the item was restored in place.
    #[error("{item} could not be moved")]
    Rejected {
        item: ItemId,
        #[source]
        reason: PlacementError,
    },
}

impl RelocationError {
    /// The validator's reason, for a rejected move.
    #[must_use]
    pub fn reason(&self) -> Option<&PlacementError> {
        match self {
            RelocationError::Rejected { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

impl From<RemovalError> for RelocationError {
    fn from(err: RemovalError) -> Self {
        match err {
            RemovalError::NotFound(id) => RelocationError::NotFound(id),
            RemovalError::Protected(id) => RelocationError::Protected(id),
        }
    }
}
