//! Allocator error types.

use thiserror::Error;

use seatgrid_core::Group;

/// Errors returned by planning. `Display` is the client-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("No tables configured.")]
    NoTables,

    #[error("Not enough seats. Need {needed} seats but only have {available}.")]
    InsufficientSeats { needed: usize, available: u64 },

    #[error(
        "Group [{}] has {size} people but largest table fits {largest}.",
        .group.join(", ")
    )]
    GroupTooLarge {
        group: Group,
        size: usize,
        largest: u32,
    },

    /// The greedy pass ran out of free seats for this guest. Validation
    /// passed, so this is a shortfall of the heuristic, not a proof that no
    /// seating exists.
    #[error("Could not place {guest}. Seating heuristic ran out of room.")]
    Unplaceable { guest: String },
}

impl PlanError {
    /// True when the input itself can never be seated, false for a
    /// heuristic shortfall.
    pub fn is_infeasible(&self) -> bool {
        !matches!(self, PlanError::Unplaceable { .. })
    }
}

pub type PlanResult<T> = Result<T, PlanError>;
