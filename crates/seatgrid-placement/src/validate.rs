//! Feasibility checks run before any placement.
//!
//! Only two things are checked:
//! - **Aggregate capacity**: total seats cover the guest list
//! - **Largest group**: every group fits at the largest table
//!
//! Passing does not prove the greedy pass will succeed.

use serde::{Deserialize, Serialize};

use seatgrid_core::{Group, Guest};

use crate::error::{PlanError, PlanResult};

const VALID_MESSAGE: &str = "Configuration is valid.";

/// Outcome of [`validate`] as an `(ok, message)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    pub ok: bool,
    pub message: String,
}

impl From<PlanResult<()>> for Validation {
    fn from(res: PlanResult<()>) -> Self {
        match res {
            Ok(()) => Self {
                ok: true,
                message: VALID_MESSAGE.to_string(),
            },
            Err(e) => Self {
                ok: false,
                message: e.to_string(),
            },
        }
    }
}

/// Check the input and return the first failure as a typed error.
pub fn check_feasibility(guests: &[Guest], groups: &[Group], tables: &[u32]) -> PlanResult<()> {
    let Some(&largest) = tables.iter().max() else {
        return Err(PlanError::NoTables);
    };

    let available: u64 = tables.iter().map(|&c| u64::from(c)).sum();
    let needed = guests.len();
    if needed as u64 > available {
        return Err(PlanError::InsufficientSeats { needed, available });
    }

    if let Some(group) = groups.iter().find(|g| g.len() > largest as usize) {
        return Err(PlanError::GroupTooLarge {
            group: group.clone(),
            size: group.len(),
            largest,
        });
    }

    Ok(())
}

/// Validate the input. Pure; safe to call any number of times.
pub fn validate(guests: &[Guest], groups: &[Group], tables: &[u32]) -> Validation {
    check_feasibility(guests, groups, tables).into()
}
