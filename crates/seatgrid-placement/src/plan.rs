//! Seating plan output types.

use std::fmt;

use serde::{Deserialize, Serialize};

use seatgrid_core::Guest;

use crate::error::PlanResult;

/// Final occupants of one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableAssignment {
    /// 1-based position in the input capacity list.
    pub table_number: usize,
    pub capacity: u32,
    /// Occupants in the order they were seated.
    pub guests: Vec<Guest>,
    pub empty_seats: u32,
}

/// A complete table-to-guests assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub seating_plan: Vec<TableAssignment>,
}

impl Plan {
    pub fn seated_count(&self) -> usize {
        self.seating_plan.iter().map(|t| t.guests.len()).sum()
    }

    pub fn empty_seats(&self) -> u64 {
        self.seating_plan.iter().map(|t| u64::from(t.empty_seats)).sum()
    }

    /// 1-based number of the table `guest` sits at.
    pub fn table_of(&self, guest: &str) -> Option<usize> {
        self.seating_plan
            .iter()
            .find(|t| t.guests.iter().any(|g| g == guest))
            .map(|t| t.table_number)
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for table in &self.seating_plan {
            let used = table.guests.len();
            write!(f, "Table {} ({}/{})", table.table_number, used, table.capacity)?;
            if table.guests.is_empty() {
                writeln!(f, ": -")?;
            } else {
                writeln!(f, ": {}", table.guests.join(", "))?;
            }
        }
        Ok(())
    }
}

/// Wire form of a planning result: `{"seating_plan": [...]}` on success,
/// `{"error": "..."}` on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlanOutcome {
    Plan(Plan),
    Error { error: String },
}

impl PlanOutcome {
    pub fn error(msg: impl Into<String>) -> Self {
        PlanOutcome::Error { error: msg.into() }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, PlanOutcome::Plan(_))
    }
}

impl From<PlanResult<Plan>> for PlanOutcome {
    fn from(res: PlanResult<Plan>) -> Self {
        match res {
            Ok(plan) => PlanOutcome::Plan(plan),
            Err(e) => PlanOutcome::error(e.to_string()),
        }
    }
}
