//! Allocation engine — decides which table every guest sits at.
//!
//! [`GreedyFirstFit`] runs two phases:
//! 1. Groups, largest first, each seated whole at the first table with room
//!    (members are split across tables only when no table has room)
//! 2. Remaining guests, in guest-list order, at the first table with a free seat
//!
//! Neither phase is revisited. The result is deterministic but not optimal.

use std::cmp::Reverse;
use std::collections::HashSet;

use tracing::{debug, info, warn};

use seatgrid_core::{Group, Guest};

use crate::error::{PlanError, PlanResult};
use crate::plan::{Plan, TableAssignment};
use crate::validate::{self, Validation};

/// A seating strategy. Implementations must be deterministic and must never
/// exceed a table's capacity.
pub trait Allocator {
    /// Stable identifier, reported by the API health endpoint.
    fn name(&self) -> &'static str;

    fn validate(&self, guests: &[Guest], groups: &[Group], tables: &[u32]) -> Validation {
        validate::validate(guests, groups, tables)
    }

    fn generate_plan(&self, guests: &[Guest], groups: &[Group], tables: &[u32]) -> PlanResult<Plan>;
}

/// Largest-group-first, first-fit-by-index allocator.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyFirstFit;

impl Allocator for GreedyFirstFit {
    fn name(&self) -> &'static str {
        "greedy-first-fit"
    }

    fn generate_plan(&self, guests: &[Guest], groups: &[Group], tables: &[u32]) -> PlanResult<Plan> {
        validate::check_feasibility(guests, groups, tables)?;

        // Stable: equal-sized groups keep their input order.
        let mut ordered: Vec<&Group> = groups.iter().collect();
        ordered.sort_by_key(|g| Reverse(g.len()));

        let mut seating = Seating::new(tables);

        for group in ordered {
            if seating.seat_group(group) {
                continue;
            }
            warn!(
                size = group.len(),
                "no table has room for the whole group, seating members individually"
            );
            for guest in group {
                seating.seat_individually(guest)?;
            }
        }

        for guest in guests {
            seating.seat_individually(guest)?;
        }

        let plan = seating.into_plan();
        info!(
            tables = plan.seating_plan.len(),
            seated = plan.seated_count(),
            empty_seats = plan.empty_seats(),
            "seating plan generated"
        );
        Ok(plan)
    }
}

/// Generate a plan with the default allocator.
pub fn generate_plan(guests: &[Guest], groups: &[Group], tables: &[u32]) -> PlanResult<Plan> {
    GreedyFirstFit.generate_plan(guests, groups, tables)
}

/// Table state for a single planning call.
struct Seating<'a> {
    capacities: &'a [u32],
    tables: Vec<Vec<&'a str>>,
    seated: HashSet<&'a str>,
}

impl<'a> Seating<'a> {
    fn new(capacities: &'a [u32]) -> Self {
        Self {
            capacities,
            tables: vec![Vec::new(); capacities.len()],
            seated: HashSet::new(),
        }
    }

    fn free_seats(&self, idx: usize) -> usize {
        (self.capacities[idx] as usize).saturating_sub(self.tables[idx].len())
    }

    fn first_fit(&self, needed: usize) -> Option<usize> {
        (0..self.tables.len()).find(|&idx| self.free_seats(idx) >= needed)
    }

    fn seat(&mut self, idx: usize, guest: &'a str) {
        if self.seated.insert(guest) {
            self.tables[idx].push(guest);
        }
    }

    /// Seat the not-yet-seated members of `group` together. Returns false,
    /// seating nobody, when no table has room for all of them.
    fn seat_group(&mut self, group: &'a [Guest]) -> bool {
        let mut pending: Vec<&'a str> = Vec::with_capacity(group.len());
        for guest in group {
            let guest = guest.as_str();
            if !self.seated.contains(guest) && !pending.contains(&guest) {
                pending.push(guest);
            }
        }
        if pending.is_empty() {
            return true;
        }

        let Some(idx) = self.first_fit(pending.len()) else {
            return false;
        };
        for guest in pending {
            self.seat(idx, guest);
        }
        debug!(table = idx + 1, size = group.len(), "seated group");
        true
    }

    /// Seat one guest at the first table with a free seat. Already seated
    /// guests are skipped.
    fn seat_individually(&mut self, guest: &'a str) -> PlanResult<()> {
        if self.seated.contains(guest) {
            return Ok(());
        }
        let Some(idx) = self.first_fit(1) else {
            warn!(guest, "no free seat left");
            return Err(PlanError::Unplaceable {
                guest: guest.to_string(),
            });
        };
        self.seat(idx, guest);
        debug!(table = idx + 1, guest, "seated guest");
        Ok(())
    }

    fn into_plan(self) -> Plan {
        let seating_plan = self
            .tables
            .into_iter()
            .zip(self.capacities)
            .enumerate()
            .map(|(idx, (occupants, &capacity))| TableAssignment {
                table_number: idx + 1,
                capacity,
                empty_seats: capacity - occupants.len() as u32,
                guests: occupants.into_iter().map(str::to_string).collect(),
            })
            .collect();
        Plan { seating_plan }
    }
}
