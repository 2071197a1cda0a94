//! SeatGrid seating allocator — feasibility checks, group placement, fallback.
//!
//! Pure, synchronous planning over an in-memory snapshot: guest names,
//! groups that should share a table, and table capacities in. A per-table
//! plan or a [`PlanError`] out. Every call owns its table state; nothing is
//! shared between calls.
//!
//! # Components
//!
//! - **`validate`** — Aggregate capacity and largest-group checks
//! - **`allocator`** — `Allocator` strategy trait and `GreedyFirstFit`
//! - **`plan`** — Plan output and wire types
//! - **`convert`** — Running an allocator over a `PlanRequest`

pub mod allocator;
pub mod convert;
pub mod error;
pub mod plan;
pub mod validate;

pub use allocator::{Allocator, GreedyFirstFit, generate_plan};
pub use convert::{outcome_for_request, plan_for_request, validate_request};
pub use error::{PlanError, PlanResult};
pub use plan::{Plan, PlanOutcome, TableAssignment};
pub use validate::{Validation, check_feasibility, validate};
