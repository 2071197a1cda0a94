//! `seatd plan` — one-shot planning from a request file.

use std::io::Write;
use std::path::Path;

use seatgrid_core::PlanRequest;
use seatgrid_placement::{GreedyFirstFit, PlanOutcome, outcome_for_request};
use tracing::{debug, warn};

use crate::OutputFormat;

/// Plan the request in `input` and write the result to `out`.
///
/// Returns `Ok(false)` when the request was read but no plan could be
/// produced; the error has already been written to `out`.
pub fn run(input: &Path, format: OutputFormat, out: &mut impl Write) -> anyhow::Result<bool> {
    let req = PlanRequest::from_json_file(input)?;
    debug!(
        path = %input.display(),
        guests = req.guests.len(),
        tables = req.tables_config.len(),
        "loaded request"
    );

    let outcome = match req.precheck() {
        Ok(()) => outcome_for_request(&GreedyFirstFit, &req),
        Err(msg) => PlanOutcome::error(msg),
    };

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &outcome)?;
            writeln!(out)?;
        }
        OutputFormat::Text => match &outcome {
            PlanOutcome::Plan(plan) => write!(out, "{plan}")?,
            PlanOutcome::Error { error } => writeln!(out, "error: {error}")?,
        },
    }

    if let PlanOutcome::Error { error } = &outcome {
        warn!(%error, "no seating plan");
    }
    Ok(outcome.is_ok())
}
