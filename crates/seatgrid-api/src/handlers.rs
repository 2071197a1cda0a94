//! REST API handlers.
//!
//! Planning runs inline: the allocator is bounded, synchronous and does
//! no I/O.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::{debug, info};

use seatgrid_core::PlanRequest;
use seatgrid_placement::{PlanOutcome, outcome_for_request};

use crate::ApiState;

fn error_response(msg: &str, status: StatusCode) -> impl IntoResponse {
    (status, Json(PlanOutcome::error(msg)))
}

/// POST /api/generate-plan
pub async fn generate_plan(
    State(state): State<ApiState>,
    body: Result<Json<PlanRequest>, JsonRejection>,
) -> impl IntoResponse {
    let req = match body {
        Ok(Json(req)) => req,
        Err(JsonRejection::JsonDataError(e)) => {
            return error_response(&format!("Invalid request: {}", e.body_text()), StatusCode::BAD_REQUEST)
                .into_response();
        }
        Err(e) => {
            debug!(rejection = %e.body_text(), "unusable request body");
            return error_response("No data provided", StatusCode::BAD_REQUEST).into_response();
        }
    };

    if let Err(msg) = req.precheck() {
        return error_response(msg, StatusCode::BAD_REQUEST).into_response();
    }

    let outcome = outcome_for_request(state.allocator.as_ref(), &req);
    let status = if outcome.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    info!(
        guests = req.guests.len(),
        groups = req.groups.len(),
        tables = req.tables_config.len(),
        status = status.as_u16(),
        "plan requested"
    );
    (status, Json(outcome)).into_response()
}

/// GET /healthz
pub async fn health(State(state): State<ApiState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "allocator": state.allocator.name(),
    }))
}
