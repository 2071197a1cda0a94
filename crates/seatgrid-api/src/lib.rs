//! seatgrid-api — REST API for SeatGrid.
//!
//! Wraps the seating allocator in axum handlers. Every request builds its
//! own table state; the router holds nothing mutable.
//!
//! # API Routes
//!
//! | Method | Path | Description |
//! |---|---|---|
//! | POST | `/api/generate-plan` | Generate a seating plan |
//! | GET | `/healthz` | Liveness and active allocator |

pub mod handlers;

use std::any::Any;
use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use seatgrid_core::config::CorsConfig;
use seatgrid_placement::{Allocator, GreedyFirstFit, PlanOutcome};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

/// Shared state for API handlers.
#[derive(Clone)]
pub struct ApiState {
    pub allocator: Arc<dyn Allocator + Send + Sync>,
}

impl Default for ApiState {
    fn default() -> Self {
        Self {
            allocator: Arc::new(GreedyFirstFit),
        }
    }
}

/// Build the API router with the default allocator.
pub fn build_router(cors: &CorsConfig) -> Router {
    build_router_with_state(ApiState::default(), cors)
}

/// Build the API router around a specific allocator.
pub fn build_router_with_state(state: ApiState, cors: &CorsConfig) -> Router {
    Router::new()
        .route("/api/generate-plan", post(handlers::generate_plan))
        .route("/healthz", get(handlers::health))
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors_layer(cors))
        .layer(TraceLayer::new_for_http())
}

/// Permissive when no origins are configured.
fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    if cors.allow_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = cors
        .allow_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    error!(%detail, "handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(PlanOutcome::error(detail)),
    )
        .into_response()
}
