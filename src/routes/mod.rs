//! Route gateway: merges every subrouter and owns the error-to-status mapping.

use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, response::Response, Json, Router};
use serde::Serialize;
use serde_json::json;
use tracing::error;

use crate::{Gateway, GatewayError, GatewayResult};

mod charts;
mod health;
mod normalized;

// ---

pub fn router(gateway: Arc<Gateway>) -> Router {
    // ---
    Router::new()
        .merge(charts::router())
        .merge(normalized::router())
        .merge(health::router())
        .with_state(gateway)
}

/// HTTP status for a gateway failure.
fn status_for(e: &GatewayError) -> StatusCode {
    // ---
    match e {
        GatewayError::NotFound { .. } => StatusCode::NOT_FOUND,
        GatewayError::Http { .. } | GatewayError::Network(_) => StatusCode::BAD_GATEWAY,
    }
}

/// Serialize a pipeline result, mapping failures to `{ "error": ... }`.
fn respond<T: Serialize>(what: &str, result: GatewayResult<T>) -> Response {
    // ---
    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => {
            error!("Failed to load {}: {}", what, e);
            (status_for(&e), Json(json!({ "error": e.to_string() }))).into_response()
        }
    }
}
