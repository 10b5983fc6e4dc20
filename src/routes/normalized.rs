//! Raw-path normalization endpoint.
//!
//! `GET /normalized/{*path}` fetches whatever backend path follows the prefix
//! and returns the dispatcher's output. Unknown resource kinds come back
//! unchanged.

use std::sync::Arc;

use axum::{extract::Path, extract::State, response::Response, routing::get, Router};
use tracing::info;

use super::respond;
use crate::{pipeline, Gateway};

pub fn router() -> Router<Arc<Gateway>> {
    Router::new().route("/normalized/{*path}", get(handler))
}

async fn handler(Path(path): Path<String>, State(gw): State<Arc<Gateway>>) -> Response {
    // ---
    let path = format!("/{}", path.trim_start_matches('/'));
    info!("GET /normalized{}", path);
    respond("normalized payload", pipeline::load_normalized(&gw, &path).await)
}
