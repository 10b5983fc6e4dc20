use std::sync::Arc;

use axum::{extract::Path, extract::State, response::Response, routing::get, Router};
use tracing::info;

use super::respond;
use crate::{pipeline, Gateway};

// ---

pub fn router() -> Router<Arc<Gateway>> {
    // ---
    Router::new()
        .route("/user/{id}/dashboard", get(dashboard))
        .route("/user/{id}/charts/activity", get(activity))
        .route("/user/{id}/charts/sessions", get(sessions))
        .route("/user/{id}/charts/performance", get(performance))
        .route("/user/{id}/charts/score", get(score))
        .route("/user/{id}/key-data", get(key_data))
}

async fn dashboard(Path(id): Path<u32>, State(gw): State<Arc<Gateway>>) -> Response {
    // ---
    info!("GET /user/{}/dashboard", id);
    respond("dashboard", pipeline::load_dashboard(&gw, id).await)
}

async fn activity(Path(id): Path<u32>, State(gw): State<Arc<Gateway>>) -> Response {
    // ---
    info!("GET /user/{}/charts/activity", id);
    respond("activity chart", pipeline::load_activity_chart(&gw, id).await)
}

async fn sessions(Path(id): Path<u32>, State(gw): State<Arc<Gateway>>) -> Response {
    // ---
    info!("GET /user/{}/charts/sessions", id);
    respond("sessions chart", pipeline::load_sessions_chart(&gw, id).await)
}

async fn performance(Path(id): Path<u32>, State(gw): State<Arc<Gateway>>) -> Response {
    // ---
    info!("GET /user/{}/charts/performance", id);
    respond(
        "performance chart",
        pipeline::load_performance_chart(&gw, id).await,
    )
}

async fn score(Path(id): Path<u32>, State(gw): State<Arc<Gateway>>) -> Response {
    // ---
    info!("GET /user/{}/charts/score", id);
    respond("score chart", pipeline::load_score_chart(&gw, id).await)
}

async fn key_data(Path(id): Path<u32>, State(gw): State<Arc<Gateway>>) -> Response {
    // ---
    info!("GET /user/{}/key-data", id);
    respond("key data", pipeline::load_key_data(&gw, id).await)
}
