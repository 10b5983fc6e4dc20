use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use fitness_dashboard::{routes, Gateway};

// ---

fn app() -> Router {
    routes::router(Arc::new(Gateway::mock()))
}

async fn get(uri: &str) -> Result<(StatusCode, Value)> {
    // ---
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty())?)
        .await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, serde_json::from_slice(&bytes)?))
}

#[tokio::test]
async fn health_is_ok() -> Result<()> {
    // ---
    let (status, body) = get("/health").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn dashboard_for_user_18() -> Result<()> {
    // ---
    let (status, body) = get("/user/18/dashboard").await?;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["score"]["percentage"], 30);
    assert_eq!(body["profile"]["keyData"]["calorieCount"], 2103);
    assert_eq!(body["profile"]["firstName"], "Cecilia");
    assert_eq!(body["keyData"][0]["display"], "2,103kCal");
    assert_eq!(body["activity"]["sessions"].as_array().map(Vec::len), Some(7));
    assert_eq!(body["performance"]["axes"].as_array().map(Vec::len), Some(6));
    Ok(())
}

#[tokio::test]
async fn sessions_chart_has_ghosts() -> Result<()> {
    // ---
    let (status, body) = get("/user/12/charts/sessions").await?;
    assert_eq!(status, StatusCode::OK);

    let points = body["points"].as_array().expect("points array");
    assert_eq!(points.len(), 9);
    assert_eq!(points[0]["real"], false);
    assert_eq!(points[8]["real"], false);
    assert_eq!(points[0]["length"], points[1]["length"]);
    assert_eq!(points[8]["length"], points[7]["length"]);
    assert!(points[1..8].iter().all(|p| p["real"] == true));
    Ok(())
}

#[tokio::test]
async fn performance_chart_order() -> Result<()> {
    // ---
    let (_, body) = get("/user/12/charts/performance").await?;

    let kinds: Vec<&str> = body["axes"]
        .as_array()
        .expect("axes array")
        .iter()
        .filter_map(|a| a["kind"].as_str())
        .collect();
    assert_eq!(
        kinds,
        ["intensity", "speed", "strength", "endurance", "energy", "cardio"]
    );
    assert_eq!(body["axes"][0]["label"], "Intensité");
    assert_eq!(body["axes"][0]["fullMark"], 250);
    Ok(())
}

#[tokio::test]
async fn activity_and_score_endpoints() -> Result<()> {
    // ---
    let (_, activity) = get("/user/12/charts/activity").await?;
    assert_eq!(activity["sessions"][0]["index"], 1);
    assert_eq!(activity["sessions"][0]["display"], "1");
    assert_eq!(activity["sessions"][6]["display"], "7");

    let (_, score) = get("/user/12/charts/score").await?;
    assert_eq!(score["percentage"], 12);

    let (_, cards) = get("/user/12/key-data").await?;
    assert_eq!(cards[0]["display"], "1,930kCal");
    assert_eq!(cards[3]["label"], "Lipides");
    Ok(())
}

#[tokio::test]
async fn unknown_user_is_404() -> Result<()> {
    // ---
    let (status, body) = get("/user/99/dashboard").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"]
        .as_str()
        .is_some_and(|msg| msg.contains("/user/99")));
    Ok(())
}

#[tokio::test]
async fn normalized_endpoint_dispatches() -> Result<()> {
    // ---
    let (status, body) = get("/normalized/user/12/average-sessions").await?;
    assert_eq!(status, StatusCode::OK);

    let sessions = body.as_array().expect("sessions array");
    assert_eq!(sessions.len(), 7);
    assert_eq!(sessions[4]["rawLength"], 0.0);
    assert_eq!(sessions[4]["length"], 1.0);
    assert_eq!(sessions[4]["name"], "Vendredi");

    let (_, profile) = get("/normalized/user/18").await?;
    assert_eq!(profile["score"], 0.3);
    Ok(())
}
