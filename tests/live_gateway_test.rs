//! Live-mode gateway against a throwaway backend on a loopback port.

use std::net::SocketAddr;

use anyhow::Result;
use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};

use fitness_dashboard::{pipeline, Gateway, GatewayError, ResourceKind};

// ---

async fn spawn_backend() -> Result<SocketAddr> {
    // ---
    let app = Router::new()
        .route(
            "/user/{id}",
            get(|| async {
                Json(json!({ "data": {
                    "id": 18,
                    "userInfos": { "firstName": "Cecilia", "lastName": "Ratorez", "age": 34 },
                    "score": 0.3,
                    "keyData": { "calorieCount": 2103 }
                }}))
            }),
        )
        .route(
            "/user/{id}/activity",
            get(|| async { Json(json!({ "sessions": [] })) }),
        )
        .route(
            "/user/{id}/average-sessions",
            get(|| async {
                Json(json!({ "data": { "sessions": [
                    { "day": 1, "sessionLength": 0 },
                    { "day": 2, "sessionLength": 40 }
                ]}}))
            }),
        )
        .route(
            "/user/{id}/performance",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move { axum::serve(listener, app).await });
    Ok(addr)
}

#[tokio::test]
async fn live_fetch_unwraps_envelope() -> Result<()> {
    // ---
    let addr = spawn_backend().await?;
    let gw = Gateway::live(&format!("http://{addr}/"));

    let raw: Value = gw.fetch(ResourceKind::Profile, 18).await?;
    assert_eq!(raw["id"], 18);

    // legacy `score` field is unified
    let profile = pipeline::load_profile(&gw, 18).await?.expect("profile");
    assert_eq!(profile.score, 0.3);
    assert_eq!(profile.key_data.calorie_count, 2103);
    assert_eq!(profile.key_data.lipid_count, 0);

    let score = pipeline::load_score_chart(&gw, 18).await?;
    assert_eq!(score.percentage, 30);
    Ok(())
}

#[tokio::test]
async fn live_sessions_chart() -> Result<()> {
    // ---
    let addr = spawn_backend().await?;
    let gw = Gateway::live(&format!("http://{addr}"));

    let chart = pipeline::load_sessions_chart(&gw, 18).await?;
    assert_eq!(chart.points.len(), 4);
    assert_eq!(chart.points[0].length, 1.0);
    assert_eq!(chart.points[3].length, 40.0);
    Ok(())
}

#[tokio::test]
async fn missing_envelope_degrades_to_empty() -> Result<()> {
    // ---
    let addr = spawn_backend().await?;
    let gw = Gateway::live(&format!("http://{addr}"));

    let raw = gw.fetch(ResourceKind::Activity, 18).await?;
    assert!(raw.is_null());

    let chart = pipeline::load_activity_chart(&gw, 18).await?;
    assert!(chart.sessions.is_empty());
    Ok(())
}

#[tokio::test]
async fn non_success_status_is_http_error() -> Result<()> {
    // ---
    let addr = spawn_backend().await?;
    let gw = Gateway::live(&format!("http://{addr}"));

    let err = gw
        .fetch(ResourceKind::Performance, 18)
        .await
        .expect_err("500 must fail");
    assert_eq!(err, GatewayError::Http { status: 500 });

    // unknown route on the backend
    let err = gw.fetch_path("/nowhere").await.expect_err("404 must fail");
    assert_eq!(err, GatewayError::Http { status: 404 });

    // the whole dashboard is rejected when one resource fails
    let err = pipeline::load_dashboard(&gw, 18).await.expect_err("dashboard");
    assert_eq!(err, GatewayError::Http { status: 500 });
    Ok(())
}

#[tokio::test]
async fn refused_connection_is_network_error() -> Result<()> {
    // ---
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let gw = Gateway::live(&format!("http://{addr}"));
    let err = gw
        .fetch(ResourceKind::Profile, 18)
        .await
        .expect_err("nothing is listening");
    assert!(matches!(err, GatewayError::Network(_)));
    Ok(())
}
