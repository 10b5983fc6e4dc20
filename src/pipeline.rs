//! Fetch → normalize → transform, per chart and for the whole dashboard.
//!
//! Gateway failures propagate unchanged; nothing here retries or falls back
//! from live to mock.

use tracing::{debug, info};

use crate::charts::{
    activity_chart, key_data_cards, performance_chart, score_chart, sessions_chart,
};
use crate::error::GatewayResult;
use crate::gateway::Gateway;
use crate::models::{
    ActivityChart, Dashboard, PerformanceChart, ResourceKind, ScoreChart, SessionsChart,
    StatCard, UserProfile,
};
use crate::normalize::{
    normalize_activity, normalize_endpoint, normalize_performance, normalize_profile,
    normalize_sessions, Normalized,
};

// ---

pub async fn load_profile(gw: &Gateway, user_id: u32) -> GatewayResult<Option<UserProfile>> {
    // ---
    let raw = gw.fetch(ResourceKind::Profile, user_id).await?;
    Ok(normalize_profile(&raw))
}

pub async fn load_activity_chart(gw: &Gateway, user_id: u32) -> GatewayResult<ActivityChart> {
    // ---
    let raw = gw.fetch(ResourceKind::Activity, user_id).await?;
    Ok(activity_chart(&normalize_activity(&raw)))
}

pub async fn load_sessions_chart(gw: &Gateway, user_id: u32) -> GatewayResult<SessionsChart> {
    // ---
    let raw = gw.fetch(ResourceKind::AverageSessions, user_id).await?;
    Ok(sessions_chart(&normalize_sessions(&raw)))
}

pub async fn load_performance_chart(
    gw: &Gateway,
    user_id: u32,
) -> GatewayResult<PerformanceChart> {
    // ---
    let raw = gw.fetch(ResourceKind::Performance, user_id).await?;
    Ok(performance_chart(&normalize_performance(&raw)))
}

pub async fn load_score_chart(gw: &Gateway, user_id: u32) -> GatewayResult<ScoreChart> {
    // ---
    let profile = load_profile(gw, user_id).await?;
    Ok(score_chart(profile.as_ref()))
}

pub async fn load_key_data(gw: &Gateway, user_id: u32) -> GatewayResult<Vec<StatCard>> {
    // ---
    let profile = load_profile(gw, user_id).await?;
    Ok(key_data_cards(profile.as_ref()))
}

/// Fetch any backend path and run it through the endpoint dispatcher.
pub async fn load_normalized(gw: &Gateway, path: &str) -> GatewayResult<Normalized> {
    // ---
    let raw = gw.fetch_path(path).await?;
    Ok(normalize_endpoint(path, raw))
}

/// Run all four resource cycles concurrently and assemble the dashboard.
///
/// The first failing fetch rejects the whole dashboard.
pub async fn load_dashboard(gw: &Gateway, user_id: u32) -> GatewayResult<Dashboard> {
    // ---
    info!("Loading dashboard for user {}", user_id);

    let (profile, activity, sessions, performance) = tokio::try_join!(
        load_profile(gw, user_id),
        load_activity_chart(gw, user_id),
        load_sessions_chart(gw, user_id),
        load_performance_chart(gw, user_id),
    )?;

    let score = score_chart(profile.as_ref());
    let key_data = key_data_cards(profile.as_ref());

    debug!(
        "Dashboard for user {}: {} activity points, {} session points, score {}%",
        user_id,
        activity.sessions.len(),
        sessions.points.len(),
        score.percentage
    );

    Ok(Dashboard {
        profile,
        activity,
        sessions,
        performance,
        score,
        key_data,
    })
}
