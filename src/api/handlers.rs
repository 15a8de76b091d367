//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, Json},
};
use chrono::Utc;
use tracing::{debug, info};

use crate::{
    display::Frame,
    error::{PaceError, Result},
    state::{AppState, StatusPayload, TimerSettings},
};
use super::{
    params::{ConfigUpdateRequest, EndsQuery, TimeQuery},
    responses::{ActionResponse, DebugResponse, HealthResponse},
};

const VIEW_PAGE: &str = include_str!("view.html");
const CONFIGURE_PAGE: &str = include_str!("configure.html");

/// Handle GET /status - Current clock and settings snapshot
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusPayload>> {
    Ok(Json(state.status()?))
}

/// Handle POST /reset - Elapsed back to zero
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Result<Json<ActionResponse>> {
    state.reset()?;
    Ok(Json(ActionResponse::ok("timer reset")))
}

/// Handle POST /pause - Freeze the clock (no-op when already paused)
pub async fn pause_handler(State(state): State<Arc<AppState>>) -> Result<Json<ActionResponse>> {
    state.pause()?;
    Ok(Json(ActionResponse::ok("timer paused")))
}

/// Handle POST /resume - Continue from the paused value
pub async fn resume_handler(State(state): State<Arc<AppState>>) -> Result<Json<ActionResponse>> {
    state.resume()?;
    Ok(Json(ActionResponse::ok("timer resumed")))
}

/// Handle POST /set_remaining?seconds=N | ?time=H:MM:SS
pub async fn set_remaining_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TimeQuery>,
) -> Result<Json<ActionResponse>> {
    let remaining = query.remaining()?;
    let applied = state.set_remaining(remaining)?;
    Ok(Json(ActionResponse::ok("remaining set").with_remaining(applied)))
}

/// Handle POST /set_total?seconds=N | ?time=H:MM:SS
pub async fn set_total_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TimeQuery>,
) -> Result<Json<ActionResponse>> {
    let total = query.total()?;
    let total = state.set_total(total)?;
    Ok(Json(ActionResponse::ok("total set").with_total(total)))
}

/// Handle POST /set_ends?count=N
pub async fn set_ends_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EndsQuery>,
) -> Result<Json<ActionResponse>> {
    let ends = query.end_count()?;
    let ends = state.set_ends(ends)?;
    Ok(Json(ActionResponse::ok("ends set").with_ends(ends)))
}

/// Handle POST /add_time - One more minute of elapsed time
pub async fn add_time_handler(State(state): State<Arc<AppState>>) -> Result<Json<ActionResponse>> {
    let elapsed = state.add_time()?;
    Ok(Json(ActionResponse::ok("Added 1 minute").with_elapsed(elapsed)))
}

/// Handle POST /subtract_time - One minute less, never below zero
pub async fn subtract_time_handler(State(state): State<Arc<AppState>>) -> Result<Json<ActionResponse>> {
    let elapsed = state.subtract_time()?;
    Ok(Json(ActionResponse::ok("Subtracted 1 minute").with_elapsed(elapsed)))
}

/// Handle GET /config - Live settings
pub async fn get_config_handler(State(state): State<Arc<AppState>>) -> Result<Json<TimerSettings>> {
    Ok(Json(state.settings()?))
}

/// Handle POST /config - Validate, persist and apply a settings update
///
/// Only an absent or unreadable body is `MissingBody`; bad field values are
/// reported per field by `ConfigUpdateRequest::into_update`.
pub async fn update_config_handler(
    State(state): State<Arc<AppState>>,
    body: Option<Json<ConfigUpdateRequest>>,
) -> Result<Json<ActionResponse>> {
    let Json(request) = body.ok_or(PaceError::MissingBody)?;
    let update = request.into_update()?;
    let applied = state.update_settings(update).await?;

    info!("Configuration saved to {}", state.store().path().display());
    Ok(Json(
        ActionResponse::ok("Configuration updated and saved")
            .with_total(applied.total_seconds.get())
            .with_ends(applied.num_ends.get()),
    ))
}

/// Handle GET /debug - Compare stored and live settings
pub async fn debug_handler(State(state): State<Arc<AppState>>) -> Result<Json<DebugResponse>> {
    let store = state.store();
    Ok(Json(DebugResponse {
        file_config: state.stored_settings().await?,
        live_config: state.settings()?,
        config_file: store.path().display().to_string(),
        config_file_exists: store.exists().await,
    }))
}

/// Handle GET /frame - Latest frame from the display loop
pub async fn frame_handler(State(state): State<Arc<AppState>>) -> std::result::Result<Json<Frame>, StatusCode> {
    match state.latest_frame() {
        Some(frame) => Ok(Json(frame)),
        None => {
            debug!("Frame requested before the display loop produced one");
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

/// Handle GET /view - Browser mirror that polls /status
pub async fn view_handler() -> Html<&'static str> {
    Html(VIEW_PAGE)
}

/// Handle GET /configure - Settings form posting to /config
pub async fn configure_handler() -> Html<&'static str> {
    Html(CONFIGURE_PAGE)
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let (last_action, last_action_time) = state.get_last_action();

    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    })
}
