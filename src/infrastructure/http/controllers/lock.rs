use crate::application::services::SimulationStart;
use crate::domain::LockSimulationRequest;
use crate::infrastructure::http::middleware::AppState;
use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use tracing::info;

#[derive(Serialize)]
pub struct SimulateLockResponse {
    pub message: String,
}

/// Kick off a lock simulation and acknowledge immediately; the lock/unlock
/// work happens in a detached task.
///
/// The body is read raw rather than through the Json extractor: a malformed
/// or missing body must fall back to the 10-second defaults, not produce a
/// 4xx.
pub async fn simulate_lock(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let request = LockSimulationRequest::from_body(&body);
    info!(
        lock_secs = request.lock_secs(),
        cooldown_secs = request.cooldown_secs(),
        "simulate-lock request received"
    );

    let (status, message) = match state.simulator.start(request) {
        SimulationStart::Started { duration_secs } => (
            StatusCode::ACCEPTED,
            format!("Asynchronous lock started for {} seconds", duration_secs),
        ),
        SimulationStart::PeriodicStarted {
            duration_secs,
            cooldown_secs,
        } => (
            StatusCode::ACCEPTED,
            format!(
                "Periodic locking started: {} seconds locked, {} seconds cooldown",
                duration_secs, cooldown_secs
            ),
        ),
        SimulationStart::AlreadyRunning => {
            (StatusCode::OK, "Locking already in progress.".to_string())
        }
    };

    (status, Json(SimulateLockResponse { message }))
}
