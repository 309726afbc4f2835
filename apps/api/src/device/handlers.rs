//! Axum route handlers for the device provisioning API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::device::DeviceRequest;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CreateDeviceRequest {
    /// Impulse categories the requested device should cover.
    #[serde(default)]
    pub category_ids: Vec<String>,
}

/// POST /api/v1/device/requests
///
/// Accepts the request immediately and schedules the simulated fulfillment;
/// the caller polls the returned id to observe the pending -> fulfilled
/// transition.
pub async fn handle_create_request(
    State(state): State<AppState>,
    Json(request): Json<CreateDeviceRequest>,
) -> (StatusCode, Json<DeviceRequest>) {
    let created = state.device_requests.create(request.category_ids).await;
    state
        .device_requests
        .schedule_fulfillment(created.id, state.config.device_fulfill_delay);
    (StatusCode::CREATED, Json(created))
}

/// GET /api/v1/device/requests/:id
///
/// An unknown id is the idle state: nothing was requested, or the request
/// was discarded.
pub async fn handle_get_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeviceRequest>, AppError> {
    state
        .device_requests
        .get(id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Device request {id} not found")))
}

/// DELETE /api/v1/device/requests/:id
///
/// Discards a request; a fulfillment timer still running for it will then
/// write nothing.
pub async fn handle_discard_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.device_requests.discard(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Device request {id} not found")))
    }
}
