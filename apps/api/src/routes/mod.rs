pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::device::handlers as device;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Mentor matching
        .route("/api/v1/mentors", get(matching::handle_list_mentors))
        .route("/api/v1/mentors/survey", get(matching::handle_get_survey))
        .route("/api/v1/mentors/match", post(matching::handle_match_mentor))
        // Impulse support catalog
        .route("/api/v1/impulses", get(matching::handle_list_impulses))
        .route(
            "/api/v1/impulses/lookup",
            post(matching::handle_lookup_impulses),
        )
        // Career matching
        .route("/api/v1/careers/skills", get(matching::handle_list_skills))
        .route("/api/v1/careers/match", post(matching::handle_match_jobs))
        // Device provisioning simulation
        .route("/api/v1/device/requests", post(device::handle_create_request))
        .route(
            "/api/v1/device/requests/:id",
            get(device::handle_get_request).delete(device::handle_discard_request),
        )
        .with_state(state)
}
