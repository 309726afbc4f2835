//! Axum route handlers for the matching API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::mentor::MentorMatch;
use crate::matching::{impulse, jobs};
use crate::models::career::{JobMatch, SkillCategories};
use crate::models::impulse::ImpulseCategory;
use crate::models::mentor::{MentorProfile, SurveyQuestion};
use crate::models::selection::SelectionSet;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct MentorListResponse {
    pub mentors: Vec<MentorProfile>,
}

#[derive(Debug, Deserialize)]
pub struct MentorMatchRequest {
    pub concerns: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ImpulseLookupRequest {
    pub ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ImpulseLookupResponse {
    pub categories: Vec<ImpulseCategory>,
}

#[derive(Debug, Deserialize)]
pub struct JobMatchRequest {
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct JobMatchResponse {
    pub matches: Vec<JobMatch>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/mentors
pub async fn handle_list_mentors(State(state): State<AppState>) -> Json<MentorListResponse> {
    Json(MentorListResponse {
        mentors: state.reference.mentors.clone(),
    })
}

/// GET /api/v1/mentors/survey
pub async fn handle_get_survey(State(state): State<AppState>) -> Json<SurveyQuestion> {
    Json(state.reference.survey.clone())
}

/// POST /api/v1/mentors/match
///
/// Scores the roster against the submitted concern set. An empty set is
/// accepted and yields a null mentor; the portal disables the action
/// client-side, but the core stays total.
pub async fn handle_match_mentor(
    State(state): State<AppState>,
    Json(request): Json<MentorMatchRequest>,
) -> Result<Json<MentorMatch>, AppError> {
    let concerns = SelectionSet::from(request.concerns);
    let result = state
        .mentor_matcher
        .best_match(&concerns, &state.reference.mentors)
        .await?;
    Ok(Json(result))
}

/// GET /api/v1/impulses
pub async fn handle_list_impulses(State(state): State<AppState>) -> Json<Vec<ImpulseCategory>> {
    Json(state.reference.impulse_categories.clone())
}

/// POST /api/v1/impulses/lookup
///
/// Resolves selected category ids to their catalog records, in catalog order.
pub async fn handle_lookup_impulses(
    State(state): State<AppState>,
    Json(request): Json<ImpulseLookupRequest>,
) -> Json<ImpulseLookupResponse> {
    let selected = SelectionSet::from(request.ids);
    let categories = impulse::lookup(&selected, &state.reference.impulse_categories)
        .into_iter()
        .cloned()
        .collect();
    Json(ImpulseLookupResponse { categories })
}

/// GET /api/v1/careers/skills
pub async fn handle_list_skills(State(state): State<AppState>) -> Json<SkillCategories> {
    Json(state.reference.skill_categories.clone())
}

/// POST /api/v1/careers/match
///
/// Holds the response for the configured search delay so the portal can show
/// its loading state against a realistic pause; the match itself is
/// synchronous and latency-free, and zero delay is a valid configuration.
pub async fn handle_match_jobs(
    State(state): State<AppState>,
    Json(request): Json<JobMatchRequest>,
) -> Json<JobMatchResponse> {
    tokio::time::sleep(state.config.job_search_delay).await;

    let selected = SelectionSet::from(request.skills);
    let matches = jobs::match_jobs(&selected, &state.reference.job_index);
    Json(JobMatchResponse { matches })
}
