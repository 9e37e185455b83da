//! Generator and comparison endpoints.
//!
//! POSTs recompute and persist the derived profiles for one case; the
//! compare endpoint aggregates every case of a project into KPI rows.

use axum::extract::{Path, State};
use axum::response::Response;
use uuid::Uuid;

use crate::generators;

use super::{respond, AppState};

/// POST /api/v1/cases/:caseId/opex
pub async fn opex(State(state): State<AppState>, Path(case_id): Path<Uuid>) -> Response {
    respond(generators::opex::generate(&state.store, case_id))
}

/// POST /api/v1/cases/:caseId/study
pub async fn study(State(state): State<AppState>, Path(case_id): Path<Uuid>) -> Response {
    respond(generators::study::generate(&state.store, case_id))
}

/// POST /api/v1/cases/:caseId/cessation
pub async fn cessation(State(state): State<AppState>, Path(case_id): Path<Uuid>) -> Response {
    respond(generators::cessation::generate(&state.store, case_id))
}

/// POST /api/v1/cases/:caseId/co2
pub async fn co2_emissions(State(state): State<AppState>, Path(case_id): Path<Uuid>) -> Response {
    respond(generators::co2::generate(
        &state.store,
        &state.economics,
        case_id,
    ))
}

/// POST /api/v1/cases/:caseId/gandg
pub async fn g_and_g_admin(State(state): State<AppState>, Path(case_id): Path<Uuid>) -> Response {
    respond(generators::g_and_g_admin::generate(
        &state.store,
        &state.economics,
        case_id,
    ))
}

/// GET /api/v1/projects/:projectId/compare — KPI rows for every case.
pub async fn compare(State(state): State<AppState>, Path(project_id): Path<Uuid>) -> Response {
    respond(generators::compare::compare_cases(
        &state.store,
        &state.economics,
        project_id,
    ))
}

