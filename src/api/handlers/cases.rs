//! Case endpoints.
//!
//! Mutations return the updated parent project view; the `/new` update
//! variant returns the case itself for incremental-save clients.

use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use uuid::Uuid;

use crate::services::{CaseService, CreateCaseRequest};
use crate::types::Case;

use super::{project_view_response, respond, store_error_response, AppState};

fn service(state: &AppState) -> CaseService {
    CaseService::new(state.store.clone(), state.economics.clone())
}

/// POST /api/v1/cases — create a case with default sub-assets.
pub async fn create_case(
    State(state): State<AppState>,
    Json(request): Json<CreateCaseRequest>,
) -> Response {
    match service(&state).create_case(request) {
        Ok(case) => project_view_response(&state, case.project_id),
        Err(err) => store_error_response(&err),
    }
}

/// PUT /api/v1/cases — update a case, return the project view.
pub async fn update_case(State(state): State<AppState>, Json(case): Json<Case>) -> Response {
    match service(&state).update_case(case) {
        Ok(updated) => project_view_response(&state, updated.project_id),
        Err(err) => store_error_response(&err),
    }
}

/// PUT /api/v1/cases/new — update a case, return the case.
pub async fn update_case_new(State(state): State<AppState>, Json(case): Json<Case>) -> Response {
    respond(service(&state).update_case(case))
}

/// DELETE /api/v1/cases/:caseId — delete a case and its owned sub-assets.
pub async fn delete_case(State(state): State<AppState>, Path(case_id): Path<Uuid>) -> Response {
    match service(&state).delete_case(case_id) {
        Ok(project_id) => project_view_response(&state, project_id),
        Err(err) => store_error_response(&err),
    }
}

/// POST /api/v1/cases/:caseId/duplicate — deep-copy a case.
pub async fn duplicate_case(
    State(state): State<AppState>,
    Path(case_id): Path<Uuid>,
) -> Response {
    respond(service(&state).duplicate_case(case_id))
}
