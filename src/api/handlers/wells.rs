//! Project well catalog endpoints.

use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use uuid::Uuid;

use crate::services::{CreateWellRequest, WellService};
use crate::types::Well;

use super::{project_view_response, respond, store_error_response, AppState};

/// POST /api/v1/wells — add a well to the project catalog.
pub async fn create_well(
    State(state): State<AppState>,
    Json(request): Json<CreateWellRequest>,
) -> Response {
    respond(WellService::new(state.store).create_well(request))
}

/// PUT /api/v1/wells — update a catalog well.
pub async fn update_well(State(state): State<AppState>, Json(well): Json<Well>) -> Response {
    respond(WellService::new(state.store).update_well(well))
}

/// DELETE /api/v1/wells/:wellId — remove a well, return the project view.
pub async fn delete_well(State(state): State<AppState>, Path(well_id): Path<Uuid>) -> Response {
    match WellService::new(state.store.clone()).delete_well(well_id) {
        Ok(project_id) => project_view_response(&state, project_id),
        Err(err) => store_error_response(&err),
    }
}

/// GET /api/v1/projects/:projectId/wells — the project's well catalog.
pub async fn list_wells(State(state): State<AppState>, Path(project_id): Path<Uuid>) -> Response {
    respond(WellService::new(state.store).list_wells(project_id))
}
