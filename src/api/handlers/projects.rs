//! Project endpoints.

use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use uuid::Uuid;

use crate::services::{CreateProjectRequest, ProjectService};
use crate::types::Project;

use super::{project_view_response, respond, store_error_response, AppState};

/// POST /api/v1/projects — create a project, return its view.
pub async fn create_project(
    State(state): State<AppState>,
    Json(request): Json<CreateProjectRequest>,
) -> Response {
    let service = ProjectService::new(state.store.clone());
    match service.create_project(request) {
        Ok(project) => project_view_response(&state, project.id),
        Err(err) => store_error_response(&err),
    }
}

/// GET /api/v1/projects — list all projects.
pub async fn list_projects(State(state): State<AppState>) -> Response {
    respond(ProjectService::new(state.store).list_projects())
}

/// GET /api/v1/projects/:projectId — full project view.
pub async fn get_project(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
) -> Response {
    respond(ProjectService::new(state.store).project_view(project_id))
}

/// PUT /api/v1/projects — update a project, return its view.
pub async fn update_project(
    State(state): State<AppState>,
    Json(project): Json<Project>,
) -> Response {
    let service = ProjectService::new(state.store.clone());
    match service.update_project(project) {
        Ok(updated) => project_view_response(&state, updated.id),
        Err(err) => store_error_response(&err),
    }
}
