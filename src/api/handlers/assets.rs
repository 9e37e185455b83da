//! Sub-asset endpoints, generic over the seven case asset types.
//!
//! One handler set serves drainage strategies, topsides, surfs,
//! substructures, transports, explorations and well projects — the route
//! table instantiates them per type.

use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::services::{AssetService, CaseAsset};
use crate::storage::Entity;

use super::{project_view_response, respond, store_error_response, AppState};

#[derive(Debug, Deserialize)]
pub struct SourceCaseQuery {
    pub source_case_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct TargetCaseQuery {
    pub case_id: Uuid,
}

/// POST /api/v1/<kind>?source_case_id= — create and link to the source
/// case, return the project view.
pub async fn create<T: CaseAsset + Send + 'static>(
    State(state): State<AppState>,
    Query(query): Query<SourceCaseQuery>,
    Json(asset): Json<T>,
) -> Response {
    let service = AssetService::<T>::new(state.store.clone());
    match service.create(query.source_case_id, asset) {
        Ok(created) => project_view_response(&state, created.project_id()),
        Err(err) => store_error_response(&err),
    }
}

/// PUT /api/v1/<kind> — update, return the project view.
pub async fn update<T: CaseAsset + Send + 'static>(
    State(state): State<AppState>,
    Json(asset): Json<T>,
) -> Response {
    let service = AssetService::<T>::new(state.store.clone());
    match service.update(asset) {
        Ok(updated) => project_view_response(&state, updated.project_id()),
        Err(err) => store_error_response(&err),
    }
}

/// PUT /api/v1/<kind>/new — update, return the entity itself.
pub async fn update_new<T: CaseAsset + Send + 'static>(
    State(state): State<AppState>,
    Json(asset): Json<T>,
) -> Response {
    respond(AssetService::<T>::new(state.store).update(asset))
}

/// DELETE /api/v1/<kind>/:assetId — delete and unlink, return the project
/// view.
pub async fn delete<T: CaseAsset + Send + 'static>(
    State(state): State<AppState>,
    Path(asset_id): Path<Uuid>,
) -> Response {
    let service = AssetService::<T>::new(state.store.clone());
    match service.delete(asset_id) {
        Ok(project_id) => project_view_response(&state, project_id),
        Err(err) => store_error_response(&err),
    }
}

/// POST /api/v1/<kind>/:assetId/copy?case_id= — copy onto the target case,
/// return the copy.
pub async fn copy<T: CaseAsset + Send + 'static>(
    State(state): State<AppState>,
    Path(asset_id): Path<Uuid>,
    Query(query): Query<TargetCaseQuery>,
) -> Response {
    respond(AssetService::<T>::new(state.store).copy(asset_id, query.case_id))
}
