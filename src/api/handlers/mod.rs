//! Request handlers: thin adapters from HTTP to the service layer.

pub mod assets;
pub mod cases;
pub mod generators;
pub mod projects;
pub mod wells;

use axum::response::Response;
use serde::Serialize;
use uuid::Uuid;

use crate::config::EconomicsConfig;
use crate::services::ProjectService;
use crate::storage::{Store, StoreError, StoreResult};

use super::envelope::{ApiErrorResponse, ApiResponse};

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub economics: EconomicsConfig,
}

impl AppState {
    pub fn new(store: Store, economics: EconomicsConfig) -> Self {
        Self { store, economics }
    }
}

/// Map a storage error to the envelope: `NotFound` is the caller's fault,
/// everything else is ours.
pub(crate) fn store_error_response(err: &StoreError) -> Response {
    match err {
        StoreError::NotFound { .. } => ApiErrorResponse::not_found(err.to_string()),
        _ => {
            tracing::error!(error = %err, "request failed");
            ApiErrorResponse::internal("storage failure")
        }
    }
}

/// Wrap a service result into the response envelope.
pub(crate) fn respond<T: Serialize>(result: StoreResult<T>) -> Response {
    match result {
        Ok(value) => ApiResponse::ok(value),
        Err(err) => store_error_response(&err),
    }
}

/// The "updated parent Project" payload mutating endpoints return.
pub(crate) fn project_view_response(state: &AppState, project_id: Uuid) -> Response {
    respond(ProjectService::new(state.store.clone()).project_view(project_id))
}

/// GET /health — liveness probe.
pub async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}
