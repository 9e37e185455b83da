//! API route definitions
//!
//! Organizes endpoints for the case modeling API:
//! - /api/v1/projects - project CRUD, comparison, well catalog
//! - /api/v1/cases - case lifecycle and profile generation
//! - /api/v1/<asset kind> - the seven sub-asset types, one shared surface
//! - /api/v1/wells - project well catalog

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::services::CaseAsset;
use crate::types::{
    DrainageStrategy, Exploration, Substructure, Surf, Topside, Transport, WellProject,
};

use super::handlers::{self, assets, cases, generators, projects, wells, AppState};

/// The shared sub-asset surface: create/update/update-new/delete/copy.
fn asset_routes<T: CaseAsset + Send + Sync + 'static>(prefix: &str) -> Router<AppState> {
    Router::new()
        .route(
            &format!("/{prefix}"),
            post(assets::create::<T>).put(assets::update::<T>),
        )
        .route(&format!("/{prefix}/new"), put(assets::update_new::<T>))
        .route(&format!("/{prefix}/:assetId"), delete(assets::delete::<T>))
        .route(&format!("/{prefix}/:assetId/copy"), post(assets::copy::<T>))
}

/// Create all API routes.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        // Projects
        .route(
            "/projects",
            post(projects::create_project)
                .get(projects::list_projects)
                .put(projects::update_project),
        )
        .route("/projects/:projectId", get(projects::get_project))
        .route("/projects/:projectId/compare", get(generators::compare))
        .route("/projects/:projectId/wells", get(wells::list_wells))
        // Cases
        .route("/cases", post(cases::create_case).put(cases::update_case))
        .route("/cases/new", put(cases::update_case_new))
        .route("/cases/:caseId", delete(cases::delete_case))
        .route("/cases/:caseId/duplicate", post(cases::duplicate_case))
        // Profile generation
        .route("/cases/:caseId/opex", post(generators::opex))
        .route("/cases/:caseId/study", post(generators::study))
        .route("/cases/:caseId/cessation", post(generators::cessation))
        .route("/cases/:caseId/co2", post(generators::co2_emissions))
        .route("/cases/:caseId/gandg", post(generators::g_and_g_admin))
        // Sub-assets
        .merge(asset_routes::<DrainageStrategy>("drainage-strategies"))
        .merge(asset_routes::<Topside>("topsides"))
        .merge(asset_routes::<Surf>("surfs"))
        .merge(asset_routes::<Substructure>("substructures"))
        .merge(asset_routes::<Transport>("transports"))
        .merge(asset_routes::<Exploration>("explorations"))
        .merge(asset_routes::<WellProject>("well-projects"))
        // Well catalog
        .route("/wells", post(wells::create_well).put(wells::update_well))
        .route("/wells/:wellId", delete(wells::delete_well))
        .with_state(state)
}

/// Health endpoint at root level.
pub fn health_routes() -> Router {
    Router::new().route("/health", get(handlers::health))
}
