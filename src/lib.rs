//! FieldPlan: Offshore field development case modeling
//!
//! CRUD backend for modeling field development cases and deriving cost,
//! production and CO2 profiles for comparison across cases within a project.
//!
//! ## Architecture
//!
//! - **Types**: time series, override profiles, and the persisted domain model
//! - **Storage**: sled-backed entity store with transactional multi-writes
//! - **Services**: per-entity CRUD with cascading case creation
//! - **Generators**: derived cost/production/CO2 profiles, recomputed on demand
//! - **API**: axum REST surface with a uniform response envelope

pub mod api;
pub mod config;
pub mod generators;
pub mod services;
pub mod storage;
pub mod types;

// Re-export configuration
pub use config::{AppConfig, EconomicsConfig};

// Re-export commonly used types
pub use types::{
    Case, DrainageStrategy, Exploration, OverridableProfile, Project, Surf, TimeSeries, Topside,
    Transport, Well, WellProject,
};

// Re-export storage
pub use storage::{Store, StoreError};

// Re-export the application entry points
pub use api::{create_app, AppState};
