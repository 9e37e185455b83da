//! Entity services
//!
//! One service per entity type over the shared [`Store`](crate::storage::Store):
//! create / update / delete / copy plus lookups. Services return
//! [`StoreError`](crate::storage::StoreError) directly — `NotFound` is the
//! only client-visible failure, everything else is a server fault.

mod assets;
mod case;
mod project;
mod well;

pub use assets::{AssetService, CaseAsset};
pub use case::{CaseService, CreateCaseRequest, DEFAULT_STUDY_CAPEX_FACTOR};
pub use project::{CreateProjectRequest, ProjectService, ProjectView};
pub use well::{CreateWellRequest, WellService};
