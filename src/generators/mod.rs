//! Derived profile generators
//!
//! Each generator is a pure function of the persisted state: it resolves the
//! case by id (the only fatal lookup), resolves soft-linked sub-assets
//! non-fatally, recomputes its profiles from scratch, writes the computed
//! side back to the owning entity, and returns the result. No caching, no
//! incremental invalidation — every call re-derives.

pub mod cessation;
pub mod co2;
pub mod compare;
pub mod g_and_g_admin;
pub mod opex;
pub mod study;

use uuid::Uuid;

use crate::storage::{Entity, Store, StoreError, StoreResult};
use crate::types::{DrillingSchedule, Well, WellProject};

/// Resolve a soft-referenced sub-asset.
///
/// An unset link or a dangling id yields `None` with an info log — never an
/// error. One broken case must not abort a whole comparison.
pub(crate) fn resolve_link<T: Entity>(store: &Store, link: Option<Uuid>) -> StoreResult<Option<T>> {
    let Some(id) = link else {
        return Ok(None);
    };
    match store.try_fetch::<T>(id)? {
        Some(value) => Ok(Some(value)),
        None => {
            tracing::info!(kind = %T::KIND, %id, "linked entity not found, substituting empty result");
            Ok(None)
        }
    }
}

/// Merge every development well's drilling schedule into one aggregate.
/// Wells missing from the catalog or outside the development categories are
/// skipped.
pub(crate) fn development_drilling_schedule(
    store: &Store,
    well_project: &WellProject,
) -> StoreResult<DrillingSchedule> {
    let mut aggregate = DrillingSchedule::default();
    for linked in &well_project.well_project_wells {
        let Some(schedule) = linked.drilling_schedule.as_ref() else {
            continue;
        };
        let Some(well) = store.try_fetch::<Well>(linked.well_id)? else {
            tracing::info!(well = %linked.well_id, "catalog well not found, skipping schedule");
            continue;
        };
        if !well.well_category.is_development() {
            continue;
        }
        aggregate = aggregate.merge(schedule);
    }
    Ok(aggregate)
}

/// Downgrade a generator's `NotFound` to a default value, keeping real
/// storage failures fatal. Used by the comparison aggregator for per-case
/// isolation.
pub(crate) fn non_fatal<T: Default>(result: StoreResult<T>, what: &str) -> StoreResult<T> {
    match result {
        Ok(value) => Ok(value),
        Err(StoreError::NotFound { kind, id }) => {
            tracing::info!(%kind, %id, "{what}: entity not found, substituting empty result");
            Ok(T::default())
        }
        Err(e) => Err(e),
    }
}
