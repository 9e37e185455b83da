//! G&G admin cost generation.
//!
//! A flat per-country annual cost running from the first exploration well's
//! drilling year through the case's DG1 year, with the DG1 year prorated by
//! how far into the year DG1 falls.

use chrono::Datelike;
use uuid::Uuid;

use crate::config::EconomicsConfig;
use crate::storage::{Store, StoreResult};
use crate::types::{Case, Exploration, Project, TimeSeries, Well, WellCategory};

use super::resolve_link;

/// Recompute the G&G admin cost profile for a case, persist it on the
/// linked exploration, and return it.
///
/// Empty result when the exploration link does not resolve, no
/// exploration-category well has a drilling schedule, DG1 is unset, or DG1
/// precedes the earliest well year.
pub fn generate(
    store: &Store,
    economics: &EconomicsConfig,
    case_id: Uuid,
) -> StoreResult<TimeSeries<f64>> {
    let case: Case = store.fetch(case_id)?;

    let Some(mut exploration) = resolve_link::<Exploration>(store, case.exploration_link)? else {
        return Ok(TimeSeries::default());
    };

    let Some(earliest_offset) = earliest_exploration_well_offset(store, &exploration)? else {
        return Ok(TimeSeries::default());
    };
    let Some(dg1) = case.dg1_date else {
        return Ok(TimeSeries::default());
    };

    // Schedule offsets are relative to the DG4 year.
    let earliest_year = earliest_offset + case.dg4_date.year();
    if dg1.year() < earliest_year {
        return Ok(TimeSeries::default());
    }

    let project: Project = store.fetch(case.project_id)?;
    let rate = economics.country_rate(&project.country);

    // Full years before the DG1 year, then the DG1 year prorated by its
    // day-of-year.
    let fraction_of_final_year = f64::from(dg1.date_naive().ordinal()) / 365.0;
    let full_years = usize::try_from(dg1.year() - earliest_year).unwrap_or(0);
    let mut values = vec![rate; full_years];
    values.push(rate * fraction_of_final_year);

    let profile = TimeSeries::new(earliest_offset, values);
    exploration.g_and_g_admin_cost = Some(profile.clone());
    store.save(&exploration)?;

    Ok(profile)
}

/// Earliest drilling-schedule start offset among wells of the exploration
/// category. Appraisal wells and sidetracks do not count; neither do wells
/// without a schedule or missing from the catalog.
fn earliest_exploration_well_offset(
    store: &Store,
    exploration: &Exploration,
) -> StoreResult<Option<i32>> {
    let mut earliest: Option<i32> = None;
    for linked in &exploration.exploration_wells {
        let Some(schedule) = linked.drilling_schedule.as_ref().filter(|s| !s.is_empty()) else {
            continue;
        };
        let Some(well) = store.try_fetch::<Well>(linked.well_id)? else {
            tracing::info!(well = %linked.well_id, "catalog well not found, skipping schedule");
            continue;
        };
        if well.well_category != WellCategory::ExplorationWell {
            continue;
        }
        earliest = Some(earliest.map_or(schedule.start_year, |e| e.min(schedule.start_year)));
    }
    Ok(earliest)
}
