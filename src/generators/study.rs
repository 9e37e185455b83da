//! Study cost generation: feasibility & concept studies and FEED studies.
//!
//! Each study phase charges a share of total capex (facilities plus
//! development wells), spread day-weighted across the calendar years
//! between its two decision gates. The capex sums double as the facility
//! and development-well KPIs in the case comparison.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::storage::{Store, StoreResult};
use crate::types::{
    refresh_slot, Case, OverridableProfile, Substructure, Surf, TimeSeries, Topside, Transport,
    WellProject,
};

use super::resolve_link;

#[derive(Debug, Clone, Default, Serialize)]
pub struct StudyProfiles {
    pub total_feasibility_and_concept_studies: TimeSeries<f64>,
    pub total_feed_studies: TimeSeries<f64>,
    pub study_cost_profile: TimeSeries<f64>,
}

/// Recompute both study profiles, persist them on the case, and return
/// them together with their merged total.
pub fn generate(store: &Store, case_id: Uuid) -> StoreResult<StudyProfiles> {
    let mut case: Case = store.fetch(case_id)?;

    let capex = sum_all_cost_facility(store, &case)? + sum_well_cost(store, &case)?;
    let dg4_year = case.dg4_date.year();

    let feasibility = spread_between_gates(
        capex * case.capex_factor_feasibility_studies,
        case.dg0_date,
        case.dg2_date,
        dg4_year,
    );
    let feed = spread_between_gates(
        capex * case.capex_factor_feed_studies,
        case.dg2_date,
        case.dg3_date,
        dg4_year,
    );

    refresh_slot(
        &mut case.total_feasibility_and_concept_studies,
        feasibility.clone(),
    );
    refresh_slot(&mut case.total_feed_studies, feed.clone());
    store.save(&case)?;

    let effective_feasibility = case
        .total_feasibility_and_concept_studies
        .as_ref()
        .map(|p| p.effective().clone())
        .unwrap_or_default();
    let effective_feed = case
        .total_feed_studies
        .as_ref()
        .map(|p| p.effective().clone())
        .unwrap_or_default();

    Ok(StudyProfiles {
        total_feasibility_and_concept_studies: feasibility,
        total_feed_studies: feed,
        study_cost_profile: effective_feasibility.merge(&effective_feed),
    })
}

/// Total effective facility capex: topside + surf + substructure +
/// transport cost profiles. Unresolved links contribute nothing.
pub fn sum_all_cost_facility(store: &Store, case: &Case) -> StoreResult<f64> {
    let mut sum = 0.0;
    if let Some(topside) = resolve_link::<Topside>(store, case.topside_link)? {
        sum += profile_sum(topside.cost_profile.as_ref());
    }
    if let Some(surf) = resolve_link::<Surf>(store, case.surf_link)? {
        sum += profile_sum(surf.cost_profile.as_ref());
    }
    if let Some(substructure) = resolve_link::<Substructure>(store, case.substructure_link)? {
        sum += profile_sum(substructure.cost_profile.as_ref());
    }
    if let Some(transport) = resolve_link::<Transport>(store, case.transport_link)? {
        sum += profile_sum(transport.cost_profile.as_ref());
    }
    Ok(sum)
}

/// Total effective development well capex across the well project's
/// per-class cost profiles.
pub fn sum_well_cost(store: &Store, case: &Case) -> StoreResult<f64> {
    let Some(well_project) = resolve_link::<WellProject>(store, case.well_project_link)? else {
        return Ok(0.0);
    };
    Ok(well_project
        .cost_profiles()
        .map(|p| p.effective().sum())
        .sum())
}

fn profile_sum(profile: Option<&OverridableProfile>) -> f64 {
    profile.map_or(0.0, |p| p.effective().sum())
}

fn jan1(year: i32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Spread a total across the calendar years between two gate dates,
/// weighted by the days of `[start, end)` falling in each year. Empty when
/// either gate is unset or the window is not at least a day long.
fn spread_between_gates(
    total: f64,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    dg4_year: i32,
) -> TimeSeries<f64> {
    let (Some(start), Some(end)) = (start, end) else {
        return TimeSeries::default();
    };
    let total_days = (end - start).num_days();
    if total_days <= 0 {
        return TimeSeries::default();
    }

    let mut values = Vec::new();
    for year in start.year()..=end.year() {
        let span_start = start.max(jan1(year));
        let span_end = end.min(jan1(year + 1));
        let days = (span_end - span_start).num_days().max(0);
        // The end year contributes nothing when the gate sits on Jan 1.
        if days == 0 && year == end.year() {
            break;
        }
        #[allow(clippy::cast_precision_loss)]
        values.push(total * days as f64 / total_days as f64);
    }

    TimeSeries::new(start.year() - dg4_year, values)
}
