//! Case comparison: one flat KPI row per case in a project.
//!
//! Runs every generator for every case and reduces the results to ten
//! scalars. Per-case failures are isolated — an unresolved link or a
//! half-deleted case produces a row of zeros, never an aborted comparison.

use serde::Serialize;
use uuid::Uuid;

use crate::config::EconomicsConfig;
use crate::storage::{Store, StoreResult};
use crate::types::{Case, DrainageStrategy, Exploration, PhysicalUnit, Project, TimeSeries};

use super::{cessation, co2, g_and_g_admin, non_fatal, opex, resolve_link, study};

const MILLION: f64 = 1e6;
const BILLION: f64 = 1e9;
const TONNES_TO_KG: f64 = 1e3;

/// Flat comparison row, one per case.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CompareCasesRow {
    pub case_id: Uuid,
    pub case_name: String,
    /// MSm3, or million bbl for oil-field projects.
    pub total_oil_production: f64,
    /// GSm3, or billion scf for oil-field projects.
    pub total_gas_production: f64,
    pub total_exported_volumes: f64,
    pub total_study_costs_plus_opex: f64,
    pub total_cessation_costs: f64,
    pub offshore_plus_onshore_facility_costs: f64,
    pub development_well_costs: f64,
    pub exploration_well_costs: f64,
    pub total_co2_emissions: f64,
    pub co2_intensity: f64,
}

/// Compute comparison rows for every case in the project, ordered by case
/// creation time.
pub fn compare_cases(
    store: &Store,
    economics: &EconomicsConfig,
    project_id: Uuid,
) -> StoreResult<Vec<CompareCasesRow>> {
    let project: Project = store.fetch(project_id)?;
    let mut cases = store.list_for_project::<Case>(project_id)?;
    cases.sort_by(|a, b| a.create_time.cmp(&b.create_time));

    let mut rows = Vec::with_capacity(cases.len());
    for case in cases {
        rows.push(case_row(store, economics, &project, case)?);
    }
    Ok(rows)
}

fn case_row(
    store: &Store,
    economics: &EconomicsConfig,
    project: &Project,
    case: Case,
) -> StoreResult<CompareCasesRow> {
    let drainage = resolve_link::<DrainageStrategy>(store, case.drainage_strategy_link)?;
    let exploration = resolve_link::<Exploration>(store, case.exploration_link)?;

    let co2_profile = non_fatal(co2::generate(store, economics, case.id), "co2 emissions")?;
    let opex_profiles = non_fatal(opex::generate(store, case.id), "opex")?;
    let study_profiles = non_fatal(study::generate(store, case.id), "study cost")?;
    let cessation_profiles = non_fatal(cessation::generate(store, case.id), "cessation cost")?;
    let g_and_g = non_fatal(
        g_and_g_admin::generate(store, economics, case.id),
        "g&g admin cost",
    )?;

    let total_co2_emissions = co2_profile.sum();

    Ok(CompareCasesRow {
        total_oil_production: total_oil_production(economics, project, drainage.as_ref(), false),
        total_gas_production: total_gas_production(economics, project, drainage.as_ref(), false),
        total_exported_volumes: total_exported_volumes(
            economics,
            project,
            drainage.as_ref(),
            false,
        ),
        total_study_costs_plus_opex: study_profiles.study_cost_profile.sum()
            + opex_profiles.opex_cost_profile.sum(),
        total_cessation_costs: cessation_profiles.cessation_cost_profile.sum(),
        offshore_plus_onshore_facility_costs: non_fatal(
            study::sum_all_cost_facility(store, &case),
            "facility costs",
        )?,
        development_well_costs: non_fatal(study::sum_well_cost(store, &case), "well costs")?,
        exploration_well_costs: exploration_well_costs(exploration.as_ref(), g_and_g.sum()),
        total_co2_emissions,
        co2_intensity: co2_intensity(economics, project, drainage.as_ref(), total_co2_emissions),
        case_id: case.id,
        case_name: case.name,
    })
}

fn series_sum(series: Option<&TimeSeries<f64>>) -> f64 {
    series.map_or(0.0, TimeSeries::sum)
}

fn oil_field(project: &Project) -> bool {
    project.physical_unit == PhysicalUnit::OilField
}

/// Total oil in MSm3, converted to million bbl for oil-field projects
/// unless conversion is excluded.
fn total_oil_production(
    economics: &EconomicsConfig,
    project: &Project,
    drainage: Option<&DrainageStrategy>,
    exclude_oil_field_conversion: bool,
) -> f64 {
    let sum = series_sum(drainage.and_then(|d| d.production_profile_oil.as_ref()));
    if oil_field(project) && !exclude_oil_field_conversion {
        economics.sm3_to_bbl(sum) / MILLION
    } else {
        sum / MILLION
    }
}

/// Total gas in GSm3, converted to billion scf for oil-field projects
/// unless conversion is excluded.
fn total_gas_production(
    economics: &EconomicsConfig,
    project: &Project,
    drainage: Option<&DrainageStrategy>,
    exclude_oil_field_conversion: bool,
) -> f64 {
    let sum = series_sum(drainage.and_then(|d| d.production_profile_gas.as_ref()));
    if oil_field(project) && !exclude_oil_field_conversion {
        economics.sm3_to_scf(sum) / BILLION
    } else {
        sum / BILLION
    }
}

fn total_exported_volumes(
    economics: &EconomicsConfig,
    project: &Project,
    drainage: Option<&DrainageStrategy>,
    exclude_oil_field_conversion: bool,
) -> f64 {
    if oil_field(project) && !exclude_oil_field_conversion {
        total_oil_production(economics, project, drainage, false)
            + total_gas_production(economics, project, drainage, false)
                / economics.oil_equivalent_factor
    } else {
        total_oil_production(economics, project, drainage, true)
            + total_gas_production(economics, project, drainage, true)
    }
}

/// G&G admin total plus the exploration asset's five cost profiles.
fn exploration_well_costs(exploration: Option<&Exploration>, g_and_g_sum: f64) -> f64 {
    let Some(exploration) = exploration else {
        return g_and_g_sum;
    };
    g_and_g_sum
        + series_sum(exploration.country_office_cost.as_ref())
        + series_sum(exploration.seismic_acquisition_and_processing.as_ref())
        + series_sum(exploration.exploration_well_cost_profile.as_ref())
        + series_sum(exploration.appraisal_well_cost_profile.as_ref())
        + series_sum(exploration.sidetrack_cost_profile.as_ref())
}

/// kg CO2 per BOE. Exactly 0 when either total is 0 — a ratio over missing
/// data is noise, not a KPI.
fn co2_intensity(
    economics: &EconomicsConfig,
    project: &Project,
    drainage: Option<&DrainageStrategy>,
    total_co2_emissions: f64,
) -> f64 {
    let exported = total_exported_volumes(economics, project, drainage, true);
    if exported != 0.0 && total_co2_emissions != 0.0 {
        (total_co2_emissions / exported) / economics.bbl_per_sm3 * TONNES_TO_KG
    } else {
        0.0
    }
}
