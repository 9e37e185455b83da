//! Opex profile generation: well intervention cost and offshore facility
//! operations cost, merged into the case's total opex.

use serde::Serialize;
use uuid::Uuid;

use crate::storage::{Store, StoreResult};
use crate::types::{refresh_slot, Case, DrainageStrategy, Project, TimeSeries, Topside, WellProject};

use super::{development_drilling_schedule, resolve_link};

/// Ramp-up years billed before first oil.
const PRE_OPEX_YEAR_OFFSET: i32 = 3;

#[derive(Debug, Clone, Default, Serialize)]
pub struct OpexProfiles {
    pub well_intervention_cost_profile: TimeSeries<f64>,
    pub offshore_facilities_operations_cost_profile: TimeSeries<f64>,
    pub opex_cost_profile: TimeSeries<f64>,
}

/// Recompute both opex constituents, persist them on the case, and return
/// them together with their merged total. Manual overrides on the case win
/// in the merged profile and survive regeneration.
pub fn generate(store: &Store, case_id: Uuid) -> StoreResult<OpexProfiles> {
    let mut case: Case = store.fetch(case_id)?;
    let project: Project = store.fetch(case.project_id)?;
    let drainage = resolve_link::<DrainageStrategy>(store, case.drainage_strategy_link)?;

    let intervention = well_intervention_cost(store, &case, &project, drainage.as_ref())?;
    let facilities = offshore_facilities_cost(store, &case, drainage.as_ref())?;

    refresh_slot(&mut case.well_intervention_cost_profile, intervention.clone());
    refresh_slot(
        &mut case.offshore_facilities_operations_cost_profile,
        facilities.clone(),
    );
    store.save(&case)?;

    let effective_intervention = case
        .well_intervention_cost_profile
        .as_ref()
        .map(|p| p.effective().clone())
        .unwrap_or_default();
    let effective_facilities = case
        .offshore_facilities_operations_cost_profile
        .as_ref()
        .map(|p| p.effective().clone())
        .unwrap_or_default();

    Ok(OpexProfiles {
        well_intervention_cost_profile: intervention,
        offshore_facilities_operations_cost_profile: facilities,
        opex_cost_profile: effective_intervention.merge(&effective_facilities),
    })
}

/// Cumulative active-well counts times the project's annual intervention
/// rate, aligned to the oil-production horizon: the last value repeats
/// forward when the series is shorter, excess years are cut when longer.
/// Without an oil horizon the schedule-derived length stands.
fn well_intervention_cost(
    store: &Store,
    case: &Case,
    project: &Project,
    drainage: Option<&DrainageStrategy>,
) -> StoreResult<TimeSeries<f64>> {
    let Some(well_project) = resolve_link::<WellProject>(store, case.well_project_link)? else {
        return Ok(TimeSeries::default());
    };

    let schedule = development_drilling_schedule(store, &well_project)?;
    let rate = project
        .development_operational_well_costs
        .annual_well_intervention_cost_per_well;
    let mut cost = schedule.cumulative().to_f64().scaled(rate);

    if let Some(end) = drainage.and_then(DrainageStrategy::oil_horizon_end) {
        if !cost.values.is_empty() {
            let target = usize::try_from(i64::from(end) - i64::from(cost.start_year)).unwrap_or(0);
            let last = cost.values.last().copied().unwrap_or_default();
            cost.values.resize(target, last);
        }
    }
    Ok(cost)
}

/// Ramp-up profile: 1/8, 1/4, 1/2 of steady-state facility opex over the
/// three years before first oil, then full facility opex across the
/// production horizon. Empty when the horizon is empty or the topside link
/// does not resolve.
fn offshore_facilities_cost(
    store: &Store,
    case: &Case,
    drainage: Option<&DrainageStrategy>,
) -> StoreResult<TimeSeries<f64>> {
    let Some(oil) = drainage
        .and_then(|d| d.production_profile_oil.as_ref())
        .filter(|p| !p.is_empty())
    else {
        return Ok(TimeSeries::default());
    };
    let Some(topside) = resolve_link::<Topside>(store, case.topside_link)? else {
        return Ok(TimeSeries::default());
    };

    let facility_opex = topside.facility_opex;
    let mut values = vec![facility_opex / 8.0, facility_opex / 4.0, facility_opex / 2.0];
    values.extend(std::iter::repeat(facility_opex).take(oil.values.len()));

    Ok(TimeSeries::new(oil.start_year - PRE_OPEX_YEAR_OFFSET, values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EconomicsConfig;
    use crate::services::{
        CaseService, CreateCaseRequest, CreateProjectRequest, CreateWellRequest, ProjectService,
        WellService,
    };
    use crate::types::{
        Currency, DevelopmentOperationalWellCosts, DrillingSchedule, PhysicalUnit, WellCategory,
        WellProjectWell,
    };

    struct Fixture {
        store: Store,
        case: Case,
    }

    fn setup(intervention_rate: f64) -> Fixture {
        let store = Store::temporary().unwrap();
        let project = ProjectService::new(store.clone())
            .create_project(CreateProjectRequest {
                name: "P".to_string(),
                description: String::new(),
                country: "NORWAY".to_string(),
                physical_unit: PhysicalUnit::Si,
                currency: Currency::Nok,
                development_operational_well_costs: DevelopmentOperationalWellCosts {
                    annual_well_intervention_cost_per_well: intervention_rate,
                    plugging_and_abandonment_cost_per_well: 0.0,
                },
            })
            .unwrap();
        let case = CaseService::new(store.clone(), EconomicsConfig::default())
            .create_case(CreateCaseRequest {
                project_id: project.id,
                name: "Case".to_string(),
                ..Default::default()
            })
            .unwrap();
        Fixture { store, case }
    }

    fn set_oil_profile(fixture: &Fixture, start_year: i32, years: usize) {
        let mut drainage: DrainageStrategy = fixture
            .store
            .fetch(fixture.case.drainage_strategy_link.unwrap())
            .unwrap();
        drainage.production_profile_oil = Some(TimeSeries::new(start_year, vec![100.0; years]));
        fixture.store.save(&drainage).unwrap();
    }

    fn add_development_well(fixture: &Fixture, schedule: DrillingSchedule) {
        let well = WellService::new(fixture.store.clone())
            .create_well(CreateWellRequest {
                project_id: fixture.case.project_id,
                name: "D-1".to_string(),
                well_category: WellCategory::OilProducer,
                well_cost: 0.0,
                drilling_days: 0.0,
            })
            .unwrap();
        let mut well_project: WellProject = fixture
            .store
            .fetch(fixture.case.well_project_link.unwrap())
            .unwrap();
        well_project.well_project_wells.push(WellProjectWell {
            well_id: well.id,
            drilling_schedule: Some(schedule),
        });
        fixture.store.save(&well_project).unwrap();
    }

    #[test]
    fn test_intervention_cost_pads_to_oil_horizon() {
        let fixture = setup(1.0);
        set_oil_profile(&fixture, 0, 6);
        add_development_well(&fixture, DrillingSchedule::new(0, vec![1, 1, 1]));

        let profiles = generate(&fixture.store, fixture.case.id).unwrap();
        let intervention = &profiles.well_intervention_cost_profile;

        // Three drilled wells accumulate to 3; the last value repeats
        // through the six-year horizon.
        assert_eq!(intervention.start_year, 0);
        assert_eq!(intervention.values, vec![1.0, 2.0, 3.0, 3.0, 3.0, 3.0]);
    }

    #[test]
    fn test_intervention_cost_truncates_past_horizon() {
        let fixture = setup(2.0);
        set_oil_profile(&fixture, 0, 2);
        add_development_well(&fixture, DrillingSchedule::new(0, vec![1, 1, 1, 1]));

        let profiles = generate(&fixture.store, fixture.case.id).unwrap();

        assert_eq!(
            profiles.well_intervention_cost_profile.values,
            vec![2.0, 4.0]
        );
    }

    #[test]
    fn test_intervention_cost_without_horizon_keeps_schedule_length() {
        let fixture = setup(1.0);
        add_development_well(&fixture, DrillingSchedule::new(-2, vec![2, 1]));

        let profiles = generate(&fixture.store, fixture.case.id).unwrap();
        let intervention = &profiles.well_intervention_cost_profile;

        assert_eq!(intervention.start_year, -2);
        assert_eq!(intervention.values, vec![2.0, 3.0]);
    }

    #[test]
    fn test_unresolved_well_project_link_yields_empty_profile() {
        let mut fixture = setup(1.0);
        set_oil_profile(&fixture, 0, 3);
        fixture.case.well_project_link = Some(Uuid::new_v4());
        fixture.store.save(&fixture.case).unwrap();

        let profiles = generate(&fixture.store, fixture.case.id).unwrap();
        assert!(profiles.well_intervention_cost_profile.is_empty());
    }

    #[test]
    fn test_exploration_wells_are_excluded_from_intervention() {
        let fixture = setup(1.0);
        set_oil_profile(&fixture, 0, 2);

        let well = WellService::new(fixture.store.clone())
            .create_well(CreateWellRequest {
                project_id: fixture.case.project_id,
                name: "X-1".to_string(),
                well_category: WellCategory::ExplorationWell,
                well_cost: 0.0,
                drilling_days: 0.0,
            })
            .unwrap();
        let mut well_project: WellProject = fixture
            .store
            .fetch(fixture.case.well_project_link.unwrap())
            .unwrap();
        well_project.well_project_wells.push(WellProjectWell {
            well_id: well.id,
            drilling_schedule: Some(DrillingSchedule::new(0, vec![5])),
        });
        fixture.store.save(&well_project).unwrap();

        let profiles = generate(&fixture.store, fixture.case.id).unwrap();
        assert!(profiles.well_intervention_cost_profile.is_empty());
    }

    #[test]
    fn test_facility_opex_ramp_up() {
        let fixture = setup(0.0);
        set_oil_profile(&fixture, 5, 4);

        let mut topside: Topside = fixture
            .store
            .fetch(fixture.case.topside_link.unwrap())
            .unwrap();
        topside.facility_opex = 8.0;
        fixture.store.save(&topside).unwrap();

        let profiles = generate(&fixture.store, fixture.case.id).unwrap();
        let facilities = &profiles.offshore_facilities_operations_cost_profile;

        assert_eq!(facilities.start_year, 2);
        assert_eq!(facilities.values, vec![1.0, 2.0, 4.0, 8.0, 8.0, 8.0, 8.0]);
    }

    #[test]
    fn test_facility_opex_empty_without_production_horizon() {
        let fixture = setup(0.0);

        let profiles = generate(&fixture.store, fixture.case.id).unwrap();
        assert!(profiles
            .offshore_facilities_operations_cost_profile
            .is_empty());
    }

    #[test]
    fn test_unresolved_topside_link_yields_empty_profile() {
        let mut fixture = setup(0.0);
        set_oil_profile(&fixture, 0, 3);
        fixture.case.topside_link = None;
        fixture.store.save(&fixture.case).unwrap();

        let profiles = generate(&fixture.store, fixture.case.id).unwrap();
        assert!(profiles
            .offshore_facilities_operations_cost_profile
            .is_empty());
    }

    #[test]
    fn test_opex_is_merge_of_constituents_and_honors_override() {
        let fixture = setup(1.0);
        set_oil_profile(&fixture, 0, 3);
        add_development_well(&fixture, DrillingSchedule::new(0, vec![1]));

        let mut topside: Topside = fixture
            .store
            .fetch(fixture.case.topside_link.unwrap())
            .unwrap();
        topside.facility_opex = 8.0;
        fixture.store.save(&topside).unwrap();

        let first = generate(&fixture.store, fixture.case.id).unwrap();
        // Intervention [1,1,1] from year 0, facilities [1,2,4,8,8,8] from -3.
        assert_eq!(first.opex_cost_profile.start_year, -3);
        assert_eq!(
            first.opex_cost_profile.values,
            vec![1.0, 2.0, 4.0, 9.0, 9.0, 9.0]
        );

        // Pin the intervention profile; the merged opex must follow it.
        let mut case: Case = fixture.store.fetch(fixture.case.id).unwrap();
        case.well_intervention_cost_profile
            .as_mut()
            .unwrap()
            .manual = Some(TimeSeries::new(0, vec![100.0]));
        fixture.store.save(&case).unwrap();

        let second = generate(&fixture.store, fixture.case.id).unwrap();
        assert_eq!(
            second.opex_cost_profile.values,
            vec![1.0, 2.0, 4.0, 108.0, 8.0, 8.0]
        );

        // The computed side kept regenerating underneath the override.
        let reloaded: Case = fixture.store.fetch(fixture.case.id).unwrap();
        let slot = reloaded.well_intervention_cost_profile.unwrap();
        assert_eq!(slot.computed.values, vec![1.0, 1.0, 1.0]);
        assert!(slot.is_overridden());
    }
}
