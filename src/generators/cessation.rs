//! Cessation cost generation: plugging & abandonment of development wells
//! and removal of offshore facilities, scheduled after the production
//! horizon ends.

use serde::Serialize;
use uuid::Uuid;

use crate::storage::{Store, StoreResult};
use crate::types::{refresh_slot, Case, DrainageStrategy, Project, Surf, TimeSeries, WellProject};

use super::{development_drilling_schedule, resolve_link};

#[derive(Debug, Clone, Default, Serialize)]
pub struct CessationProfiles {
    pub cessation_wells_cost: TimeSeries<f64>,
    pub cessation_offshore_facilities_cost: TimeSeries<f64>,
    pub cessation_cost_profile: TimeSeries<f64>,
}

/// Recompute both cessation profiles, persist them on the case, and return
/// them together with their merged total. Both are empty without an oil
/// production horizon — there is no cessation date to anchor to.
pub fn generate(store: &Store, case_id: Uuid) -> StoreResult<CessationProfiles> {
    let mut case: Case = store.fetch(case_id)?;
    let project: Project = store.fetch(case.project_id)?;
    let drainage = resolve_link::<DrainageStrategy>(store, case.drainage_strategy_link)?;

    let (wells, facilities) = match drainage.and_then(|d| d.oil_horizon_end()) {
        Some(end) => (
            wells_cost(store, &case, &project, end)?,
            facilities_cost(store, &case, end)?,
        ),
        None => (TimeSeries::default(), TimeSeries::default()),
    };

    refresh_slot(&mut case.cessation_wells_cost, wells.clone());
    refresh_slot(&mut case.cessation_offshore_facilities_cost, facilities.clone());
    store.save(&case)?;

    let effective_wells = case
        .cessation_wells_cost
        .as_ref()
        .map(|p| p.effective().clone())
        .unwrap_or_default();
    let effective_facilities = case
        .cessation_offshore_facilities_cost
        .as_ref()
        .map(|p| p.effective().clone())
        .unwrap_or_default();

    Ok(CessationProfiles {
        cessation_wells_cost: wells,
        cessation_offshore_facilities_cost: facilities,
        cessation_cost_profile: effective_wells.merge(&effective_facilities),
    })
}

/// Every development well drilled is plugged and abandoned at the per-well
/// rate, split evenly over the two years starting at the end of production.
fn wells_cost(
    store: &Store,
    case: &Case,
    project: &Project,
    horizon_end: i32,
) -> StoreResult<TimeSeries<f64>> {
    let Some(well_project) = resolve_link::<WellProject>(store, case.well_project_link)? else {
        return Ok(TimeSeries::default());
    };

    let drilled: i32 = development_drilling_schedule(store, &well_project)?
        .values
        .iter()
        .sum();
    if drilled == 0 {
        return Ok(TimeSeries::default());
    }

    let total = f64::from(drilled)
        * project
            .development_operational_well_costs
            .plugging_and_abandonment_cost_per_well;
    Ok(TimeSeries::new(horizon_end, vec![total / 2.0, total / 2.0]))
}

/// The surf's lump-sum cessation cost, split evenly over the two years
/// after well abandonment begins.
fn facilities_cost(store: &Store, case: &Case, horizon_end: i32) -> StoreResult<TimeSeries<f64>> {
    let Some(surf) = resolve_link::<Surf>(store, case.surf_link)? else {
        return Ok(TimeSeries::default());
    };
    if surf.cessation_cost == 0.0 {
        return Ok(TimeSeries::default());
    }
    let half = surf.cessation_cost / 2.0;
    Ok(TimeSeries::new(horizon_end + 1, vec![half, half]))
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

    fn setup(p_and_a_cost: f64) -> Fixture {
        let store = Store::temporary().unwrap();
        let project = ProjectService::new(store.clone())
            .create_project(CreateProjectRequest {
                name: "P".to_string(),
                description: String::new(),
                country: "NORWAY".to_string(),
                physical_unit: PhysicalUnit::Si,
                currency: Currency::Nok,
                development_operational_well_costs: DevelopmentOperationalWellCosts {
                    annual_well_intervention_cost_per_well: 0.0,
                    plugging_and_abandonment_cost_per_well: p_and_a_cost,
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
        drainage.production_profile_oil = Some(TimeSeries::new(start_year, vec![50.0; years]));
        fixture.store.save(&drainage).unwrap();
    }

    fn add_drilled_wells(fixture: &Fixture, count: i32) {
        let well = WellService::new(fixture.store.clone())
            .create_well(CreateWellRequest {
                project_id: fixture.case.project_id,
                name: "D".to_string(),
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
            drilling_schedule: Some(DrillingSchedule::new(0, vec![count])),
        });
        fixture.store.save(&well_project).unwrap();
    }

    fn set_surf_cessation_cost(fixture: &Fixture, cost: f64) {
        let mut surf: Surf = fixture.store.fetch(fixture.case.surf_link.unwrap()).unwrap();
        surf.cessation_cost = cost;
        fixture.store.save(&surf).unwrap();
    }

    #[test]
    fn test_wells_cost_split_over_two_years_after_production() {
        let fixture = setup(10.0);
        set_oil_profile(&fixture, 0, 5);
        add_drilled_wells(&fixture, 4);

        let profiles = generate(&fixture.store, fixture.case.id).unwrap();
        let wells = &profiles.cessation_wells_cost;

        // 4 wells at 10 each, split over years 5 and 6.
        assert_eq!(wells.start_year, 5);
        assert_eq!(wells.values, vec![20.0, 20.0]);
    }

    #[test]
    fn test_facilities_cost_follows_wells_by_one_year() {
        let fixture = setup(0.0);
        set_oil_profile(&fixture, 2, 3);
        set_surf_cessation_cost(&fixture, 100.0);

        let profiles = generate(&fixture.store, fixture.case.id).unwrap();
        let facilities = &profiles.cessation_offshore_facilities_cost;

        assert_eq!(facilities.start_year, 6);
        assert_eq!(facilities.values, vec![50.0, 50.0]);
    }

    #[test]
    fn test_merged_profile_overlaps_correctly() {
        let fixture = setup(10.0);
        set_oil_profile(&fixture, 0, 5);
        add_drilled_wells(&fixture, 2);
        set_surf_cessation_cost(&fixture, 60.0);

        let profiles = generate(&fixture.store, fixture.case.id).unwrap();
        let merged = &profiles.cessation_cost_profile;

        // Wells [10, 10] at 5, facilities [30, 30] at 6.
        assert_eq!(merged.start_year, 5);
        assert_eq!(merged.values, vec![10.0, 40.0, 30.0]);
    }

    #[test]
    fn test_empty_without_oil_horizon() {
        let fixture = setup(10.0);
        add_drilled_wells(&fixture, 4);
        set_surf_cessation_cost(&fixture, 100.0);

        let profiles = generate(&fixture.store, fixture.case.id).unwrap();

        assert!(profiles.cessation_wells_cost.is_empty());
        assert!(profiles.cessation_offshore_facilities_cost.is_empty());
        assert!(profiles.cessation_cost_profile.is_empty());
    }
}
