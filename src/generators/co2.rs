//! CO2 emissions profile generation.
//!
//! Per-year emissions from produced oil plus gas that is produced, flared
//! or burned as fuel, using the emission factors from the economics
//! configuration. Written to the drainage strategy's overridable CO2 slot.

use uuid::Uuid;

use crate::config::EconomicsConfig;
use crate::storage::{Store, StoreResult};
use crate::types::{refresh_slot, Case, DrainageStrategy, TimeSeries};

use super::resolve_link;

/// Recompute the CO2 emissions profile for a case, persist it on the
/// linked drainage strategy, and return the effective profile (a manual
/// override wins over the freshly computed series).
pub fn generate(
    store: &Store,
    economics: &EconomicsConfig,
    case_id: Uuid,
) -> StoreResult<TimeSeries<f64>> {
    let case: Case = store.fetch(case_id)?;

    let Some(mut drainage) = resolve_link::<DrainageStrategy>(store, case.drainage_strategy_link)?
    else {
        return Ok(TimeSeries::default());
    };

    let oil = drainage
        .production_profile_oil
        .clone()
        .unwrap_or_default();
    let gas = drainage
        .production_profile_gas
        .clone()
        .unwrap_or_default();
    let losses = drainage
        .fuel_flaring_and_losses
        .clone()
        .unwrap_or_default();

    let computed = oil
        .scaled(economics.co2_per_oil_sm3)
        .merge(&gas.merge(&losses).scaled(economics.co2_per_gas_sm3));

    refresh_slot(&mut drainage.co2_emissions, computed);
    store.save(&drainage)?;

    Ok(drainage
        .co2_emissions
        .as_ref()
        .map(|p| p.effective().clone())
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{CaseService, CreateCaseRequest, CreateProjectRequest, ProjectService};

    struct Fixture {
        store: Store,
        case: Case,
    }

    fn economics() -> EconomicsConfig {
        EconomicsConfig {
            co2_per_oil_sm3: 0.1,
            co2_per_gas_sm3: 0.01,
            ..EconomicsConfig::default()
        }
    }

    fn setup() -> Fixture {
        let store = Store::temporary().unwrap();
        let project = ProjectService::new(store.clone())
            .create_project(CreateProjectRequest {
                name: "P".to_string(),
                description: String::new(),
                country: "NORWAY".to_string(),
                physical_unit: crate::types::PhysicalUnit::Si,
                currency: crate::types::Currency::Nok,
                development_operational_well_costs: Default::default(),
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

    #[test]
    fn test_emissions_from_oil_gas_and_losses() {
        let fixture = setup();
        let mut drainage: DrainageStrategy = fixture
            .store
            .fetch(fixture.case.drainage_strategy_link.unwrap())
            .unwrap();
        drainage.production_profile_oil = Some(TimeSeries::new(0, vec![100.0, 200.0]));
        drainage.production_profile_gas = Some(TimeSeries::new(1, vec![1000.0]));
        drainage.fuel_flaring_and_losses = Some(TimeSeries::new(1, vec![500.0]));
        fixture.store.save(&drainage).unwrap();

        let profile = generate(&fixture.store, &economics(), fixture.case.id).unwrap();

        // Year 0: 100 * 0.1. Year 1: 200 * 0.1 + (1000 + 500) * 0.01.
        assert_eq!(profile.start_year, 0);
        assert_eq!(profile.values.len(), 2);
        assert!((profile.values[0] - 10.0).abs() < 1e-9);
        assert!((profile.values[1] - 35.0).abs() < 1e-9);

        let reloaded: DrainageStrategy = fixture
            .store
            .fetch(fixture.case.drainage_strategy_link.unwrap())
            .unwrap();
        assert!(reloaded.co2_emissions.is_some());
    }

    #[test]
    fn test_manual_override_wins() {
        let fixture = setup();
        let mut drainage: DrainageStrategy = fixture
            .store
            .fetch(fixture.case.drainage_strategy_link.unwrap())
            .unwrap();
        drainage.production_profile_oil = Some(TimeSeries::new(0, vec![100.0]));
        drainage.co2_emissions = Some(crate::types::OverridableProfile {
            computed: TimeSeries::default(),
            manual: Some(TimeSeries::new(0, vec![999.0])),
        });
        fixture.store.save(&drainage).unwrap();

        let profile = generate(&fixture.store, &economics(), fixture.case.id).unwrap();
        assert_eq!(profile.values, vec![999.0]);

        // The computed side was still refreshed underneath.
        let reloaded: DrainageStrategy = fixture
            .store
            .fetch(fixture.case.drainage_strategy_link.unwrap())
            .unwrap();
        let slot = reloaded.co2_emissions.unwrap();
        assert!((slot.computed.values[0] - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_production_gives_empty_profile() {
        let fixture = setup();

        let profile = generate(&fixture.store, &economics(), fixture.case.id).unwrap();
        assert!(profile.is_empty());
    }

    #[test]
    fn test_unresolved_drainage_link_is_empty() {
        let mut fixture = setup();
        fixture.case.drainage_strategy_link = None;
        fixture.store.save(&fixture.case).unwrap();

        let profile = generate(&fixture.store, &economics(), fixture.case.id).unwrap();
        assert!(profile.is_empty());
    }
}
