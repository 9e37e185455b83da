//! Drainage strategy: the field's production and injection profile plan.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::facilities::ArtificialLift;
use super::time_series::{OverridableProfile, TimeSeries};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DrainageStrategy {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub producer_count: i32,
    #[serde(default)]
    pub gas_injector_count: i32,
    #[serde(default)]
    pub water_injector_count: i32,
    #[serde(default)]
    pub artificial_lift: ArtificialLift,

    // Production volumes in Sm3 per year; the oil profile defines the
    // production horizon every generator aligns to.
    #[serde(default)]
    pub production_profile_oil: Option<TimeSeries<f64>>,
    #[serde(default)]
    pub production_profile_gas: Option<TimeSeries<f64>>,
    #[serde(default)]
    pub production_profile_water: Option<TimeSeries<f64>>,
    #[serde(default)]
    pub production_profile_water_injection: Option<TimeSeries<f64>>,
    #[serde(default)]
    pub fuel_flaring_and_losses: Option<TimeSeries<f64>>,
    #[serde(default)]
    pub net_sales_gas: Option<TimeSeries<f64>>,

    /// Written by the CO2 emissions generator.
    #[serde(default)]
    pub co2_emissions: Option<OverridableProfile>,
}

impl DrainageStrategy {
    /// Exclusive end year of the oil production horizon, when one exists.
    pub fn oil_horizon_end(&self) -> Option<i32> {
        self.production_profile_oil
            .as_ref()
            .filter(|p| !p.is_empty())
            .map(TimeSeries::end_year)
    }
}
