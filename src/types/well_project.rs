//! Well project: development drilling plan and per-class well cost profiles.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::time_series::OverridableProfile;
use super::well::DrillingSchedule;

/// Join record owning the drilling schedule for one catalog well.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WellProjectWell {
    pub well_id: Uuid,
    #[serde(default)]
    pub drilling_schedule: Option<DrillingSchedule>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WellProject {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,

    #[serde(default)]
    pub oil_producer_cost_profile: Option<OverridableProfile>,
    #[serde(default)]
    pub gas_producer_cost_profile: Option<OverridableProfile>,
    #[serde(default)]
    pub water_injector_cost_profile: Option<OverridableProfile>,
    #[serde(default)]
    pub gas_injector_cost_profile: Option<OverridableProfile>,

    #[serde(default)]
    pub well_project_wells: Vec<WellProjectWell>,
}

impl WellProject {
    /// Effective per-class well cost profiles, for capex summation.
    pub fn cost_profiles(&self) -> impl Iterator<Item = &OverridableProfile> {
        [
            self.oil_producer_cost_profile.as_ref(),
            self.gas_producer_cost_profile.as_ref(),
            self.water_injector_cost_profile.as_ref(),
            self.gas_injector_cost_profile.as_ref(),
        ]
        .into_iter()
        .flatten()
    }
}
