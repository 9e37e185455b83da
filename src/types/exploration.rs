//! Exploration asset: exploration-side cost profiles and linked wells.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::time_series::TimeSeries;
use super::well::DrillingSchedule;

/// Join record owning the drilling schedule for one catalog well.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExplorationWell {
    pub well_id: Uuid,
    #[serde(default)]
    pub drilling_schedule: Option<DrillingSchedule>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Exploration {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub rig_mob_demob: f64,

    /// Written by the G&G admin cost generator.
    #[serde(default)]
    pub g_and_g_admin_cost: Option<TimeSeries<f64>>,
    #[serde(default)]
    pub seismic_acquisition_and_processing: Option<TimeSeries<f64>>,
    #[serde(default)]
    pub country_office_cost: Option<TimeSeries<f64>>,
    #[serde(default)]
    pub exploration_well_cost_profile: Option<TimeSeries<f64>>,
    #[serde(default)]
    pub appraisal_well_cost_profile: Option<TimeSeries<f64>>,
    #[serde(default)]
    pub sidetrack_cost_profile: Option<TimeSeries<f64>>,

    #[serde(default)]
    pub exploration_wells: Vec<ExplorationWell>,
}
