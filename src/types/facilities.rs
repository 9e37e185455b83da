//! Physical facility sub-assets: Topside, Surf, Substructure, Transport.
//!
//! Each carries an overridable cost profile plus the engineering fields the
//! frontend grids edit. Field sets follow the original concept-selection
//! data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::time_series::{OverridableProfile, TimeSeries};

/// Concept maturity class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Maturity {
    #[default]
    A,
    B,
    C,
    D,
}

/// Where the asset's numbers came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    #[default]
    ConceptApp,
    Prosp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtificialLift {
    #[default]
    NoArtificialLift,
    GasLift,
    ElectricalSubmergedPumps,
    SubseaBoosterPumps,
}

/// Substructure concept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Concept {
    #[default]
    NoConcept,
    TieBack,
    Jacket,
    Gbs,
    Tlp,
    Spar,
    Semi,
    CircularBarge,
    Barge,
    Fpso,
    Tanker,
    JackUp,
    SubseaToShore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductionFlowline {
    #[default]
    NoProductionFlowline,
    Carbon,
    SsClad,
    Cr13,
    CarbonInsulation,
    SsCladInsulation,
    Cr13Insulation,
    CarbonInsulationDeh,
    SsCladInsulationDeh,
    Cr13InsulationDeh,
    CarbonPip,
    SsCladPip,
    Cr13Pip,
    HdpeLinedCs,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Topside {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub cost_profile: Option<OverridableProfile>,
    #[serde(default)]
    pub dry_weight: f64,
    #[serde(default)]
    pub oil_capacity: f64,
    #[serde(default)]
    pub gas_capacity: f64,
    /// Steady-state yearly operating cost of the facility.
    #[serde(default)]
    pub facility_opex: f64,
    #[serde(default)]
    pub fuel_consumption: f64,
    #[serde(default)]
    pub flared_gas: f64,
    #[serde(default)]
    pub maturity: Maturity,
    #[serde(default)]
    pub source: Source,
    #[serde(default)]
    pub cost_year: i32,
    #[serde(default)]
    pub last_changed_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Surf {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub cost_profile: Option<OverridableProfile>,
    #[serde(default)]
    pub cessation_cost_profile: Option<TimeSeries<f64>>,
    /// Lump-sum removal cost, spread by the cessation generator.
    #[serde(default)]
    pub cessation_cost: f64,
    #[serde(default)]
    pub maturity: Maturity,
    #[serde(default)]
    pub source: Source,
    #[serde(default)]
    pub infield_pipeline_system_length: f64,
    #[serde(default)]
    pub umbilical_system_length: f64,
    #[serde(default)]
    pub artificial_lift: ArtificialLift,
    #[serde(default)]
    pub riser_count: i32,
    #[serde(default)]
    pub template_count: i32,
    #[serde(default)]
    pub producer_count: i32,
    #[serde(default)]
    pub gas_injector_count: i32,
    #[serde(default)]
    pub water_injector_count: i32,
    #[serde(default)]
    pub production_flowline: ProductionFlowline,
    #[serde(default)]
    pub cost_year: i32,
    #[serde(default)]
    pub last_changed_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Substructure {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub cost_profile: Option<OverridableProfile>,
    #[serde(default)]
    pub cessation_cost_profile: Option<TimeSeries<f64>>,
    #[serde(default)]
    pub dry_weight: f64,
    #[serde(default)]
    pub concept: Concept,
    #[serde(default)]
    pub maturity: Maturity,
    #[serde(default)]
    pub source: Source,
    #[serde(default)]
    pub last_changed_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Transport {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub cost_profile: Option<OverridableProfile>,
    #[serde(default)]
    pub cessation_cost_profile: Option<TimeSeries<f64>>,
    #[serde(default)]
    pub oil_export_pipeline_length: f64,
    #[serde(default)]
    pub gas_export_pipeline_length: f64,
    #[serde(default)]
    pub maturity: Maturity,
    #[serde(default)]
    pub source: Source,
    #[serde(default)]
    pub last_changed_date: Option<DateTime<Utc>>,
}
