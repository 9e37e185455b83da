//! Project: the top-level container for development cases.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unit system the project reports production volumes in.
///
/// Stored volumes are always SI (Sm3); oil-field projects convert on the
/// way out using the factors in the economics configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhysicalUnit {
    #[default]
    Si,
    OilField,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Currency {
    #[default]
    Nok,
    Usd,
}

/// Per-project operational well cost rates used by the generators.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DevelopmentOperationalWellCosts {
    /// Annual intervention cost per active development well.
    #[serde(default)]
    pub annual_well_intervention_cost_per_well: f64,
    /// One-off plugging & abandonment cost per drilled development well.
    #[serde(default)]
    pub plugging_and_abandonment_cost_per_well: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Country of the license — drives the G&G admin cost rate.
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub physical_unit: PhysicalUnit,
    #[serde(default)]
    pub currency: Currency,
    pub create_date: DateTime<Utc>,
    #[serde(default)]
    pub development_operational_well_costs: DevelopmentOperationalWellCosts,
}
