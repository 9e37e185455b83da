//! Case: one candidate development of a project.
//!
//! A case soft-references its seven sub-assets by id (`*_link` fields) and
//! owns the derived cost profiles the generators write back. Links are
//! `Option<Uuid>` resolved through the store at use time; a dangling link is
//! a non-fatal condition for every generator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::time_series::OverridableProfile;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub reference_case: bool,
    pub create_time: DateTime<Utc>,

    // Decision-gate milestone dates. DG4 is always set — creation fills in
    // the configured default when the caller leaves it out.
    #[serde(default)]
    pub dg0_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub dg1_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub dg2_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub dg3_date: Option<DateTime<Utc>>,
    pub dg4_date: DateTime<Utc>,

    /// Share of total capex spent on feasibility & concept studies.
    #[serde(default)]
    pub capex_factor_feasibility_studies: f64,
    /// Share of total capex spent on FEED studies.
    #[serde(default)]
    pub capex_factor_feed_studies: f64,

    // Soft references to the case's sub-assets.
    #[serde(default)]
    pub drainage_strategy_link: Option<Uuid>,
    #[serde(default)]
    pub topside_link: Option<Uuid>,
    #[serde(default)]
    pub surf_link: Option<Uuid>,
    #[serde(default)]
    pub substructure_link: Option<Uuid>,
    #[serde(default)]
    pub transport_link: Option<Uuid>,
    #[serde(default)]
    pub exploration_link: Option<Uuid>,
    #[serde(default)]
    pub well_project_link: Option<Uuid>,

    // Generator-owned profiles. The computed side is refreshed on every
    // generator run; manual overrides survive regeneration.
    #[serde(default)]
    pub total_feasibility_and_concept_studies: Option<OverridableProfile>,
    #[serde(default)]
    pub total_feed_studies: Option<OverridableProfile>,
    #[serde(default)]
    pub well_intervention_cost_profile: Option<OverridableProfile>,
    #[serde(default)]
    pub offshore_facilities_operations_cost_profile: Option<OverridableProfile>,
    #[serde(default)]
    pub cessation_wells_cost: Option<OverridableProfile>,
    #[serde(default)]
    pub cessation_offshore_facilities_cost: Option<OverridableProfile>,
}
