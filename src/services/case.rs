//! Case lifecycle: cascading creation, update, delete, duplication.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::config::EconomicsConfig;
use crate::storage::{Batch, Store, StoreResult};
use crate::types::{
    Case, DrainageStrategy, Exploration, Project, Substructure, Surf, Topside, Transport,
    WellProject,
};

use super::assets::CaseAsset;

/// Share of total capex charged to each study phase when the caller does
/// not specify one.
pub const DEFAULT_STUDY_CAPEX_FACTOR: f64 = 0.015;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCaseRequest {
    pub project_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub dg0_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub dg1_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub dg2_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub dg3_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub dg4_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub capex_factor_feasibility_studies: Option<f64>,
    #[serde(default)]
    pub capex_factor_feed_studies: Option<f64>,
}

#[derive(Clone)]
pub struct CaseService {
    store: Store,
    economics: EconomicsConfig,
}

impl CaseService {
    pub fn new(store: Store, economics: EconomicsConfig) -> Self {
        Self { store, economics }
    }

    /// Create a case together with default instances of all seven
    /// sub-assets, linked and committed in one transaction.
    pub fn create_case(&self, request: CreateCaseRequest) -> StoreResult<Case> {
        let project: Project = self.store.fetch(request.project_id)?;

        let drainage_strategy = DrainageStrategy::default_for(project.id);
        let topside = Topside::default_for(project.id);
        let surf = Surf::default_for(project.id);
        let substructure = Substructure::default_for(project.id);
        let transport = Transport::default_for(project.id);
        let exploration = Exploration::default_for(project.id);
        let well_project = WellProject::default_for(project.id);

        let case = Case {
            id: Uuid::new_v4(),
            project_id: project.id,
            name: request.name,
            description: request.description,
            reference_case: false,
            create_time: Utc::now(),
            dg0_date: request.dg0_date,
            dg1_date: request.dg1_date,
            dg2_date: request.dg2_date,
            dg3_date: request.dg3_date,
            dg4_date: request.dg4_date.unwrap_or_else(|| self.economics.default_dg4()),
            capex_factor_feasibility_studies: request
                .capex_factor_feasibility_studies
                .unwrap_or(DEFAULT_STUDY_CAPEX_FACTOR),
            capex_factor_feed_studies: request
                .capex_factor_feed_studies
                .unwrap_or(DEFAULT_STUDY_CAPEX_FACTOR),
            drainage_strategy_link: Some(drainage_strategy.id),
            topside_link: Some(topside.id),
            surf_link: Some(surf.id),
            substructure_link: Some(substructure.id),
            transport_link: Some(transport.id),
            exploration_link: Some(exploration.id),
            well_project_link: Some(well_project.id),
            total_feasibility_and_concept_studies: None,
            total_feed_studies: None,
            well_intervention_cost_profile: None,
            offshore_facilities_operations_cost_profile: None,
            cessation_wells_cost: None,
            cessation_offshore_facilities_cost: None,
        };

        let mut batch = Batch::new();
        batch.save(&drainage_strategy)?;
        batch.save(&topside)?;
        batch.save(&surf)?;
        batch.save(&substructure)?;
        batch.save(&transport)?;
        batch.save(&exploration)?;
        batch.save(&well_project)?;
        batch.save(&case)?;
        self.store.apply(batch)?;

        tracing::info!(case = %case.id, project = %project.id, "case created with default sub-assets");
        Ok(case)
    }

    pub fn get_case(&self, id: Uuid) -> StoreResult<Case> {
        self.store.fetch(id)
    }

    /// Full update; identity and creation time come from the stored case.
    pub fn update_case(&self, mut case: Case) -> StoreResult<Case> {
        let existing: Case = self.store.fetch(case.id)?;
        case.project_id = existing.project_id;
        case.create_time = existing.create_time;
        self.store.save(&case)?;
        Ok(case)
    }

    /// Delete the case and the sub-assets it exclusively owns via links.
    /// Returns the owning project id.
    pub fn delete_case(&self, id: Uuid) -> StoreResult<Uuid> {
        let case: Case = self.store.fetch(id)?;

        self.drop_linked::<DrainageStrategy>(&case)?;
        self.drop_linked::<Topside>(&case)?;
        self.drop_linked::<Surf>(&case)?;
        self.drop_linked::<Substructure>(&case)?;
        self.drop_linked::<Transport>(&case)?;
        self.drop_linked::<Exploration>(&case)?;
        self.drop_linked::<WellProject>(&case)?;

        self.store.delete::<Case>(id)?;
        tracing::info!(case = %id, "case deleted");
        Ok(case.project_id)
    }

    /// Deep copy: the case and every linked sub-asset get new ids.
    pub fn duplicate_case(&self, id: Uuid) -> StoreResult<Case> {
        let source: Case = self.store.fetch(id)?;

        let mut copy = source.clone();
        copy.id = Uuid::new_v4();
        copy.name = format!("{} (copy)", source.name);
        copy.create_time = Utc::now();
        copy.reference_case = false;

        let mut batch = Batch::new();
        self.duplicate_linked::<DrainageStrategy>(&mut copy, &mut batch)?;
        self.duplicate_linked::<Topside>(&mut copy, &mut batch)?;
        self.duplicate_linked::<Surf>(&mut copy, &mut batch)?;
        self.duplicate_linked::<Substructure>(&mut copy, &mut batch)?;
        self.duplicate_linked::<Transport>(&mut copy, &mut batch)?;
        self.duplicate_linked::<Exploration>(&mut copy, &mut batch)?;
        self.duplicate_linked::<WellProject>(&mut copy, &mut batch)?;
        batch.save(&copy)?;
        self.store.apply(batch)?;

        tracing::info!(source = %id, copy = %copy.id, "case duplicated");
        Ok(copy)
    }

    fn drop_linked<T: CaseAsset>(&self, case: &Case) -> StoreResult<()> {
        if let Some(asset_id) = T::link_of(case) {
            self.store.try_delete::<T>(asset_id)?;
        }
        Ok(())
    }

    fn duplicate_linked<T: CaseAsset>(&self, case: &mut Case, batch: &mut Batch) -> StoreResult<()> {
        let Some(asset_id) = T::link_of(case) else {
            return Ok(());
        };
        // A dangling link is dropped rather than copied.
        let Some(source) = self.store.try_fetch::<T>(asset_id)? else {
            T::set_link(case, None);
            return Ok(());
        };
        let mut copy = source.clone();
        copy.set_identity(Uuid::new_v4(), case.project_id);
        batch.save(&copy)?;
        T::set_link(case, Some(copy.id()));
        Ok(())
    }
}
