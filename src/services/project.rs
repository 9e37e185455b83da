//! Project lookups and the aggregated project view.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::{Store, StoreResult};
use crate::types::{
    Case, Currency, DevelopmentOperationalWellCosts, DrainageStrategy, Exploration, PhysicalUnit,
    Project, Substructure, Surf, Topside, Transport, Well, WellProject,
};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub physical_unit: PhysicalUnit,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub development_operational_well_costs: DevelopmentOperationalWellCosts,
}

/// The "updated parent Project" payload most mutating endpoints return:
/// the project plus its cases and asset collections.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectView {
    #[serde(flatten)]
    pub project: Project,
    pub cases: Vec<Case>,
    pub drainage_strategies: Vec<DrainageStrategy>,
    pub topsides: Vec<Topside>,
    pub surfs: Vec<Surf>,
    pub substructures: Vec<Substructure>,
    pub transports: Vec<Transport>,
    pub explorations: Vec<Exploration>,
    pub well_projects: Vec<WellProject>,
    pub wells: Vec<Well>,
}

#[derive(Clone)]
pub struct ProjectService {
    store: Store,
}

impl ProjectService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn create_project(&self, request: CreateProjectRequest) -> StoreResult<Project> {
        let project = Project {
            id: Uuid::new_v4(),
            name: request.name,
            description: request.description,
            country: request.country,
            physical_unit: request.physical_unit,
            currency: request.currency,
            create_date: Utc::now(),
            development_operational_well_costs: request.development_operational_well_costs,
        };
        self.store.save(&project)?;
        tracing::info!(project = %project.id, name = %project.name, "project created");
        Ok(project)
    }

    pub fn get_project(&self, id: Uuid) -> StoreResult<Project> {
        self.store.fetch(id)
    }

    pub fn list_projects(&self) -> StoreResult<Vec<Project>> {
        let mut projects = self.store.list_all::<Project>()?;
        projects.sort_by(|a, b| a.create_date.cmp(&b.create_date));
        Ok(projects)
    }

    /// Full update; the stored create date wins over the payload's.
    pub fn update_project(&self, mut project: Project) -> StoreResult<Project> {
        let existing: Project = self.store.fetch(project.id)?;
        project.create_date = existing.create_date;
        self.store.save(&project)?;
        Ok(project)
    }

    pub fn project_view(&self, id: Uuid) -> StoreResult<ProjectView> {
        let project: Project = self.store.fetch(id)?;
        let mut cases = self.store.list_for_project::<Case>(id)?;
        cases.sort_by(|a, b| a.create_time.cmp(&b.create_time));

        Ok(ProjectView {
            cases,
            drainage_strategies: self.store.list_for_project(id)?,
            topsides: self.store.list_for_project(id)?,
            surfs: self.store.list_for_project(id)?,
            substructures: self.store.list_for_project(id)?,
            transports: self.store.list_for_project(id)?,
            explorations: self.store.list_for_project(id)?,
            well_projects: self.store.list_for_project(id)?,
            wells: self.store.list_for_project(id)?,
            project,
        })
    }
}
