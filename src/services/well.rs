//! Project well catalog service.

use serde::Deserialize;
use uuid::Uuid;

use crate::storage::{Store, StoreResult};
use crate::types::{Project, Well, WellCategory};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateWellRequest {
    pub project_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub well_category: WellCategory,
    #[serde(default)]
    pub well_cost: f64,
    #[serde(default)]
    pub drilling_days: f64,
}

#[derive(Clone)]
pub struct WellService {
    store: Store,
}

impl WellService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn create_well(&self, request: CreateWellRequest) -> StoreResult<Well> {
        let project: Project = self.store.fetch(request.project_id)?;
        let well = Well {
            id: Uuid::new_v4(),
            project_id: project.id,
            name: request.name,
            well_category: request.well_category,
            well_cost: request.well_cost,
            drilling_days: request.drilling_days,
        };
        self.store.save(&well)?;
        Ok(well)
    }

    pub fn get_well(&self, id: Uuid) -> StoreResult<Well> {
        self.store.fetch(id)
    }

    pub fn update_well(&self, mut well: Well) -> StoreResult<Well> {
        let existing: Well = self.store.fetch(well.id)?;
        well.project_id = existing.project_id;
        self.store.save(&well)?;
        Ok(well)
    }

    /// Delete a catalog well. Join records referencing it keep their
    /// drilling schedules; generators skip wells they cannot resolve.
    pub fn delete_well(&self, id: Uuid) -> StoreResult<Uuid> {
        let well: Well = self.store.fetch(id)?;
        self.store.delete::<Well>(id)?;
        Ok(well.project_id)
    }

    pub fn list_wells(&self, project_id: Uuid) -> StoreResult<Vec<Well>> {
        let mut wells = self.store.list_for_project::<Well>(project_id)?;
        wells.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(wells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{CreateProjectRequest, ProjectService};

    fn setup() -> (WellService, Uuid) {
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
        (WellService::new(store), project.id)
    }

    #[test]
    fn test_create_list_and_delete() {
        let (svc, project_id) = setup();

        let producer = svc
            .create_well(CreateWellRequest {
                project_id,
                name: "A-1".to_string(),
                well_category: WellCategory::OilProducer,
                well_cost: 120.0,
                drilling_days: 40.0,
            })
            .unwrap();
        svc.create_well(CreateWellRequest {
            project_id,
            name: "X-1".to_string(),
            well_category: WellCategory::ExplorationWell,
            well_cost: 90.0,
            drilling_days: 30.0,
        })
        .unwrap();

        let wells = svc.list_wells(project_id).unwrap();
        assert_eq!(wells.len(), 2);
        assert_eq!(wells[0].name, "A-1");

        svc.delete_well(producer.id).unwrap();
        assert_eq!(svc.list_wells(project_id).unwrap().len(), 1);
    }
}
