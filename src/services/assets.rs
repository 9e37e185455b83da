//! Case sub-asset services.
//!
//! The seven sub-asset types share one CRUD surface: create-and-link,
//! update, delete-and-unlink, copy-to-case. [`CaseAsset`] binds each type to
//! its link field on [`Case`]; [`AssetService`] is the one generic
//! implementation behind all seven endpoints.

use std::marker::PhantomData;
use uuid::Uuid;

use crate::storage::{Entity, Store, StoreResult};
use crate::types::{
    Case, DrainageStrategy, Exploration, Substructure, Surf, Topside, Transport, WellProject,
};

/// A sub-asset a case soft-references through one of its link fields.
pub trait CaseAsset: Entity + Clone + Default {
    /// Name given to the asset created alongside a new case.
    const DEFAULT_NAME: &'static str;

    fn set_identity(&mut self, id: Uuid, project_id: Uuid);
    fn set_name(&mut self, name: &str);
    fn link_of(case: &Case) -> Option<Uuid>;
    fn set_link(case: &mut Case, link: Option<Uuid>);

    /// Fresh default asset for a new case.
    fn default_for(project_id: Uuid) -> Self {
        let mut asset = Self::default();
        asset.set_identity(Uuid::new_v4(), project_id);
        asset.set_name(Self::DEFAULT_NAME);
        asset
    }
}

macro_rules! impl_case_asset {
    ($ty:ty, $link:ident, $default_name:expr) => {
        impl CaseAsset for $ty {
            const DEFAULT_NAME: &'static str = $default_name;

            fn set_identity(&mut self, id: Uuid, project_id: Uuid) {
                self.id = id;
                self.project_id = project_id;
            }

            fn set_name(&mut self, name: &str) {
                self.name = name.to_string();
            }

            fn link_of(case: &Case) -> Option<Uuid> {
                case.$link
            }

            fn set_link(case: &mut Case, link: Option<Uuid>) {
                case.$link = link;
            }
        }
    };
}

impl_case_asset!(DrainageStrategy, drainage_strategy_link, "Drainage strategy");
impl_case_asset!(Topside, topside_link, "Topside");
impl_case_asset!(Surf, surf_link, "Surf");
impl_case_asset!(Substructure, substructure_link, "Substructure");
impl_case_asset!(Transport, transport_link, "Transport");
impl_case_asset!(Exploration, exploration_link, "Exploration");
impl_case_asset!(WellProject, well_project_link, "Well project");

pub struct AssetService<T: CaseAsset> {
    store: Store,
    _marker: PhantomData<fn() -> T>,
}

impl<T: CaseAsset> Clone for AssetService<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: CaseAsset> AssetService<T> {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    pub fn get(&self, id: Uuid) -> StoreResult<T> {
        self.store.fetch(id)
    }

    /// Create an asset in the source case's project and link the case to it.
    pub fn create(&self, source_case_id: Uuid, mut asset: T) -> StoreResult<T> {
        let mut case: Case = self.store.fetch(source_case_id)?;
        asset.set_identity(Uuid::new_v4(), case.project_id);
        self.store.save(&asset)?;
        T::set_link(&mut case, Some(asset.id()));
        self.store.save(&case)?;
        Ok(asset)
    }

    /// Full update in place; id and project binding are immutable.
    pub fn update(&self, mut asset: T) -> StoreResult<T> {
        let existing: T = self.store.fetch(asset.id())?;
        asset.set_identity(existing.id(), existing.project_id());
        self.store.save(&asset)?;
        Ok(asset)
    }

    /// Delete the asset and clear every case link pointing at it.
    /// Returns the owning project id so callers can rebuild the view.
    pub fn delete(&self, id: Uuid) -> StoreResult<Uuid> {
        let asset: T = self.store.fetch(id)?;
        let project_id = asset.project_id();

        for mut case in self.store.list_for_project::<Case>(project_id)? {
            if T::link_of(&case) == Some(id) {
                T::set_link(&mut case, None);
                self.store.save(&case)?;
            }
        }

        self.store.delete::<T>(id)?;
        Ok(project_id)
    }

    /// Clone the asset under a new id and relink the target case to the copy.
    pub fn copy(&self, id: Uuid, target_case_id: Uuid) -> StoreResult<T> {
        let source: T = self.store.fetch(id)?;
        let mut case: Case = self.store.fetch(target_case_id)?;

        let mut copy = source.clone();
        copy.set_identity(Uuid::new_v4(), case.project_id);
        self.store.save(&copy)?;

        T::set_link(&mut case, Some(copy.id()));
        self.store.save(&case)?;
        Ok(copy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EconomicsConfig;
    use crate::services::{CaseService, CreateCaseRequest, CreateProjectRequest, ProjectService};
    use crate::types::TimeSeries;

    fn setup() -> (Store, Case) {
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
                name: "Case A".to_string(),
                ..Default::default()
            })
            .unwrap();
        (store, case)
    }

    #[test]
    fn test_create_links_source_case() {
        let (store, case) = setup();
        let svc = AssetService::<Topside>::new(store.clone());

        let topside = Topside {
            name: "New topside".to_string(),
            ..Topside::default()
        };
        let created = svc.create(case.id, topside).unwrap();

        let reloaded: Case = store.fetch(case.id).unwrap();
        assert_eq!(reloaded.topside_link, Some(created.id));
        assert_eq!(created.project_id, case.project_id);
    }

    #[test]
    fn test_update_keeps_identity() {
        let (store, case) = setup();
        let svc = AssetService::<Surf>::new(store.clone());
        let surf_id = case.surf_link.unwrap();

        let mut edited: Surf = store.fetch(surf_id).unwrap();
        edited.riser_count = 12;
        edited.id = Uuid::new_v4(); // must be ignored
        let result = svc.update(edited);
        assert!(result.is_err()); // unknown id — not found

        let mut edited: Surf = store.fetch(surf_id).unwrap();
        edited.riser_count = 12;
        let updated = svc.update(edited).unwrap();
        assert_eq!(updated.id, surf_id);
        assert_eq!(updated.riser_count, 12);
    }

    #[test]
    fn test_delete_unlinks_case() {
        let (store, case) = setup();
        let svc = AssetService::<Transport>::new(store.clone());
        let transport_id = case.transport_link.unwrap();

        let project_id = svc.delete(transport_id).unwrap();
        assert_eq!(project_id, case.project_id);

        let reloaded: Case = store.fetch(case.id).unwrap();
        assert_eq!(reloaded.transport_link, None);
        assert!(store.try_fetch::<Transport>(transport_id).unwrap().is_none());
    }

    #[test]
    fn test_copy_relinks_target_case() {
        let (store, case) = setup();
        let svc = AssetService::<DrainageStrategy>::new(store.clone());
        let source_id = case.drainage_strategy_link.unwrap();

        let mut source: DrainageStrategy = store.fetch(source_id).unwrap();
        source.production_profile_oil = Some(TimeSeries::new(0, vec![1.0, 2.0]));
        store.save(&source).unwrap();

        let copy = svc.copy(source_id, case.id).unwrap();
        assert_ne!(copy.id, source_id);
        assert_eq!(
            copy.production_profile_oil.as_ref().unwrap().values,
            vec![1.0, 2.0]
        );

        let reloaded: Case = store.fetch(case.id).unwrap();
        assert_eq!(reloaded.drainage_strategy_link, Some(copy.id));
        // The original still exists — copies never consume their source.
        assert!(store.try_fetch::<DrainageStrategy>(source_id).unwrap().is_some());
    }
}
