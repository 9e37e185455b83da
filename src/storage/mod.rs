//! Persistent entity store
//!
//! Sled-backed storage for the whole domain model. All entities live in the
//! default tree under `"<kind>/<uuid>"` keys with JSON values, which keeps
//! multi-entity writes (cascading case creation) inside a single sled
//! transaction.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use uuid::Uuid;

use crate::types::{
    Case, DrainageStrategy, Exploration, Project, Substructure, Surf, Topside, Transport, Well,
    WellProject,
};

/// Persisted entity kinds; doubles as the key prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Project,
    Case,
    DrainageStrategy,
    Topside,
    Surf,
    Substructure,
    Transport,
    Exploration,
    WellProject,
    Well,
}

impl Kind {
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Case => "case",
            Self::DrainageStrategy => "drainage_strategy",
            Self::Topside => "topside",
            Self::Surf => "surf",
            Self::Substructure => "substructure",
            Self::Transport => "transport",
            Self::Exploration => "exploration",
            Self::WellProject => "well_project",
            Self::Well => "well",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Storage errors. `NotFound` is the distinguished "not found in store"
/// condition — the only one the API surfaces as a client error.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{kind} {id} not found in store")]
    NotFound { kind: Kind, id: Uuid },
    #[error("storage error: {0}")]
    Storage(#[from] sled::Error),
    #[error("codec error: {0}")]
    Codec(#[from] serde_json::Error),
    #[error("transaction error: {0}")]
    Transaction(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Implemented by every persisted entity; binds the Rust type to its kind
/// prefix and exposes the two ids the store indexes by.
pub trait Entity: Serialize + DeserializeOwned {
    const KIND: Kind;

    fn id(&self) -> Uuid;
    fn project_id(&self) -> Uuid;
}

macro_rules! impl_entity {
    ($ty:ty, $kind:expr, $project_id:ident) => {
        impl Entity for $ty {
            const KIND: Kind = $kind;

            fn id(&self) -> Uuid {
                self.id
            }

            fn project_id(&self) -> Uuid {
                self.$project_id
            }
        }
    };
}

impl_entity!(Project, Kind::Project, id);
impl_entity!(Case, Kind::Case, project_id);
impl_entity!(DrainageStrategy, Kind::DrainageStrategy, project_id);
impl_entity!(Topside, Kind::Topside, project_id);
impl_entity!(Surf, Kind::Surf, project_id);
impl_entity!(Substructure, Kind::Substructure, project_id);
impl_entity!(Transport, Kind::Transport, project_id);
impl_entity!(Exploration, Kind::Exploration, project_id);
impl_entity!(WellProject, Kind::WellProject, project_id);
impl_entity!(Well, Kind::Well, project_id);

/// A batch of writes applied in one sled transaction.
#[derive(Default)]
pub struct Batch {
    entries: Vec<(Vec<u8>, Vec<u8>)>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save<T: Entity>(&mut self, value: &T) -> StoreResult<()> {
        self.entries
            .push((key(T::KIND, value.id()), serde_json::to_vec(value)?));
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn key(kind: Kind, id: Uuid) -> Vec<u8> {
    format!("{}/{id}", kind.prefix()).into_bytes()
}

/// Handle to the sled database. Cheap to clone; shared across handlers.
#[derive(Clone)]
pub struct Store {
    db: sled::Db,
}

impl Store {
    /// Open or create the store at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let path_ref = path.as_ref();
        let db = sled::open(path_ref)?;
        tracing::info!(path = %path_ref.display(), "entity store opened");
        Ok(Self { db })
    }

    /// In-memory store for tests.
    pub fn temporary() -> StoreResult<Self> {
        let db = sled::Config::new().temporary(true).open()?;
        Ok(Self { db })
    }

    pub fn fetch<T: Entity>(&self, id: Uuid) -> StoreResult<T> {
        self.try_fetch(id)?
            .ok_or(StoreError::NotFound { kind: T::KIND, id })
    }

    pub fn try_fetch<T: Entity>(&self, id: Uuid) -> StoreResult<Option<T>> {
        match self.db.get(key(T::KIND, id))? {
            Some(raw) => Ok(Some(serde_json::from_slice(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn save<T: Entity>(&self, value: &T) -> StoreResult<()> {
        self.db
            .insert(key(T::KIND, value.id()), serde_json::to_vec(value)?)?;
        self.db.flush()?;
        Ok(())
    }

    /// Delete an entity; `NotFound` if it was never stored.
    pub fn delete<T: Entity>(&self, id: Uuid) -> StoreResult<()> {
        if self.db.remove(key(T::KIND, id))?.is_none() {
            return Err(StoreError::NotFound { kind: T::KIND, id });
        }
        self.db.flush()?;
        Ok(())
    }

    /// Delete if present. Used for cascades where a link may dangle.
    pub fn try_delete<T: Entity>(&self, id: Uuid) -> StoreResult<bool> {
        let removed = self.db.remove(key(T::KIND, id))?.is_some();
        if removed {
            self.db.flush()?;
        }
        Ok(removed)
    }

    pub fn list_all<T: Entity>(&self) -> StoreResult<Vec<T>> {
        let prefix = format!("{}/", T::KIND.prefix());
        let mut out = Vec::new();
        for item in self.db.scan_prefix(prefix.as_bytes()) {
            let (_key, raw) = item?;
            match serde_json::from_slice::<T>(&raw) {
                Ok(value) => out.push(value),
                Err(e) => {
                    tracing::warn!(kind = %T::KIND, error = %e, "skipping undecodable entry");
                }
            }
        }
        Ok(out)
    }

    pub fn list_for_project<T: Entity>(&self, project_id: Uuid) -> StoreResult<Vec<T>> {
        Ok(self
            .list_all::<T>()?
            .into_iter()
            .filter(|v| v.project_id() == project_id)
            .collect())
    }

    /// Apply a batch atomically: either every entry commits or none do.
    pub fn apply(&self, batch: Batch) -> StoreResult<()> {
        let entries = batch.entries;
        self.db
            .transaction::<_, (), ()>(|tx| {
                for (k, v) in &entries {
                    tx.insert(k.as_slice(), v.as_slice())?;
                }
                Ok(())
            })
            .map_err(|e| match e {
                sled::transaction::TransactionError::Abort(()) => {
                    StoreError::Transaction("batch aborted".to_string())
                }
                sled::transaction::TransactionError::Storage(e) => StoreError::Storage(e),
            })?;
        self.db.flush()?;
        Ok(())
    }
}
