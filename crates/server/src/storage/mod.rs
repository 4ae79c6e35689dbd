use std::collections::HashMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use shared::{CutRequest, CutResult};
use thiserror::Error;
use uuid::Uuid;

/// Stored cut: the request and the successful result it produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cut {
    pub id: Uuid,
    pub request: CutRequest,
    pub result: CutResult,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("cut {0} not found")]
    NotFound(Uuid),
    #[error("store lock poisoned")]
    Poisoned,
}

/// Record store for cuts, keyed by id.
///
/// Writes replace whole records; concurrent writers to the same id resolve
/// as last-writer-wins.
pub trait CutStore: Send + Sync {
    fn insert(&self, cut: Cut) -> Result<(), StorageError>;

    /// Replace the record under `cut.id`. Fails if no such record exists.
    fn replace(&self, cut: Cut) -> Result<(), StorageError>;

    fn get(&self, id: Uuid) -> Result<Cut, StorageError>;

    fn list(&self) -> Result<Vec<Cut>, StorageError>;

    fn remove(&self, id: Uuid) -> Result<(), StorageError>;
}

/// Process-local store backed by a `HashMap`
#[derive(Debug, Default)]
pub struct InMemoryStore {
    cuts: RwLock<HashMap<Uuid, Cut>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CutStore for InMemoryStore {
    fn insert(&self, cut: Cut) -> Result<(), StorageError> {
        let mut cuts = self.cuts.write().map_err(|_| StorageError::Poisoned)?;
        cuts.insert(cut.id, cut);
        Ok(())
    }

    fn replace(&self, cut: Cut) -> Result<(), StorageError> {
        let mut cuts = self.cuts.write().map_err(|_| StorageError::Poisoned)?;
        match cuts.get_mut(&cut.id) {
            Some(existing) => {
                *existing = cut;
                Ok(())
            }
            None => Err(StorageError::NotFound(cut.id)),
        }
    }

    fn get(&self, id: Uuid) -> Result<Cut, StorageError> {
        let cuts = self.cuts.read().map_err(|_| StorageError::Poisoned)?;
        cuts.get(&id).cloned().ok_or(StorageError::NotFound(id))
    }

    fn list(&self) -> Result<Vec<Cut>, StorageError> {
        let cuts = self.cuts.read().map_err(|_| StorageError::Poisoned)?;
        Ok(cuts.values().cloned().collect())
    }

    fn remove(&self, id: Uuid) -> Result<(), StorageError> {
        let mut cuts = self.cuts.write().map_err(|_| StorageError::Poisoned)?;
        cuts.remove(&id).map(|_| ()).ok_or(StorageError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{CutInfo, Point3D};

    fn sample_cut(id: Uuid, x: f64) -> Cut {
        Cut {
            id,
            request: CutRequest {
                polygon: vec![
                    Point3D::new(0.0, 0.0, 0.0),
                    Point3D::new(1.0, 1.0, 0.0),
                    Point3D::new(1.0, 0.0, 0.0),
                ],
                plane_origin: Point3D::new(x, 0.0, 0.0),
                plane_normal: Point3D::new(1.0, 0.0, 0.0),
            },
            result: CutResult {
                info: CutInfo::Successful,
                result_polygons: Vec::new(),
            },
        }
    }

    #[test]
    fn test_insert_and_get() {
        let store = InMemoryStore::new();
        let id = Uuid::new_v4();
        store.insert(sample_cut(id, 0.5)).unwrap();
        assert_eq!(store.get(id).unwrap(), sample_cut(id, 0.5));
    }

    #[test]
    fn test_get_unknown() {
        let store = InMemoryStore::new();
        assert!(matches!(store.get(Uuid::new_v4()), Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_replace_existing() {
        let store = InMemoryStore::new();
        let id = Uuid::new_v4();
        store.insert(sample_cut(id, 0.5)).unwrap();
        store.replace(sample_cut(id, 0.25)).unwrap();
        assert_eq!(store.get(id).unwrap().request.plane_origin.x, 0.25);
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_replace_unknown_does_not_insert() {
        let store = InMemoryStore::new();
        let id = Uuid::new_v4();
        assert!(matches!(store.replace(sample_cut(id, 0.5)), Err(StorageError::NotFound(_))));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_remove() {
        let store = InMemoryStore::new();
        let id = Uuid::new_v4();
        store.insert(sample_cut(id, 0.5)).unwrap();
        store.remove(id).unwrap();
        assert!(matches!(store.get(id), Err(StorageError::NotFound(_))));
        assert!(matches!(store.remove(id), Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_list_all() {
        let store = InMemoryStore::new();
        for x in [0.1, 0.2, 0.3] {
            store.insert(sample_cut(Uuid::new_v4(), x)).unwrap();
        }
        assert_eq!(store.list().unwrap().len(), 3);
    }
}
