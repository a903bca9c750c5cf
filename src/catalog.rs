use std::sync::{Arc, RwLock};

use crate::error::CatalogError;
use crate::product::Product;

/// Session-lifetime home for the generated product collection.
///
/// Seeded once at session start, then read-only: controllers take a
/// [`snapshot`](CatalogStore::snapshot) and never see later writes.
/// Handles are cheap to clone and share across the session.
#[derive(Clone)]
pub struct CatalogStore {
    products: Arc<RwLock<Arc<[Product]>>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        CatalogStore {
            products: Arc::new(RwLock::new(Arc::from(Vec::new()))),
        }
    }

    /// Populate the store. Reseeding replaces the collection wholesale;
    /// existing snapshots keep the collection they were taken from.
    pub fn seed(&self, products: Vec<Product>) -> Result<(), CatalogError> {
        let mut guard = self
            .products
            .write()
            .map_err(|_| CatalogError::LockPoisoned("seed"))?;
        *guard = Arc::from(products);
        Ok(())
    }

    /// Shared read-only view of the current collection.
    pub fn snapshot(&self) -> Result<Arc<[Product]>, CatalogError> {
        let guard = self
            .products
            .read()
            .map_err(|_| CatalogError::LockPoisoned("snapshot"))?;
        Ok(Arc::clone(&guard))
    }

    pub fn get(&self, id: u32) -> Result<Option<Product>, CatalogError> {
        let snapshot = self.snapshot()?;
        Ok(snapshot.iter().find(|p| p.id == id).cloned())
    }

    pub fn len(&self) -> Result<usize, CatalogError> {
        Ok(self.snapshot()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, CatalogError> {
        Ok(self.snapshot()?.is_empty())
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        CatalogStore::new()
    }
}
