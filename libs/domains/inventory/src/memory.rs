//! In-memory implementation of ProductStore

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::instrument;

use crate::error::{InventoryError, InventoryResult};
use crate::models::{Product, ProductInput};
use crate::store::ProductStore;

/// In-memory product store backed by an ordered map keyed by id.
///
/// A single lock guards every insert/replace/delete/snapshot sequence so
/// concurrently served requests cannot lose updates. Guards never live
/// across an await point.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    products: RwLock<BTreeMap<u32, Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_guard(&self) -> InventoryResult<RwLockReadGuard<'_, BTreeMap<u32, Product>>> {
        self.products
            .read()
            .map_err(|_| InventoryError::Internal("product store lock poisoned".to_string()))
    }

    fn write_guard(&self) -> InventoryResult<RwLockWriteGuard<'_, BTreeMap<u32, Product>>> {
        self.products
            .write()
            .map_err(|_| InventoryError::Internal("product store lock poisoned".to_string()))
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    async fn insert(&self, input: ProductInput) -> InventoryResult<Product> {
        let mut products = self.write_guard()?;

        // Ids are never reused while a larger one is live: the next id is
        // always max(existing) + 1.
        let id = match input.id {
            Some(id) if id != 0 => id,
            _ => products.keys().next_back().copied().unwrap_or(0) + 1,
        };

        let product = input.into_product(id);
        products.insert(id, product.clone());

        tracing::debug!(product_id = id, "Product stored");
        Ok(product)
    }

    async fn find_by_id(&self, id: u32) -> InventoryResult<Option<Product>> {
        Ok(self.read_guard()?.get(&id).cloned())
    }

    #[instrument(skip(self, product), fields(product_id = product.id))]
    async fn replace(&self, product: Product) -> InventoryResult<Product> {
        let mut products = self.write_guard()?;

        match products.get_mut(&product.id) {
            Some(slot) => {
                *slot = product.clone();
                Ok(product)
            }
            None => Err(InventoryError::NotFound(product.id)),
        }
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: u32) -> InventoryResult<bool> {
        Ok(self.write_guard()?.remove(&id).is_some())
    }

    async fn all(&self) -> InventoryResult<Vec<Product>> {
        Ok(self.read_guard()?.values().cloned().collect())
    }
}
