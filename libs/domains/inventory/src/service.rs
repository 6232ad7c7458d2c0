//! Inventory service - business logic layer
//!
//! Handles validation, the id-match rule for full updates, stock
//! operations, and hands store snapshots to the query engine.

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{InventoryError, InventoryResult};
use crate::models::{Page, Product, ProductInput, ProductQuery};
use crate::query;
use crate::store::ProductStore;

pub struct InventoryService<S: ProductStore> {
    store: Arc<S>,
}

impl<S: ProductStore> InventoryService<S> {
    /// Create a new InventoryService over the given store
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Get a product by id
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: u32) -> InventoryResult<Product> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(InventoryError::NotFound(id))
    }

    /// Filter, sort, and page a snapshot of the store.
    #[instrument(skip(self, spec))]
    pub async fn list_products(&self, spec: ProductQuery) -> InventoryResult<Page<Product>> {
        let products = self.store.all().await?;
        Ok(query::execute(products, &spec))
    }

    /// Number of records currently stored
    #[instrument(skip(self))]
    pub async fn count_products(&self) -> InventoryResult<u64> {
        Ok(self.store.all().await?.len() as u64)
    }

    /// Create a new product; the store assigns an id when the input
    /// carries none.
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: ProductInput) -> InventoryResult<Product> {
        input
            .validate()
            .map_err(|e| InventoryError::Validation(e.to_string()))?;

        self.store.insert(input).await
    }

    /// Replace the record at `id` wholesale. The body must carry the same
    /// id; an unknown id fails with NotFound.
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: u32, input: ProductInput) -> InventoryResult<Product> {
        input
            .validate()
            .map_err(|e| InventoryError::Validation(e.to_string()))?;

        if input.id != Some(id) {
            return Err(InventoryError::IdMismatch {
                path_id: id,
                body_id: input.id,
            });
        }

        self.store.replace(input.into_product(id)).await
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: u32) -> InventoryResult<()> {
        if self.store.delete_by_id(id).await? {
            Ok(())
        } else {
            Err(InventoryError::NotFound(id))
        }
    }

    /// Force a product out of stock (quantity 0).
    #[instrument(skip(self))]
    pub async fn mark_out_of_stock(&self, id: u32) -> InventoryResult<Product> {
        let mut product = self.get_product(id).await?;
        product.quantity_in_stock = 0;
        self.store.replace(product).await
    }

    /// Restock a product to exactly `quantity` (replaces, does not add).
    #[instrument(skip(self))]
    pub async fn mark_in_stock(&self, id: u32, quantity: u32) -> InventoryResult<Product> {
        let mut product = self.get_product(id).await?;
        product.quantity_in_stock = quantity;
        self.store.replace(product).await
    }
}

impl<S: ProductStore> Clone for InventoryService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}
