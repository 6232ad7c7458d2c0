use async_trait::async_trait;

use crate::error::InventoryResult;
use crate::models::{Product, ProductInput};

/// Storage trait for product records
///
/// Implementations own the authoritative collection and id assignment.
/// The query engine re-sorts snapshots, so `all` only promises a stable
/// iteration order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Store a product. An absent (or zero) id gets `max(existing) + 1`;
    /// an occupied id replaces the stored record in place.
    async fn insert(&self, input: ProductInput) -> InventoryResult<Product>;

    /// Get a product by id
    async fn find_by_id(&self, id: u32) -> InventoryResult<Option<Product>>;

    /// Overwrite an existing record atomically. Fails with NotFound when
    /// the id is unknown.
    async fn replace(&self, product: Product) -> InventoryResult<Product>;

    /// Delete a product by id; returns whether a record was removed
    async fn delete_by_id(&self, id: u32) -> InventoryResult<bool>;

    /// Snapshot of every record, in ascending id order
    async fn all(&self) -> InventoryResult<Vec<Product>>;
}
