//! API routes module

pub mod health;

use axum::Router;
use domain_inventory::{InventoryService, ProductStore, handlers};

/// Create all API routes
pub fn routes<S: ProductStore + 'static>(service: InventoryService<S>) -> Router {
    Router::new()
        .nest("/products", handlers::router(service.clone()))
        .merge(health::router(service))
}
