//! Health check endpoints

use axum::{Json, Router, extract::State, routing::get};
use domain_inventory::{InventoryResult, InventoryService, ProductStore};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
}

#[derive(Serialize)]
struct ReadyResponse {
    status: String,
    products: u64,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "inventory-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn ready<S: ProductStore>(
    State(service): State<Arc<InventoryService<S>>>,
) -> InventoryResult<Json<ReadyResponse>> {
    // The store is in-process; ready as soon as it answers a count
    let products = service.count_products().await?;

    Ok(Json(ReadyResponse {
        status: "ready".to_string(),
        products,
    }))
}

pub fn router<S: ProductStore + 'static>(service: InventoryService<S>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .with_state(Arc::new(service))
}
