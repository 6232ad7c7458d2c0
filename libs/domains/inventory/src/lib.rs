//! Inventory Domain
//!
//! This crate provides a complete domain implementation for tracking products
//! in an in-memory inventory.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation, stock operations
//! └──────┬──────┘
//!        │
//! ┌──────▼────────────┐
//! │ Store  │  Query   │  ← Storage (trait + in-memory map) and the
//! └──────┬────────────┘    filter/sort/page engine over its snapshots
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, query spec
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_inventory::{handlers, InMemoryProductStore, InventoryService};
//!
//! let store = InMemoryProductStore::new();
//! let service = InventoryService::new(store);
//!
//! // Create an Axum router
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod query;
pub mod seed;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use error::{InventoryError, InventoryResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryProductStore;
pub use models::{
    Availability, Page, Product, ProductInput, ProductQuery, SortDirection, SortField, SortSpec,
};
pub use service::InventoryService;
pub use store::ProductStore;
