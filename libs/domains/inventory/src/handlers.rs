//! HTTP handlers for the Inventory API

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse,
    },
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi};
use validator::Validate;

use crate::error::{InventoryError, InventoryResult};
use crate::models::{Availability, Page, Product, ProductInput, ProductQuery, SortSpec};
use crate::service::InventoryService;
use crate::store::ProductStore;

/// OpenAPI documentation for the Inventory API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
        mark_out_of_stock,
        mark_in_stock,
    ),
    components(
        schemas(Product, ProductInput, Page<Product>),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<S: ProductStore + 'static>(service: InventoryService<S>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/{id}/outofstock", post(mark_out_of_stock))
        .route("/{id}/instock", put(mark_in_stock))
        .with_state(shared_service)
}

/// Query parameters for listing products
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    /// Case-insensitive name substring filter
    pub name: Option<String>,
    /// Case-insensitive category filter
    pub category: Option<String>,
    /// "in" keeps stocked products, "out" keeps empty ones; anything else keeps all
    pub available: Option<String>,
    /// Zero-based page index
    #[serde(default)]
    pub page: u32,
    /// Page size
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1))]
    pub size: u32,
    /// Sort specification, `<field>,<asc|desc>`
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
}

fn default_page_size() -> u32 {
    10
}

fn default_sort_by() -> String {
    "id,desc".to_string()
}

impl From<ListParams> for ProductQuery {
    fn from(params: ListParams) -> Self {
        Self {
            availability: Availability::parse(params.available.as_deref()),
            sort: SortSpec::parse(&params.sort_by),
            name: params.name,
            category: params.category,
            page: params.page,
            size: params.size,
        }
    }
}

/// List products with filtering, sorting, and pagination
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ListParams),
    responses(
        (status = 200, description = "One page of matching products", body = Page<Product>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<S: ProductStore>(
    State(service): State<Arc<InventoryService<S>>>,
    Query(params): Query<ListParams>,
) -> InventoryResult<Json<Page<Product>>> {
    params
        .validate()
        .map_err(|e| InventoryError::Validation(e.to_string()))?;

    let page = service.list_products(params.into()).await?;
    Ok(Json(page))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = ProductInput,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<S: ProductStore>(
    State(service): State<Arc<InventoryService<S>>>,
    ValidatedJson(input): ValidatedJson<ProductInput>,
) -> InventoryResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = u32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<S: ProductStore>(
    State(service): State<Arc<InventoryService<S>>>,
    Path(id): Path<u32>,
) -> InventoryResult<Json<Product>> {
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// Replace a product wholesale
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = u32, Path, description = "Product ID")
    ),
    request_body = ProductInput,
    responses(
        (status = 200, description = "Product updated successfully", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<S: ProductStore>(
    State(service): State<Arc<InventoryService<S>>>,
    Path(id): Path<u32>,
    ValidatedJson(input): ValidatedJson<ProductInput>,
) -> InventoryResult<Json<Product>> {
    let product = service.update_product(id, input).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = u32, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted successfully"),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<S: ProductStore>(
    State(service): State<Arc<InventoryService<S>>>,
    Path(id): Path<u32>,
) -> InventoryResult<impl IntoResponse> {
    service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Force a product out of stock
#[utoipa::path(
    post,
    path = "/{id}/outofstock",
    tag = "Products",
    params(
        ("id" = u32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Stock quantity forced to zero", body = Product),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn mark_out_of_stock<S: ProductStore>(
    State(service): State<Arc<InventoryService<S>>>,
    Path(id): Path<u32>,
) -> InventoryResult<Json<Product>> {
    let product = service.mark_out_of_stock(id).await?;
    Ok(Json(product))
}

/// Restock query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct InStockParams {
    /// New stock quantity (replaces the current value)
    #[serde(default = "default_restock_quantity")]
    pub quantity: u32,
}

fn default_restock_quantity() -> u32 {
    1
}

/// Put a product back in stock
#[utoipa::path(
    put,
    path = "/{id}/instock",
    tag = "Products",
    params(
        ("id" = u32, Path, description = "Product ID"),
        InStockParams
    ),
    responses(
        (status = 200, description = "Stock quantity set", body = Product),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn mark_in_stock<S: ProductStore>(
    State(service): State<Arc<InventoryService<S>>>,
    Path(id): Path<u32>,
    Query(params): Query<InStockParams>,
) -> InventoryResult<Json<Product>> {
    let product = service.mark_in_stock(id, params.quantity).await?;
    Ok(Json(product))
}
