//! Catalog endpoints (services and products)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::catalog::{Product, Service},
    AppState,
};

// ---- Services ----

/// List bookable services
#[utoipa::path(
    get,
    path = "/services",
    tag = "catalog",
    responses(
        (status = 200, description = "Salon services", body = Vec<Service>)
    )
)]
pub async fn list_services(State(state): State<AppState>) -> AppResult<Json<Vec<Service>>> {
    let services = state.services.catalog.list_services().await?;
    Ok(Json(services))
}

/// Add a service to the catalog
#[utoipa::path(
    post,
    path = "/services",
    tag = "catalog",
    request_body = Service,
    responses(
        (status = 201, description = "Service created", body = Service),
        (status = 409, description = "Id already in use", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_service(
    State(state): State<AppState>,
    Json(service): Json<Service>,
) -> AppResult<(StatusCode, Json<Service>)> {
    let service = state.services.catalog.create_service(service).await?;
    Ok((StatusCode::CREATED, Json(service)))
}

/// Update a service
#[utoipa::path(
    put,
    path = "/services/{id}",
    tag = "catalog",
    params(("id" = String, Path, description = "Service ID")),
    request_body = Service,
    responses(
        (status = 200, description = "Service updated", body = Service),
        (status = 404, description = "Service not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(service): Json<Service>,
) -> AppResult<Json<Service>> {
    let service = state.services.catalog.update_service(&id, service).await?;
    Ok(Json(service))
}

// ---- Products ----

/// List retail products
#[utoipa::path(
    get,
    path = "/products",
    tag = "catalog",
    responses(
        (status = 200, description = "Store products", body = Vec<Product>)
    )
)]
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = state.services.catalog.list_products().await?;
    Ok(Json(products))
}

/// Add a product
#[utoipa::path(
    post,
    path = "/products",
    tag = "catalog",
    request_body = Product,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 409, description = "SKU already in use", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(product): Json<Product>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = state.services.catalog.create_product(product).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Update a product
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "catalog",
    params(("id" = String, Path, description = "Product SKU")),
    request_body = Product,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 404, description = "Product not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(product): Json<Product>,
) -> AppResult<Json<Product>> {
    let product = state.services.catalog.update_product(&id, product).await?;
    Ok(Json(product))
}
