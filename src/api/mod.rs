//! API handlers for the salon REST endpoints

pub mod bookings;
pub mod catalog;
pub mod health;
pub mod openapi;
pub mod resellers;
pub mod sales;
pub mod schedules;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// Header carrying the identity of the operator at the till
pub const OPERATOR_HEADER: &str = "x-operator-id";

/// Operator identity, stamped on every sale they process
pub struct OperatorId(pub String);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for OperatorId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let operator = parts
            .headers
            .get(OPERATOR_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| AppError::BadRequest(format!("Missing {} header", OPERATOR_HEADER)))?;

        Ok(OperatorId(operator.to_string()))
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Salon configuration
        .route("/salon/config", get(schedules::get_config))
        .route("/salon/config", put(schedules::replace_config))
        .route("/salon/availability", get(schedules::availability))
        // Catalog
        .route("/services", get(catalog::list_services))
        .route("/services", post(catalog::create_service))
        .route("/services/:id", put(catalog::update_service))
        .route("/products", get(catalog::list_products))
        .route("/products", post(catalog::create_product))
        .route("/products/:id", put(catalog::update_product))
        // Resellers
        .route("/resellers", get(resellers::list_resellers))
        .route("/resellers", post(resellers::create_reseller))
        .route("/resellers/:id", delete(resellers::delete_reseller))
        // Bookings
        .route("/bookings", get(bookings::list_bookings))
        .route("/bookings", post(bookings::create_booking))
        // Sales
        .route("/sales/quote", post(sales::quote))
        .route("/sales", get(sales::list_sales))
        .route("/sales", post(sales::create_sale))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
