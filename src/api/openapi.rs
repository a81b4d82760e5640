//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{bookings, catalog, health, resellers, sales, schedules};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Belo's Salon & Store API",
        version = "1.0.0",
        description = "Salon bookings and point-of-sale REST API"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Salon
        schedules::get_config,
        schedules::replace_config,
        schedules::availability,
        // Catalog
        catalog::list_services,
        catalog::create_service,
        catalog::update_service,
        catalog::list_products,
        catalog::create_product,
        catalog::update_product,
        // Resellers
        resellers::list_resellers,
        resellers::create_reseller,
        resellers::delete_reseller,
        // Bookings
        bookings::list_bookings,
        bookings::create_booking,
        // Sales
        sales::quote,
        sales::list_sales,
        sales::create_sale,
    ),
    components(
        schemas(
            // Salon
            crate::models::schedule::ScheduleConfig,
            crate::models::schedule::WorkDay,
            crate::models::schedule::TimeSlot,
            crate::models::schedule::DayAvailability,
            // Catalog
            crate::models::catalog::Service,
            crate::models::catalog::Product,
            // Resellers
            crate::models::reseller::Reseller,
            crate::models::reseller::CreateReseller,
            // Bookings
            crate::models::booking::Booking,
            crate::models::booking::BookingForm,
            crate::models::enums::BookingStatus,
            // Sales
            crate::models::sale::Sale,
            crate::models::sale::CartLine,
            crate::models::sale::SaleItemRequest,
            crate::models::sale::QuoteRequest,
            crate::models::sale::CreateSaleRequest,
            crate::models::pricing::DiscountPolicy,
            crate::models::pricing::PricingResult,
            crate::models::enums::BuyerClass,
            crate::models::enums::ItemType,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "salon", description = "Opening hours, booking window and availability"),
        (name = "catalog", description = "Salon services and store products"),
        (name = "resellers", description = "Reseller registry"),
        (name = "bookings", description = "Service bookings"),
        (name = "sales", description = "Point of sale")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
