//! Point-of-sale endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::{
        pricing::PricingResult,
        sale::{CreateSaleRequest, QuoteRequest, Sale},
    },
    AppState,
};

use super::OperatorId;

/// Price a cart
#[utoipa::path(
    post,
    path = "/sales/quote",
    tag = "sales",
    request_body = QuoteRequest,
    responses(
        (status = 200, description = "Subtotal, discount and total under the effective policy", body = PricingResult),
        (status = 400, description = "Discount not available for this buyer", body = crate::error::ErrorResponse)
    )
)]
pub async fn quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> AppResult<Json<PricingResult>> {
    let pricing = state.services.sales.quote(&request).await?;
    Ok(Json(pricing))
}

/// List sales, most recent first
#[utoipa::path(
    get,
    path = "/sales",
    tag = "sales",
    responses(
        (status = 200, description = "Recorded sales", body = Vec<Sale>)
    )
)]
pub async fn list_sales(State(state): State<AppState>) -> AppResult<Json<Vec<Sale>>> {
    let sales = state.services.sales.list().await?;
    Ok(Json(sales))
}

/// Confirm a sale
#[utoipa::path(
    post,
    path = "/sales",
    tag = "sales",
    params(("X-Operator-Id" = String, Header, description = "Operator processing the sale")),
    request_body = CreateSaleRequest,
    responses(
        (status = 201, description = "Sale recorded", body = Sale),
        (status = 400, description = "Invalid cart or missing reseller", body = crate::error::ErrorResponse),
        (status = 422, description = "Reseller sale under the minimum", body = crate::error::ErrorResponse),
        (status = 503, description = "Sale could not be stored, retry", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_sale(
    State(state): State<AppState>,
    OperatorId(operator): OperatorId,
    Json(request): Json<CreateSaleRequest>,
) -> AppResult<(StatusCode, Json<Sale>)> {
    let sale = state.services.sales.create_sale(request, &operator).await?;
    Ok((StatusCode::CREATED, Json(sale)))
}
