//! Salon configuration and availability endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::AppResult,
    models::schedule::{DayAvailability, ScheduleConfig},
    AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct AvailabilityQuery {
    /// Date (YYYY-MM-DD)
    #[param(value_type = String, example = "2026-10-20")]
    pub date: NaiveDate,
}

/// Get the salon configuration
#[utoipa::path(
    get,
    path = "/salon/config",
    tag = "salon",
    responses(
        (status = 200, description = "Weekly schedule and booking window", body = ScheduleConfig),
        (status = 500, description = "Stored configuration is inconsistent", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_config(State(state): State<AppState>) -> AppResult<Json<ScheduleConfig>> {
    let config = state.services.schedules.get_config().await?;
    Ok(Json(config))
}

/// Replace the whole salon configuration
#[utoipa::path(
    put,
    path = "/salon/config",
    tag = "salon",
    request_body = ScheduleConfig,
    responses(
        (status = 200, description = "Configuration replaced", body = ScheduleConfig),
        (status = 400, description = "Inconsistent configuration", body = crate::error::ErrorResponse)
    )
)]
pub async fn replace_config(
    State(state): State<AppState>,
    Json(config): Json<ScheduleConfig>,
) -> AppResult<Json<ScheduleConfig>> {
    let config = state.services.schedules.replace_config(config).await?;
    Ok(Json(config))
}

/// Bookable slots for a date
#[utoipa::path(
    get,
    path = "/salon/availability",
    tag = "salon",
    params(AvailabilityQuery),
    responses(
        (status = 200, description = "Remaining slots", body = DayAvailability),
        (status = 400, description = "Date outside the booking window", body = crate::error::ErrorResponse),
        (status = 422, description = "The salon is closed that day", body = crate::error::ErrorResponse)
    )
)]
pub async fn availability(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> AppResult<Json<DayAvailability>> {
    let availability = state.services.schedules.availability(query.date).await?;
    Ok(Json(availability))
}
