//! Booking endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::booking::{Booking, BookingForm},
    AppState,
};

/// List bookings
#[utoipa::path(
    get,
    path = "/bookings",
    tag = "bookings",
    responses(
        (status = 200, description = "All bookings", body = Vec<Booking>)
    )
)]
pub async fn list_bookings(State(state): State<AppState>) -> AppResult<Json<Vec<Booking>>> {
    let bookings = state.services.bookings.list().await?;
    Ok(Json(bookings))
}

/// Book a service
///
/// The request goes through every step of the booking wizard: the service
/// must exist, the date must be an open day inside the booking window and
/// the time one of that day's remaining slots.
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "bookings",
    request_body = BookingForm,
    responses(
        (status = 201, description = "Booking created as PENDING", body = Booking),
        (status = 400, description = "Invalid date, time or contact details", body = crate::error::ErrorResponse),
        (status = 422, description = "The salon is closed that day", body = crate::error::ErrorResponse),
        (status = 503, description = "Booking could not be stored, retry", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_booking(
    State(state): State<AppState>,
    Json(form): Json<BookingForm>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    let booking = state.services.bookings.create_booking(form).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}
