//! Booking model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::enums::BookingStatus;
use super::schedule::TimeSlot;

/// A persisted booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[schema(example = "bk_3f2a9c")]
    pub id: String,
    /// Logged-in client id, or "guest"
    pub client_id: String,
    pub client_name: String,
    pub customer_phone: String,
    pub service_id: String,
    pub service_name: String,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub status: BookingStatus,
    pub notes: Option<String>,
}

/// Booking wizard input, submitted in one go
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingForm {
    #[schema(example = "srv_01")]
    pub service_id: String,
    /// Date (YYYY-MM-DD)
    #[schema(value_type = String, example = "2026-10-20")]
    pub date: NaiveDate,
    /// Time (HH:MM), one of the slots offered for the date
    #[schema(value_type = String, example = "14:00")]
    pub time: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub customer_name: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub customer_phone: String,
    /// Client id when the customer is logged in
    pub client_id: Option<String>,
}
