//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// BookingStatus
// ---------------------------------------------------------------------------

/// Lifecycle of a persisted booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::Completed => "COMPLETED",
            BookingStatus::Cancelled => "CANCELLED",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ItemType
// ---------------------------------------------------------------------------

/// Kind of catalog entry a cart line refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemType {
    Service,
    Product,
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ItemType::Service => "SERVICE",
            ItemType::Product => "PRODUCT",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// BuyerClass
// ---------------------------------------------------------------------------

/// Who a sale is made to. Resellers get volume-based automatic discounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuyerClass {
    Retail,
    Reseller,
}

impl std::str::FromStr for BuyerClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "RETAIL" | "CLIENT" => Ok(BuyerClass::Retail),
            "RESELLER" => Ok(BuyerClass::Reseller),
            _ => Err(format!("Invalid buyer class: {}", s)),
        }
    }
}
