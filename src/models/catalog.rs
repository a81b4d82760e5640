//! Catalog models (bookable services and retail products)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A bookable salon service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[schema(example = "srv_01")]
    pub id: String,
    pub name: String,
    /// Cabelo, Manicure, Pedicure, Estética, Spa
    pub category: String,
    /// Price in Metical (MT)
    #[schema(example = 500)]
    pub price: Decimal,
    #[schema(example = 60)]
    pub duration_minutes: u32,
    pub description: String,
}

/// A retail SKU
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// SKU, e.g. CLR001
    #[schema(example = "CLR001")]
    pub id: String,
    pub name: String,
    pub category: String,
    #[schema(example = 850)]
    pub price: Decimal,
    pub stock: u32,
    pub description: Option<String>,
}
