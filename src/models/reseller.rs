//! Reseller model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A registered reseller, the buyer identity of reseller sales
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Reseller {
    #[schema(example = "res_1")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub notes: Option<String>,
    /// Registration date
    pub date: NaiveDate,
}

impl Reseller {
    /// How the reseller appears as the buyer of a sale
    pub fn buyer_reference(&self) -> String {
        format!("{} (Revenda)", self.name)
    }
}

/// Register reseller request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReseller {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    pub address: String,
    pub notes: Option<String>,
}
