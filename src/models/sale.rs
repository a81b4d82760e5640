//! Cart and sale models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::enums::{BuyerClass, ItemType};
use crate::error::{AppError, AppResult};
use super::pricing::DiscountPolicy;

/// One line of a cart, priced at the moment it was added
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub item_type: ItemType,
    pub item_id: String,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> AppResult<Decimal> {
        self.unit_price
            .checked_mul(Decimal::from(self.quantity))
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "Line total for {} x{} is too large",
                    self.name, self.quantity
                ))
            })
    }
}

/// Ordered, append-only list of cart lines
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: CartLine) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl FromIterator<CartLine> for Cart {
    fn from_iter<I: IntoIterator<Item = CartLine>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

/// A recorded sale. Never modified after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    #[schema(example = "sale_9b1deb4d")]
    pub id: String,
    pub date: NaiveDate,
    pub items: Vec<CartLine>,
    pub subtotal: Decimal,
    pub discount_policy: DiscountPolicy,
    pub discount_amount: Decimal,
    pub total: Decimal,
    /// Operator who processed the sale
    pub processed_by: String,
    pub buyer_class: BuyerClass,
    /// Client name, or "<reseller> (Revenda)"
    pub buyer_reference: String,
}

/// A catalog reference to put in the cart
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaleItemRequest {
    pub item_type: ItemType,
    pub item_id: String,
    /// Defaults to 1
    pub quantity: Option<u32>,
}

/// Price a cart without recording anything
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub buyer_class: BuyerClass,
    pub items: Vec<SaleItemRequest>,
    /// Policy chosen by the operator; reseller tiering may override it
    #[serde(default)]
    pub discount_policy: DiscountPolicy,
}

/// Confirm and record a sale
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSaleRequest {
    pub buyer_class: BuyerClass,
    pub items: Vec<SaleItemRequest>,
    #[serde(default)]
    pub discount_policy: DiscountPolicy,
    /// Walk-in client name (retail sales)
    pub client_name: Option<String>,
    /// Required for reseller sales
    pub reseller_id: Option<String>,
}
