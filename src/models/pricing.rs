//! Discount policy and pricing result types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fixed percentage discount tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DiscountTier {
    Five,
    Ten,
    Twenty,
    TwentyFive,
}

impl DiscountTier {
    pub fn percent(&self) -> u8 {
        match self {
            DiscountTier::Five => 5,
            DiscountTier::Ten => 10,
            DiscountTier::Twenty => 20,
            DiscountTier::TwentyFive => 25,
        }
    }
}

impl TryFrom<u8> for DiscountTier {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            5 => Ok(DiscountTier::Five),
            10 => Ok(DiscountTier::Ten),
            20 => Ok(DiscountTier::Twenty),
            25 => Ok(DiscountTier::TwentyFive),
            _ => Err(format!("Invalid discount tier: {}%", v)),
        }
    }
}

impl From<DiscountTier> for u8 {
    fn from(t: DiscountTier) -> Self {
        t.percent()
    }
}

/// The single discount rule active for a sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountPolicy {
    None,
    Tier {
        #[schema(value_type = u8, example = 25)]
        percent: DiscountTier,
    },
    /// Absolute amount (MT) entered by the operator
    Custom { amount: Decimal },
}

impl DiscountPolicy {
    pub const RESELLER_TIER: DiscountPolicy = DiscountPolicy::Tier {
        percent: DiscountTier::TwentyFive,
    };

    pub fn is_custom(&self) -> bool {
        matches!(self, DiscountPolicy::Custom { .. })
    }
}

impl Default for DiscountPolicy {
    fn default() -> Self {
        DiscountPolicy::None
    }
}

impl std::fmt::Display for DiscountPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiscountPolicy::None => write!(f, "NONE"),
            DiscountPolicy::Tier { percent } => write!(f, "{}%", percent.percent()),
            DiscountPolicy::Custom { amount } => write!(f, "CUSTOM({} MT)", amount),
        }
    }
}

/// Outcome of pricing a cart under a policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    pub subtotal: Decimal,
    pub discount_amount: Decimal,
    /// `subtotal - discount_amount`, may be negative under a large custom discount
    pub total: Decimal,
    /// Policy the amounts were computed with
    pub policy: DiscountPolicy,
}
