//! Sale assembly

use chrono::{DateTime, FixedOffset};
use uuid::Uuid;

use super::pricing::PricingSession;
use crate::{
    error::AppResult,
    models::{enums::BuyerClass, pricing::PricingResult, sale::Cart, sale::Sale},
};

pub struct SaleAssembler;

impl SaleAssembler {
    /// Turn a priced cart into an immutable sale record. The lines are
    /// copied, so the cart may be changed or cleared afterwards.
    pub fn assemble(
        cart: &Cart,
        pricing: &PricingResult,
        buyer_class: BuyerClass,
        buyer_reference: &str,
        operator_id: &str,
        now: DateTime<FixedOffset>,
    ) -> Sale {
        Sale {
            id: format!("sale_{}", Uuid::new_v4().simple()),
            date: now.date_naive(),
            items: cart.lines().to_vec(),
            subtotal: pricing.subtotal,
            discount_policy: pricing.policy,
            discount_amount: pricing.discount_amount,
            total: pricing.total,
            processed_by: operator_id.to_string(),
            buyer_class,
            buyer_reference: buyer_reference.to_string(),
        }
    }

    /// Quote the session, apply the submission gate and assemble. The
    /// session is left untouched; reset it once the sale is stored.
    pub fn confirm(
        session: &PricingSession,
        buyer_reference: Option<&str>,
        operator_id: &str,
        now: DateTime<FixedOffset>,
    ) -> AppResult<Sale> {
        let pricing = session.quote()?;
        session
            .engine()
            .check_submission(&pricing, session.buyer_class(), buyer_reference)?;

        Ok(Self::assemble(
            session.cart(),
            &pricing,
            session.buyer_class(),
            buyer_reference.unwrap_or_default(),
            operator_id,
            now,
        ))
    }
}
