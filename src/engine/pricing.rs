//! Cart pricing and discount policy selection

use rust_decimal::{Decimal, RoundingStrategy};

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::BuyerClass,
        pricing::{DiscountPolicy, DiscountTier, PricingResult},
        sale::{Cart, CartLine},
    },
};

/// Subtotal from which reseller sales get the 25% tier automatically
pub const DEFAULT_RESELLER_THRESHOLD: Decimal = Decimal::from_parts(2500, 0, 0, false, 0);

fn too_large() -> AppError {
    AppError::Validation("Cart total is too large".to_string())
}

/// Stateless pricing rules. All methods are pure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingEngine {
    reseller_threshold: Decimal,
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new(DEFAULT_RESELLER_THRESHOLD)
    }
}

impl PricingEngine {
    pub fn new(reseller_threshold: Decimal) -> Self {
        Self { reseller_threshold }
    }

    /// Sum of the line totals; a cart whose amounts do not fit a
    /// [`Decimal`] is refused.
    pub fn subtotal(&self, cart: &Cart) -> AppResult<Decimal> {
        cart.lines().iter().try_fold(Decimal::ZERO, |sum, line| {
            sum.checked_add(line.line_total()?).ok_or_else(too_large)
        })
    }

    /// Policy that applies after the subtotal or buyer class changed.
    ///
    /// Resellers at or above the threshold are moved to the 25% tier, below
    /// it any fixed tier falls back to no discount. A custom amount is never
    /// overridden. Retail policies are left alone.
    pub fn select_policy(
        &self,
        subtotal: Decimal,
        buyer_class: BuyerClass,
        current: DiscountPolicy,
    ) -> DiscountPolicy {
        match (buyer_class, current) {
            (BuyerClass::Retail, policy) => policy,
            (BuyerClass::Reseller, policy @ DiscountPolicy::Custom { .. }) => policy,
            (BuyerClass::Reseller, _) if subtotal >= self.reseller_threshold => {
                DiscountPolicy::RESELLER_TIER
            }
            (BuyerClass::Reseller, DiscountPolicy::Tier { .. }) => DiscountPolicy::None,
            (BuyerClass::Reseller, policy) => policy,
        }
    }

    /// Whether an operator may pick `policy` for this buyer class
    pub fn is_selectable(&self, buyer_class: BuyerClass, policy: DiscountPolicy) -> bool {
        match (buyer_class, policy) {
            (BuyerClass::Retail, _) => true,
            (BuyerClass::Reseller, DiscountPolicy::None | DiscountPolicy::Custom { .. }) => true,
            (BuyerClass::Reseller, DiscountPolicy::Tier { percent }) => {
                percent == DiscountTier::TwentyFive
            }
        }
    }

    pub fn discount_amount(&self, subtotal: Decimal, policy: DiscountPolicy) -> AppResult<Decimal> {
        match policy {
            DiscountPolicy::None => Ok(Decimal::ZERO),
            DiscountPolicy::Tier { percent } => subtotal
                .checked_mul(Decimal::from(percent.percent()))
                .map(|scaled| {
                    (scaled / Decimal::ONE_HUNDRED)
                        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
                })
                .ok_or_else(too_large),
            DiscountPolicy::Custom { amount } => Ok(amount),
        }
    }

    /// Price `cart` under `policy` as given. Tiering is not applied here,
    /// see [`select_policy`](Self::select_policy).
    pub fn price(
        &self,
        cart: &Cart,
        buyer_class: BuyerClass,
        policy: DiscountPolicy,
    ) -> AppResult<PricingResult> {
        self.check_policy(buyer_class, policy)?;

        let subtotal = self.subtotal(cart)?;
        let discount_amount = self.discount_amount(subtotal, policy)?;
        let total = subtotal.checked_sub(discount_amount).ok_or_else(too_large)?;

        if total.is_sign_negative() && !total.is_zero() {
            tracing::warn!(
                subtotal = %subtotal,
                discount = %discount_amount,
                total = %total,
                "Discount exceeds subtotal, total is negative"
            );
        }

        Ok(PricingResult {
            subtotal,
            discount_amount,
            total,
            policy,
        })
    }

    fn check_policy(&self, buyer_class: BuyerClass, policy: DiscountPolicy) -> AppResult<()> {
        if let DiscountPolicy::Custom { amount } = policy {
            if amount.is_sign_negative() && !amount.is_zero() {
                return Err(AppError::Validation(
                    "A custom discount cannot be negative".to_string(),
                ));
            }
        }
        if !self.is_selectable(buyer_class, policy) {
            return Err(AppError::Validation(format!(
                "Discount {} is not available for resellers",
                policy
            )));
        }
        Ok(())
    }

    /// Gate applied right before a sale is confirmed
    pub fn check_submission(
        &self,
        pricing: &PricingResult,
        buyer_class: BuyerClass,
        buyer_reference: Option<&str>,
    ) -> AppResult<()> {
        if buyer_class != BuyerClass::Reseller {
            return Ok(());
        }
        if buyer_reference.map_or(true, |r| r.trim().is_empty()) {
            return Err(AppError::Validation("Select a reseller".to_string()));
        }
        if pricing.subtotal < self.reseller_threshold && !pricing.policy.is_custom() {
            return Err(AppError::BusinessRule(format!(
                "Reseller sales need a subtotal of at least {} MT or a custom discount",
                self.reseller_threshold
            )));
        }
        Ok(())
    }
}

/// One operator's point-of-sale state: cart, buyer class and the policy
/// currently in force. The policy is re-evaluated on every cart or buyer
/// class change.
#[derive(Debug, Clone)]
pub struct PricingSession {
    engine: PricingEngine,
    cart: Cart,
    buyer_class: BuyerClass,
    policy: DiscountPolicy,
}

impl PricingSession {
    pub fn new(engine: PricingEngine, buyer_class: BuyerClass) -> Self {
        Self {
            engine,
            cart: Cart::new(),
            buyer_class,
            policy: DiscountPolicy::None,
        }
    }

    pub fn engine(&self) -> &PricingEngine {
        &self.engine
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn buyer_class(&self) -> BuyerClass {
        self.buyer_class
    }

    pub fn policy(&self) -> DiscountPolicy {
        self.policy
    }

    fn retier(&mut self, subtotal: Decimal) {
        let next = self.engine.select_policy(subtotal, self.buyer_class, self.policy);
        if next != self.policy {
            tracing::debug!(from = %self.policy, to = %next, subtotal = %subtotal, "Discount policy changed");
            self.policy = next;
        }
    }

    /// Append a line and re-tier. A line that would overflow the subtotal
    /// is refused and the cart stays as it was.
    pub fn add_line(&mut self, line: CartLine) -> AppResult<()> {
        let subtotal = self
            .engine
            .subtotal(&self.cart)?
            .checked_add(line.line_total()?)
            .ok_or_else(too_large)?;
        self.cart.push(line);
        self.retier(subtotal);
        Ok(())
    }

    pub fn set_buyer_class(&mut self, buyer_class: BuyerClass) -> AppResult<()> {
        let subtotal = self.engine.subtotal(&self.cart)?;
        self.buyer_class = buyer_class;
        self.retier(subtotal);
        Ok(())
    }

    /// Operator picks a policy; refused when the buyer class does not allow it
    pub fn choose_policy(&mut self, policy: DiscountPolicy) -> AppResult<()> {
        self.engine.check_policy(self.buyer_class, policy)?;
        self.policy = policy;
        Ok(())
    }

    pub fn quote(&self) -> AppResult<PricingResult> {
        self.engine.price(&self.cart, self.buyer_class, self.policy)
    }

    /// Empty cart and no discount, buyer class kept
    pub fn reset(&mut self) {
        self.cart.clear();
        self.policy = DiscountPolicy::None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::ItemType;

    fn line(id: &str, price: i64, quantity: u32) -> CartLine {
        CartLine {
            item_type: ItemType::Product,
            item_id: id.to_string(),
            name: id.to_string(),
            unit_price: Decimal::from(price),
            quantity,
        }
    }

    fn tier(percent: u8) -> DiscountPolicy {
        DiscountPolicy::Tier {
            percent: DiscountTier::try_from(percent).unwrap(),
        }
    }

    #[test]
    fn test_subtotal_sums_lines() {
        let engine = PricingEngine::default();
        let cart: Cart = vec![line("CLR001", 850, 2), line("PLS001", 1200, 1)]
            .into_iter()
            .collect();
        assert_eq!(engine.subtotal(&cart).unwrap(), Decimal::from(2900));
        assert_eq!(engine.subtotal(&Cart::new()).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_oversized_cart_is_refused() {
        let engine = PricingEngine::default();
        let mut huge = line("A", 0, 2);
        huge.unit_price = Decimal::from_i128_with_scale(50_000_000_000_000_000_000_000_000_000, 0);

        let cart: Cart = vec![huge.clone()].into_iter().collect();
        assert!(matches!(
            engine.price(&cart, BuyerClass::Retail, DiscountPolicy::None),
            Err(AppError::Validation(_))
        ));

        // each line fits, their sum does not
        huge.quantity = 1;
        let cart: Cart = vec![huge.clone(), huge.clone()].into_iter().collect();
        assert!(matches!(engine.subtotal(&cart), Err(AppError::Validation(_))));

        // a percentage of a near-maximal subtotal
        let cart: Cart = vec![huge.clone()].into_iter().collect();
        assert!(engine.price(&cart, BuyerClass::Retail, tier(25)).is_err());
        assert!(engine.price(&cart, BuyerClass::Retail, DiscountPolicy::None).is_ok());

        let mut session = PricingSession::new(engine, BuyerClass::Retail);
        session.add_line(huge.clone()).unwrap();
        assert!(matches!(session.add_line(huge), Err(AppError::Validation(_))));
        assert_eq!(session.cart().lines().len(), 1);
    }

    #[test]
    fn test_reseller_at_threshold_gets_quarter_off() {
        let mut session = PricingSession::new(PricingEngine::default(), BuyerClass::Reseller);
        session.add_line(line("A", 1250, 2)).unwrap();
        assert_eq!(session.policy(), DiscountPolicy::RESELLER_TIER);

        let quote = session.quote().unwrap();
        assert_eq!(quote.subtotal, Decimal::from(2500));
        assert_eq!(quote.discount_amount, Decimal::from(625));
        assert_eq!(quote.total, Decimal::from(1875));
    }

    #[test]
    fn test_reseller_below_threshold_drops_tier() {
        let engine = PricingEngine::default();
        let policy = engine.select_policy(Decimal::from(2499), BuyerClass::Reseller, tier(25));
        assert_eq!(policy, DiscountPolicy::None);

        let cart: Cart = vec![line("A", 2499, 1)].into_iter().collect();
        let result = engine.price(&cart, BuyerClass::Reseller, policy).unwrap();
        assert_eq!(result.discount_amount, Decimal::ZERO);
        assert_eq!(result.total, Decimal::from(2499));
    }

    #[test]
    fn test_reseller_custom_is_preserved() {
        let engine = PricingEngine::default();
        let custom = DiscountPolicy::Custom { amount: Decimal::from(100) };
        assert_eq!(engine.select_policy(Decimal::from(5000), BuyerClass::Reseller, custom), custom);
        assert_eq!(engine.select_policy(Decimal::from(10), BuyerClass::Reseller, custom), custom);
    }

    #[test]
    fn test_retail_policy_is_never_retiered() {
        let engine = PricingEngine::default();
        for policy in [DiscountPolicy::None, tier(5), tier(20)] {
            assert_eq!(engine.select_policy(Decimal::from(9000), BuyerClass::Retail, policy), policy);
        }
    }

    #[test]
    fn test_reseller_cannot_pick_small_tiers() {
        let engine = PricingEngine::default();
        assert!(!engine.is_selectable(BuyerClass::Reseller, tier(5)));
        assert!(!engine.is_selectable(BuyerClass::Reseller, tier(10)));
        assert!(!engine.is_selectable(BuyerClass::Reseller, tier(20)));
        assert!(engine.is_selectable(BuyerClass::Reseller, tier(25)));
        assert!(engine.is_selectable(BuyerClass::Retail, tier(10)));

        let mut session = PricingSession::new(engine, BuyerClass::Reseller);
        assert!(matches!(session.choose_policy(tier(10)), Err(AppError::Validation(_))));
        assert_eq!(session.policy(), DiscountPolicy::None);
    }

    #[test]
    fn test_switching_to_reseller_retiers() {
        let mut session = PricingSession::new(PricingEngine::default(), BuyerClass::Retail);
        session.add_line(line("A", 3000, 1)).unwrap();
        session.choose_policy(tier(10)).unwrap();
        assert_eq!(session.policy(), tier(10));

        session.set_buyer_class(BuyerClass::Reseller).unwrap();
        assert_eq!(session.policy(), DiscountPolicy::RESELLER_TIER);
    }

    #[test]
    fn test_percentages_round_to_cents() {
        let engine = PricingEngine::default();
        // 10% of 333.33 = 33.333
        let amount = engine.discount_amount(Decimal::new(33333, 2), tier(10)).unwrap();
        assert_eq!(amount, Decimal::new(3333, 2));
        // 5% of 0.10 = 0.005 -> 0.01
        let amount = engine.discount_amount(Decimal::new(10, 2), tier(5)).unwrap();
        assert_eq!(amount, Decimal::new(1, 2));
    }

    #[test]
    fn test_total_identity_holds() {
        let engine = PricingEngine::default();
        let cart: Cart = vec![line("A", 890, 3), line("B", 200, 1)].into_iter().collect();
        for policy in [
            DiscountPolicy::None,
            tier(5),
            tier(25),
            DiscountPolicy::Custom { amount: Decimal::new(12345, 2) },
        ] {
            let r = engine.price(&cart, BuyerClass::Retail, policy).unwrap();
            assert_eq!(r.total, r.subtotal - r.discount_amount);
        }
    }

    #[test]
    fn test_custom_larger_than_subtotal_goes_negative() {
        let engine = PricingEngine::default();
        let cart: Cart = vec![line("A", 200, 1)].into_iter().collect();
        let r = engine
            .price(&cart, BuyerClass::Retail, DiscountPolicy::Custom { amount: Decimal::from(300) })
            .unwrap();
        assert_eq!(r.total, Decimal::from(-100));
    }

    #[test]
    fn test_negative_custom_amount_is_rejected() {
        let engine = PricingEngine::default();
        let cart: Cart = vec![line("A", 200, 1)].into_iter().collect();
        let policy = DiscountPolicy::Custom { amount: Decimal::from(-5) };
        assert!(engine.price(&cart, BuyerClass::Retail, policy).is_err());
    }

    #[test]
    fn test_reseller_gate() {
        let engine = PricingEngine::default();
        let small: Cart = vec![line("A", 1000, 1)].into_iter().collect();
        let pricing = engine.price(&small, BuyerClass::Reseller, DiscountPolicy::None).unwrap();

        assert!(matches!(
            engine.check_submission(&pricing, BuyerClass::Reseller, Some("Joana (Revenda)")),
            Err(AppError::BusinessRule(_))
        ));
        assert!(engine.check_submission(&pricing, BuyerClass::Retail, None).is_ok());

        let custom = engine
            .price(&small, BuyerClass::Reseller, DiscountPolicy::Custom { amount: Decimal::from(50) })
            .unwrap();
        assert!(engine
            .check_submission(&custom, BuyerClass::Reseller, Some("Joana (Revenda)"))
            .is_ok());
        assert!(matches!(
            engine.check_submission(&custom, BuyerClass::Reseller, Some("  ")),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_threshold_is_configurable() {
        let engine = PricingEngine::new(Decimal::from(1000));
        assert_eq!(
            engine.select_policy(Decimal::from(1000), BuyerClass::Reseller, DiscountPolicy::None),
            DiscountPolicy::RESELLER_TIER
        );
    }

    #[test]
    fn test_reset_clears_cart_and_policy() {
        let mut session = PricingSession::new(PricingEngine::default(), BuyerClass::Reseller);
        session.add_line(line("A", 3000, 1)).unwrap();
        session.reset();
        assert!(session.cart().is_empty());
        assert_eq!(session.policy(), DiscountPolicy::None);
        assert_eq!(session.buyer_class(), BuyerClass::Reseller);
    }
}
