//! Point-of-sale service: quote, confirm and record sales

use std::sync::Arc;

use crate::{
    clock::Clock,
    engine::{pricing::PricingEngine, pricing::PricingSession, sale::SaleAssembler},
    error::{AppError, AppResult},
    models::{
        enums::{BuyerClass, ItemType},
        pricing::{DiscountPolicy, PricingResult},
        sale::{CartLine, CreateSaleRequest, QuoteRequest, Sale, SaleItemRequest},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct SalesService {
    repository: Repository,
    clock: Arc<dyn Clock>,
    engine: PricingEngine,
}

impl SalesService {
    pub fn new(repository: Repository, clock: Arc<dyn Clock>, engine: PricingEngine) -> Self {
        Self {
            repository,
            clock,
            engine,
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Sale>> {
        self.repository.sales.list().await
    }

    /// Resolve a catalog reference into a priced cart line
    async fn cart_line(&self, item: &SaleItemRequest) -> AppResult<CartLine> {
        let quantity = item.quantity.unwrap_or(1);
        if quantity == 0 {
            return Err(AppError::Validation(format!(
                "Quantity for {} must be at least 1",
                item.item_id
            )));
        }

        let (name, unit_price) = match item.item_type {
            ItemType::Service => {
                let service = self.repository.catalog.get_service(&item.item_id).await?;
                (service.name, service.price)
            }
            ItemType::Product => {
                let product = self.repository.catalog.get_product(&item.item_id).await?;
                (product.name, product.price)
            }
        };

        Ok(CartLine {
            item_type: item.item_type,
            item_id: item.item_id.clone(),
            name,
            unit_price,
            quantity,
        })
    }

    /// Replay an operator's cart: buyer class, chosen policy, then every
    /// line, re-tiering after each one.
    async fn build_session(
        &self,
        buyer_class: BuyerClass,
        policy: DiscountPolicy,
        items: &[SaleItemRequest],
    ) -> AppResult<PricingSession> {
        let mut session = PricingSession::new(self.engine, buyer_class);
        session.choose_policy(policy)?;
        for item in items {
            let line = self.cart_line(item).await?;
            session.add_line(line)?;
        }
        Ok(session)
    }

    /// Price a cart without recording anything. The returned policy is the
    /// one in force after reseller tiering.
    pub async fn quote(&self, request: &QuoteRequest) -> AppResult<PricingResult> {
        let session = self
            .build_session(request.buyer_class, request.discount_policy, &request.items)
            .await?;
        session.quote()
    }

    /// Price, gate, assemble and store a sale
    pub async fn create_sale(&self, request: CreateSaleRequest, operator_id: &str) -> AppResult<Sale> {
        if request.items.is_empty() {
            return Err(AppError::Validation("The cart is empty".to_string()));
        }

        let session = self
            .build_session(request.buyer_class, request.discount_policy, &request.items)
            .await?;

        let buyer_reference = match request.buyer_class {
            BuyerClass::Reseller => match request.reseller_id.as_deref().map(str::trim) {
                Some(id) if !id.is_empty() => {
                    Some(self.repository.resellers.get(id).await?.buyer_reference())
                }
                _ => None,
            },
            BuyerClass::Retail => Some(
                request
                    .client_name
                    .as_deref()
                    .map(str::trim)
                    .unwrap_or_default()
                    .to_string(),
            ),
        };

        let sale = match SaleAssembler::confirm(
            &session,
            buyer_reference.as_deref(),
            operator_id,
            self.clock.now(),
        ) {
            Ok(sale) => sale,
            Err(e) => {
                tracing::debug!(error = %e, buyer = ?request.buyer_class, "Sale rejected");
                return Err(e);
            }
        };

        let sale = self.repository.sales.create(sale).await.map_err(|e| {
            tracing::warn!(error = %e, "Sale could not be stored");
            e
        })?;

        tracing::info!(
            sale_id = %sale.id,
            buyer = %sale.buyer_reference,
            policy = %sale.discount_policy,
            total = %sale.total,
            processed_by = %sale.processed_by,
            "Sale recorded"
        );
        Ok(sale)
    }
}
