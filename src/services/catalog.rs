//! Catalog service: bookable services and retail products

use rust_decimal::Decimal;

use crate::{
    error::{AppError, AppResult},
    models::catalog::{Product, Service},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

fn check_price(price: Decimal) -> AppResult<()> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(AppError::Validation("Price cannot be negative".to_string()));
    }
    Ok(())
}

fn check_duration(minutes: u32) -> AppResult<()> {
    if minutes == 0 {
        return Err(AppError::Validation("Duration must be at least one minute".to_string()));
    }
    Ok(())
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    // ---- Services ----

    pub async fn list_services(&self) -> AppResult<Vec<Service>> {
        self.repository.catalog.list_services().await
    }

    pub async fn get_service(&self, id: &str) -> AppResult<Service> {
        self.repository.catalog.get_service(id).await
    }

    pub async fn create_service(&self, service: Service) -> AppResult<Service> {
        check_price(service.price)?;
        check_duration(service.duration_minutes)?;
        if service.id.trim().is_empty() || service.name.trim().is_empty() {
            return Err(AppError::Validation("Service id and name are required".to_string()));
        }
        self.repository.catalog.create_service(service).await
    }

    pub async fn update_service(&self, id: &str, mut service: Service) -> AppResult<Service> {
        check_price(service.price)?;
        check_duration(service.duration_minutes)?;
        service.id = id.to_string();
        self.repository.catalog.update_service(service).await
    }

    // ---- Products ----

    pub async fn list_products(&self) -> AppResult<Vec<Product>> {
        self.repository.catalog.list_products().await
    }

    pub async fn get_product(&self, id: &str) -> AppResult<Product> {
        self.repository.catalog.get_product(id).await
    }

    pub async fn create_product(&self, product: Product) -> AppResult<Product> {
        check_price(product.price)?;
        if product.id.trim().is_empty() || product.name.trim().is_empty() {
            return Err(AppError::Validation("SKU and name are required".to_string()));
        }
        self.repository.catalog.create_product(product).await
    }

    pub async fn update_product(&self, id: &str, mut product: Product) -> AppResult<Product> {
        check_price(product.price)?;
        product.id = id.to_string();
        self.repository.catalog.update_product(product).await
    }
}
