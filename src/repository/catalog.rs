//! Catalog repository: bookable services and retail products

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::catalog::{Product, Service},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn list_services(&self) -> AppResult<Vec<Service>>;

    async fn get_service(&self, id: &str) -> AppResult<Service>;

    async fn create_service(&self, service: Service) -> AppResult<Service>;

    async fn update_service(&self, service: Service) -> AppResult<Service>;

    async fn list_products(&self) -> AppResult<Vec<Product>>;

    async fn get_product(&self, id: &str) -> AppResult<Product>;

    async fn create_product(&self, product: Product) -> AppResult<Product>;

    async fn update_product(&self, product: Product) -> AppResult<Product>;
}

pub struct MemoryCatalogRepository {
    services: RwLock<Vec<Service>>,
    products: RwLock<Vec<Product>>,
}

impl MemoryCatalogRepository {
    pub fn new(services: Vec<Service>, products: Vec<Product>) -> Self {
        Self {
            services: RwLock::new(services),
            products: RwLock::new(products),
        }
    }
}

#[async_trait]
impl CatalogRepository for MemoryCatalogRepository {
    // ---- Services ----

    async fn list_services(&self) -> AppResult<Vec<Service>> {
        Ok(self.services.read().await.clone())
    }

    async fn get_service(&self, id: &str) -> AppResult<Service> {
        self.services
            .read()
            .await
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Service {} not found", id)))
    }

    async fn create_service(&self, service: Service) -> AppResult<Service> {
        let mut rows = self.services.write().await;
        if rows.iter().any(|s| s.id == service.id) {
            return Err(AppError::Conflict(format!("Service {} already exists", service.id)));
        }
        rows.push(service.clone());
        Ok(service)
    }

    async fn update_service(&self, service: Service) -> AppResult<Service> {
        let mut rows = self.services.write().await;
        let slot = rows
            .iter_mut()
            .find(|s| s.id == service.id)
            .ok_or_else(|| AppError::NotFound(format!("Service {} not found", service.id)))?;
        *slot = service.clone();
        Ok(service)
    }

    // ---- Products ----

    async fn list_products(&self) -> AppResult<Vec<Product>> {
        Ok(self.products.read().await.clone())
    }

    async fn get_product(&self, id: &str) -> AppResult<Product> {
        self.products
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))
    }

    async fn create_product(&self, product: Product) -> AppResult<Product> {
        let mut rows = self.products.write().await;
        if rows.iter().any(|p| p.id == product.id) {
            return Err(AppError::Conflict(format!("Product {} already exists", product.id)));
        }
        rows.push(product.clone());
        Ok(product)
    }

    async fn update_product(&self, product: Product) -> AppResult<Product> {
        let mut rows = self.products.write().await;
        let slot = rows
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or_else(|| AppError::NotFound(format!("Product {} not found", product.id)))?;
        *slot = product.clone();
        Ok(product)
    }
}
