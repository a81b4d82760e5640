//! Sales repository. Sales are append-only.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::sale::Sale,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SalesRepository: Send + Sync {
    async fn create(&self, sale: Sale) -> AppResult<Sale>;

    /// All sales, most recent first
    async fn list(&self) -> AppResult<Vec<Sale>>;
}

#[derive(Default)]
pub struct MemorySalesRepository {
    rows: RwLock<Vec<Sale>>,
}

#[async_trait]
impl SalesRepository for MemorySalesRepository {
    async fn create(&self, sale: Sale) -> AppResult<Sale> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|s| s.id == sale.id) {
            return Err(AppError::Conflict(format!("Sale {} already exists", sale.id)));
        }
        rows.push(sale.clone());
        Ok(sale)
    }

    async fn list(&self) -> AppResult<Vec<Sale>> {
        Ok(self.rows.read().await.iter().rev().cloned().collect())
    }
}
