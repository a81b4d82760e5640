//! Resellers repository

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::reseller::Reseller,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResellersRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Reseller>>;

    async fn get(&self, id: &str) -> AppResult<Reseller>;

    async fn create(&self, reseller: Reseller) -> AppResult<Reseller>;

    async fn delete(&self, id: &str) -> AppResult<()>;
}

pub struct MemoryResellersRepository {
    rows: RwLock<Vec<Reseller>>,
}

impl MemoryResellersRepository {
    pub fn new(resellers: Vec<Reseller>) -> Self {
        Self {
            rows: RwLock::new(resellers),
        }
    }
}

#[async_trait]
impl ResellersRepository for MemoryResellersRepository {
    async fn list(&self) -> AppResult<Vec<Reseller>> {
        Ok(self.rows.read().await.clone())
    }

    async fn get(&self, id: &str) -> AppResult<Reseller> {
        self.rows
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Reseller {} not found", id)))
    }

    async fn create(&self, reseller: Reseller) -> AppResult<Reseller> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|r| r.id == reseller.id) {
            return Err(AppError::Conflict(format!("Reseller {} already exists", reseller.id)));
        }
        rows.push(reseller.clone());
        Ok(reseller)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|r| r.id != id);
        if rows.len() == before {
            return Err(AppError::NotFound(format!("Reseller {} not found", id)));
        }
        Ok(())
    }
}
