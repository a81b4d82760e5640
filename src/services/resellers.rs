//! Resellers service

use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::{
    clock::Clock,
    error::AppResult,
    models::reseller::{CreateReseller, Reseller},
    repository::Repository,
};

#[derive(Clone)]
pub struct ResellersService {
    repository: Repository,
    clock: Arc<dyn Clock>,
}

impl ResellersService {
    pub fn new(repository: Repository, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn list(&self) -> AppResult<Vec<Reseller>> {
        self.repository.resellers.list().await
    }

    pub async fn get(&self, id: &str) -> AppResult<Reseller> {
        self.repository.resellers.get(id).await
    }

    /// Register a reseller, dated today
    pub async fn create(&self, data: CreateReseller) -> AppResult<Reseller> {
        data.validate()?;

        let reseller = Reseller {
            id: format!("res_{}", Uuid::new_v4().simple()),
            name: data.name.trim().to_string(),
            email: data.email.trim().to_string(),
            phone: data.phone.trim().to_string(),
            address: data.address,
            notes: data.notes.filter(|n| !n.trim().is_empty()),
            date: self.clock.now().date_naive(),
        };

        let reseller = self.repository.resellers.create(reseller).await?;
        tracing::info!(reseller_id = %reseller.id, name = %reseller.name, "Reseller registered");
        Ok(reseller)
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.repository.resellers.delete(id).await?;
        tracing::info!(reseller_id = %id, "Reseller removed");
        Ok(())
    }
}
