//! Salon configuration store

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{error::AppResult, models::schedule::ScheduleConfig};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConfigRepository: Send + Sync {
    /// Current configuration, as one consistent snapshot
    async fn get(&self) -> AppResult<ScheduleConfig>;

    /// Replace the whole configuration and return what is now stored
    async fn replace(&self, config: ScheduleConfig) -> AppResult<ScheduleConfig>;
}

pub struct MemoryConfigRepository {
    current: RwLock<ScheduleConfig>,
}

impl MemoryConfigRepository {
    pub fn new(config: ScheduleConfig) -> Self {
        Self {
            current: RwLock::new(config),
        }
    }
}

#[async_trait]
impl ConfigRepository for MemoryConfigRepository {
    async fn get(&self) -> AppResult<ScheduleConfig> {
        Ok(self.current.read().await.clone())
    }

    async fn replace(&self, config: ScheduleConfig) -> AppResult<ScheduleConfig> {
        let mut current = self.current.write().await;
        *current = config;
        Ok(current.clone())
    }
}
