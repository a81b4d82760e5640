//! Bookings repository

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::booking::Booking,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingsRepository: Send + Sync {
    async fn create(&self, booking: Booking) -> AppResult<Booking>;

    /// All bookings, oldest first
    async fn list(&self) -> AppResult<Vec<Booking>>;
}

#[derive(Default)]
pub struct MemoryBookingsRepository {
    rows: RwLock<Vec<Booking>>,
}

#[async_trait]
impl BookingsRepository for MemoryBookingsRepository {
    async fn create(&self, booking: Booking) -> AppResult<Booking> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|b| b.id == booking.id) {
            return Err(AppError::Conflict(format!("Booking {} already exists", booking.id)));
        }
        rows.push(booking.clone());
        Ok(booking)
    }

    async fn list(&self) -> AppResult<Vec<Booking>> {
        Ok(self.rows.read().await.clone())
    }
}
