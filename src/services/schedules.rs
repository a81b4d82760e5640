//! Salon configuration and availability service

use std::sync::Arc;

use chrono::NaiveDate;

use crate::{
    clock::Clock,
    engine::availability::{compute_slots, work_day_for, BookingWindow},
    error::{AppError, AppResult},
    models::schedule::{DayAvailability, ScheduleConfig},
    repository::Repository,
};

#[derive(Clone)]
pub struct SchedulesService {
    repository: Repository,
    clock: Arc<dyn Clock>,
}

impl SchedulesService {
    pub fn new(repository: Repository, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Current configuration; an inconsistent stored value is an error
    pub async fn get_config(&self) -> AppResult<ScheduleConfig> {
        let config = self.repository.config.get().await?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the whole configuration. Rejected input leaves the stored
    /// value untouched.
    pub async fn replace_config(&self, config: ScheduleConfig) -> AppResult<ScheduleConfig> {
        config.validate().map_err(|e| match e {
            AppError::Configuration(msg) => AppError::Validation(msg),
            other => other,
        })?;

        let stored = self.repository.config.replace(config).await?;
        tracing::info!(
            window_days = stored.booking_window_days,
            open_days = stored.schedule.iter().filter(|d| d.is_open).count(),
            "Salon configuration replaced"
        );
        Ok(stored)
    }

    /// Slots still bookable on `date`, which must lie inside the booking window
    pub async fn availability(&self, date: NaiveDate) -> AppResult<DayAvailability> {
        let config = self.get_config().await?;
        let now = self.clock.now();

        let window = BookingWindow::for_schedule(&config, now)?;
        if !window.contains(date) {
            return Err(AppError::Validation(format!(
                "Bookings are open from {} to {}",
                window.first, window.last
            )));
        }

        let day = work_day_for(date, &config)
            .ok_or_else(|| AppError::Configuration(format!("No work day configured for {}", date)))?;
        if !day.is_open {
            return Err(AppError::ClosedDay {
                day: day.name.clone(),
            });
        }

        Ok(DayAvailability {
            date,
            day_name: day.name.clone(),
            slots: compute_slots(date, &config, now),
        })
    }
}
