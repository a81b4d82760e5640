//! Booking service: runs a booking request through the wizard and stores it

use std::sync::Arc;

use validator::Validate;

use crate::{
    clock::Clock,
    engine::booking::BookingRequestValidator,
    error::{AppError, AppResult},
    models::{
        booking::{Booking, BookingForm},
        schedule::TimeSlot,
    },
    repository::Repository,
};

/// Client id recorded when the customer is not logged in
pub const GUEST_CLIENT_ID: &str = "guest";

#[derive(Clone)]
pub struct BookingsService {
    repository: Repository,
    clock: Arc<dyn Clock>,
}

impl BookingsService {
    pub fn new(repository: Repository, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn list(&self) -> AppResult<Vec<Booking>> {
        self.repository.bookings.list().await
    }

    /// Start a wizard session loaded with the current salon configuration
    pub async fn start_session(&self) -> AppResult<BookingRequestValidator> {
        let config = self.repository.config.get().await?;
        config.validate()?;
        Ok(BookingRequestValidator::new(Arc::new(config)))
    }

    /// Walk a complete form through every wizard step, then store the
    /// booking as PENDING.
    pub async fn create_booking(&self, form: BookingForm) -> AppResult<Booking> {
        form.validate()?;
        let now = self.clock.now();
        let time: TimeSlot = form.time.parse()?;
        let service = self.repository.catalog.get_service(&form.service_id).await?;

        let mut validator = self.start_session().await?;
        validator.select_service(service)?;
        validator.continue_to_schedule()?;
        validator.select_date(form.date, now)?;
        validator.select_time(time, now)?;
        validator.continue_to_details()?;
        validator.set_contact(&form.customer_name, &form.customer_phone)?;

        let client_id = form
            .client_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .unwrap_or(GUEST_CLIENT_ID);

        self.submit(&mut validator, client_id).await
    }

    /// Hand the validator's booking to storage. On failure the validator is
    /// back at the details step and may be submitted again.
    pub async fn submit(
        &self,
        validator: &mut BookingRequestValidator,
        client_id: &str,
    ) -> AppResult<Booking> {
        let booking = validator.begin_submission(client_id, self.clock.now())?;

        match self.repository.bookings.create(booking).await {
            Ok(booking) => {
                validator.complete_submission()?;
                tracing::info!(
                    booking_id = %booking.id,
                    service = %booking.service_id,
                    date = %booking.date,
                    time = %booking.time,
                    "Booking created"
                );
                Ok(booking)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Booking could not be stored");
                validator.fail_submission(e.to_string())?;
                Err(match e {
                    AppError::Persistence(_) | AppError::Conflict(_) => e,
                    other => AppError::Persistence(other.to_string()),
                })
            }
        }
    }
}
