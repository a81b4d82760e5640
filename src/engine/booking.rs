//! Booking wizard: service, then date and time, then contact details

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, NaiveDate};
use uuid::Uuid;

use super::availability::{compute_slots, work_day_for, BookingWindow};
use crate::{
    error::{AppError, AppResult},
    models::{
        booking::Booking, catalog::Service, enums::BookingStatus, schedule::ScheduleConfig,
        schedule::TimeSlot,
    },
};

/// Where a booking request currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStep {
    SelectService,
    SelectSchedule,
    ConfirmDetails,
    /// Handed to storage, waiting for the outcome
    Submitting,
    Submitted,
}

/// Accumulates one customer's selections and only lets a complete,
/// currently-bookable request through.
///
/// Values entered on a later step survive going back. A date change always
/// clears the time. After a successful submission the validator is spent;
/// start a new one for the next booking.
#[derive(Debug, Clone)]
pub struct BookingRequestValidator {
    schedule: Arc<ScheduleConfig>,
    step: BookingStep,
    service: Option<Service>,
    date: Option<NaiveDate>,
    time: Option<TimeSlot>,
    customer_name: String,
    customer_phone: String,
    last_failure: Option<String>,
    /// Minted on the first submission and kept for retries
    booking_id: Option<String>,
}

impl BookingRequestValidator {
    pub fn new(schedule: Arc<ScheduleConfig>) -> Self {
        Self {
            schedule,
            step: BookingStep::SelectService,
            service: None,
            date: None,
            time: None,
            customer_name: String::new(),
            customer_phone: String::new(),
            last_failure: None,
            booking_id: None,
        }
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn service(&self) -> Option<&Service> {
        self.service.as_ref()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn time(&self) -> Option<TimeSlot> {
        self.time
    }

    /// Reason of the last rejected submission, cleared on the next attempt
    pub fn failure(&self) -> Option<&str> {
        self.last_failure.as_deref()
    }

    fn expect_step(&self, expected: BookingStep) -> AppResult<()> {
        match self.step {
            step if step == expected => Ok(()),
            BookingStep::Submitting => Err(AppError::Conflict(
                "A submission is already in progress".to_string(),
            )),
            BookingStep::Submitted => Err(AppError::BusinessRule(
                "This booking was already submitted, start a new one".to_string(),
            )),
            step => Err(AppError::BusinessRule(format!(
                "Not allowed while at step {:?}",
                step
            ))),
        }
    }

    // ---- Step 1: service ----

    pub fn select_service(&mut self, service: Service) -> AppResult<()> {
        self.expect_step(BookingStep::SelectService)?;
        self.service = Some(service);
        Ok(())
    }

    pub fn continue_to_schedule(&mut self) -> AppResult<()> {
        self.expect_step(BookingStep::SelectService)?;
        if self.service.is_none() {
            return Err(AppError::Validation("Choose a service first".to_string()));
        }
        self.step = BookingStep::SelectSchedule;
        Ok(())
    }

    // ---- Step 2: date and time ----

    /// Pick a date. Outside the booking window or on a closed day the date
    /// is refused and any earlier date/time selection is dropped.
    pub fn select_date(&mut self, date: NaiveDate, now: DateTime<FixedOffset>) -> AppResult<()> {
        self.expect_step(BookingStep::SelectSchedule)?;
        self.time = None;

        let window = BookingWindow::for_schedule(&self.schedule, now)?;
        if !window.contains(date) {
            self.date = None;
            return Err(AppError::Validation(format!(
                "Bookings are open from {} to {}",
                window.first, window.last
            )));
        }

        let day = work_day_for(date, &self.schedule).ok_or_else(|| {
            AppError::Configuration(format!("No work day configured for {}", date))
        })?;
        if !day.is_open {
            self.date = None;
            return Err(AppError::ClosedDay {
                day: day.name.clone(),
            });
        }

        self.date = Some(date);
        Ok(())
    }

    /// Slots offered for the selected date
    pub fn available_slots(&self, now: DateTime<FixedOffset>) -> Vec<TimeSlot> {
        self.date
            .map(|date| compute_slots(date, &self.schedule, now))
            .unwrap_or_default()
    }

    pub fn select_time(&mut self, time: TimeSlot, now: DateTime<FixedOffset>) -> AppResult<()> {
        self.expect_step(BookingStep::SelectSchedule)?;
        if self.date.is_none() {
            return Err(AppError::Validation("Choose a date first".to_string()));
        }
        if !self.available_slots(now).contains(&time) {
            return Err(AppError::Validation(format!("{} is not available", time)));
        }
        self.time = Some(time);
        Ok(())
    }

    pub fn continue_to_details(&mut self) -> AppResult<()> {
        self.expect_step(BookingStep::SelectSchedule)?;
        if self.date.is_none() || self.time.is_none() {
            return Err(AppError::Validation("Choose a date and time first".to_string()));
        }
        self.step = BookingStep::ConfirmDetails;
        Ok(())
    }

    // ---- Step 3: contact details ----

    pub fn set_contact(&mut self, name: &str, phone: &str) -> AppResult<()> {
        self.expect_step(BookingStep::ConfirmDetails)?;
        self.customer_name = name.trim().to_string();
        self.customer_phone = phone.trim().to_string();
        Ok(())
    }

    /// Go back one step, keeping everything entered so far
    pub fn back(&mut self) -> AppResult<()> {
        self.step = match self.step {
            BookingStep::SelectSchedule => BookingStep::SelectService,
            BookingStep::ConfirmDetails => BookingStep::SelectSchedule,
            step => {
                return Err(AppError::BusinessRule(format!(
                    "Cannot go back from step {:?}",
                    step
                )))
            }
        };
        Ok(())
    }

    // ---- Submission ----

    /// Build the booking to persist and lock the validator until
    /// [`complete_submission`](Self::complete_submission) or
    /// [`fail_submission`](Self::fail_submission) is called.
    ///
    /// Every attempt from the same validator carries the same booking id.
    pub fn begin_submission(
        &mut self,
        client_id: &str,
        now: DateTime<FixedOffset>,
    ) -> AppResult<Booking> {
        self.expect_step(BookingStep::ConfirmDetails)?;

        let (service, date, time) = match (&self.service, self.date, self.time) {
            (Some(service), Some(date), Some(time)) => (service, date, time),
            _ => {
                return Err(AppError::Validation(
                    "Service, date and time are required".to_string(),
                ))
            }
        };
        if self.customer_name.is_empty() {
            return Err(AppError::Validation("Name is required".to_string()));
        }
        if self.customer_phone.is_empty() {
            return Err(AppError::Validation("Phone is required".to_string()));
        }
        // the hour may have passed while the customer was typing
        if !compute_slots(date, &self.schedule, now).contains(&time) {
            self.time = None;
            self.step = BookingStep::SelectSchedule;
            return Err(AppError::Validation(format!(
                "{} on {} is no longer available",
                time, date
            )));
        }

        let id = self
            .booking_id
            .get_or_insert_with(|| format!("bk_{}", Uuid::new_v4().simple()))
            .clone();

        let booking = Booking {
            id,
            client_id: client_id.to_string(),
            client_name: self.customer_name.clone(),
            customer_phone: self.customer_phone.clone(),
            service_id: service.id.clone(),
            service_name: service.name.clone(),
            date,
            time,
            status: BookingStatus::Pending,
            notes: None,
        };

        self.last_failure = None;
        self.step = BookingStep::Submitting;
        Ok(booking)
    }

    pub fn complete_submission(&mut self) -> AppResult<()> {
        self.expect_step(BookingStep::Submitting)?;
        self.step = BookingStep::Submitted;
        Ok(())
    }

    /// Storage refused the booking: return to the details step with all
    /// data intact so the same request can be retried.
    pub fn fail_submission(&mut self, reason: impl Into<String>) -> AppResult<()> {
        self.expect_step(BookingStep::Submitting)?;
        self.last_failure = Some(reason.into());
        self.step = BookingStep::ConfirmDetails;
        Ok(())
    }
}
