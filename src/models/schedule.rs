//! Schedule models (work days, salon configuration, time slots)

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// `HH:MM` (de)serialization for [`NaiveTime`]
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// WorkDay
// ---------------------------------------------------------------------------

/// Operating rule for one weekday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkDay {
    /// Day of week (0=Sunday, 6=Saturday)
    pub day_index: u8,
    /// Display name, e.g. "Segunda-feira"
    pub name: String,
    pub is_open: bool,
    /// Opening time (HH:MM)
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "09:00")]
    pub open_time: NaiveTime,
    /// Closing time (HH:MM)
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "18:00")]
    pub close_time: NaiveTime,
}

// ---------------------------------------------------------------------------
// ScheduleConfig
// ---------------------------------------------------------------------------

/// Longest booking window a configuration may declare
pub const MAX_BOOKING_WINDOW_DAYS: u32 = 365;

/// Weekly operating hours and booking-window policy.
///
/// Replaced only as a whole; there is no per-day update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleConfig {
    pub schedule: Vec<WorkDay>,
    /// How many days ahead of today a booking may be made
    pub booking_window_days: u32,
}

impl ScheduleConfig {
    /// Rule for a weekday index (0=Sunday)
    pub fn work_day(&self, day_index: u8) -> Option<&WorkDay> {
        self.schedule.iter().find(|d| d.day_index == day_index)
    }

    /// Check the structural invariants: seven distinct days, sane hours on
    /// open days and a booking window of one to [`MAX_BOOKING_WINDOW_DAYS`].
    pub fn validate(&self) -> AppResult<()> {
        if self.schedule.len() != 7 {
            return Err(AppError::Configuration(format!(
                "Schedule must contain 7 work days, found {}",
                self.schedule.len()
            )));
        }

        let mut seen = HashSet::new();
        for day in &self.schedule {
            if day.day_index > 6 {
                return Err(AppError::Configuration(format!(
                    "Invalid day index {} for {}",
                    day.day_index, day.name
                )));
            }
            if !seen.insert(day.day_index) {
                return Err(AppError::Configuration(format!(
                    "Duplicate work day for index {}",
                    day.day_index
                )));
            }
            if day.is_open && day.open_time >= day.close_time {
                return Err(AppError::Configuration(format!(
                    "{} opens at {} but closes at {}",
                    day.name,
                    day.open_time.format(hhmm::FORMAT),
                    day.close_time.format(hhmm::FORMAT)
                )));
            }
        }

        if self.booking_window_days == 0 {
            return Err(AppError::Configuration(
                "Booking window must be at least one day".to_string(),
            ));
        }
        if self.booking_window_days > MAX_BOOKING_WINDOW_DAYS {
            return Err(AppError::Configuration(format!(
                "Booking window cannot exceed {} days, got {}",
                MAX_BOOKING_WINDOW_DAYS, self.booking_window_days
            )));
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// TimeSlot
// ---------------------------------------------------------------------------

/// A bookable hour-aligned start time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
pub struct TimeSlot(
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "14:00")]
    NaiveTime,
);

impl TimeSlot {
    pub fn from_hour(hour: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, 0, 0).map(TimeSlot)
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(hhmm::FORMAT))
    }
}

impl std::str::FromStr for TimeSlot {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s, hhmm::FORMAT)
            .map(TimeSlot)
            .map_err(|_| AppError::Validation(format!("Invalid time '{}' (use HH:MM)", s)))
    }
}

/// Bookable slots for one open day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DayAvailability {
    #[schema(value_type = String, example = "2026-10-20")]
    pub date: NaiveDate,
    pub day_name: String,
    pub slots: Vec<TimeSlot>,
}
