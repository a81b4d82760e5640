//! Wall-clock source in salon-local time

use chrono::{DateTime, FixedOffset, Utc};

use crate::error::{AppError, AppResult};

/// Supplies the current instant; "today" is the calendar date of this instant
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// System time shifted to the salon's UTC offset
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn new(utc_offset_minutes: i32) -> AppResult<Self> {
        let offset = FixedOffset::east_opt(utc_offset_minutes * 60).ok_or_else(|| {
            AppError::Configuration(format!("Invalid UTC offset: {} minutes", utc_offset_minutes))
        })?;
        Ok(Self { offset })
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }
}

/// A clock frozen at a given instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_offset_is_configuration_error() {
        assert!(matches!(SystemClock::new(24 * 60), Err(AppError::Configuration(_))));
    }

    #[test]
    fn test_system_clock_uses_offset() {
        let clock = SystemClock::new(120).unwrap();
        assert_eq!(clock.now().offset().local_minus_utc(), 7200);
    }
}
