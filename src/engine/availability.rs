//! Bookable slot computation

use chrono::{DateTime, Datelike, Days, FixedOffset, NaiveDate, Timelike};

use crate::{
    error::{AppError, AppResult},
    models::schedule::{ScheduleConfig, TimeSlot, WorkDay},
};

/// Weekday index of a date, 0=Sunday
pub fn day_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// The operating rule that applies to `date`
pub fn work_day_for(date: NaiveDate, schedule: &ScheduleConfig) -> Option<&WorkDay> {
    schedule.work_day(day_index(date))
}

/// Whole-hour slots a customer may book on `date`.
///
/// One slot per hour from the opening hour up to, but excluding, the closing
/// hour; minutes of either bound are ignored. On the day of `now` the current
/// hour and every earlier one are dropped. A closed or unconfigured day
/// yields no slots.
pub fn compute_slots(
    date: NaiveDate,
    schedule: &ScheduleConfig,
    now: DateTime<FixedOffset>,
) -> Vec<TimeSlot> {
    let day = match work_day_for(date, schedule) {
        Some(day) if day.is_open => day,
        _ => return Vec::new(),
    };

    let is_today = date == now.date_naive();
    let current_hour = now.hour();

    (day.open_time.hour()..day.close_time.hour())
        .filter(|hour| !is_today || *hour > current_hour)
        .filter_map(TimeSlot::from_hour)
        .collect()
}

/// Range of dates a booking may target, both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingWindow {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl BookingWindow {
    pub fn for_schedule(schedule: &ScheduleConfig, now: DateTime<FixedOffset>) -> AppResult<Self> {
        let today = now.date_naive();
        let last = today
            .checked_add_days(Days::new(u64::from(schedule.booking_window_days)))
            .ok_or_else(|| {
                AppError::Configuration(format!(
                    "Booking window of {} days runs past the calendar",
                    schedule.booking_window_days
                ))
            })?;
        Ok(Self { first: today, last })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first && date <= self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::seed;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(7200)
            .unwrap()
            .with_ymd_and_hms(y, m, d, h, min, 0)
            .unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn labels(slots: &[TimeSlot]) -> Vec<String> {
        slots.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_day_index_starts_on_sunday() {
        assert_eq!(day_index(date(2026, 10, 18)), 0);
        assert_eq!(day_index(date(2026, 10, 19)), 1);
        assert_eq!(day_index(date(2026, 10, 24)), 6);
    }

    #[test]
    fn test_closed_day_has_no_slots() {
        let schedule = seed::default_schedule();
        // 2026-10-25 is a Sunday
        assert!(compute_slots(date(2026, 10, 25), &schedule, at(2026, 10, 19, 8, 0)).is_empty());
    }

    #[test]
    fn test_full_day_before_opening() {
        let schedule = seed::default_schedule();
        let slots = compute_slots(date(2026, 10, 20), &schedule, at(2026, 10, 20, 7, 45));
        assert_eq!(
            labels(&slots),
            vec!["09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00", "17:00"]
        );
    }

    #[test]
    fn test_today_skips_current_and_past_hours() {
        let schedule = seed::default_schedule();
        let slots = compute_slots(date(2026, 10, 19), &schedule, at(2026, 10, 19, 11, 5));
        assert_eq!(slots.first().map(ToString::to_string), Some("12:00".to_string()));
        assert_eq!(slots.len(), 6);
    }

    #[test]
    fn test_today_after_closing_is_empty() {
        let schedule = seed::default_schedule();
        assert!(compute_slots(date(2026, 10, 19), &schedule, at(2026, 10, 19, 17, 0)).is_empty());
    }

    #[test]
    fn test_other_days_ignore_current_hour() {
        let schedule = seed::default_schedule();
        let slots = compute_slots(date(2026, 10, 21), &schedule, at(2026, 10, 19, 15, 0));
        assert_eq!(slots.len(), 9);
    }

    #[test]
    fn test_saturday_short_hours() {
        let schedule = seed::default_schedule();
        let slots = compute_slots(date(2026, 10, 24), &schedule, at(2026, 10, 19, 9, 0));
        assert_eq!(labels(&slots), vec!["09:00", "10:00", "11:00", "12:00", "13:00", "14:00"]);
    }

    #[test]
    fn test_closing_minutes_are_ignored() {
        let mut schedule = seed::default_schedule();
        schedule.schedule[2].open_time = chrono::NaiveTime::from_hms_opt(9, 30, 0).unwrap();
        schedule.schedule[2].close_time = chrono::NaiveTime::from_hms_opt(12, 45, 0).unwrap();
        // Tuesday
        let slots = compute_slots(date(2026, 10, 20), &schedule, at(2026, 10, 19, 9, 0));
        assert_eq!(labels(&slots), vec!["09:00", "10:00", "11:00"]);
    }

    #[test]
    fn test_missing_work_day_yields_nothing() {
        let mut schedule = seed::default_schedule();
        schedule.schedule.retain(|d| d.day_index != 3);
        assert!(compute_slots(date(2026, 10, 21), &schedule, at(2026, 10, 19, 9, 0)).is_empty());
    }

    #[test]
    fn test_same_arguments_same_slots() {
        let schedule = seed::default_schedule();
        let now = at(2026, 10, 19, 10, 20);
        let first = compute_slots(date(2026, 10, 19), &schedule, now);
        let second = compute_slots(date(2026, 10, 19), &schedule, now);
        assert_eq!(first, second);
    }

    #[test]
    fn test_booking_window_bounds() {
        let schedule = seed::default_schedule();
        let window = BookingWindow::for_schedule(&schedule, at(2026, 10, 19, 23, 30)).unwrap();
        assert!(window.contains(date(2026, 10, 19)));
        assert!(window.contains(date(2026, 11, 2)));
        assert!(!window.contains(date(2026, 11, 3)));
        assert!(!window.contains(date(2026, 10, 18)));
    }

    #[test]
    fn test_oversized_window_is_a_configuration_error() {
        let mut schedule = seed::default_schedule();
        schedule.booking_window_days = u32::MAX;
        assert!(matches!(
            BookingWindow::for_schedule(&schedule, at(2026, 10, 19, 9, 0)),
            Err(AppError::Configuration(_))
        ));
    }
}
