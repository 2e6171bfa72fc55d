//! Booking window models.
//!
//! This module defines the three kinds of window a booking can claim:
//! a dated time-of-day interval (exams), an inclusive date range
//! (teacher assignments, leave, transfers) and a recurring weekly slot
//! (timetable periods).

use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A time-of-day interval on a single date.
///
/// The interval is half-open: it includes `start` and excludes `end`, so an
/// interval ending at 10:00 and one starting at 10:00 do not share a moment.
///
/// # Example
///
/// ```
/// use academic_engine::models::TimeInterval;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let exam = TimeInterval {
///     date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///     start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     end: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
/// };
/// assert_eq!(exam.duration_minutes(), 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeInterval {
    /// The calendar date of the interval.
    pub date: NaiveDate,
    /// The start time (inclusive).
    pub start: NaiveTime,
    /// The end time (exclusive).
    pub end: NaiveTime,
}

impl TimeInterval {
    /// Returns the length of the interval in minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// An inclusive range of calendar days.
///
/// Both `start` and `end` belong to the range, so two ranges sharing a
/// boundary day overlap by that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// The first day of the range.
    pub start: NaiveDate,
    /// The last day of the range.
    pub end: NaiveDate,
}

impl DateRange {
    /// Returns true if `date` falls within the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns the number of days covered by the range.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// A recurring weekly timetable slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeeklySlot {
    /// The day of the week the slot recurs on.
    pub weekday: Weekday,
    /// The start time (inclusive).
    pub start: NaiveTime,
    /// The end time (exclusive).
    pub end: NaiveTime,
}

/// The window a booking claims on its resource.
///
/// # Example
///
/// ```
/// use academic_engine::models::{BookingWindow, DateRange};
/// use chrono::NaiveDate;
///
/// let window = BookingWindow::Dates(DateRange {
///     start: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
///     end: NaiveDate::from_ymd_opt(2024, 6, 28).unwrap(),
/// });
/// assert!(window.validate("assignment_001").is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BookingWindow {
    /// A time-of-day interval on one date (exam slots).
    Time(TimeInterval),
    /// An inclusive date range (assignments, leave, transfers).
    Dates(DateRange),
    /// A recurring weekly slot (timetable entries).
    Weekly(WeeklySlot),
}

impl BookingWindow {
    /// Checks the window invariant.
    ///
    /// Time and weekly windows need `start < end`; date ranges need
    /// `start <= end`. A malformed window is reported as
    /// [`EngineError::InvalidInterval`] and never corrected.
    pub fn validate(&self, owner_id: &str) -> EngineResult<()> {
        let problem = match self {
            BookingWindow::Time(t) if t.start >= t.end => {
                Some(format!("start {} is not before end {}", t.start, t.end))
            }
            BookingWindow::Weekly(w) if w.start >= w.end => {
                Some(format!("start {} is not before end {}", w.start, w.end))
            }
            BookingWindow::Dates(r) if r.start > r.end => {
                Some(format!("start date {} is after end date {}", r.start, r.end))
            }
            _ => None,
        };

        match problem {
            Some(message) => Err(EngineError::InvalidInterval {
                owner_id: owner_id.to_string(),
                message,
            }),
            None => Ok(()),
        }
    }
}

impl std::fmt::Display for BookingWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingWindow::Time(t) => write!(
                f,
                "{} {}-{}",
                t.date,
                t.start.format("%H:%M"),
                t.end.format("%H:%M")
            ),
            BookingWindow::Dates(r) => write!(f, "{} to {}", r.start, r.end),
            BookingWindow::Weekly(w) => write!(
                f,
                "every {} {}-{}",
                w.weekday,
                w.start.format("%H:%M"),
                w.end.format("%H:%M")
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_time(time_str: &str) -> NaiveTime {
        NaiveTime::parse_from_str(time_str, "%H:%M").unwrap()
    }

    #[test]
    fn test_valid_time_interval_passes_validation() {
        let window = BookingWindow::Time(TimeInterval {
            date: make_date("2024-03-01"),
            start: make_time("09:00"),
            end: make_time("10:00"),
        });
        assert!(window.validate("exam_a").is_ok());
    }

    #[test]
    fn test_zero_length_time_interval_is_invalid() {
        let window = BookingWindow::Time(TimeInterval {
            date: make_date("2024-03-01"),
            start: make_time("09:00"),
            end: make_time("09:00"),
        });

        match window.validate("exam_a") {
            Err(EngineError::InvalidInterval { owner_id, message }) => {
                assert_eq!(owner_id, "exam_a");
                assert!(message.contains("09:00:00"));
            }
            other => panic!("Expected InvalidInterval, got {:?}", other),
        }
    }

    #[test]
    fn test_reversed_weekly_slot_is_invalid() {
        let window = BookingWindow::Weekly(WeeklySlot {
            weekday: Weekday::Mon,
            start: make_time("11:00"),
            end: make_time("10:00"),
        });
        assert!(window.validate("slot_1").is_err());
    }

    #[test]
    fn test_single_day_date_range_is_valid() {
        let window = BookingWindow::Dates(DateRange {
            start: make_date("2024-03-01"),
            end: make_date("2024-03-01"),
        });
        assert!(window.validate("leave_1").is_ok());
    }

    #[test]
    fn test_reversed_date_range_is_invalid() {
        let window = BookingWindow::Dates(DateRange {
            start: make_date("2024-03-02"),
            end: make_date("2024-03-01"),
        });
        assert!(matches!(
            window.validate("leave_1"),
            Err(EngineError::InvalidInterval { .. })
        ));
    }

    #[test]
    fn test_date_range_contains_and_num_days() {
        let range = DateRange {
            start: make_date("2024-03-01"),
            end: make_date("2024-03-07"),
        };
        assert!(range.contains(make_date("2024-03-01")));
        assert!(range.contains(make_date("2024-03-07")));
        assert!(!range.contains(make_date("2024-03-08")));
        assert_eq!(range.num_days(), 7);
    }

    #[test]
    fn test_window_display() {
        let window = BookingWindow::Time(TimeInterval {
            date: make_date("2024-03-01"),
            start: make_time("09:00"),
            end: make_time("10:00"),
        });
        assert_eq!(window.to_string(), "2024-03-01 09:00-10:00");

        let weekly = BookingWindow::Weekly(WeeklySlot {
            weekday: Weekday::Tue,
            start: make_time("13:00"),
            end: make_time("13:45"),
        });
        assert_eq!(weekly.to_string(), "every Tue 13:00-13:45");
    }

    #[test]
    fn test_window_deserialization() {
        let json = r#"{
            "kind": "time",
            "date": "2024-03-01",
            "start": "09:00:00",
            "end": "10:00:00"
        }"#;

        let window: BookingWindow = serde_json::from_str(json).unwrap();
        assert_eq!(
            window,
            BookingWindow::Time(TimeInterval {
                date: make_date("2024-03-01"),
                start: make_time("09:00"),
                end: make_time("10:00"),
            })
        );
    }
}
