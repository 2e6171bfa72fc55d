//! Overlap predicates for booking windows.
//!
//! Time-of-day windows are half-open, so back-to-back periods (one ending
//! at 10:00, the next starting at 10:00) never overlap. Date ranges are
//! inclusive on both ends, so ranges sharing a boundary day always overlap.
//! Mixed kinds are compared at the coarser of the two granularities.

use chrono::{Datelike, NaiveTime};

use crate::models::{BookingWindow, DateRange, TimeInterval, WeeklySlot};

/// Returns true if two half-open time-of-day spans share any moment.
pub fn times_overlap(
    a_start: NaiveTime,
    a_end: NaiveTime,
    b_start: NaiveTime,
    b_end: NaiveTime,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// Returns true if two inclusive date ranges share at least one day.
pub fn ranges_overlap(a: &DateRange, b: &DateRange) -> bool {
    a.start <= b.end && b.start <= a.end
}

/// Returns true if two booking windows overlap.
///
/// The relation is symmetric for every combination of window kinds.
///
/// # Example
///
/// ```
/// use academic_engine::conflict::windows_overlap;
/// use academic_engine::models::{BookingWindow, TimeInterval};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let at = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
///
/// let exam_a = BookingWindow::Time(TimeInterval { date, start: at(9, 0), end: at(10, 0) });
/// let exam_b = BookingWindow::Time(TimeInterval { date, start: at(9, 30), end: at(10, 30) });
/// let exam_c = BookingWindow::Time(TimeInterval { date, start: at(10, 0), end: at(11, 0) });
///
/// assert!(windows_overlap(&exam_a, &exam_b));
/// assert!(!windows_overlap(&exam_a, &exam_c));
/// ```
pub fn windows_overlap(a: &BookingWindow, b: &BookingWindow) -> bool {
    use BookingWindow::{Dates, Time, Weekly};

    match (a, b) {
        (Time(x), Time(y)) => x.date == y.date && times_overlap(x.start, x.end, y.start, y.end),
        (Dates(x), Dates(y)) => ranges_overlap(x, y),
        (Weekly(x), Weekly(y)) => {
            x.weekday == y.weekday && times_overlap(x.start, x.end, y.start, y.end)
        }
        (Time(t), Dates(r)) | (Dates(r), Time(t)) => r.contains(t.date),
        (Weekly(w), Time(t)) | (Time(t), Weekly(w)) => weekly_meets_interval(w, t),
        (Weekly(w), Dates(r)) | (Dates(r), Weekly(w)) => range_has_weekday(r, w),
    }
}

fn weekly_meets_interval(slot: &WeeklySlot, interval: &TimeInterval) -> bool {
    interval.date.weekday() == slot.weekday
        && times_overlap(slot.start, slot.end, interval.start, interval.end)
}

fn range_has_weekday(range: &DateRange, slot: &WeeklySlot) -> bool {
    if range.num_days() >= 7 {
        return true;
    }
    range
        .start
        .iter_days()
        .take_while(|day| *day <= range.end)
        .any(|day| day.weekday() == slot.weekday)
}
