//! Accept/reject decisions for new or updated bookings.

use tracing::{info, warn};

use crate::conflict::find_conflicts;
use crate::error::EngineResult;
use crate::models::{Booking, BookingDecision};

/// Decides whether a single booking may be stored.
///
/// # Example
///
/// ```
/// use academic_engine::models::{Booking, BookingWindow, DateRange, ResourceKey, ResourceType};
/// use academic_engine::report::decide_booking;
/// use chrono::NaiveDate;
///
/// let teacher = ResourceKey::new(ResourceType::Teacher, "teacher_7");
/// let term = |start: (i32, u32, u32), end: (i32, u32, u32)| {
///     BookingWindow::Dates(DateRange {
///         start: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
///         end: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
///     })
/// };
///
/// let existing = vec![Booking::new(teacher.clone(), term((2024, 1, 8), (2024, 3, 29)), "assign_1")];
/// let candidate = Booking::new(teacher, term((2024, 4, 8), (2024, 6, 28)), "assign_2");
///
/// assert!(decide_booking(&candidate, &existing).unwrap().is_accepted());
/// ```
pub fn decide_booking(candidate: &Booking, existing: &[Booking]) -> EngineResult<BookingDecision> {
    decide_bookings(std::slice::from_ref(candidate), existing)
}

/// Decides whether a group of bookings may be stored together.
///
/// An exam typically claims several resources at once (the class, the room
/// and the invigilating teacher). Each candidate is checked against the
/// existing bookings for its own resource; the group is accepted only if no
/// candidate conflicts. Every candidate window is validated before any scan.
pub fn decide_bookings(
    candidates: &[Booking],
    existing: &[Booking],
) -> EngineResult<BookingDecision> {
    for candidate in candidates {
        candidate.window.validate(&candidate.owner_id)?;
    }

    let mut conflicts = Vec::new();
    for candidate in candidates {
        conflicts.extend(find_conflicts(candidate, existing)?);
    }

    if conflicts.is_empty() {
        info!(candidates = candidates.len(), "Booking accepted");
        Ok(BookingDecision::Accepted)
    } else {
        warn!(
            candidates = candidates.len(),
            conflicts = conflicts.len(),
            first_conflict = %conflicts[0].message(),
            "Booking rejected"
        );
        Ok(BookingDecision::Rejected { conflicts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::{BookingWindow, ResourceKey, ResourceType, TimeInterval};
    use chrono::{NaiveDate, NaiveTime};

    fn slot(start: &str, end: &str) -> BookingWindow {
        BookingWindow::Time(TimeInterval {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            start: NaiveTime::parse_from_str(start, "%H:%M").unwrap(),
            end: NaiveTime::parse_from_str(end, "%H:%M").unwrap(),
        })
    }

    fn booking(resource_type: ResourceType, id: &str, window: BookingWindow, owner: &str) -> Booking {
        Booking::new(ResourceKey::new(resource_type, id), window, owner)
    }

    fn exam_bookings(owner: &str, start: &str, end: &str, room: &str) -> Vec<Booking> {
        vec![
            booking(ResourceType::Class, "class_5", slot(start, end), owner),
            booking(ResourceType::Room, room, slot(start, end), owner),
        ]
    }

    #[test]
    fn test_free_exam_is_accepted() {
        let existing = exam_bookings("exam_a", "09:00", "10:00", "hall_1");
        let candidate = booking(ResourceType::Class, "class_5", slot("10:00", "11:00"), "exam_c");

        assert_eq!(
            decide_booking(&candidate, &existing).unwrap(),
            BookingDecision::Accepted
        );
    }

    #[test]
    fn test_exam_is_rejected_when_any_resource_is_taken() {
        let mut existing = exam_bookings("exam_a", "09:00", "10:00", "hall_1");
        existing.push(booking(
            ResourceType::Room,
            "hall_2",
            slot("13:00", "14:00"),
            "exam_z",
        ));

        // Class 6 is free, but hall_1 is taken by exam_a.
        let candidates = vec![
            booking(ResourceType::Class, "class_6", slot("09:30", "10:30"), "exam_b"),
            booking(ResourceType::Room, "hall_1", slot("09:30", "10:30"), "exam_b"),
        ];

        match decide_bookings(&candidates, &existing).unwrap() {
            BookingDecision::Rejected { conflicts } => {
                assert_eq!(conflicts.len(), 1);
                assert_eq!(conflicts[0].owner_id(), "exam_a");
                assert_eq!(conflicts[0].booking.resource.resource_id, "hall_1");
            }
            BookingDecision::Accepted => panic!("Expected rejection"),
        }
    }

    #[test]
    fn test_invalid_candidate_in_group_fails_before_scanning() {
        let candidates = vec![
            booking(ResourceType::Class, "class_5", slot("09:00", "10:00"), "exam_b"),
            booking(ResourceType::Room, "hall_1", slot("10:00", "09:00"), "exam_b"),
        ];

        let result = decide_bookings(&candidates, &[]);
        assert!(matches!(result, Err(EngineError::InvalidInterval { .. })));
    }

    #[test]
    fn test_empty_group_is_accepted() {
        assert!(decide_bookings(&[], &[]).unwrap().is_accepted());
    }
}
