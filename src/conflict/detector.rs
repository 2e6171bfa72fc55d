//! Conflict detection for bookings on a shared resource.
//!
//! One detector serves every scheduling call site: exam slots, teacher
//! assignments, leave periods and weekly timetable entries. The caller
//! supplies the active bookings already stored for the candidate's resource;
//! the detector never touches storage.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{Booking, BookingWindow};

use super::overlap::windows_overlap;

/// An existing booking that overlaps a candidate booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// The existing booking that blocks the candidate.
    pub booking: Booking,
}

impl Conflict {
    /// Returns the id of the record holding the conflicting booking.
    pub fn owner_id(&self) -> &str {
        &self.booking.owner_id
    }

    /// Returns the window the conflicting booking holds.
    pub fn window(&self) -> &BookingWindow {
        &self.booking.window
    }

    /// Renders a diagnostic suitable for a rejection response.
    ///
    /// # Example
    ///
    /// ```
    /// use academic_engine::conflict::Conflict;
    /// use academic_engine::models::{Booking, BookingWindow, ResourceKey, ResourceType, TimeInterval};
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let conflict = Conflict {
    ///     booking: Booking::new(
    ///         ResourceKey::new(ResourceType::Class, "class_5"),
    ///         BookingWindow::Time(TimeInterval {
    ///             date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
    ///             start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
    ///             end: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
    ///         }),
    ///         "exam_a",
    ///     ),
    /// };
    /// assert_eq!(
    ///     conflict.message(),
    ///     "class class_5 is already booked by 'exam_a' for 2024-03-01 09:00-10:00"
    /// );
    /// ```
    pub fn message(&self) -> String {
        format!(
            "{} is already booked by '{}' for {}",
            self.booking.resource, self.booking.owner_id, self.booking.window
        )
    }
}

/// Finds the existing bookings that overlap a candidate booking.
///
/// # Arguments
///
/// * `candidate` - The booking about to be created or updated
/// * `existing` - Active bookings already stored for the candidate's resource
///
/// # Returns
///
/// The conflicting bookings in the order they appear in `existing`. An empty
/// list means the candidate may be persisted.
///
/// # Behavior
///
/// - The candidate window is validated first; a malformed window returns
///   [`EngineError::InvalidInterval`](crate::error::EngineError::InvalidInterval)
///   without scanning
/// - A booking owned by `candidate.exclude_id` is skipped, so an update never
///   conflicts with its own stored version
/// - A booking for a different resource is skipped
/// - Time-of-day windows touching at an endpoint do not conflict; date
///   ranges sharing a boundary day do
///
/// # Example
///
/// ```
/// use academic_engine::conflict::find_conflicts;
/// use academic_engine::models::{Booking, BookingWindow, ResourceKey, ResourceType, TimeInterval};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let class_5 = ResourceKey::new(ResourceType::Class, "class_5");
/// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let at = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
///
/// let exam_a = Booking::new(
///     class_5.clone(),
///     BookingWindow::Time(TimeInterval { date, start: at(9, 0), end: at(10, 0) }),
///     "exam_a",
/// );
/// let exam_b = Booking::new(
///     class_5,
///     BookingWindow::Time(TimeInterval { date, start: at(9, 30), end: at(10, 30) }),
///     "exam_b",
/// );
///
/// let conflicts = find_conflicts(&exam_b, &[exam_a]).unwrap();
/// assert_eq!(conflicts.len(), 1);
/// assert_eq!(conflicts[0].owner_id(), "exam_a");
/// ```
pub fn find_conflicts(candidate: &Booking, existing: &[Booking]) -> EngineResult<Vec<Conflict>> {
    candidate.window.validate(&candidate.owner_id)?;

    let conflicts: Vec<Conflict> = existing
        .iter()
        .filter(|booking| {
            if candidate.exclude_id.as_deref() == Some(booking.owner_id.as_str()) {
                return false;
            }
            if booking.resource != candidate.resource {
                debug!(
                    candidate = %candidate.owner_id,
                    booking = %booking.owner_id,
                    resource = %booking.resource,
                    "Skipping booking for a different resource"
                );
                return false;
            }
            windows_overlap(&candidate.window, &booking.window)
        })
        .map(|booking| Conflict {
            booking: booking.clone(),
        })
        .collect();

    for conflict in &conflicts {
        debug!(
            candidate = %candidate.owner_id,
            conflicting_owner = %conflict.owner_id(),
            window = %conflict.window(),
            "Booking conflict detected"
        );
    }

    Ok(conflicts)
}

/// Returns true if the candidate overlaps any existing booking.
///
/// Same validation and filtering rules as [`find_conflicts`].
pub fn has_conflict(candidate: &Booking, existing: &[Booking]) -> EngineResult<bool> {
    Ok(!find_conflicts(candidate, existing)?.is_empty())
}
