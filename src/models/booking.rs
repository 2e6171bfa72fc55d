//! Booking model and resource keys.
//!
//! A booking is a claim on a contended resource (a teacher, a class, a room
//! or a student) for a window of time. Bookings are created by the CRUD layer
//! whenever an exam, assignment or timetable entry is scheduled.

use serde::{Deserialize, Serialize};

use super::BookingWindow;

/// The kind of resource a booking claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    /// A teacher, who cannot be in two places at once.
    Teacher,
    /// A class (cohort of students) sitting an exam or a lesson.
    Class,
    /// A physical room.
    Room,
    /// An individual student (transfers between classes).
    Student,
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceType::Teacher => write!(f, "teacher"),
            ResourceType::Class => write!(f, "class"),
            ResourceType::Room => write!(f, "room"),
            ResourceType::Student => write!(f, "student"),
        }
    }
}

/// Identifies one specific contended resource.
///
/// # Example
///
/// ```
/// use academic_engine::models::{ResourceKey, ResourceType};
///
/// let key = ResourceKey::new(ResourceType::Class, "class_5");
/// assert_eq!(key.to_string(), "class class_5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceKey {
    /// The kind of resource.
    pub resource_type: ResourceType,
    /// The identifier of the resource within its kind.
    pub resource_id: String,
}

impl ResourceKey {
    /// Creates a resource key.
    pub fn new(resource_type: ResourceType, resource_id: impl Into<String>) -> Self {
        Self {
            resource_type,
            resource_id: resource_id.into(),
        }
    }
}

impl std::fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.resource_type, self.resource_id)
    }
}

/// A claim on a resource for a window.
///
/// `owner_id` is the id of the record holding the booking (an exam, an
/// assignment, a timetable entry). When a candidate booking is checked as
/// part of an update, `exclude_id` carries the id of the record being
/// updated so that its own stored booking is not reported against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// The resource being claimed.
    pub resource: ResourceKey,
    /// The window claimed on the resource.
    pub window: BookingWindow,
    /// The id of the record that owns this booking.
    pub owner_id: String,
    /// On a candidate, the owner id to skip during the scan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_id: Option<String>,
}

impl Booking {
    /// Creates a booking with no self-exclusion.
    pub fn new(resource: ResourceKey, window: BookingWindow, owner_id: impl Into<String>) -> Self {
        Self {
            resource,
            window,
            owner_id: owner_id.into(),
            exclude_id: None,
        }
    }

    /// Marks this booking as an update of the record `id`.
    pub fn excluding(mut self, id: impl Into<String>) -> Self {
        self.exclude_id = Some(id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DateRange;
    use chrono::NaiveDate;

    fn sample_booking() -> Booking {
        Booking::new(
            ResourceKey::new(ResourceType::Teacher, "teacher_7"),
            BookingWindow::Dates(DateRange {
                start: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
                end: NaiveDate::from_ymd_opt(2024, 6, 28).unwrap(),
            }),
            "assignment_001",
        )
    }

    #[test]
    fn test_new_booking_has_no_exclusion() {
        assert_eq!(sample_booking().exclude_id, None);
    }

    #[test]
    fn test_excluding_sets_exclude_id() {
        let booking = sample_booking().excluding("assignment_001");
        assert_eq!(booking.exclude_id.as_deref(), Some("assignment_001"));
    }

    #[test]
    fn test_booking_serialization_skips_missing_exclusion() {
        let json = serde_json::to_string(&sample_booking()).unwrap();
        assert!(json.contains("\"resource_type\":\"teacher\""));
        assert!(json.contains("\"kind\":\"dates\""));
        assert!(!json.contains("exclude_id"));

        let deserialized: Booking = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, sample_booking());
    }

    #[test]
    fn test_resource_key_display() {
        let key = ResourceKey::new(ResourceType::Room, "lab_2");
        assert_eq!(key.to_string(), "room lab_2");
    }
}
