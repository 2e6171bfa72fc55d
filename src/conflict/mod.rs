//! Scheduling conflict detection.
//!
//! This module reports which existing bookings overlap a candidate booking
//! on the same resource. It serves exam scheduling, teacher assignments and
//! weekly timetables through one function, parameterized only by the
//! resource key and the kind of window each booking holds.

mod detector;
mod overlap;

pub use detector::{Conflict, find_conflicts, has_conflict};
pub use overlap::{ranges_overlap, times_overlap, windows_overlap};
