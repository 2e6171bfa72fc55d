//! Report assembly for the academic engine.
//!
//! This module combines conflict checks and grading into the objects the
//! CRUD layer persists: booking decisions for exams, assignments and
//! timetable entries, term report cards, yearly CGPA reports and class
//! performance reports. It adds no algorithm of its own.

mod booking;
mod performance;
mod term;

pub use booking::{decide_booking, decide_bookings};
pub use performance::assemble_performance_report;
pub use term::{assemble_term_report, assemble_year_report};
