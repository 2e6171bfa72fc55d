//! Score aggregation for the academic engine.
//!
//! This module contains the grading functions: letter grade lookup from
//! marks, summary statistics and grade distributions, term GPA from subject
//! grades, cumulative GPA from term GPAs, and remark tiers from GPA. Every
//! function is pure and configured only by the tables passed in.

mod gpa;
mod grade_lookup;
mod remark;
mod rounding;
mod summary;

pub use gpa::{cgpa, term_gpa, validate_gpa};
pub use grade_lookup::{grade_for, grade_records, validate_marks};
pub use remark::remark_for;
pub use rounding::{REPORTED_DECIMAL_PLACES, round_reported};
pub use summary::{ScoreSummary, summarize};
