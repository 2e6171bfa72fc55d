//! Report models for the academic engine.
//!
//! This module contains the request and result types the report layer
//! exchanges with the surrounding CRUD layer: report cards for a term,
//! CGPA reports for a year, class performance reports and booking
//! decisions. Results are shaped for persistence as-is.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::RemarkTier;
use crate::conflict::Conflict;
use crate::grading::ScoreSummary;

use super::{AuditTrace, GpaRecord, ScoredRecord};

/// Input for a term report card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermReportRequest {
    /// The student the report is for.
    pub student_id: String,
    /// The term being reported.
    pub term_id: String,
    /// The academic year containing the term.
    pub academic_year_id: String,
    /// The student's subject results for the term.
    pub records: Vec<ScoredRecord>,
}

/// A student's report card for one term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was assembled.
    pub generated_at: DateTime<Utc>,
    /// The engine version that produced the report.
    pub engine_version: String,
    /// The student the report is for.
    pub student_id: String,
    /// Subject results with every derivable grade filled in.
    pub records: Vec<ScoredRecord>,
    /// Statistics over the subject results.
    pub summary: ScoreSummary,
    /// The term GPA, ready to persist.
    pub gpa_record: GpaRecord,
    /// The remark tier for the term GPA.
    pub remark: RemarkTier,
    /// How each figure was derived.
    pub audit_trace: AuditTrace,
}

/// Input for a cumulative GPA report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearReportRequest {
    /// The student the report is for.
    pub student_id: String,
    /// The academic year to report on.
    pub academic_year_id: String,
    /// The student's term GPA records; records from other years are ignored.
    pub gpa_records: Vec<GpaRecord>,
}

/// A student's cumulative GPA for one academic year.
///
/// `term_count` is 0 when the student has no recorded terms in the year;
/// `cgpa` is then 0 and `remark` is `None`, so "no data" is never mistaken
/// for a failing year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was assembled.
    pub generated_at: DateTime<Utc>,
    /// The engine version that produced the report.
    pub engine_version: String,
    /// The student the report is for.
    pub student_id: String,
    /// The academic year reported on.
    pub academic_year_id: String,
    /// Number of term records included.
    pub term_count: usize,
    /// The cumulative GPA, two decimal places.
    pub cgpa: Decimal,
    /// The remark tier for the CGPA, absent when there are no terms.
    pub remark: Option<RemarkTier>,
    /// How each figure was derived.
    pub audit_trace: AuditTrace,
}

/// Statistics for one subject within a performance report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectPerformance {
    /// The subject.
    pub subject_id: String,
    /// Statistics over that subject's results.
    pub summary: ScoreSummary,
}

/// Class-level performance across subjects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was assembled.
    pub generated_at: DateTime<Utc>,
    /// Per-subject statistics, ordered by subject id.
    pub subjects: Vec<SubjectPerformance>,
    /// Statistics over every result regardless of subject.
    pub overall: ScoreSummary,
}

/// The outcome of checking a booking before it is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BookingDecision {
    /// No conflicts; the booking may be stored.
    Accepted,
    /// The booking overlaps the listed bookings and must not be stored.
    Rejected {
        /// The conflicting bookings.
        conflicts: Vec<Conflict>,
    },
}

impl BookingDecision {
    /// Returns true if the booking may be stored.
    pub fn is_accepted(&self) -> bool {
        matches!(self, BookingDecision::Accepted)
    }
}
