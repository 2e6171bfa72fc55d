//! Core data models for the academic engine.
//!
//! This module contains the value objects exchanged with the CRUD layer.

mod audit;
mod booking;
mod interval;
mod report;
mod scored_record;

pub use audit::{AuditStep, AuditTrace};
pub use booking::{Booking, ResourceKey, ResourceType};
pub use interval::{BookingWindow, DateRange, TimeInterval, WeeklySlot};
pub use report::{
    BookingDecision, PerformanceReport, SubjectPerformance, TermReport, TermReportRequest,
    YearReport, YearReportRequest,
};
pub use scored_record::{GpaRecord, LetterGrade, ScoredRecord};
