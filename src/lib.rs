//! Academic Engine for school record-keeping
//!
//! This crate provides the decision core behind a school-administration API:
//! detecting scheduling conflicts between exams, teacher assignments and
//! timetable slots, and deriving letter grades, GPAs and score statistics
//! from numeric marks.

#![warn(missing_docs)]

pub mod config;
pub mod conflict;
pub mod error;
pub mod grading;
pub mod models;
pub mod report;
