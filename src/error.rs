//! Error types for the academic engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while checking bookings or
//! aggregating scores.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the academic engine.
///
/// Every fallible operation in the engine returns this error type. Validation
/// errors are always raised before any conflict scan or aggregation starts,
/// so a caller never receives a partial result alongside an error.
///
/// # Example
///
/// ```
/// use academic_engine::error::EngineError;
///
/// let error = EngineError::UnknownGrade {
///     grade: "Z".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown grade: Z");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A booking window was malformed (start not before end).
    #[error("Invalid interval for '{owner_id}': {message}")]
    InvalidInterval {
        /// The owner of the booking whose window was malformed.
        owner_id: String,
        /// A description of what made the window invalid.
        message: String,
    },

    /// Marks or a GPA fell outside the configured valid range.
    #[error("{field} {value} is out of range [{min}, {max}]")]
    OutOfRange {
        /// The name of the offending field (e.g. "marks", "gpa").
        field: String,
        /// The rejected value.
        value: Decimal,
        /// The inclusive lower bound.
        min: Decimal,
        /// The inclusive upper bound.
        max: Decimal,
    },

    /// A supplied letter grade is not part of the grade table.
    #[error("Unknown grade: {grade}")]
    UnknownGrade {
        /// The letter that was not found.
        grade: String,
    },

    /// A credit weight could not be used for GPA calculation.
    #[error("Invalid weight for subject '{subject_id}': {message}")]
    InvalidWeight {
        /// The subject carrying the weight.
        subject_id: String,
        /// A description of the problem.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but violates a table invariant.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the violated invariant.
        message: String,
    },
}

impl EngineError {
    /// Builds an [`EngineError::OutOfRange`] for the given field and bounds.
    pub(crate) fn out_of_range(
        field: impl Into<String>,
        value: Decimal,
        min: Decimal,
        max: Decimal,
    ) -> Self {
        EngineError::OutOfRange {
            field: field.into(),
            value,
            min,
            max,
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
