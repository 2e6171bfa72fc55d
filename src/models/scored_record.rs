//! Score and GPA records.
//!
//! This module defines the records the grading layer consumes: one
//! [`ScoredRecord`] per subject result and one [`GpaRecord`] per term.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A letter grade such as `A+` or `F`.
///
/// Letters are configuration data, so the set of valid letters and their
/// ordering come from the grade threshold table in use.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LetterGrade(String);

impl LetterGrade {
    /// Creates a letter grade.
    pub fn new(letter: impl Into<String>) -> Self {
        Self(letter.into())
    }

    /// Returns the letter as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LetterGrade {
    fn from(letter: &str) -> Self {
        Self::new(letter)
    }
}

/// A student's result in one subject.
///
/// # Example
///
/// ```
/// use academic_engine::models::ScoredRecord;
/// use rust_decimal::Decimal;
///
/// let record = ScoredRecord::with_marks("math", Decimal::from(92));
/// assert!(record.grade.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredRecord {
    /// The subject the result belongs to.
    pub subject_id: String,
    /// The marks obtained, if recorded.
    #[serde(default)]
    pub marks: Option<Decimal>,
    /// The letter grade, computed from marks when absent.
    #[serde(default)]
    pub grade: Option<LetterGrade>,
    /// Credit weight of the subject for GPA purposes (1 when absent).
    #[serde(default)]
    pub weight: Option<Decimal>,
}

impl ScoredRecord {
    /// Creates a record with marks and nothing else filled in.
    pub fn with_marks(subject_id: impl Into<String>, marks: Decimal) -> Self {
        Self {
            subject_id: subject_id.into(),
            marks: Some(marks),
            grade: None,
            weight: None,
        }
    }
}

/// The GPA a student earned for one term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpaRecord {
    /// The term the GPA belongs to.
    pub term_id: String,
    /// The academic year containing the term.
    pub academic_year_id: String,
    /// The grade-point average for the term.
    pub gpa: Decimal,
}
