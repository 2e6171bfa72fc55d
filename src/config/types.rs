//! Configuration types for grading policy.
//!
//! This module contains the strongly-typed threshold tables that are
//! deserialized from YAML configuration files, plus the built-in default
//! policy. Tables are validated and sorted highest-threshold-first when
//! constructed, so every lookup can stop at the first matching row.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{EngineError, EngineResult};
use crate::models::LetterGrade;

/// One row of the grade threshold table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeThreshold {
    /// The minimum marks (inclusive) needed for this grade.
    pub min_marks: Decimal,
    /// The letter awarded.
    pub grade: LetterGrade,
    /// The grade points the letter contributes to a term GPA.
    pub points: Decimal,
}

/// Structure of `grading.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct GradingFile {
    /// The highest marks a record may carry.
    pub max_marks: Decimal,
    /// Threshold rows, in any order.
    pub thresholds: Vec<GradeThreshold>,
}

/// Ordered mapping of minimum marks to letter grade.
///
/// # Example
///
/// ```
/// use academic_engine::config::GradeThresholdTable;
///
/// let table = GradeThresholdTable::default();
/// assert_eq!(table.thresholds()[0].grade.as_str(), "A+");
/// assert_eq!(table.failing_grade().as_str(), "F");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradeThresholdTable {
    max_marks: Decimal,
    /// Rows sorted highest `min_marks` first.
    thresholds: Vec<GradeThreshold>,
    /// Letter of the row starting at 0.
    #[serde(skip)]
    failing_grade: LetterGrade,
}

impl GradeThresholdTable {
    /// Builds a table, validating and sorting the rows.
    ///
    /// Returns [`EngineError::InvalidConfig`] if the table is empty, if two
    /// rows share a threshold or a letter, if the lowest threshold is not 0,
    /// or if any threshold lies outside `[0, max_marks]`.
    pub fn new(max_marks: Decimal, thresholds: Vec<GradeThreshold>) -> EngineResult<Self> {
        if max_marks <= Decimal::ZERO {
            return Err(invalid(format!("max_marks must be positive, got {}", max_marks)));
        }
        if thresholds.is_empty() {
            return Err(invalid("grade table is empty"));
        }

        let mut seen_marks = HashSet::new();
        let mut seen_grades = HashSet::new();
        for row in &thresholds {
            if row.min_marks < Decimal::ZERO || row.min_marks > max_marks {
                return Err(invalid(format!(
                    "threshold {} for grade {} is outside [0, {}]",
                    row.min_marks, row.grade, max_marks
                )));
            }
            if !seen_marks.insert(row.min_marks.normalize()) {
                return Err(invalid(format!("duplicate threshold {}", row.min_marks)));
            }
            if !seen_grades.insert(row.grade.clone()) {
                return Err(invalid(format!("duplicate grade {}", row.grade)));
            }
            if row.points < Decimal::ZERO {
                return Err(invalid(format!("grade {} has negative points", row.grade)));
            }
        }

        let mut sorted = thresholds;
        sorted.sort_by(|a, b| b.min_marks.cmp(&a.min_marks));

        let failing_grade = match sorted.last() {
            Some(row) if row.min_marks.is_zero() => row.grade.clone(),
            _ => {
                return Err(invalid(
                    "lowest threshold must be 0 so every mark maps to a grade",
                ));
            }
        };

        Ok(Self {
            max_marks,
            thresholds: sorted,
            failing_grade,
        })
    }

    /// Returns the highest marks a record may carry.
    pub fn max_marks(&self) -> Decimal {
        self.max_marks
    }

    /// Returns the rows, highest threshold first.
    pub fn thresholds(&self) -> &[GradeThreshold] {
        &self.thresholds
    }

    /// Returns the failing grade: the letter of the lowest row.
    pub fn failing_grade(&self) -> &LetterGrade {
        &self.failing_grade
    }

    /// Returns the position of `grade` counted from the lowest row.
    ///
    /// Higher ranks are better grades. `None` if the letter is unknown.
    pub fn rank(&self, grade: &LetterGrade) -> Option<usize> {
        self.thresholds
            .iter()
            .rev()
            .position(|row| &row.grade == grade)
    }

    /// Returns the grade points for `grade`, if the letter is in the table.
    pub fn points_for(&self, grade: &LetterGrade) -> Option<Decimal> {
        self.thresholds
            .iter()
            .find(|row| &row.grade == grade)
            .map(|row| row.points)
    }
}

impl Default for GradeThresholdTable {
    fn default() -> Self {
        let row = |min: i64, grade: &str, points: Decimal| GradeThreshold {
            min_marks: Decimal::from(min),
            grade: LetterGrade::new(grade),
            points,
        };
        Self {
            max_marks: Decimal::ONE_HUNDRED,
            thresholds: vec![
                row(90, "A+", Decimal::new(40, 1)),
                row(80, "A", Decimal::new(36, 1)),
                row(70, "B+", Decimal::new(32, 1)),
                row(60, "B", Decimal::new(28, 1)),
                row(50, "C+", Decimal::new(24, 1)),
                row(40, "C", Decimal::new(20, 1)),
                row(0, "F", Decimal::ZERO),
            ],
            failing_grade: LetterGrade::new("F"),
        }
    }
}

/// One remark tier: the label awarded from `min_gpa` upwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemarkTier {
    /// The minimum GPA (inclusive) for this tier.
    pub min_gpa: Decimal,
    /// The label shown on a report.
    pub label: String,
}

/// Structure of `remarks.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RemarksFile {
    /// The highest GPA a record may carry.
    pub max_gpa: Decimal,
    /// Tier rows, in any order.
    pub tiers: Vec<RemarkTier>,
}

/// Ordered mapping of minimum GPA to remark tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemarkTable {
    max_gpa: Decimal,
    /// Tiers sorted highest `min_gpa` first.
    tiers: Vec<RemarkTier>,
}

impl RemarkTable {
    /// Builds a table, validating and sorting the tiers.
    pub fn new(max_gpa: Decimal, tiers: Vec<RemarkTier>) -> EngineResult<Self> {
        if max_gpa <= Decimal::ZERO {
            return Err(invalid(format!("max_gpa must be positive, got {}", max_gpa)));
        }
        if tiers.is_empty() {
            return Err(invalid("remark table is empty"));
        }

        let mut seen = HashSet::new();
        for tier in &tiers {
            if tier.min_gpa < Decimal::ZERO || tier.min_gpa > max_gpa {
                return Err(invalid(format!(
                    "remark '{}' threshold {} is outside [0, {}]",
                    tier.label, tier.min_gpa, max_gpa
                )));
            }
            if !seen.insert(tier.min_gpa.normalize()) {
                return Err(invalid(format!("duplicate remark threshold {}", tier.min_gpa)));
            }
        }

        let mut sorted = tiers;
        sorted.sort_by(|a, b| b.min_gpa.cmp(&a.min_gpa));

        if sorted.last().map(|tier| tier.min_gpa) != Some(Decimal::ZERO) {
            return Err(invalid("lowest remark threshold must be 0"));
        }

        Ok(Self {
            max_gpa,
            tiers: sorted,
        })
    }

    /// Returns the highest GPA a record may carry.
    pub fn max_gpa(&self) -> Decimal {
        self.max_gpa
    }

    /// Returns the tiers, highest threshold first.
    pub fn tiers(&self) -> &[RemarkTier] {
        &self.tiers
    }
}

impl Default for RemarkTable {
    fn default() -> Self {
        let tier = |min_gpa: Decimal, label: &str| RemarkTier {
            min_gpa,
            label: label.to_string(),
        };
        Self {
            max_gpa: Decimal::new(40, 1),
            tiers: vec![
                tier(Decimal::new(38, 1), "Outstanding"),
                tier(Decimal::new(30, 1), "Good"),
                tier(Decimal::new(20, 1), "Satisfactory"),
                tier(Decimal::ZERO, "Needs improvement"),
            ],
        }
    }
}

/// The complete grading policy handed to the grading and report layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GradingPolicy {
    grades: GradeThresholdTable,
    remarks: RemarkTable,
}

impl GradingPolicy {
    /// Combines a grade table and a remark table.
    ///
    /// Fails if any grade carries more points than the remark table's
    /// `max_gpa`, since such a grade could produce an unreportable GPA.
    pub fn new(grades: GradeThresholdTable, remarks: RemarkTable) -> EngineResult<Self> {
        if let Some(row) = grades
            .thresholds()
            .iter()
            .find(|row| row.points > remarks.max_gpa())
        {
            return Err(invalid(format!(
                "grade {} is worth {} points, above max_gpa {}",
                row.grade,
                row.points,
                remarks.max_gpa()
            )));
        }
        Ok(Self { grades, remarks })
    }

    /// Returns the grade threshold table.
    pub fn grades(&self) -> &GradeThresholdTable {
        &self.grades
    }

    /// Returns the remark table.
    pub fn remarks(&self) -> &RemarkTable {
        &self.remarks
    }
}

fn invalid(message: impl Into<String>) -> EngineError {
    EngineError::InvalidConfig {
        message: message.into(),
    }
}
