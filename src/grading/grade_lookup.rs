//! Letter grade lookup.
//!
//! Maps numeric marks to letter grades through a [`GradeThresholdTable`].
//! This is the single path used when a score is created, when it is
//! updated, and when a report is generated.

use rust_decimal::Decimal;

use crate::config::GradeThresholdTable;
use crate::error::{EngineError, EngineResult};
use crate::models::{LetterGrade, ScoredRecord};

/// Returns the letter grade for `marks`.
///
/// Thresholds are scanned from highest to lowest and the first row whose
/// minimum is at or below `marks` wins.
///
/// # Errors
///
/// [`EngineError::OutOfRange`] if `marks` is negative or above the table's
/// `max_marks`. Marks are never clamped.
///
/// # Example
///
/// ```
/// use academic_engine::config::GradeThresholdTable;
/// use academic_engine::grading::grade_for;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let table = GradeThresholdTable::default();
/// assert_eq!(grade_for(Decimal::from(92), &table).unwrap().as_str(), "A+");
/// assert_eq!(grade_for(Decimal::from_str("89.9").unwrap(), &table).unwrap().as_str(), "A");
/// assert!(grade_for(Decimal::from(101), &table).is_err());
/// ```
pub fn grade_for(marks: Decimal, table: &GradeThresholdTable) -> EngineResult<LetterGrade> {
    validate_marks(marks, table)?;

    table
        .thresholds()
        .iter()
        .find(|row| row.min_marks <= marks)
        .map(|row| row.grade.clone())
        .ok_or_else(|| EngineError::out_of_range("marks", marks, Decimal::ZERO, table.max_marks()))
}

/// Checks that `marks` lies within `[0, max_marks]`.
pub fn validate_marks(marks: Decimal, table: &GradeThresholdTable) -> EngineResult<()> {
    if marks < Decimal::ZERO || marks > table.max_marks() {
        return Err(EngineError::out_of_range(
            "marks",
            marks,
            Decimal::ZERO,
            table.max_marks(),
        ));
    }
    Ok(())
}

/// Checks every record before any aggregation begins.
///
/// Marks must be in range and any supplied letter must exist in the table.
pub(crate) fn validate_records(
    records: &[ScoredRecord],
    table: &GradeThresholdTable,
) -> EngineResult<()> {
    for record in records {
        if let Some(marks) = record.marks {
            validate_marks(marks, table)?;
        }
        if let Some(grade) = &record.grade {
            if table.rank(grade).is_none() {
                return Err(EngineError::UnknownGrade {
                    grade: grade.to_string(),
                });
            }
        }
    }
    Ok(())
}

/// Returns the grade a record carries: its own grade, else one derived from
/// its marks, else `None` for an ungraded record.
pub(crate) fn effective_grade(
    record: &ScoredRecord,
    table: &GradeThresholdTable,
) -> EngineResult<Option<LetterGrade>> {
    match (&record.grade, record.marks) {
        (Some(grade), _) => Ok(Some(grade.clone())),
        (None, Some(marks)) => grade_for(marks, table).map(Some),
        (None, None) => Ok(None),
    }
}

/// Fills in missing grades from marks.
///
/// Records that already carry a grade keep it; records with neither marks
/// nor grade are returned unchanged. All records are validated first, so on
/// error nothing is returned.
///
/// # Example
///
/// ```
/// use academic_engine::config::GradeThresholdTable;
/// use academic_engine::grading::grade_records;
/// use academic_engine::models::ScoredRecord;
/// use rust_decimal::Decimal;
///
/// let records = vec![ScoredRecord::with_marks("math", Decimal::from(75))];
/// let graded = grade_records(&records, &GradeThresholdTable::default()).unwrap();
/// assert_eq!(graded[0].grade.as_ref().unwrap().as_str(), "B+");
/// ```
pub fn grade_records(
    records: &[ScoredRecord],
    table: &GradeThresholdTable,
) -> EngineResult<Vec<ScoredRecord>> {
    validate_records(records, table)?;

    records
        .iter()
        .map(|record| {
            Ok(ScoredRecord {
                grade: effective_grade(record, table)?,
                ..record.clone()
            })
        })
        .collect()
}
