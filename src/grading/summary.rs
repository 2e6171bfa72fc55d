//! Summary statistics over a collection of scored records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::GradeThresholdTable;
use crate::error::EngineResult;
use crate::models::{LetterGrade, ScoredRecord};

use super::grade_lookup::{effective_grade, validate_records};
use super::rounding::round_reported;

/// Aggregate statistics for a set of scores.
///
/// `count` and `graded_count` let callers tell "no data" apart from "data
/// and it is zero": an empty input yields `count == 0` with a pass rate of 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    /// Number of records supplied.
    pub count: usize,
    /// Records carrying or deriving a letter grade.
    pub graded_count: usize,
    /// Records with neither marks nor grade.
    pub ungraded_count: usize,
    /// Graded records whose grade is not the failing grade.
    pub pass_count: usize,
    /// Graded records holding the failing grade.
    pub fail_count: usize,
    /// `pass_count / count * 100`, two decimal places; 0 for an empty input.
    pub pass_rate: Decimal,
    /// Mean of the marks present, two decimal places.
    pub average: Option<Decimal>,
    /// Lowest marks present.
    pub min: Option<Decimal>,
    /// Highest marks present.
    pub max: Option<Decimal>,
    /// Number of records per letter grade present in the input.
    pub grade_distribution: BTreeMap<LetterGrade, usize>,
}

/// Summarizes a collection of scored records.
///
/// Every record is validated before any statistic is computed, so an
/// out-of-range mark or unknown letter anywhere fails the whole call.
/// Records without marks are ignored for average, min and max but still
/// count towards pass/fail when they carry a grade. An ungraded record
/// neither passes nor fails, yet stays in the pass-rate denominator.
///
/// # Example
///
/// ```
/// use academic_engine::config::GradeThresholdTable;
/// use academic_engine::grading::summarize;
/// use academic_engine::models::ScoredRecord;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let records: Vec<ScoredRecord> = [90, 45, 38, 60]
///     .iter()
///     .map(|m| ScoredRecord::with_marks("math", Decimal::from(*m)))
///     .collect();
///
/// let summary = summarize(&records, &GradeThresholdTable::default()).unwrap();
/// assert_eq!(summary.pass_rate, Decimal::from_str("75.00").unwrap());
/// assert_eq!(summary.average, Some(Decimal::from_str("58.25").unwrap()));
/// ```
pub fn summarize(
    records: &[ScoredRecord],
    table: &GradeThresholdTable,
) -> EngineResult<ScoreSummary> {
    validate_records(records, table)?;

    let failing = table.failing_grade();
    let mut grade_distribution: BTreeMap<LetterGrade, usize> = BTreeMap::new();
    let mut pass_count = 0;
    let mut fail_count = 0;
    let mut ungraded_count = 0;

    for record in records {
        match effective_grade(record, table)? {
            Some(grade) => {
                if &grade == failing {
                    fail_count += 1;
                } else {
                    pass_count += 1;
                }
                *grade_distribution.entry(grade).or_insert(0) += 1;
            }
            None => ungraded_count += 1,
        }
    }

    let graded_count = pass_count + fail_count;
    let pass_rate = if records.is_empty() {
        Decimal::ZERO
    } else {
        round_reported(
            Decimal::from(pass_count) / Decimal::from(records.len()) * Decimal::ONE_HUNDRED,
        )
    };

    let marks: Vec<Decimal> = records.iter().filter_map(|r| r.marks).collect();
    let average = if marks.is_empty() {
        None
    } else {
        let total: Decimal = marks.iter().sum();
        Some(round_reported(total / Decimal::from(marks.len())))
    };

    Ok(ScoreSummary {
        count: records.len(),
        graded_count,
        ungraded_count,
        pass_count,
        fail_count,
        pass_rate,
        average,
        min: marks.iter().min().copied(),
        max: marks.iter().max().copied(),
        grade_distribution,
    })
}
