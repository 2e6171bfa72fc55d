//! Term GPA and cumulative GPA.

use rust_decimal::Decimal;

use crate::config::{GradeThresholdTable, RemarkTable};
use crate::error::{EngineError, EngineResult};
use crate::models::{GpaRecord, ScoredRecord};

use super::grade_lookup::{effective_grade, validate_records};
use super::rounding::round_reported;

/// Computes a term GPA from subject results.
///
/// Each graded record contributes the grade points of its letter, weighted
/// by its credit weight (1 when absent). Ungraded records are skipped.
///
/// # Returns
///
/// The weighted mean of grade points, two decimal places, or 0 when no
/// record is graded.
///
/// # Errors
///
/// - [`EngineError::OutOfRange`] for marks outside the table's range
/// - [`EngineError::UnknownGrade`] for a supplied letter not in the table
/// - [`EngineError::InvalidWeight`] for a negative weight, when every
///   graded record has weight 0, or when the weights overflow the sum
///
/// # Example
///
/// ```
/// use academic_engine::config::GradeThresholdTable;
/// use academic_engine::grading::term_gpa;
/// use academic_engine::models::ScoredRecord;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let records = vec![
///     ScoredRecord::with_marks("math", Decimal::from(92)),    // A+ = 4.0
///     ScoredRecord::with_marks("physics", Decimal::from(75)), // B+ = 3.2
/// ];
/// let gpa = term_gpa(&records, &GradeThresholdTable::default()).unwrap();
/// assert_eq!(gpa, Decimal::from_str("3.60").unwrap());
/// ```
pub fn term_gpa(records: &[ScoredRecord], table: &GradeThresholdTable) -> EngineResult<Decimal> {
    validate_records(records, table)?;
    for record in records {
        if record.weight.is_some_and(|w| w < Decimal::ZERO) {
            return Err(EngineError::InvalidWeight {
                subject_id: record.subject_id.clone(),
                message: "weight must not be negative".to_string(),
            });
        }
    }

    let mut weighted_points = Decimal::ZERO;
    let mut total_weight = Decimal::ZERO;
    let mut first_graded: Option<&str> = None;

    for record in records {
        let Some(grade) = effective_grade(record, table)? else {
            continue;
        };
        let points = table
            .points_for(&grade)
            .ok_or_else(|| EngineError::UnknownGrade {
                grade: grade.to_string(),
            })?;
        let weight = record.weight.unwrap_or(Decimal::ONE);

        weighted_points = points
            .checked_mul(weight)
            .and_then(|p| weighted_points.checked_add(p))
            .ok_or_else(|| weight_too_large(&record.subject_id))?;
        total_weight = total_weight
            .checked_add(weight)
            .ok_or_else(|| weight_too_large(&record.subject_id))?;
        first_graded.get_or_insert(record.subject_id.as_str());
    }

    match first_graded {
        None => Ok(Decimal::ZERO),
        Some(subject_id) if total_weight.is_zero() => Err(EngineError::InvalidWeight {
            subject_id: subject_id.to_string(),
            message: "total credit weight of graded subjects is zero".to_string(),
        }),
        Some(subject_id) => weighted_points
            .checked_div(total_weight)
            .map(round_reported)
            .ok_or_else(|| weight_too_large(subject_id)),
    }
}

fn weight_too_large(subject_id: &str) -> EngineError {
    EngineError::InvalidWeight {
        subject_id: subject_id.to_string(),
        message: "weight too large".to_string(),
    }
}

/// Computes the cumulative GPA across term GPA records.
///
/// The caller scopes `records` (typically one student and one academic
/// year). Returns the mean GPA to two decimal places, or 0 for an empty
/// input; a student with no recorded terms has no computed CGPA yet, and
/// callers that care should check `records.is_empty()` themselves.
///
/// # Errors
///
/// [`EngineError::OutOfRange`] if any GPA is negative or above the remark
/// table's `max_gpa`.
///
/// # Example
///
/// ```
/// use academic_engine::config::RemarkTable;
/// use academic_engine::grading::cgpa;
/// use academic_engine::models::GpaRecord;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let records: Vec<GpaRecord> = ["3.2", "3.6", "3.9"]
///     .iter()
///     .enumerate()
///     .map(|(i, gpa)| GpaRecord {
///         term_id: format!("term_{}", i + 1),
///         academic_year_id: "2024".to_string(),
///         gpa: Decimal::from_str(gpa).unwrap(),
///     })
///     .collect();
///
/// assert_eq!(cgpa(&records, &RemarkTable::default()).unwrap(), Decimal::from_str("3.57").unwrap());
/// ```
pub fn cgpa(records: &[GpaRecord], table: &RemarkTable) -> EngineResult<Decimal> {
    for record in records {
        validate_gpa(record.gpa, table)?;
    }

    if records.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let total: Decimal = records.iter().map(|r| r.gpa).sum();
    Ok(round_reported(total / Decimal::from(records.len())))
}

/// Checks that `gpa` lies within `[0, max_gpa]`.
pub fn validate_gpa(gpa: Decimal, table: &RemarkTable) -> EngineResult<()> {
    if gpa < Decimal::ZERO || gpa > table.max_gpa() {
        return Err(EngineError::out_of_range(
            "gpa",
            gpa,
            Decimal::ZERO,
            table.max_gpa(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LetterGrade;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn gpa_records(gpas: &[&str]) -> Vec<GpaRecord> {
        gpas.iter()
            .enumerate()
            .map(|(i, gpa)| GpaRecord {
                term_id: format!("term_{}", i + 1),
                academic_year_id: "2024".to_string(),
                gpa: dec(gpa),
            })
            .collect()
    }

    fn weighted(subject: &str, marks: &str, weight: &str) -> ScoredRecord {
        ScoredRecord {
            subject_id: subject.to_string(),
            marks: Some(dec(marks)),
            grade: None,
            weight: Some(dec(weight)),
        }
    }

    #[test]
    fn test_cgpa_of_two_terms() {
        let result = cgpa(&gpa_records(&["3.0", "3.6"]), &RemarkTable::default()).unwrap();
        assert_eq!(result, dec("3.30"));
    }

    // ==========================================================================
    // Scenario 5: term GPAs [3.2, 3.6, 3.9]
    // ==========================================================================
    #[test]
    fn test_cgpa_of_three_terms_rounds_to_two_places() {
        let result = cgpa(&gpa_records(&["3.2", "3.6", "3.9"]), &RemarkTable::default()).unwrap();
        assert_eq!(result, dec("3.57"));
    }

    #[test]
    fn test_cgpa_of_no_terms_is_zero() {
        assert_eq!(cgpa(&[], &RemarkTable::default()).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_cgpa_rejects_gpa_above_max() {
        let result = cgpa(&gpa_records(&["3.0", "4.2"]), &RemarkTable::default());

        match result {
            Err(EngineError::OutOfRange { field, value, .. }) => {
                assert_eq!(field, "gpa");
                assert_eq!(value, dec("4.2"));
            }
            other => panic!("Expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_term_gpa_unweighted_mean_of_points() {
        let records = vec![
            ScoredRecord::with_marks("math", dec("92")),
            ScoredRecord::with_marks("physics", dec("75")),
            ScoredRecord::with_marks("history", dec("30")),
        ];
        // (4.0 + 3.2 + 0.0) / 3 = 2.4
        let gpa = term_gpa(&records, &GradeThresholdTable::default()).unwrap();
        assert_eq!(gpa, dec("2.40"));
    }

    #[test]
    fn test_term_gpa_respects_weights() {
        let records = vec![
            weighted("math", "92", "3"),    // 4.0 * 3 = 12.0
            weighted("physics", "65", "1"), // 2.8 * 1 = 2.8
        ];
        // 14.8 / 4 = 3.7
        let gpa = term_gpa(&records, &GradeThresholdTable::default()).unwrap();
        assert_eq!(gpa, dec("3.70"));
    }

    #[test]
    fn test_term_gpa_uses_supplied_grades() {
        let records = vec![ScoredRecord {
            subject_id: "art".to_string(),
            marks: None,
            grade: Some(LetterGrade::new("A")),
            weight: None,
        }];
        let gpa = term_gpa(&records, &GradeThresholdTable::default()).unwrap();
        assert_eq!(gpa, dec("3.6"));
    }

    #[test]
    fn test_term_gpa_with_nothing_graded_is_zero() {
        let records = vec![ScoredRecord {
            subject_id: "music".to_string(),
            marks: None,
            grade: None,
            weight: None,
        }];
        assert_eq!(
            term_gpa(&records, &GradeThresholdTable::default()).unwrap(),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_term_gpa_rejects_negative_weight() {
        let records = vec![weighted("math", "92", "-1")];

        match term_gpa(&records, &GradeThresholdTable::default()) {
            Err(EngineError::InvalidWeight { subject_id, .. }) => assert_eq!(subject_id, "math"),
            other => panic!("Expected InvalidWeight, got {:?}", other),
        }
    }

    #[test]
    fn test_term_gpa_rejects_all_zero_weights() {
        let records = vec![weighted("math", "92", "0"), weighted("art", "50", "0")];

        let result = term_gpa(&records, &GradeThresholdTable::default());
        assert!(matches!(result, Err(EngineError::InvalidWeight { .. })));
    }

    #[test]
    fn test_term_gpa_huge_weight_is_an_error_not_a_panic() {
        let mut record = ScoredRecord::with_marks("math", dec("92"));
        record.weight = Some(Decimal::MAX);

        match term_gpa(&[record], &GradeThresholdTable::default()) {
            Err(EngineError::InvalidWeight { subject_id, message }) => {
                assert_eq!(subject_id, "math");
                assert_eq!(message, "weight too large");
            }
            other => panic!("Expected InvalidWeight, got {:?}", other),
        }
    }

    #[test]
    fn test_term_gpa_total_weight_overflow_is_an_error() {
        // F carries 0 points, so only the weight total overflows.
        let mut first = ScoredRecord::with_marks("art", dec("10"));
        first.weight = Some(Decimal::MAX);
        let mut second = ScoredRecord::with_marks("music", dec("20"));
        second.weight = Some(Decimal::MAX);

        let result = term_gpa(&[first, second], &GradeThresholdTable::default());
        assert!(matches!(result, Err(EngineError::InvalidWeight { .. })));
    }
}
