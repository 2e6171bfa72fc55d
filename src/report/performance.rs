//! Class performance reports.

use chrono::Utc;
use std::collections::BTreeMap;
use tracing::info;
use uuid::Uuid;

use crate::config::GradeThresholdTable;
use crate::error::EngineResult;
use crate::grading::summarize;
use crate::models::{PerformanceReport, ScoredRecord, SubjectPerformance};

/// Builds a performance report over a class's results.
///
/// Records are grouped by subject and each group is summarized. The
/// `overall` summary covers every record and is computed first, so the
/// whole input is validated before any group is summarized.
///
/// # Example
///
/// ```
/// use academic_engine::config::GradeThresholdTable;
/// use academic_engine::models::ScoredRecord;
/// use academic_engine::report::assemble_performance_report;
/// use rust_decimal::Decimal;
///
/// let records = vec![
///     ScoredRecord::with_marks("physics", Decimal::from(35)),
///     ScoredRecord::with_marks("math", Decimal::from(80)),
///     ScoredRecord::with_marks("math", Decimal::from(60)),
/// ];
///
/// let report = assemble_performance_report(&records, &GradeThresholdTable::default()).unwrap();
/// assert_eq!(report.subjects[0].subject_id, "math");
/// assert_eq!(report.subjects[0].summary.count, 2);
/// assert_eq!(report.overall.count, 3);
/// ```
pub fn assemble_performance_report(
    records: &[ScoredRecord],
    table: &GradeThresholdTable,
) -> EngineResult<PerformanceReport> {
    let overall = summarize(records, table)?;

    let mut by_subject: BTreeMap<&str, Vec<ScoredRecord>> = BTreeMap::new();
    for record in records {
        by_subject
            .entry(record.subject_id.as_str())
            .or_default()
            .push(record.clone());
    }

    let subjects = by_subject
        .into_iter()
        .map(|(subject_id, group)| {
            Ok(SubjectPerformance {
                subject_id: subject_id.to_string(),
                summary: summarize(&group, table)?,
            })
        })
        .collect::<EngineResult<Vec<_>>>()?;

    info!(
        subjects = subjects.len(),
        records = overall.count,
        pass_rate = %overall.pass_rate,
        "Performance report assembled"
    );

    Ok(PerformanceReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        subjects,
        overall,
    })
}
