//! Term and year report assembly.

use chrono::Utc;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::config::GradingPolicy;
use crate::error::EngineResult;
use crate::grading::{cgpa, grade_records, remark_for, summarize, term_gpa};
use crate::models::{
    AuditTrace, GpaRecord, TermReport, TermReportRequest, YearReport, YearReportRequest,
};

/// Assembles a student's report card for one term.
///
/// Fills in missing grades, summarizes the results, computes the term GPA
/// and looks up its remark tier. The returned [`GpaRecord`] is ready for the
/// CRUD layer to store so that later year reports can include it.
///
/// # Errors
///
/// Propagates [`EngineError::OutOfRange`](crate::error::EngineError::OutOfRange),
/// [`EngineError::UnknownGrade`](crate::error::EngineError::UnknownGrade) and
/// [`EngineError::InvalidWeight`](crate::error::EngineError::InvalidWeight)
/// from the grading layer. No report is produced on error.
///
/// # Example
///
/// ```
/// use academic_engine::config::GradingPolicy;
/// use academic_engine::models::{ScoredRecord, TermReportRequest};
/// use academic_engine::report::assemble_term_report;
/// use rust_decimal::Decimal;
///
/// let request = TermReportRequest {
///     student_id: "stu_001".to_string(),
///     term_id: "term_1".to_string(),
///     academic_year_id: "2024".to_string(),
///     records: vec![ScoredRecord::with_marks("math", Decimal::from(92))],
/// };
///
/// let report = assemble_term_report(&request, &GradingPolicy::default()).unwrap();
/// assert_eq!(report.gpa_record.gpa, Decimal::from(4));
/// assert_eq!(report.remark.label, "Outstanding");
/// ```
pub fn assemble_term_report(
    request: &TermReportRequest,
    policy: &GradingPolicy,
) -> EngineResult<TermReport> {
    let grades = policy.grades();
    let mut audit_trace = AuditTrace::default();

    let records = grade_records(&request.records, grades)?;
    let derived = request
        .records
        .iter()
        .zip(&records)
        .filter(|(before, after)| before.grade.is_none() && after.grade.is_some())
        .count();
    audit_trace.record(
        "grade_lookup",
        "Grade Lookup",
        json!({ "records": request.records.len() }),
        json!({ "derived_grades": derived }),
        format!(
            "Derived {} grade(s) from marks using a {}-row threshold table",
            derived,
            grades.thresholds().len()
        ),
    );

    let summary = summarize(&records, grades)?;
    audit_trace.record(
        "score_summary",
        "Score Summary",
        json!({ "records": summary.count }),
        json!({
            "pass_rate": summary.pass_rate.to_string(),
            "average": summary.average.map(|a| a.to_string()),
        }),
        format!(
            "{} of {} result(s) passed, {} ungraded",
            summary.pass_count, summary.count, summary.ungraded_count
        ),
    );

    let gpa = term_gpa(&records, grades)?;
    audit_trace.record(
        "term_gpa",
        "Term GPA",
        json!({ "graded_records": summary.graded_count }),
        json!({ "gpa": gpa.to_string() }),
        format!("Weighted mean of grade points is {}", gpa),
    );

    let remark = remark_for(gpa, policy.remarks())?;
    audit_trace.record(
        "remark_lookup",
        "Remark Lookup",
        json!({ "gpa": gpa.to_string() }),
        json!({ "remark": remark.label }),
        format!("GPA {} meets the {} threshold of {}", gpa, remark.label, remark.min_gpa),
    );

    info!(
        student_id = %request.student_id,
        term_id = %request.term_id,
        records = records.len(),
        gpa = %gpa,
        "Term report assembled"
    );

    Ok(TermReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        student_id: request.student_id.clone(),
        records,
        summary,
        gpa_record: GpaRecord {
            term_id: request.term_id.clone(),
            academic_year_id: request.academic_year_id.clone(),
            gpa,
        },
        remark,
        audit_trace,
    })
}

/// Assembles a student's cumulative GPA report for one academic year.
///
/// Only records whose `academic_year_id` matches the request are included.
/// With no matching records the report carries `term_count == 0`, a CGPA of
/// 0 and no remark.
pub fn assemble_year_report(
    request: &YearReportRequest,
    policy: &GradingPolicy,
) -> EngineResult<YearReport> {
    let mut audit_trace = AuditTrace::default();

    let in_year: Vec<GpaRecord> = request
        .gpa_records
        .iter()
        .filter(|r| r.academic_year_id == request.academic_year_id)
        .cloned()
        .collect();

    let cgpa = cgpa(&in_year, policy.remarks())?;
    audit_trace.record(
        "cgpa",
        "Cumulative GPA",
        json!({
            "academic_year_id": request.academic_year_id,
            "terms": in_year.iter().map(|r| r.term_id.as_str()).collect::<Vec<_>>(),
        }),
        json!({ "cgpa": cgpa.to_string() }),
        if in_year.is_empty() {
            "No terms recorded for the year; CGPA defaults to 0".to_string()
        } else {
            format!("Mean of {} term GPA(s) is {}", in_year.len(), cgpa)
        },
    );

    let remark = if in_year.is_empty() {
        None
    } else {
        let tier = remark_for(cgpa, policy.remarks())?;
        audit_trace.record(
            "remark_lookup",
            "Remark Lookup",
            json!({ "gpa": cgpa.to_string() }),
            json!({ "remark": tier.label }),
            format!("CGPA {} meets the {} threshold of {}", cgpa, tier.label, tier.min_gpa),
        );
        Some(tier)
    };

    info!(
        student_id = %request.student_id,
        academic_year_id = %request.academic_year_id,
        terms = in_year.len(),
        cgpa = %cgpa,
        "Year report assembled"
    );

    Ok(YearReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        student_id: request.student_id.clone(),
        academic_year_id: request.academic_year_id.clone(),
        term_count: in_year.len(),
        cgpa,
        remark,
        audit_trace,
    })
}
