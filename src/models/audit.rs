//! Audit trail types.
//!
//! Reports record every derivation they perform (grading, summarising,
//! GPA and remark lookups) so the CRUD layer can persist how a number was
//! reached alongside the number itself.

use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording a derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The ordered list of steps taken to build a report.
///
/// # Example
///
/// ```
/// use academic_engine::models::AuditTrace;
///
/// let mut trace = AuditTrace::default();
/// trace.record("cgpa", "CGPA", serde_json::json!({}), serde_json::json!({}), "no terms");
/// assert_eq!(trace.steps[0].step_number, 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// All steps in the order they were taken.
    pub steps: Vec<AuditStep>,
}

impl AuditTrace {
    /// Appends a step, numbering it after the last recorded step.
    pub fn record(
        &mut self,
        rule_id: &str,
        rule_name: &str,
        input: serde_json::Value,
        output: serde_json::Value,
        reasoning: impl Into<String>,
    ) {
        let step_number = self.steps.len() as u32 + 1;
        self.steps.push(AuditStep {
            step_number,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            input,
            output,
            reasoning: reasoning.into(),
        });
    }
}
