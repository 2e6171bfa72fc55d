//! Remark tier lookup from GPA.

use rust_decimal::Decimal;

use crate::config::{RemarkTable, RemarkTier};
use crate::error::{EngineError, EngineResult};

use super::gpa::validate_gpa;

/// Returns the remark tier for `gpa`.
///
/// Tiers are scanned from highest to lowest threshold, the same discipline
/// as [`grade_for`](super::grade_for).
///
/// # Example
///
/// ```
/// use academic_engine::config::RemarkTable;
/// use academic_engine::grading::remark_for;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let table = RemarkTable::default();
/// let tier = remark_for(Decimal::from_str("3.57").unwrap(), &table).unwrap();
/// assert_eq!(tier.label, "Good");
/// ```
pub fn remark_for(gpa: Decimal, table: &RemarkTable) -> EngineResult<RemarkTier> {
    validate_gpa(gpa, table)?;

    table
        .tiers()
        .iter()
        .find(|tier| tier.min_gpa <= gpa)
        .cloned()
        .ok_or_else(|| EngineError::out_of_range("gpa", gpa, Decimal::ZERO, table.max_gpa()))
}
