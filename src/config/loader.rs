//! Configuration loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading grading
//! policy from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{
    GradeThresholdTable, GradingFile, GradingPolicy, RemarkTable, RemarksFile,
};

/// Loads and provides access to grading policy.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── grading.yaml   # max_marks and grade thresholds with grade points
/// └── remarks.yaml   # max_gpa and remark tiers
/// ```
///
/// # Example
///
/// ```no_run
/// use academic_engine::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/default").unwrap();
/// println!("Failing grade: {}", loader.policy().grades().failing_grade());
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    policy: GradingPolicy,
}

impl PolicyLoader {
    /// Loads grading policy from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `PolicyLoader` on success, or an error if:
    /// - Either file is missing ([`EngineError::ConfigNotFound`])
    /// - Either file contains invalid YAML ([`EngineError::ConfigParseError`])
    /// - A table violates its invariants ([`EngineError::InvalidConfig`])
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let grading = Self::load_yaml::<GradingFile>(&path.join("grading.yaml"))?;
        let remarks = Self::load_yaml::<RemarksFile>(&path.join("remarks.yaml"))?;

        let grades = GradeThresholdTable::new(grading.max_marks, grading.thresholds)?;
        let remarks = RemarkTable::new(remarks.max_gpa, remarks.tiers)?;
        let policy = GradingPolicy::new(grades, remarks)?;

        tracing::debug!(
            path = %path.display(),
            grades = policy.grades().thresholds().len(),
            remark_tiers = policy.remarks().tiers().len(),
            "Loaded grading policy"
        );

        Ok(Self { policy })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &GradingPolicy {
        &self.policy
    }

    /// Consumes the loader, returning the policy.
    pub fn into_policy(self) -> GradingPolicy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LetterGrade;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = PolicyLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
    }

    #[test]
    fn test_loaded_policy_matches_builtin_defaults() {
        let loader = PolicyLoader::load(config_path()).unwrap();
        assert_eq!(loader.policy(), &GradingPolicy::default());
    }

    #[test]
    fn test_loaded_grade_table_is_highest_first() {
        let loader = PolicyLoader::load(config_path()).unwrap();
        let grades = loader.policy().grades();

        assert_eq!(grades.max_marks(), dec("100"));
        assert_eq!(grades.thresholds()[0].grade, LetterGrade::new("A+"));
        assert_eq!(grades.failing_grade(), &LetterGrade::new("F"));
    }

    #[test]
    fn test_loaded_remarks() {
        let loader = PolicyLoader::load(config_path()).unwrap();
        let remarks = loader.policy().remarks();

        assert_eq!(remarks.max_gpa(), dec("4.0"));
        assert_eq!(remarks.tiers()[0].label, "Outstanding");
        assert_eq!(remarks.tiers().len(), 4);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = PolicyLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("grading.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }
}
