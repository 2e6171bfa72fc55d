//! Grading policy configuration.
//!
//! This module provides the grade threshold table, grade points and remark
//! tiers the grading layer evaluates. Policy is static configuration: it can
//! be loaded from YAML files or taken from the built-in defaults, and a
//! different grading scheme means a different table, not different code.
//!
//! # Example
//!
//! ```no_run
//! use academic_engine::config::PolicyLoader;
//!
//! let loader = PolicyLoader::load("./config/default").unwrap();
//! println!("Max marks: {}", loader.policy().grades().max_marks());
//! ```

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{
    GradeThreshold, GradeThresholdTable, GradingFile, GradingPolicy, RemarkTable, RemarkTier,
    RemarksFile,
};
