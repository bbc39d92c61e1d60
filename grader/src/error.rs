//! Grader Error Types
//!
//! This module defines the [`GraderError`] enum, which covers the failures that can
//! occur at the boundaries of the grader system (batch input validation and
//! configuration loading). The evaluation core itself never errors: a submission
//! that matches no rule is classified as incorrect, not failed.

use std::fmt;

/// Represents all error types that can occur in the grader system.
#[derive(Debug)]
pub enum GraderError {
    /// Submissions do not line up with the question list.
    InputMismatch(String),
    /// Grading configuration could not be loaded or parsed.
    ConfigError(String),
}

impl fmt::Display for GraderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraderError::InputMismatch(msg) => write!(f, "input mismatch: {}", msg),
            GraderError::ConfigError(msg) => write!(f, "config error: {}", msg),
        }
    }
}

impl std::error::Error for GraderError {}
