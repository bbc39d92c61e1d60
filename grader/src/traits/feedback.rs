//! # Feedback Trait
//!
//! This module defines the [`Feedback`] trait and the [`FeedbackEntry`] struct,
//! which are used to implement pluggable feedback strategies for the grader system.
//!
//! Each feedback strategy produces a list of feedback entries based on the graded
//! question results, allowing for flexible feedback generation (template-based or
//! author-supplied).

use crate::error::GraderError;
use crate::types::QuestionResult;
use serde::Serialize;

/// One feedback message for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackEntry {
    pub question: String,
    pub message: String,
}

/// A trait for pluggable feedback strategies in the grader system.
///
/// Implement this trait to define how feedback is generated from a set of graded
/// results.
///
/// # Arguments
/// - `results`: A slice of [`QuestionResult`]s for the submission.
///
/// # Returns
/// - `Ok(Vec<FeedbackEntry>)`: An ordered list of feedback entries, one per question.
/// - `Err(GraderError)`: If feedback generation fails.
pub trait Feedback: Send + Sync {
    fn assemble_feedback(
        &self,
        results: &[QuestionResult],
    ) -> Result<Vec<FeedbackEntry>, GraderError>;
}
