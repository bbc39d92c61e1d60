//! # AutoFeedback Strategy
//!
//! This module provides the `AutoFeedback` strategy for the grader system.
//! It implements the [`Feedback`] trait to generate template-based feedback for
//! each question from its match type, so learners see why an answer was accepted
//! ("check your spelling", "partially correct") rather than a bare verdict.

use crate::error::GraderError;
use crate::traits::feedback::{Feedback, FeedbackEntry};
use crate::types::QuestionResult;

/// Automatic feedback strategy: one template message per match category.
#[derive(Debug)]
pub struct AutoFeedback;

impl Feedback for AutoFeedback {
    fn assemble_feedback(
        &self,
        results: &[QuestionResult],
    ) -> Result<Vec<FeedbackEntry>, GraderError> {
        let feedback_entries = results
            .iter()
            .map(|result| FeedbackEntry {
                question: result.name.clone(),
                message: result.outcome.match_type.describe().to_string(),
            })
            .collect();

        Ok(feedback_entries)
    }
}
