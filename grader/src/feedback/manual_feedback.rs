//! Manual feedback strategy: prefers author-supplied feedback for each question.
//!
//! Correct answers get the standard template message. Incorrect answers use the
//! feedback text the question author wrote, falling back to the template when
//! none was provided.

use crate::error::GraderError;
use crate::traits::feedback::{Feedback, FeedbackEntry};
use crate::types::QuestionResult;

pub struct ManualFeedback;

impl Feedback for ManualFeedback {
    fn assemble_feedback(
        &self,
        results: &[QuestionResult],
    ) -> Result<Vec<FeedbackEntry>, GraderError> {
        let mut feedback_entries = Vec::new();

        for result in results {
            let message = if result.outcome.is_correct {
                result.outcome.match_type.describe().to_string()
            } else if let Some(ref manual) = result.manual_feedback {
                manual.clone()
            } else {
                result.outcome.match_type.describe().to_string()
            };

            feedback_entries.push(FeedbackEntry {
                question: result.name.clone(),
                message,
            });
        }

        Ok(feedback_entries)
    }
}
