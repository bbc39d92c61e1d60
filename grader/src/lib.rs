//! # Grader Library
//!
//! This crate provides the core logic for automated grading of free-text quiz
//! answers. It normalizes learner submissions, compares them against authored
//! reference answers using ordered match rules, and generates grading reports
//! with feedback.
//!
//! ## Key Concepts
//! - **AnswerEvaluator**: The pure evaluation pipeline for a single submission.
//! - **Matchers**: Pluggable rules for accepting a submission (exact, fuzzy,
//!   partial, word overlap, numeric), tried from strictest to loosest.
//! - **Feedback**: Pluggable strategies turning graded results into learner-facing
//!   messages.
//! - **EvaluationJob**: A batch job grading a full quiz attempt and producing a
//!   serializable report.

pub mod error;
pub mod evaluator;
pub mod feedback;
pub mod matchers;
pub mod report;
pub mod traits;
pub mod types;
pub mod utilities;

use crate::error::GraderError;
use crate::evaluator::AnswerEvaluator;
use crate::feedback::auto_feedback::AutoFeedback;
use crate::feedback::manual_feedback::ManualFeedback;
use crate::report::{EvaluationReport, EvaluationReportResponse};
use crate::traits::feedback::Feedback;
use crate::types::{QuestionResult, Question};

use chrono::Utc;
use std::path::Path;
use util::evaluation_config::{EvaluationConfig, FeedbackScheme};

/// Represents a grading job for a single quiz attempt.
///
/// This struct pairs the authored questions with the learner's submissions and
/// the grading configuration. Submissions are matched to questions by position.
pub struct EvaluationJob<'a> {
    questions: Vec<Question>,
    submissions: Vec<String>,
    config: EvaluationConfig,
    feedback: Option<Box<dyn Feedback + Send + Sync + 'a>>,
}

impl std::fmt::Debug for EvaluationJob<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvaluationJob").finish_non_exhaustive()
    }
}

impl<'a> EvaluationJob<'a> {
    /// Create a new grading job with the default configuration.
    ///
    /// # Arguments
    /// * `questions` - The authored questions, in quiz order.
    /// * `submissions` - The learner's answers, one per question.
    pub fn new(questions: Vec<Question>, submissions: Vec<String>) -> Self {
        Self {
            questions,
            submissions,
            config: EvaluationConfig::default(),
            feedback: None,
        }
    }

    /// Use the given grading configuration for this job.
    pub fn with_config(mut self, config: EvaluationConfig) -> Self {
        self.config = config;
        self
    }

    /// Load the grading configuration from a JSON file.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, GraderError> {
        self.config = EvaluationConfig::from_file(path).map_err(GraderError::ConfigError)?;
        Ok(self)
    }

    /// Set a custom feedback strategy, overriding the configured scheme.
    ///
    /// # Arguments
    /// * `feedback` - An implementation of the `Feedback` trait.
    pub fn with_feedback<F: Feedback + Send + Sync + 'a>(mut self, feedback: F) -> Self {
        self.feedback = Some(Box::new(feedback));
        self
    }

    /// Run the grading process and generate a report.
    ///
    /// # Returns
    /// * `Ok(EvaluationReportResponse)` on success, containing the full report.
    /// * `Err(GraderError)` if the submissions do not line up with the questions.
    ///
    /// # Steps
    /// 1. Validates that there is exactly one submission per question.
    /// 2. Evaluates each submission with the configured tolerances.
    /// 3. Awards each question's full value on a correct match, zero otherwise.
    /// 4. Generates feedback using the configured or overridden strategy.
    /// 5. Builds a report with per-question results and the overall percentage.
    pub fn evaluate(self) -> Result<EvaluationReportResponse, GraderError> {
        if self.questions.len() != self.submissions.len() {
            return Err(GraderError::InputMismatch(format!(
                "expected {} submissions, got {}",
                self.questions.len(),
                self.submissions.len()
            )));
        }

        let evaluator = AnswerEvaluator::new(self.config.tolerances.clone());

        let mut results: Vec<QuestionResult> = Vec::with_capacity(self.questions.len());
        for (question, submission) in self.questions.iter().zip(self.submissions.iter()) {
            let outcome = evaluator.evaluate(submission, &question.reference_answer, question.kind);
            let awarded = if outcome.is_correct { question.value } else { 0 };
            results.push(QuestionResult {
                name: question.name.clone(),
                awarded,
                possible: question.value,
                outcome,
                manual_feedback: question.feedback.clone(),
            });
        }

        let feedback_strategy: Box<dyn Feedback + Send + Sync + 'a> = match self.feedback {
            Some(strategy) => strategy,
            None => match self.config.feedback_scheme {
                FeedbackScheme::Auto => Box::new(AutoFeedback),
                FeedbackScheme::Manual => Box::new(ManualFeedback),
            },
        };
        let feedback = feedback_strategy.assemble_feedback(&results)?;

        let total_possible: u32 = results.iter().map(|r| r.possible).sum();
        let total_awarded: u32 = results.iter().map(|r| r.awarded).sum();
        let overall_score = if total_possible > 0 {
            ((total_awarded as f64 / total_possible as f64) * 100.0).round() as u32
        } else {
            0
        };

        let report = EvaluationReport {
            generated_at: Utc::now(),
            overall_score,
            feedback,
            question_results: results.iter().map(Into::into).collect(),
        };

        Ok(report.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::QuestionKind;

    fn question(name: &str, reference: &str, kind: QuestionKind, value: u32) -> Question {
        Question {
            name: name.to_string(),
            reference_answer: reference.to_string(),
            kind,
            value,
            feedback: None,
        }
    }

    fn to_string_vec(submissions: &[&str]) -> Vec<String> {
        submissions.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_full_marks() {
        let questions = vec![
            question("Q1", "paris", QuestionKind::ShortAnswer, 5),
            question("Q2", "true", QuestionKind::TrueFalse, 5),
        ];
        let submissions = to_string_vec(&["Paris", "yes"]);
        let response = EvaluationJob::new(questions, submissions).evaluate().unwrap();
        assert_eq!(response.report().overall_score, 100);
    }

    #[test]
    fn test_partial_score_rounds() {
        let questions = vec![
            question("Q1", "paris", QuestionKind::ShortAnswer, 1),
            question("Q2", "london", QuestionKind::ShortAnswer, 1),
            question("Q3", "rome", QuestionKind::ShortAnswer, 1),
        ];
        let submissions = to_string_vec(&["paris", "london", "madrid"]);
        let response = EvaluationJob::new(questions, submissions).evaluate().unwrap();
        // 2 of 3 points: 66.67 rounds to 67
        assert_eq!(response.report().overall_score, 67);
    }

    #[test]
    fn test_submission_count_mismatch() {
        let questions = vec![question("Q1", "paris", QuestionKind::ShortAnswer, 1)];
        let submissions = to_string_vec(&["paris", "extra"]);
        let err = EvaluationJob::new(questions, submissions).evaluate().unwrap_err();
        assert!(matches!(err, GraderError::InputMismatch(_)));
    }

    #[test]
    fn test_no_questions() {
        let response = EvaluationJob::new(vec![], vec![]).evaluate().unwrap();
        assert_eq!(response.report().overall_score, 0);
        assert!(response.report().question_results.is_empty());
    }

    #[test]
    fn test_manual_feedback_scheme_from_config() {
        let mut config = EvaluationConfig::default();
        config.feedback_scheme = util::evaluation_config::FeedbackScheme::Manual;

        let mut q = question("Q1", "paris", QuestionKind::ShortAnswer, 1);
        q.feedback = Some("The capital of France".to_string());

        let response = EvaluationJob::new(vec![q], to_string_vec(&["london"]))
            .with_config(config)
            .evaluate()
            .unwrap();
        assert_eq!(response.report().feedback[0].message, "The capital of France");
    }

    #[test]
    fn test_feedback_override() {
        struct Silent;
        impl Feedback for Silent {
            fn assemble_feedback(
                &self,
                _results: &[QuestionResult],
            ) -> Result<Vec<crate::traits::feedback::FeedbackEntry>, GraderError> {
                Ok(vec![])
            }
        }

        let questions = vec![question("Q1", "paris", QuestionKind::ShortAnswer, 1)];
        let response = EvaluationJob::new(questions, to_string_vec(&["paris"]))
            .with_feedback(Silent)
            .evaluate()
            .unwrap();
        assert!(response.report().feedback.is_empty());
    }

    #[test]
    fn test_config_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut config = EvaluationConfig::default();
        config.tolerances.fuzzy_similarity = 0.7;
        config.save_to_file(&path).unwrap();

        let questions = vec![question("Q1", "receive", QuestionKind::ShortAnswer, 1)];
        let response = EvaluationJob::new(questions, to_string_vec(&["recieve"]))
            .with_config_file(&path)
            .unwrap()
            .evaluate()
            .unwrap();
        assert_eq!(response.report().overall_score, 100);
    }

    #[test]
    fn test_missing_config_file() {
        let questions = vec![question("Q1", "paris", QuestionKind::ShortAnswer, 1)];
        let err = EvaluationJob::new(questions, to_string_vec(&["paris"]))
            .with_config_file("/nonexistent/config.json")
            .unwrap_err();
        assert!(matches!(err, GraderError::ConfigError(_)));
    }
}
