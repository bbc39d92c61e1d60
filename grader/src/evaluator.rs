//! # Answer Evaluator
//!
//! The evaluation pipeline for a single free-text submission:
//!
//! 1. Empty check: a whitespace-only submission is classified as empty.
//! 2. Normalization of the submission and every reference candidate.
//! 3. True/false questions are classified against fixed truthy/falsy sets.
//! 4. The reference answer is split on commas into independent candidates.
//! 5. The match rules run in order from strictest to loosest; the first rule to
//!    succeed wins, so the reported match type is the best available explanation.
//! 6. Anything left over is classified as incorrect.
//!
//! Evaluation is a pure function of its inputs. It performs no I/O, touches no
//! shared state, and never fails: malformed input is classified, not errored.

use crate::matchers::exact_matcher::ExactMatcher;
use crate::matchers::fuzzy_matcher::FuzzyMatcher;
use crate::matchers::numeric_matcher::NumericMatcher;
use crate::matchers::partial_matcher::PartialMatcher;
use crate::matchers::word_overlap_matcher::WordOverlapMatcher;
use crate::traits::matcher::AnswerMatcher;
use crate::types::{MatchResult, MatchType, QuestionKind};
use crate::utilities::normalization::{classify_truth, normalize};
use util::evaluation_config::MatchTolerances;

/// Evaluates free-text submissions against reference answers.
///
/// Holds the match rules in precedence order together with the configured
/// tolerances. Construction is cheap and the evaluator is stateless, so a single
/// instance can be shared freely across threads.
pub struct AnswerEvaluator {
    matchers: Vec<Box<dyn AnswerMatcher>>,
    tolerances: MatchTolerances,
}

impl AnswerEvaluator {
    /// Create an evaluator with the given tolerances.
    pub fn new(tolerances: MatchTolerances) -> Self {
        // Strictest to loosest. The order is load-bearing: it decides which
        // match type is reported when several rules would accept.
        let matchers: Vec<Box<dyn AnswerMatcher>> = vec![
            Box::new(ExactMatcher),
            Box::new(FuzzyMatcher),
            Box::new(PartialMatcher),
            Box::new(WordOverlapMatcher),
            Box::new(NumericMatcher),
        ];
        Self {
            matchers,
            tolerances,
        }
    }

    /// Evaluate a submission against a question's reference answer.
    ///
    /// # Arguments
    /// * `submission` - Raw learner-entered text, arbitrary case/whitespace/punctuation.
    /// * `reference_answer` - Comma-separated acceptable answers as authored.
    /// * `kind` - The question kind; true/false questions are special-cased.
    pub fn evaluate(
        &self,
        submission: &str,
        reference_answer: &str,
        kind: QuestionKind,
    ) -> MatchResult {
        if submission.trim().is_empty() {
            return MatchResult::empty();
        }

        let submission = normalize(submission);

        if kind == QuestionKind::TrueFalse {
            let reference = normalize(reference_answer);
            match (classify_truth(&submission), classify_truth(&reference)) {
                (Some(s), Some(r)) if s == r => {
                    return MatchResult::correct(MatchType::Exact, reference);
                }
                // Neither side is a recognized true/false variant; grade with
                // the general rules instead.
                (None, None) => {}
                _ => return MatchResult::incorrect(),
            }
        }

        let candidates: Vec<String> = reference_answer.split(',').map(normalize).collect();

        for matcher in &self.matchers {
            if let Some(result) = matcher.apply(&submission, &candidates, &self.tolerances) {
                tracing::debug!(
                    match_type = ?result.match_type,
                    matched = result.matched_reference.as_deref(),
                    "submission matched reference answer"
                );
                return result;
            }
        }

        MatchResult::incorrect()
    }
}

impl Default for AnswerEvaluator {
    fn default() -> Self {
        Self::new(MatchTolerances::default())
    }
}
