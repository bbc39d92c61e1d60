use crate::types::MatchResult;
use util::evaluation_config::MatchTolerances;

/// AnswerMatcher is a strategy trait for the free-text match rules.
/// Each implementation provides the logic for a single rule, tried against
/// every reference candidate for a question.
pub trait AnswerMatcher: Send + Sync {
    /// Attempt this rule over the candidate set.
    ///
    /// - `submission`: the normalized learner submission (never empty).
    /// - `candidates`: the normalized reference candidates.
    /// - `tolerances`: the configured thresholds for the non-exact rules.
    ///
    /// Returns `Some(MatchResult)` if any candidate matches, `None` otherwise.
    fn apply(
        &self,
        submission: &str,
        candidates: &[String],
        tolerances: &MatchTolerances,
    ) -> Option<MatchResult>;
}
