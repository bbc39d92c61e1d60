//! A matcher that accepts a submission only if it equals a reference candidate verbatim.
//!
//! The `ExactMatcher` is the strictest rule and always runs first, so a submission
//! that is simultaneously an exact match to one candidate and a looser match to
//! another is always reported as exact.

use crate::traits::matcher::AnswerMatcher;
use crate::types::{MatchResult, MatchType};
use util::evaluation_config::MatchTolerances;

/// A matcher that awards a match when the normalized submission equals a
/// normalized reference candidate.
pub struct ExactMatcher;

impl AnswerMatcher for ExactMatcher {
    fn apply(
        &self,
        submission: &str,
        candidates: &[String],
        _tolerances: &MatchTolerances,
    ) -> Option<MatchResult> {
        candidates
            .iter()
            .find(|candidate| candidate.as_str() == submission)
            .map(|candidate| MatchResult::correct(MatchType::Exact, candidate.clone()))
    }
}
