//! A matcher that accepts substring containment in either direction.
//!
//! Both strings must reach `partial_min_len` characters so that trivially short
//! answers ("a", "it") cannot ride along inside longer candidates.

use crate::traits::matcher::AnswerMatcher;
use crate::types::{MatchResult, MatchType};
use util::evaluation_config::MatchTolerances;

/// A matcher that awards a match when the submission contains, or is contained
/// in, a reference candidate.
pub struct PartialMatcher;

impl AnswerMatcher for PartialMatcher {
    fn apply(
        &self,
        submission: &str,
        candidates: &[String],
        tolerances: &MatchTolerances,
    ) -> Option<MatchResult> {
        let submission_len = submission.chars().count();
        if submission_len < tolerances.partial_min_len {
            return None;
        }

        for candidate in candidates {
            if candidate.chars().count() < tolerances.partial_min_len {
                continue;
            }
            if submission.contains(candidate.as_str()) || candidate.contains(submission) {
                return Some(MatchResult::correct(MatchType::Partial, candidate.clone()));
            }
        }
        None
    }
}
