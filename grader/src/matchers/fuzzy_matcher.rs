//! A matcher that tolerates small typos via Levenshtein similarity.
//!
//! A candidate matches when its length is within `fuzzy_max_len_delta` characters
//! of the submission and the normalized similarity `1 - distance / max(len)`
//! reaches `fuzzy_similarity`.

use crate::traits::matcher::AnswerMatcher;
use crate::types::{MatchResult, MatchType};
use crate::utilities::levenshtein;
use util::evaluation_config::MatchTolerances;

/// A matcher that awards a match when the submission is within edit-distance
/// tolerance of a reference candidate.
pub struct FuzzyMatcher;

impl AnswerMatcher for FuzzyMatcher {
    fn apply(
        &self,
        submission: &str,
        candidates: &[String],
        tolerances: &MatchTolerances,
    ) -> Option<MatchResult> {
        let submission_len = submission.chars().count();

        for candidate in candidates {
            let candidate_len = candidate.chars().count();
            if submission_len.abs_diff(candidate_len) > tolerances.fuzzy_max_len_delta {
                continue;
            }
            if levenshtein::similarity(submission, candidate) >= tolerances.fuzzy_similarity {
                return Some(MatchResult::correct(MatchType::Similar, candidate.clone()));
            }
        }
        None
    }
}
