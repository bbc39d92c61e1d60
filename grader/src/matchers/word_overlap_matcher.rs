//! A matcher for multi-word answers that share most of their words.
//!
//! Word order is ignored: both strings are split into whitespace-delimited word
//! sets, and the rule only applies when both sets hold more than one word. The
//! intersection must cover `word_overlap_ratio` of the smaller set.

use crate::traits::matcher::AnswerMatcher;
use crate::types::{MatchResult, MatchType};
use std::collections::HashSet;
use util::evaluation_config::MatchTolerances;

/// A matcher that awards a match when enough words are shared between the
/// submission and a reference candidate.
pub struct WordOverlapMatcher;

impl AnswerMatcher for WordOverlapMatcher {
    fn apply(
        &self,
        submission: &str,
        candidates: &[String],
        tolerances: &MatchTolerances,
    ) -> Option<MatchResult> {
        let submission_words: HashSet<&str> = submission.split_whitespace().collect();
        if submission_words.len() <= 1 {
            return None;
        }

        for candidate in candidates {
            let candidate_words: HashSet<&str> = candidate.split_whitespace().collect();
            if candidate_words.len() <= 1 {
                continue;
            }

            let common = submission_words.intersection(&candidate_words).count();
            let smaller = submission_words.len().min(candidate_words.len());
            if common as f64 >= tolerances.word_overlap_ratio * smaller as f64 {
                return Some(MatchResult::correct(MatchType::WordMatch, candidate.clone()));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_string_vec(candidates: &[&str]) -> Vec<String> {
        candidates.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_reordered_words_match() {
        let matcher = WordOverlapMatcher;
        let candidates = to_string_vec(&["theory of relativity"]);
        let result = matcher
            .apply("relativity theory of", &candidates, &MatchTolerances::default())
            .unwrap();
        assert_eq!(result.match_type, MatchType::WordMatch);
    }

    #[test]
    fn test_partial_overlap_above_ratio() {
        let matcher = WordOverlapMatcher;
        let candidates = to_string_vec(&["the water cycle"]);
        // shares "water" and "cycle": 2 of min(2, 3) words
        let result = matcher
            .apply("water cycle", &candidates, &MatchTolerances::default())
            .unwrap();
        assert!(result.is_correct);
    }

    #[test]
    fn test_overlap_below_ratio() {
        let matcher = WordOverlapMatcher;
        let candidates = to_string_vec(&["supply and demand"]);
        // shares only "and": 1 of min(3, 3) = 0.33, under 0.7
        assert!(
            matcher
                .apply("cause and effect", &candidates, &MatchTolerances::default())
                .is_none()
        );
    }

    #[test]
    fn test_single_word_submission_never_matches() {
        let matcher = WordOverlapMatcher;
        let candidates = to_string_vec(&["paris france"]);
        assert!(
            matcher
                .apply("paris", &candidates, &MatchTolerances::default())
                .is_none()
        );
    }

    #[test]
    fn test_single_word_candidate_skipped() {
        let matcher = WordOverlapMatcher;
        let candidates = to_string_vec(&["paris"]);
        assert!(
            matcher
                .apply("paris france", &candidates, &MatchTolerances::default())
                .is_none()
        );
    }
}
