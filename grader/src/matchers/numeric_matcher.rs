//! A matcher for numeric answers.
//!
//! Commas are stripped before parsing so "1,000" and "1000" compare equal. Parse
//! failures on either side are not errors: the candidate (or the whole rule) is
//! simply skipped.

use crate::traits::matcher::AnswerMatcher;
use crate::types::{MatchResult, MatchType};
use util::evaluation_config::MatchTolerances;

/// A matcher that awards a match when both submission and candidate parse as
/// floats within the configured absolute tolerance.
pub struct NumericMatcher;

fn parse_number(text: &str) -> Option<f64> {
    text.replace(',', "").trim().parse::<f64>().ok()
}

impl AnswerMatcher for NumericMatcher {
    fn apply(
        &self,
        submission: &str,
        candidates: &[String],
        tolerances: &MatchTolerances,
    ) -> Option<MatchResult> {
        let submitted_value = parse_number(submission)?;

        for candidate in candidates {
            let Some(candidate_value) = parse_number(candidate) else {
                continue;
            };
            if (submitted_value - candidate_value).abs() < tolerances.numeric_tolerance {
                return Some(MatchResult::correct(
                    MatchType::Numeric,
                    submission.to_string(),
                ));
            }
        }
        None
    }
}
