//! # Types Module
//!
//! This module defines the core data structures used throughout the grader system.
//! These types describe questions, the outcome of evaluating a single submission,
//! and the serializable per-question results used in reports.

use serde::{Deserialize, Serialize};

/// The kind of question being graded.
///
/// True/false questions are special-cased during evaluation: the submission and
/// reference answer are first classified against fixed truthy/falsy word sets.
/// Every other kind is graded with the general free-text match rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    TrueFalse,
    MultipleChoice,
    ShortAnswer,
    FillBlank,
}

/// Categorical explanation of why a submission was judged correct (or why it failed).
///
/// Used for grading transparency: the presentation layer renders these into
/// user-facing feedback and awards points based on the boolean result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    /// Normalized submission equals a reference candidate verbatim.
    Exact,
    /// Within Levenshtein-similarity tolerance of a candidate.
    Similar,
    /// One of submission/candidate is a substring of the other.
    Partial,
    /// Word sets overlap above the configured ratio.
    WordMatch,
    /// Both parse as numbers within the configured tolerance.
    Numeric,
    /// The submission was empty or whitespace-only.
    Empty,
    /// No rule matched any candidate.
    Incorrect,
}

impl MatchType {
    /// Default learner-facing message for this match category.
    pub fn describe(&self) -> &'static str {
        match self {
            MatchType::Exact => "Correct",
            MatchType::Similar => "Correct, but check your spelling",
            MatchType::Partial => "Partially correct",
            MatchType::WordMatch => "Correct (matched on key words)",
            MatchType::Numeric => "Correct",
            MatchType::Empty => "No answer given",
            MatchType::Incorrect => "Incorrect",
        }
    }
}

/// The outcome of evaluating a single submission against a reference answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the submission is accepted as correct.
    pub is_correct: bool,
    /// Which rule produced the verdict.
    pub match_type: MatchType,
    /// The normalized reference candidate that matched, if any.
    pub matched_reference: Option<String>,
}

impl MatchResult {
    pub fn correct(match_type: MatchType, matched_reference: String) -> Self {
        Self {
            is_correct: true,
            match_type,
            matched_reference: Some(matched_reference),
        }
    }

    pub fn incorrect() -> Self {
        Self {
            is_correct: false,
            match_type: MatchType::Incorrect,
            matched_reference: None,
        }
    }

    pub fn empty() -> Self {
        Self {
            is_correct: false,
            match_type: MatchType::Empty,
            matched_reference: None,
        }
    }
}

/// A single question as authored, with its reference answer and point value.
///
/// - `reference_answer` may contain multiple comma-separated acceptable variants.
/// - `feedback` is optional author-supplied feedback shown on an incorrect answer
///   when the manual feedback scheme is active.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub name: String,
    pub reference_answer: String,
    pub kind: QuestionKind,
    pub value: u32,
    pub feedback: Option<String>,
}

/// Represents the graded result of a single question.
///
/// This struct holds the information about a question's outcome, including the
/// points awarded, the maximum points possible, and the match verdict.
#[derive(Debug, Clone)]
pub struct QuestionResult {
    /// A descriptive name for the question.
    pub name: String,
    /// The number of points awarded for the question.
    pub awarded: u32,
    /// The maximum number of points possible for the question.
    pub possible: u32,
    /// The match verdict for the submission.
    pub outcome: MatchResult,
    /// Author-supplied feedback for this question, if any.
    pub manual_feedback: Option<String>,
}

/// Serializable per-question result used in API-facing reports.
#[derive(Debug, Clone, Serialize)]
pub struct JsonQuestionResult {
    pub name: String,
    pub awarded: u32,
    pub possible: u32,
    /// Awarded points as a percentage of possible (0-100).
    pub percentage: f64,
    pub correct: bool,
    pub match_type: MatchType,
    pub matched_reference: Option<String>,
}

impl From<&QuestionResult> for JsonQuestionResult {
    fn from(result: &QuestionResult) -> Self {
        let percentage = if result.possible > 0 {
            (result.awarded as f64 / result.possible as f64) * 100.0
        } else {
            0.0
        };
        JsonQuestionResult {
            name: result.name.clone(),
            awarded: result.awarded,
            possible: result.possible,
            percentage,
            correct: result.outcome.is_correct,
            match_type: result.outcome.match_type,
            matched_reference: result.outcome.matched_reference.clone(),
        }
    }
}
