//! # Evaluation Report Module
//!
//! This module defines the data structures and response envelope for returning
//! grading results from the grader system. It provides a standardized,
//! serializable format for reporting per-question results, the overall score,
//! and feedback to clients.
//!
//! ## JSON Output Example
//!
//! When serialized, the response will look like:
//!
//! ```json
//! {
//!   "success": true,
//!   "message": "Grading complete.",
//!   "data": {
//!     "generated_at": "2026-08-26T10:00:00Z",
//!     "overall_score": 75,
//!     "question_results": [
//!       { "name": "...", "awarded": 5, "possible": 10, "percentage": 50.0, ... }
//!     ],
//!     "feedback": [
//!       { "question": "...", "message": "..." }
//!     ]
//!   }
//! }
//! ```
//!
//! ## Design Notes
//!
//! - [`EvaluationReport`] is intended for API output. It contains only
//!   serializable fields and is not used for internal grading logic.
//! - The [`From<EvaluationReport> for EvaluationReportResponse`] implementation
//!   provides ergonomic conversion for API handlers.

use crate::traits::feedback::FeedbackEntry;
use crate::types::JsonQuestionResult;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Represents the final report generated after grading a quiz attempt.
#[derive(Debug, Serialize)]
pub struct EvaluationReport {
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The overall score as a percentage (0-100).
    pub overall_score: u32,
    /// A list of feedback entries, one per question.
    pub feedback: Vec<FeedbackEntry>,
    /// Per-question results, each with computed percentage.
    pub question_results: Vec<JsonQuestionResult>,
}

/// The API response envelope for grading results.
///
/// Wraps an [`EvaluationReport`] and adds top-level `success` and `message`
/// fields for consistency with other API responses.
#[derive(Debug, Serialize)]
pub struct EvaluationReportResponse {
    /// Indicates the grading was successful.
    success: bool,
    /// A human-readable message for the client.
    message: String,
    /// The detailed grading report.
    data: EvaluationReport,
}

impl EvaluationReportResponse {
    /// The wrapped report.
    pub fn report(&self) -> &EvaluationReport {
        &self.data
    }
}

/// Enables ergonomic conversion from [`EvaluationReport`] to [`EvaluationReportResponse`].
impl From<EvaluationReport> for EvaluationReportResponse {
    fn from(report: EvaluationReport) -> Self {
        EvaluationReportResponse {
            success: true,
            message: "Grading complete.".to_string(),
            data: report,
        }
    }
}
