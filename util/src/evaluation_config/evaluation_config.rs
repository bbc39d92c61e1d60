use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Strategy used to turn grading results into learner-facing feedback.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackScheme {
    Auto,
    Manual,
}

/// Tunable thresholds for the non-exact match rules.
///
/// The defaults mirror the values the grading rules were originally tuned
/// with. They are plain knobs rather than load-bearing design: question
/// authors may tighten or loosen them per quiz via the config file.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct MatchTolerances {
    /// Minimum normalized Levenshtein similarity (0.0–1.0) for a fuzzy match.
    #[serde(default = "default_fuzzy_similarity")]
    pub fuzzy_similarity: f64,

    /// Maximum absolute length difference allowed before the fuzzy rule is skipped.
    #[serde(default = "default_fuzzy_max_len_delta")]
    pub fuzzy_max_len_delta: usize,

    /// Minimum length both strings must have before substring containment counts.
    #[serde(default = "default_partial_min_len")]
    pub partial_min_len: usize,

    /// Fraction of the smaller word set that must overlap for a word match.
    #[serde(default = "default_word_overlap_ratio")]
    pub word_overlap_ratio: f64,

    /// Absolute tolerance when comparing numeric answers.
    #[serde(default = "default_numeric_tolerance")]
    pub numeric_tolerance: f64,
}

impl Default for MatchTolerances {
    fn default() -> Self {
        Self {
            fuzzy_similarity: default_fuzzy_similarity(),
            fuzzy_max_len_delta: default_fuzzy_max_len_delta(),
            partial_min_len: default_partial_min_len(),
            word_overlap_ratio: default_word_overlap_ratio(),
            numeric_tolerance: default_numeric_tolerance(),
        }
    }
}

/// Per-quiz grading configuration.
///
/// Loaded from a JSON file stored alongside the quiz content. Every field is
/// optional in the file; missing fields fall back to the defaults below.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct EvaluationConfig {
    #[serde(default)]
    pub tolerances: MatchTolerances,

    #[serde(default = "default_feedback_scheme")]
    pub feedback_scheme: FeedbackScheme,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            tolerances: MatchTolerances::default(),
            feedback_scheme: default_feedback_scheme(),
        }
    }
}

impl EvaluationConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|_| format!("Failed to read config file at {:?}", path))?;
        serde_json::from_str(&contents).map_err(|_| "Invalid config JSON format".to_string())
    }

    /// Save the configuration to disk as pretty-printed JSON.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {:?}", e))?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config to JSON: {}", e))?;
        fs::write(path, json).map_err(|e| format!("Failed to write config file to disk: {:?}", e))
    }
}

fn default_fuzzy_similarity() -> f64 {
    0.8
}

fn default_fuzzy_max_len_delta() -> usize {
    2
}

fn default_partial_min_len() -> usize {
    3
}

fn default_word_overlap_ratio() -> f64 {
    0.7
}

fn default_numeric_tolerance() -> f64 {
    0.001
}

fn default_feedback_scheme() -> FeedbackScheme {
    FeedbackScheme::Auto
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tolerances() {
        let t = MatchTolerances::default();
        assert_eq!(t.fuzzy_similarity, 0.8);
        assert_eq!(t.fuzzy_max_len_delta, 2);
        assert_eq!(t.partial_min_len, 3);
        assert_eq!(t.word_overlap_ratio, 0.7);
        assert_eq!(t.numeric_tolerance, 0.001);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: EvaluationConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EvaluationConfig::default());
    }

    #[test]
    fn test_partial_config_overrides_only_given_fields() {
        let json = r#"{ "tolerances": { "fuzzy_similarity": 0.9 }, "feedback_scheme": "manual" }"#;
        let config: EvaluationConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.tolerances.fuzzy_similarity, 0.9);
        assert_eq!(config.tolerances.word_overlap_ratio, 0.7);
        assert_eq!(config.feedback_scheme, FeedbackScheme::Manual);
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config").join("config.json");

        let mut config = EvaluationConfig::default();
        config.tolerances.numeric_tolerance = 0.01;
        config.save_to_file(&path).unwrap();

        let loaded = EvaluationConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = EvaluationConfig::from_file("/nonexistent/config.json").unwrap_err();
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        let err = EvaluationConfig::from_file(&path).unwrap_err();
        assert_eq!(err, "Invalid config JSON format");
    }
}
