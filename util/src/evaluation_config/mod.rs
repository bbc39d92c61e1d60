mod evaluation_config;

pub use evaluation_config::{EvaluationConfig, FeedbackScheme, MatchTolerances};
