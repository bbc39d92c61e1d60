pub mod exact_matcher;
pub mod fuzzy_matcher;
pub mod numeric_matcher;
pub mod partial_matcher;
pub mod word_overlap_matcher;
