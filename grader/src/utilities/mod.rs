pub mod levenshtein;
pub mod normalization;
