//! Core financial evaluation logic
//!
//! Data model, ratio rules, and the evaluator that ties them together.

pub mod data;
pub mod evaluator;
pub mod ratios;
