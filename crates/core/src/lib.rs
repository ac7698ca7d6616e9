//! Core library: filename normalization, keyword tagging, similarity scoring,
//! question/solution pairing and standalone classification.

pub mod classifier;
pub mod config;
pub mod matcher;
pub mod models;
pub mod normalizer;
pub mod pipeline;
pub mod report;
pub mod scorer;
pub mod tagger;
