//! Analyzer implementations that combine char filters, a tokenizer and token
//! filters.

#[allow(clippy::module_inception)]
mod analyzer;
mod normalizer;
mod pipeline;

pub use analyzer::Analyzer;
pub use normalizer::{NormalizationStep, NormalizationTrace, TextNormalizer};
pub use pipeline::PipelineAnalyzer;
