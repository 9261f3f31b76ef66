//! Vitae Analysis
//!
//! The heuristic heart of the system: six independent signal
//! extractors, a deterministic classifier, confidence aggregation, and
//! the prompt synthesizer.
//!
//! # Architecture
//!
//! ```text
//! Text → SignalExtractors (×6) → Classifier + Confidence → PromptBuilder
//! ```
//!
//! Heuristics are data-driven: each extractor compiles a TOML rule
//! table (`rules/`), embedded for the builtin set and loadable from a
//! directory for other locales or domains. Extractors are pure and
//! total; empty or degenerate input yields a zero-confidence signal,
//! never an error.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod analyzer;
mod classifier;
mod confidence;
mod error;
mod extractors;
mod prompt;
mod rules;

#[cfg(test)]
mod tests;

pub use analyzer::{AnalysisOutcome, Analyzer};
pub use classifier::{classify, classify_type, grade_complexity};
pub use confidence::global_confidence;
pub use error::AnalysisError;
pub use extractors::{
    extract_all, extract_companies, extract_dates, extract_keywords, extract_line_patterns,
    extract_semantic, extract_structural,
};
pub use prompt::{PromptBuilder, REINFORCEMENT_THRESHOLD};
pub use rules::{RuleSet, RuleSources};
