//! Error types for the analysis layer

use thiserror::Error;

/// Errors that can occur while loading or compiling rule tables
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Rule table file could not be read
    #[error("Rule file error: {0}")]
    RuleFile(String),

    /// Rule table is not valid TOML
    #[error("Rule parse error in {table}: {message}")]
    RuleParse {
        /// Table the entry came from
        table: String,
        /// Underlying TOML error
        message: String,
    },

    /// A pattern entry does not compile as a regular expression
    #[error("Invalid pattern in {table}: '{pattern}': {message}")]
    InvalidPattern {
        /// Table the entry came from
        table: String,
        /// The offending pattern source
        pattern: String,
        /// Underlying regex error
        message: String,
    },

    /// Rule table content failed validation
    #[error("Rule validation error in {table}: {message}")]
    RuleValidation {
        /// Table that failed
        table: String,
        /// What was wrong
        message: String,
    },
}
