//! The six signal extractors
//!
//! Each extractor is a pure, total function over one document and the
//! compiled rule set. They share no state and can run in any order; an
//! input with no matches yields a zero-confidence signal with empty
//! evidence, never an error.

mod companies;
mod dates;
mod keywords;
mod line_patterns;
mod semantic;
mod structural;

pub use companies::extract_companies;
pub use dates::extract_dates;
pub use keywords::extract_keywords;
pub use line_patterns::extract_line_patterns;
pub use semantic::extract_semantic;
pub use structural::extract_structural;

use crate::rules::RuleSet;
use vitae_domain::Analysis;

/// Run all six extractors over one document
pub fn extract_all(text: &str, rules: &RuleSet) -> Analysis {
    Analysis {
        semantic: extract_semantic(text, rules),
        dates: extract_dates(text, rules),
        structural: extract_structural(text, rules),
        keywords: extract_keywords(text, rules),
        companies: extract_companies(text, rules),
        line_patterns: extract_line_patterns(text, rules),
    }
}
