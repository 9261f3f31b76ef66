//! Extraction validation logic

use crate::ValidationConfig;
use tracing::{debug, warn};
use vitae_domain::{Analysis, CvDocument, ExtractionId};

/// Result of validating one extraction response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionReport {
    /// Identifier of the extraction this report describes
    pub id: ExtractionId,

    /// Whether the response parsed into a structured record
    pub is_valid: bool,

    /// Number of work experiences the response contains
    pub experience_count: usize,

    /// Number of experiences the document's evidence suggested
    pub expected_experiences: usize,

    /// Quality score (0-100)
    pub quality_score: u8,

    /// Whether the extraction recovered enough of the expected content
    pub success: bool,
}

/// The Gatekeeper validates extraction responses against the analysis
/// that produced them
pub struct Gatekeeper {
    config: ValidationConfig,
}

impl Gatekeeper {
    /// Create a new Gatekeeper with the given configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Create a Gatekeeper with default configuration
    pub fn default_config() -> Self {
        Self::new(ValidationConfig::default())
    }

    /// Validate a collaborator response
    ///
    /// Never fails: an unparseable response yields an invalid report
    /// with a zero quality score, not an error.
    ///
    /// The expectation is derived from the analysis evidence; the
    /// prompt's per-type experience floor is a separate figure computed
    /// elsewhere, and the two may disagree on the same document.
    pub fn validate(
        &self,
        id: ExtractionId,
        response_text: &str,
        analysis: &Analysis,
    ) -> ExtractionReport {
        let expected_experiences = self.expected_experiences(analysis);

        let document = match self.parse_document(response_text) {
            Some(document) => document,
            None => {
                warn!(%id, "extraction response did not parse as a structured record");
                return ExtractionReport {
                    id,
                    is_valid: false,
                    experience_count: 0,
                    expected_experiences,
                    quality_score: 0,
                    success: false,
                };
            }
        };

        let experience_count = document.work_experience.len();
        let quality_score = self.score(&document, experience_count, expected_experiences);
        let success =
            experience_count as f64 >= self.config.success_ratio * expected_experiences as f64;

        debug!(
            %id,
            experience_count,
            expected_experiences,
            quality_score,
            success,
            "extraction validated"
        );

        ExtractionReport {
            id,
            is_valid: true,
            experience_count,
            expected_experiences,
            quality_score,
            success,
        }
    }

    /// How many experiences the evidence suggests the document holds
    fn expected_experiences(&self, analysis: &Analysis) -> usize {
        analysis
            .semantic
            .evidence
            .len()
            .max(analysis.line_patterns.evidence.len())
            .max(self.config.min_expected)
    }

    /// Parse the response as a structured record, tolerating markdown
    /// code fences around the JSON body
    fn parse_document(&self, response: &str) -> Option<CvDocument> {
        let json = Self::extract_json(response)?;
        serde_json::from_str(&json).ok()
    }

    /// Extract JSON from a response, handling markdown code blocks
    fn extract_json(response: &str) -> Option<String> {
        let trimmed = response.trim();
        if trimmed.is_empty() {
            return None;
        }

        if trimmed.starts_with("```") {
            let lines: Vec<&str> = trimmed.lines().collect();
            if lines.len() < 2 {
                return None;
            }
            // Skip the opening fence (``` or ```json) and the closing one
            let body = &lines[1..lines.len().saturating_sub(1)];
            Some(body.join("\n"))
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Score a parsed record on a 0-100 scale
    fn score(&self, document: &CvDocument, count: usize, expected: usize) -> u8 {
        let mut score: u32 = 0;

        // Sufficiency: up to 50 points for recovering the expected volume
        if count as f64 >= self.config.sufficiency_ratio * expected as f64 {
            score += 30;
        }
        if count >= expected {
            score += 20;
        }

        let info = &document.personal_info;
        if !self.is_placeholder(&info.name) {
            score += 15;
        }
        if !self.is_placeholder(&info.email) && info.email.contains('@') {
            score += 15;
        }
        if !self.is_placeholder(&info.phone)
            && info.phone.chars().filter(|c| c.is_ascii_digit()).count()
                >= self.config.min_phone_digits
        {
            score += 10;
        }
        if !document.skills.is_empty() {
            score += 5;
        }
        if !document.education.is_empty() {
            score += 5;
        }

        score.min(100) as u8
    }

    /// Whether a field value is empty or a known placeholder
    fn is_placeholder(&self, value: &str) -> bool {
        let normalized = value.trim().to_lowercase();
        if normalized.is_empty() {
            return true;
        }
        self.config
            .placeholder_terms
            .iter()
            .any(|term| normalized == term.to_lowercase())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use vitae_domain::{Fragment, Signal, SignalKind};

    proptest! {
        /// Property: quality score always lands in [0, 100] and the
        /// validator never panics, whatever the response body
        #[test]
        fn test_validate_total(response in ".{0,500}", semantic in 0usize..20, lines in 0usize..20) {
            let fragments = |n: usize| {
                (0..n).map(|i| Fragment::new(format!("s{}", i), 0.8)).collect()
            };
            let analysis = Analysis {
                semantic: Signal::new(SignalKind::Semantic, 0.5, fragments(semantic)),
                dates: Signal::empty(SignalKind::Dates),
                structural: Signal::empty(SignalKind::Structural),
                keywords: Signal::empty(SignalKind::Keywords),
                companies: Signal::empty(SignalKind::Companies),
                line_patterns: Signal::new(SignalKind::LinePatterns, 0.5, fragments(lines)),
            };

            let gatekeeper = Gatekeeper::default_config();
            let report = gatekeeper.validate(ExtractionId::new(), &response, &analysis);

            prop_assert!(report.quality_score <= 100);
            prop_assert!(report.expected_experiences >= 2);
        }
    }
}
