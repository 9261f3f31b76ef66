//! Document classification: CV type and complexity

use crate::confidence::global_confidence;
use crate::rules::RuleSet;
use tracing::debug;
use vitae_domain::{Analysis, Classification, Complexity, CvType};

/// Signal volume above which a document grades High
const HIGH_VOLUME: usize = 20;

/// Signal volume above which a document grades Medium
const MEDIUM_VOLUME: usize = 10;

/// Determine the CV type from the document text
///
/// Groups are tested in the table's priority order; the first group
/// with any term present wins. Single pass, deterministic.
pub fn classify_type(text: &str, rules: &RuleSet) -> CvType {
    let lower = text.to_lowercase();
    for (cv_type, terms) in &rules.classifier.groups {
        if terms.iter().any(|term| lower.contains(term)) {
            return *cv_type;
        }
    }
    CvType::General
}

/// Grade complexity from the total signal volume
pub fn grade_complexity(analysis: &Analysis) -> Complexity {
    match analysis.signal_volume() {
        v if v > HIGH_VOLUME => Complexity::High,
        v if v > MEDIUM_VOLUME => Complexity::Medium,
        _ => Complexity::Low,
    }
}

/// Full classification of one document
pub fn classify(text: &str, analysis: &Analysis, rules: &RuleSet) -> Classification {
    let cv_type = classify_type(text, rules);
    let complexity = grade_complexity(analysis);
    let confidence = global_confidence(analysis);

    debug!(
        cv_type = %cv_type,
        complexity = %complexity,
        confidence,
        volume = analysis.signal_volume(),
        "document classified"
    );

    Classification::new(cv_type, complexity, confidence)
}
