//! Experience-relation and temporal-range phrasing

use crate::rules::{RuleSet, YEAR};
use tracing::debug;
use vitae_domain::{Fragment, Signal, SignalKind};

const FRAGMENT_MIN_CHARS: usize = 10;
const FRAGMENT_MAX_CHARS: usize = 200;
const SEPARATORS: &str = "-–—|:;•";

/// Extract the semantic signal: phrases relating a person to an
/// employer or a time span
pub fn extract_semantic(text: &str, rules: &RuleSet) -> Signal {
    if text.trim().is_empty() {
        return Signal::empty(SignalKind::Semantic);
    }

    let mut total_matches = 0usize;
    let mut evidence = Vec::new();

    for rule in &rules.semantic {
        let mut rule_matches = 0usize;
        for found in rule.regex.find_iter(text) {
            rule_matches += 1;
            let span = found.as_str().trim();
            let chars = span.chars().count();
            if (FRAGMENT_MIN_CHARS..=FRAGMENT_MAX_CHARS).contains(&chars) {
                evidence.push(Fragment::new(span, score_fragment(span, rules)));
            }
        }
        if rule_matches > 0 {
            debug!(
                category = %rule.category,
                matches = rule_matches,
                contribution = (0.15 * rule_matches as f64).min(0.9),
                "semantic rule matched"
            );
        }
        total_matches += rule_matches;
    }

    Signal::new(
        SignalKind::Semantic,
        (0.1 * total_matches as f64).min(1.0),
        evidence,
    )
}

/// Score one candidate fragment: base 0.5, bonuses for length, a
/// four-digit year, a job-title term, and separator punctuation
fn score_fragment(span: &str, rules: &RuleSet) -> f64 {
    let mut confidence: f64 = 0.5;

    let chars = span.chars().count();
    if (20..=FRAGMENT_MAX_CHARS).contains(&chars) {
        confidence += 0.2;
    }
    if YEAR.is_match(span) {
        confidence += 0.15;
    }
    let lower = span.to_lowercase();
    if rules.vocabulary.titles().any(|t| lower.contains(t)) {
        confidence += 0.10;
    }
    if span.chars().any(|c| SEPARATORS.contains(c)) {
        confidence += 0.05;
    }

    confidence.min(1.0)
}
