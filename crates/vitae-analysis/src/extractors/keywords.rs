//! Vocabulary detection

use crate::rules::RuleSet;
use tracing::debug;
use vitae_domain::{Fragment, Signal, SignalKind};

const HIT_CONTRIBUTION: f64 = 0.02;

/// Extract the keywords signal: distinct vocabulary terms present in
/// the document
///
/// A hit is a distinct term, not an occurrence count; repeating one
/// term does not stack.
pub fn extract_keywords(text: &str, rules: &RuleSet) -> Signal {
    if text.trim().is_empty() {
        return Signal::empty(SignalKind::Keywords);
    }

    let lower = text.to_lowercase();
    let mut evidence = Vec::new();

    for term in &rules.vocabulary.terms {
        if lower.contains(&term.term_lower) {
            evidence.push(Fragment::new(term.term.clone(), term.weight));
        }
    }

    if !evidence.is_empty() {
        debug!(hits = evidence.len(), "vocabulary hits");
    }

    let total = HIT_CONTRIBUTION * evidence.len() as f64;
    Signal::new(SignalKind::Keywords, total.min(0.9), evidence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let signal = extract_keywords("", RuleSet::builtin());
        assert_eq!(signal.confidence, 0.0);
        assert!(signal.evidence.is_empty());
    }

    #[test]
    fn test_each_distinct_hit_adds_two_percent() {
        // "secrétaire" hits exactly one vocabulary term
        let signal = extract_keywords("secrétaire", RuleSet::builtin());
        assert_eq!(signal.volume(), 1);
        assert!((signal.confidence - 0.02).abs() < 1e-9);
    }

    #[test]
    fn test_repeats_do_not_stack() {
        let once = extract_keywords("secrétaire", RuleSet::builtin());
        let thrice = extract_keywords("secrétaire secrétaire secrétaire", RuleSet::builtin());
        assert_eq!(once.confidence, thrice.confidence);
        assert_eq!(once.volume(), thrice.volume());
    }

    #[test]
    fn test_feminine_form_hits_both_terms() {
        // "assistante" contains "assistant", so both terms hit
        let signal = extract_keywords("assistante", RuleSet::builtin());
        assert_eq!(signal.volume(), 2);
    }

    #[test]
    fn test_mixed_categories() {
        let signal = extract_keywords(
            "Développeur en informatique, a géré une équipe retail",
            RuleSet::builtin(),
        );
        // développeur (title), informatique (sector), géré (verb), retail (sector)
        assert!(signal.volume() >= 4);
        assert!(signal.confidence >= 0.08);
    }
}
