//! Per-line layout classification

use crate::rules::{RuleSet, YEAR};
use tracing::debug;
use vitae_domain::{Fragment, Signal, SignalKind};

/// Extract the line-patterns signal: each non-trivial line lands in at
/// most one class, first match wins
///
/// Classes: date+company line (year plus separator), job-title line,
/// action-verb line.
pub fn extract_line_patterns(text: &str, rules: &RuleSet) -> Signal {
    let vocabulary = &rules.vocabulary;
    let rules = &rules.lines;
    let mut classified = 0usize;
    let mut evidence = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        let chars = trimmed.chars().count();
        if chars <= rules.min_line_length {
            continue;
        }
        let lower = trimmed.to_lowercase();

        let confidence = if YEAR.is_match(trimmed)
            && trimmed.chars().any(|c| rules.separators.contains(c))
        {
            Some(rules.date_company_weight)
        } else if chars <= rules.max_title_length
            && vocabulary.titles().any(|t| lower.contains(t))
        {
            Some(rules.title_weight)
        } else if vocabulary.verbs().any(|v| lower.starts_with(v)) {
            Some(rules.action_verb_weight)
        } else {
            None
        };

        if let Some(confidence) = confidence {
            classified += 1;
            evidence.push(Fragment::new(trimmed, confidence));
        }
    }

    if classified > 0 {
        debug!(classified, "lines classified");
    }

    Signal::new(
        SignalKind::LinePatterns,
        (0.1 * classified as f64).min(0.8),
        evidence,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let signal = extract_line_patterns("", RuleSet::builtin());
        assert_eq!(signal.confidence, 0.0);
        assert!(signal.evidence.is_empty());
    }

    #[test]
    fn test_date_company_line() {
        let signal = extract_line_patterns("2019-2022 : Quelque Part", RuleSet::builtin());
        assert_eq!(signal.volume(), 1);
        assert!((signal.evidence[0].confidence - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_title_line() {
        let signal = extract_line_patterns("Réceptionniste bilingue", RuleSet::builtin());
        assert_eq!(signal.volume(), 1);
        assert!((signal.evidence[0].confidence - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_action_verb_line() {
        let signal = extract_line_patterns("Coordonné les plannings du service", RuleSet::builtin());
        assert_eq!(signal.volume(), 1);
        assert!((signal.evidence[0].confidence - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_first_match_wins() {
        // Year + separator + title term: classified as a date line, once
        let signal = extract_line_patterns("2020-2023 : Assistante de direction", RuleSet::builtin());
        assert_eq!(signal.volume(), 1);
        assert!((signal.evidence[0].confidence - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_trivial_lines_skipped() {
        let signal = extract_line_patterns("2020\nok\n\n", RuleSet::builtin());
        assert_eq!(signal.volume(), 0);
    }

    #[test]
    fn test_confidence_capped_at_point_eight() {
        let text = "2019-2020 : Poste - Societe\n".repeat(12);
        let signal = extract_line_patterns(&text, RuleSet::builtin());
        assert_eq!(signal.volume(), 12);
        assert!((signal.confidence - 0.8).abs() < 1e-9);
    }
}
