//! Date-format detection

use crate::rules::RuleSet;
use tracing::debug;
use vitae_domain::{Fragment, Signal, SignalKind};

/// Extract the dates signal: every date-shaped span in the document
pub fn extract_dates(text: &str, rules: &RuleSet) -> Signal {
    if text.trim().is_empty() {
        return Signal::empty(SignalKind::Dates);
    }

    let mut total_matches = 0usize;
    let mut evidence = Vec::new();

    for rule in &rules.dates {
        let mut rule_matches = 0usize;
        for found in rule.regex.find_iter(text) {
            rule_matches += 1;
            evidence.push(Fragment::new(found.as_str(), rule.weight));
        }
        if rule_matches > 0 {
            debug!(category = %rule.category, matches = rule_matches, "date rule matched");
        }
        total_matches += rule_matches;
    }

    Signal::new(
        SignalKind::Dates,
        (0.05 * total_matches as f64).min(0.9),
        evidence,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let signal = extract_dates("", RuleSet::builtin());
        assert_eq!(signal.confidence, 0.0);
        assert!(signal.evidence.is_empty());
    }

    #[test]
    fn test_french_and_english_month_names() {
        let signal = extract_dates("janvier 2020 et March 2021", RuleSet::builtin());
        assert!(signal.volume() >= 2);
        assert!(signal.confidence >= 0.1);
    }

    #[test]
    fn test_numeric_and_iso_formats() {
        let text = "01/02/2020, 3-4-2021, 5.6.2019, 2020-07-15";
        let signal = extract_dates(text, RuleSet::builtin());
        assert!(signal.volume() >= 4);
    }

    #[test]
    fn test_year_range_counts_once_per_occurrence() {
        // Three ranges, no other date shapes
        let text = "2014-2016 / 2016-2019 / 2019-2022";
        let signal = extract_dates(text, RuleSet::builtin());
        assert_eq!(signal.volume(), 3);
        assert!((signal.confidence - 0.15).abs() < 1e-9);
    }

    #[test]
    fn test_fragment_confidence_is_rule_weight() {
        let signal = extract_dates("depuis 2019", RuleSet::builtin());
        assert_eq!(signal.volume(), 1);
        assert!((signal.evidence[0].confidence - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_is_capped() {
        let many = "2010-2011 ".repeat(40);
        let signal = extract_dates(&many, RuleSet::builtin());
        assert!((signal.confidence - 0.9).abs() < 1e-9);
    }
}
