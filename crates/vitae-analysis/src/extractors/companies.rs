//! Employer-name detection

use crate::rules::RuleSet;
use tracing::debug;
use vitae_domain::{Fragment, Signal, SignalKind};

/// Extract the companies signal: legal-entity shapes, sector-suffixed
/// names, and known brands
pub fn extract_companies(text: &str, rules: &RuleSet) -> Signal {
    let rules = &rules.companies;
    let mut detected = 0usize;
    let mut evidence = Vec::new();

    for pattern in rules.legal.iter().chain(rules.sector.iter()) {
        for found in pattern.regex.find_iter(text) {
            detected += 1;
            evidence.push(Fragment::new(found.as_str().trim(), pattern.weight));
        }
    }

    let lower = text.to_lowercase();
    for (name, name_lower, weight) in &rules.brands {
        if lower.contains(name_lower) {
            detected += 1;
            evidence.push(Fragment::new(name.clone(), *weight));
        }
    }

    if detected > 0 {
        debug!(detected, "company shapes detected");
    }

    Signal::new(
        SignalKind::Companies,
        (0.15 * detected as f64).min(0.9),
        evidence,
    )
}
