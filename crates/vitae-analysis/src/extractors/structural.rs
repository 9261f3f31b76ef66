//! Section headings and list structure

use crate::rules::RuleSet;
use tracing::debug;
use vitae_domain::{Fragment, Signal, SignalKind};

/// Extract the structural signal: section headings plus bulleted or
/// numbered list lines
pub fn extract_structural(text: &str, rules: &RuleSet) -> Signal {
    let rules = &rules.structural;
    let mut section_hits = 0usize;
    let mut bullet_hits = 0usize;
    let mut evidence = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let chars = trimmed.chars().count();
        let lower = trimmed.to_lowercase();

        // Heading: short line containing a section keyword
        if chars <= rules.max_heading_length {
            if let Some((_, weight)) = rules.sections.iter().find(|(term, _)| lower.contains(term))
            {
                section_hits += 1;
                evidence.push(Fragment::new(trimmed, *weight));
                continue;
            }
        }

        // List item: bulleted or numbered line of useful length
        if (rules.bullet_min_length..=rules.bullet_max_length).contains(&chars) {
            if let Some((_, weight)) = rules
                .bullets
                .iter()
                .find(|(prefix, _)| trimmed.starts_with(prefix.as_str()))
            {
                bullet_hits += 1;
                evidence.push(Fragment::new(trimmed, *weight));
            } else if rules.numbered.is_match(trimmed) {
                bullet_hits += 1;
                evidence.push(Fragment::new(trimmed, rules.numbered_weight));
            }
        }
    }

    if section_hits + bullet_hits > 0 {
        debug!(section_hits, bullet_hits, "structural hits");
    }

    Signal::new(
        SignalKind::Structural,
        (0.2 * section_hits as f64 + 0.1 * bullet_hits as f64).min(0.9),
        evidence,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let signal = extract_structural("", RuleSet::builtin());
        assert_eq!(signal.confidence, 0.0);
        assert!(signal.evidence.is_empty());
    }

    #[test]
    fn test_section_heading_detected() {
        let signal = extract_structural("EXPÉRIENCE PROFESSIONNELLE\n", RuleSet::builtin());
        assert_eq!(signal.volume(), 1);
        assert!((signal.confidence - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_long_line_is_not_a_heading() {
        let line = format!("expérience {}\n", "x".repeat(80));
        let signal = extract_structural(&line, RuleSet::builtin());
        assert_eq!(signal.volume(), 0);
    }

    #[test]
    fn test_bullets_and_numbered_lines() {
        let text = "\
- Gestion des agendas de trois directeurs associés
• Organisation des déplacements internationaux
1. Préparation des supports de réunion mensuelle
";
        let signal = extract_structural(text, RuleSet::builtin());
        assert_eq!(signal.volume(), 3);
        assert!((signal.confidence - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_short_bullet_ignored() {
        let signal = extract_structural("- court\n", RuleSet::builtin());
        assert_eq!(signal.volume(), 0);
    }

    #[test]
    fn test_mixed_heading_and_bullets() {
        let text = "\
Parcours professionnel
- Accueil téléphonique et physique des visiteurs
- Rédaction des comptes rendus de direction
";
        let signal = extract_structural(text, RuleSet::builtin());
        assert_eq!(signal.volume(), 3);
        assert!((signal.confidence - 0.4).abs() < 1e-9);
    }
}
