//! Embedded pipeline self-test
//!
//! Runs fixture documents through the pure pipeline and a canned
//! validation pass. No transport is involved and the live ledger is
//! never touched; bounding checks run on a scratch ledger.

use vitae_analysis::Analyzer;
use vitae_domain::{Classification, Complexity, CvType, ExtractionId};
use vitae_gatekeeper::{ExtractionReport, Gatekeeper};
use vitae_ledger::{DocumentMetrics, Ledger, HISTORY_CAPACITY};

const ASSISTANT_FIXTURE: &str = "\
Claire Moreau
Assistante de direction depuis 2021 chez Fabre Conseil
claire.moreau@example.com
06 98 76 54 32

EXPÉRIENCE PROFESSIONNELLE
2017-2021 : Assistante de direction - Fabre Conseil
2014-2017 : Secrétaire médicale - Cabinet Rousseau
2011-2014 : Assistante administrative - Mairie de Tours
";

const TECH_FIXTURE: &str = "\
Jean Petit
Développeur full stack depuis 2019 chez Scaleway

EXPÉRIENCE PROFESSIONNELLE
2019-2023 : Développeur backend - Scaleway
2016-2019 : Ingénieur logiciel - Capgemini
";

const CANNED_RESPONSE: &str = r#"{
  "personal_info": {"name": "Claire Moreau", "email": "claire.moreau@example.com", "phone": "06 98 76 54 32"},
  "work_experience": [
    {"title": "Assistante de direction", "company": "Fabre Conseil", "start_date": "2021", "end_date": "présent", "description": ""},
    {"title": "Assistante de direction", "company": "Fabre Conseil", "start_date": "2017", "end_date": "2021", "description": ""},
    {"title": "Secrétaire médicale", "company": "Cabinet Rousseau", "start_date": "2014", "end_date": "2017", "description": ""},
    {"title": "Assistante administrative", "company": "Mairie de Tours", "start_date": "2011", "end_date": "2014", "description": ""}
  ],
  "skills": ["Organisation"],
  "education": [{"degree": "BTS", "institution": "Lycée Balzac", "year": "2010"}],
  "languages": [],
  "software": []
}"#;

/// One self-test check outcome
#[derive(Debug, Clone)]
pub struct SelfTestCheck {
    /// What was checked
    pub name: String,

    /// Whether the check held
    pub passed: bool,

    /// Observed values, for diagnosis
    pub detail: String,
}

/// Outcome of a full self-test run
#[derive(Debug, Clone)]
pub struct SelfTestReport {
    /// Every check, in execution order
    pub checks: Vec<SelfTestCheck>,

    /// Whether every check passed
    pub passed: bool,
}

impl SelfTestReport {
    /// Human-readable report, one line per check
    pub fn summary(&self) -> String {
        let mut lines = vec![format!(
            "Self-test: {}",
            if self.passed { "PASS" } else { "FAIL" }
        )];
        for check in &self.checks {
            lines.push(format!(
                "  [{}] {}: {}",
                if check.passed { "ok" } else { "FAIL" },
                check.name,
                check.detail
            ));
        }
        lines.join("\n")
    }
}

/// Run the self-test with default components
pub fn run_self_test() -> SelfTestReport {
    run_with(&Analyzer::new(), &Gatekeeper::default_config())
}

/// Run the self-test against specific components
pub(crate) fn run_with(analyzer: &Analyzer, gatekeeper: &Gatekeeper) -> SelfTestReport {
    let mut checks = Vec::new();
    let mut check = |name: &str, passed: bool, detail: String| {
        checks.push(SelfTestCheck {
            name: name.to_string(),
            passed,
            detail,
        });
    };

    let assistant = analyzer.run(ASSISTANT_FIXTURE);
    check(
        "assistant_fixture_classifies",
        assistant.classification.cv_type == CvType::Assistant,
        format!("cv_type={}", assistant.classification.cv_type),
    );

    let tech = analyzer.run(TECH_FIXTURE);
    check(
        "tech_fixture_classifies",
        tech.classification.cv_type == CvType::Tech,
        format!("cv_type={}", tech.classification.cv_type),
    );

    let mut in_range = true;
    for outcome in [&assistant, &tech] {
        for signal in outcome.analysis.signals() {
            if !(0.0..=1.0).contains(&signal.confidence) {
                in_range = false;
            }
        }
        if !(0.0..=1.0).contains(&outcome.classification.confidence) {
            in_range = false;
        }
    }
    check(
        "confidences_in_range",
        in_range,
        format!(
            "assistant={:.3} tech={:.3}",
            assistant.classification.confidence, tech.classification.confidence
        ),
    );

    let schema_ok = assistant.prompt.contains("\"work_experience\"")
        && assistant.prompt.ends_with(ASSISTANT_FIXTURE);
    check(
        "prompt_schema_and_suffix",
        schema_ok,
        format!("prompt_len={}", assistant.prompt.len()),
    );

    let accepted = gatekeeper.validate(ExtractionId::new(), CANNED_RESPONSE, &assistant.analysis);
    check(
        "validator_accepts_canned_response",
        accepted.is_valid && accepted.success && accepted.quality_score >= 50,
        format!(
            "quality={} count={}/{}",
            accepted.quality_score, accepted.experience_count, accepted.expected_experiences
        ),
    );

    let rejected = gatekeeper.validate(
        ExtractionId::new(),
        "I'm sorry, I cannot process this document.",
        &assistant.analysis,
    );
    check(
        "validator_rejects_prose",
        !rejected.is_valid && !rejected.success && rejected.quality_score == 0,
        format!("quality={}", rejected.quality_score),
    );

    let mut scratch = Ledger::new();
    let classification = Classification::new(CvType::Assistant, Complexity::Medium, 0.5);
    for _ in 0..HISTORY_CAPACITY + 5 {
        scratch.record_analysis(&classification, &assistant.analysis);
        let report = ExtractionReport {
            id: ExtractionId::new(),
            is_valid: true,
            experience_count: 3,
            expected_experiences: 3,
            quality_score: 80,
            success: true,
        };
        scratch.record_extraction(
            &classification,
            &report,
            DocumentMetrics::from_text(ASSISTANT_FIXTURE),
        );
    }
    let snapshot = scratch.statistics();
    check(
        "history_stays_bounded",
        snapshot.history.len() == HISTORY_CAPACITY
            && snapshot.total_processed == (HISTORY_CAPACITY + 5) as u64,
        format!(
            "history={} processed={}",
            snapshot.history.len(),
            snapshot.total_processed
        ),
    );

    let passed = checks.iter().all(|c| c.passed);
    SelfTestReport { checks, passed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_test_passes_with_defaults() {
        let report = run_self_test();
        assert!(report.passed, "{}", report.summary());
        assert_eq!(report.checks.len(), 7);
    }

    #[test]
    fn test_summary_names_every_check() {
        let report = run_self_test();
        let summary = report.summary();
        for check in &report.checks {
            assert!(summary.contains(&check.name));
        }
    }
}
