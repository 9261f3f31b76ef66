//! Crate-level pipeline tests

use crate::{global_confidence, Analyzer, RuleSet};
use vitae_domain::{Complexity, CvType};

const ASSISTANT_CV: &str = "\
Marie Dupont
Assistante de direction depuis 2023 chez Altair Conseil
marie.dupont@example.com
06 12 34 56 78

EXPÉRIENCE PROFESSIONNELLE
2019-2022 : Assistante de direction - Altair Conseil
2016-2019 : Secrétaire polyvalente - Cabinet Bernard
2014-2016 : Assistante administrative - Mairie de Lyon
De 2012 à 2014 : Hôtesse d'accueil - Hôtel Lutetia
";

#[test]
fn test_all_confidences_in_range_for_varied_inputs() {
    let analyzer = Analyzer::new();
    let documents = [
        "",
        "   \n\n  ",
        "a",
        ASSISTANT_CV,
        "Développeur full stack chez Google depuis 2018.\n- Créé une plateforme e-commerce en 2019",
        "€€€ 🎉 no useful content here at all €€€",
        &"2010-2011 assistante ".repeat(100),
    ];

    for document in documents {
        let analysis = analyzer.analyze(document);
        for signal in analysis.signals() {
            assert!(
                (0.0..=1.0).contains(&signal.confidence),
                "confidence out of range for {:?}",
                signal.kind
            );
            for fragment in &signal.evidence {
                assert!((0.0..=1.0).contains(&fragment.confidence));
            }
        }
        let classification = analyzer.classify(document, &analysis);
        assert!((0.0..=1.0).contains(&classification.confidence));
    }
}

#[test]
fn test_global_confidence_matches_countable_fixture() {
    let analyzer = Analyzer::new();
    // One year range (semantic + dates + line separator), one "depuis",
    // one vocabulary term, nothing else.
    let text = "2018 - 2020 depuis 2021 secrétaire";
    let analysis = analyzer.analyze(text);

    assert!((analysis.semantic.confidence - 0.2).abs() < 1e-9);
    assert!((analysis.dates.confidence - 0.1).abs() < 1e-9);
    assert_eq!(analysis.structural.confidence, 0.0);
    assert!((analysis.keywords.confidence - 0.02).abs() < 1e-9);
    assert_eq!(analysis.companies.confidence, 0.0);
    assert!((analysis.line_patterns.confidence - 0.1).abs() < 1e-9);

    let expected = (0.2 + 0.1 + 0.0 + 0.02 + 0.0 + 0.1) / 6.0;
    assert!((global_confidence(&analysis) - expected).abs() < 1e-9);
}

#[test]
fn test_priority_order_full_pipeline() {
    let analyzer = Analyzer::new();
    let text = "Assistante administrative reconvertie développeuse backend";
    let outcome = analyzer.run(text);
    assert_eq!(outcome.classification.cv_type, CvType::Assistant);
}

#[test]
fn test_prompt_round_trip_containment() {
    let analyzer = Analyzer::new();
    let outcome = analyzer.run(ASSISTANT_CV);

    assert!(outcome.prompt.contains("\"work_experience\""));
    assert!(outcome.prompt.ends_with(ASSISTANT_CV));
}

#[test]
fn test_assistant_fixture_end_to_end() {
    let analyzer = Analyzer::new();
    let outcome = analyzer.run(ASSISTANT_CV);

    assert_eq!(outcome.classification.cv_type, CvType::Assistant);
    assert!(matches!(
        outcome.classification.complexity,
        Complexity::Low | Complexity::Medium
    ));
    assert!(outcome.classification.confidence > 0.3);
    // Assistant-specific guidance block present, document appended verbatim
    assert!(outcome.prompt.contains("assistanat"));
    assert!(outcome.prompt.ends_with(ASSISTANT_CV));
}

#[test]
fn test_custom_rule_dir_changes_behavior() {
    let dir = tempfile::tempdir().unwrap();
    let write = |name: &str, content: &str| {
        std::fs::write(dir.path().join(name), content).unwrap();
    };

    write(
        "semantic.toml",
        "[[pattern]]\npattern = '(?i)\\bvolunteered at\\s+\\S+'\nweight = 0.15\ncategory = \"relation\"\n",
    );
    write(
        "dates.toml",
        "[[pattern]]\npattern = '\\b(19|20)\\d{2}\\b'\nweight = 0.5\ncategory = \"year\"\n",
    );
    write(
        "structural.toml",
        "max_heading_length = 60\nbullet_min_length = 20\nbullet_max_length = 300\nnumbered_weight = 0.5\n\n[[section]]\nterm = \"volunteering\"\nweight = 0.6\n",
    );
    write(
        "keywords.toml",
        "[[term]]\nterm = \"plombier\"\nweight = 0.7\ncategory = \"title\"\n",
    );
    write(
        "companies.toml",
        "[[brand]]\nname = \"Compagnons du Devoir\"\nweight = 0.7\n",
    );
    write(
        "lines.toml",
        "min_line_length = 10\nmax_title_length = 80\ndate_company_weight = 0.8\ntitle_weight = 0.7\naction_verb_weight = 0.6\nseparators = \"-:\"\n",
    );
    write(
        "classifier.toml",
        "[[group]]\ncv_type = \"tech\"\nterms = [\"plombier\"]\n",
    );

    let rules = RuleSet::from_dir(dir.path()).unwrap();
    let analyzer = Analyzer::with_rules(rules);

    let text = "Plombier chauffagiste, Compagnons du Devoir, 2015";
    let outcome = analyzer.run(text);

    // The custom classifier maps the new vocabulary where the builtin
    // tables would fall back to general
    assert_eq!(outcome.classification.cv_type, CvType::Tech);
    assert!(outcome.analysis.keywords.volume() == 1);
    assert!(outcome.analysis.companies.volume() == 1);

    let builtin = Analyzer::new().run(text);
    assert_eq!(builtin.classification.cv_type, CvType::General);
}
