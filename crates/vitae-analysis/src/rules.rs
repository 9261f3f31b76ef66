//! Rule tables backing the signal extractors
//!
//! Heuristics are data, not control flow: each extractor reads a TOML
//! table of `{pattern|term, weight, category}` entries compiled here.
//! The builtin tables are embedded in the binary; alternative locales
//! or domains load from a directory without touching extractor code.

use crate::error::AnalysisError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use vitae_domain::CvType;

/// Four-digit year, shared by the semantic and line extractors
pub(crate) static YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(19|20)\d{2}\b").expect("year pattern is fixed"));

/// One compiled pattern entry
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// Compiled expression
    pub regex: Regex,

    /// Rule strength, used as fragment confidence where applicable
    pub weight: f64,

    /// Free-form grouping label from the table
    pub category: String,
}

/// Vocabulary term category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermCategory {
    /// Job titles
    Title,

    /// Action verbs opening achievement lines
    Verb,

    /// Sector and industry terms
    Sector,
}

impl TermCategory {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "title" => Some(TermCategory::Title),
            "verb" => Some(TermCategory::Verb),
            "sector" => Some(TermCategory::Sector),
            _ => None,
        }
    }
}

/// One compiled vocabulary term
#[derive(Debug, Clone)]
pub struct VocabTerm {
    /// The term as written in the table
    pub term: String,

    /// Lowercased form used for matching
    pub term_lower: String,

    /// Fragment confidence when this term hits
    pub weight: f64,

    /// Term category
    pub category: TermCategory,
}

/// Compiled vocabulary for the keywords extractor
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// All terms, in table order
    pub terms: Vec<VocabTerm>,
}

impl Vocabulary {
    /// Lowercased title terms
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.terms
            .iter()
            .filter(|t| t.category == TermCategory::Title)
            .map(|t| t.term_lower.as_str())
    }

    /// Lowercased verb terms
    pub fn verbs(&self) -> impl Iterator<Item = &str> {
        self.terms
            .iter()
            .filter(|t| t.category == TermCategory::Verb)
            .map(|t| t.term_lower.as_str())
    }
}

/// Compiled structural rules: headings and list shapes
#[derive(Debug, Clone)]
pub struct StructuralRules {
    /// Longest trimmed line still considered a heading
    pub max_heading_length: usize,

    /// Shortest trimmed line counted as a list item
    pub bullet_min_length: usize,

    /// Longest trimmed line counted as a list item
    pub bullet_max_length: usize,

    /// Fragment confidence for numbered list lines
    pub numbered_weight: f64,

    /// Lowercased section terms with weights
    pub sections: Vec<(String, f64)>,

    /// Bullet prefixes with weights
    pub bullets: Vec<(String, f64)>,

    /// Numbered list line shape ("1. " / "2) ")
    pub numbered: Regex,
}

/// Compiled employer-name rules
#[derive(Debug, Clone)]
pub struct CompanyRules {
    /// Capitalized span followed by a legal-entity suffix
    pub legal: Vec<CompiledPattern>,

    /// Capitalized span followed by a sector suffix
    pub sector: Vec<CompiledPattern>,

    /// Known brand names: (as written, lowercased, weight)
    pub brands: Vec<(String, String, f64)>,
}

/// Line-classification knobs
#[derive(Debug, Clone, Deserialize)]
pub struct LineRules {
    /// Shortest trimmed line worth classifying
    pub min_line_length: usize,

    /// Longest trimmed line still considered a title line
    pub max_title_length: usize,

    /// Confidence for date+company lines
    pub date_company_weight: f64,

    /// Confidence for job-title lines
    pub title_weight: f64,

    /// Confidence for action-verb lines
    pub action_verb_weight: f64,

    /// Characters counting as date/company separators
    pub separators: String,
}

/// Ordered CV-type vocabulary groups
#[derive(Debug, Clone)]
pub struct ClassifierRules {
    /// Groups in priority order, terms lowercased
    pub groups: Vec<(CvType, Vec<String>)>,
}

/// The complete compiled rule set consumed by the analysis pipeline
#[derive(Debug, Clone)]
pub struct RuleSet {
    /// Experience-relation and temporal-range patterns
    pub semantic: Vec<CompiledPattern>,

    /// Date-format patterns
    pub dates: Vec<CompiledPattern>,

    /// Heading and list rules
    pub structural: StructuralRules,

    /// Keyword vocabulary
    pub vocabulary: Vocabulary,

    /// Employer-name rules
    pub companies: CompanyRules,

    /// Line-classification knobs
    pub lines: LineRules,

    /// CV-type groups
    pub classifier: ClassifierRules,
}

/// Raw TOML sources for the seven tables
#[derive(Debug, Clone, Copy)]
pub struct RuleSources<'a> {
    /// semantic.toml content
    pub semantic: &'a str,
    /// dates.toml content
    pub dates: &'a str,
    /// structural.toml content
    pub structural: &'a str,
    /// keywords.toml content
    pub keywords: &'a str,
    /// companies.toml content
    pub companies: &'a str,
    /// lines.toml content
    pub lines: &'a str,
    /// classifier.toml content
    pub classifier: &'a str,
}

impl RuleSources<'static> {
    /// The tables compiled into the binary
    pub const BUILTIN: RuleSources<'static> = RuleSources {
        semantic: include_str!("../rules/semantic.toml"),
        dates: include_str!("../rules/dates.toml"),
        structural: include_str!("../rules/structural.toml"),
        keywords: include_str!("../rules/keywords.toml"),
        companies: include_str!("../rules/companies.toml"),
        lines: include_str!("../rules/lines.toml"),
        classifier: include_str!("../rules/classifier.toml"),
    };
}

static BUILTIN: Lazy<RuleSet> = Lazy::new(|| {
    RuleSet::from_sources(RuleSources::BUILTIN)
        .expect("builtin rule tables are validated by the crate tests")
});

// Raw deserialization shapes, one per table format.

#[derive(Deserialize)]
struct PatternFile {
    #[serde(default)]
    pattern: Vec<PatternEntry>,
}

#[derive(Deserialize)]
struct PatternEntry {
    pattern: String,
    weight: f64,
    category: String,
}

#[derive(Deserialize)]
struct StructuralFile {
    max_heading_length: usize,
    bullet_min_length: usize,
    bullet_max_length: usize,
    numbered_weight: f64,
    #[serde(default)]
    section: Vec<SectionEntry>,
    #[serde(default)]
    bullet: Vec<BulletEntry>,
}

#[derive(Deserialize)]
struct SectionEntry {
    term: String,
    weight: f64,
}

#[derive(Deserialize)]
struct BulletEntry {
    prefix: String,
    weight: f64,
}

#[derive(Deserialize)]
struct VocabularyFile {
    #[serde(default)]
    term: Vec<TermEntry>,
}

#[derive(Deserialize)]
struct TermEntry {
    term: String,
    weight: f64,
    category: String,
}

#[derive(Deserialize)]
struct CompanyFile {
    #[serde(default)]
    legal: Vec<SuffixEntry>,
    #[serde(default)]
    sector: Vec<SuffixEntry>,
    #[serde(default)]
    brand: Vec<BrandEntry>,
}

#[derive(Deserialize)]
struct SuffixEntry {
    suffix: String,
    weight: f64,
}

#[derive(Deserialize)]
struct BrandEntry {
    name: String,
    weight: f64,
}

#[derive(Deserialize)]
struct ClassifierFile {
    #[serde(default)]
    group: Vec<GroupEntry>,
}

#[derive(Deserialize)]
struct GroupEntry {
    cv_type: String,
    terms: Vec<String>,
}

impl RuleSet {
    /// The rule set compiled into the binary
    pub fn builtin() -> &'static RuleSet {
        &BUILTIN
    }

    /// Compile a rule set from raw TOML sources
    pub fn from_sources(sources: RuleSources<'_>) -> Result<Self, AnalysisError> {
        Ok(Self {
            semantic: compile_patterns("semantic", sources.semantic)?,
            dates: compile_patterns("dates", sources.dates)?,
            structural: compile_structural(sources.structural)?,
            vocabulary: compile_vocabulary(sources.keywords)?,
            companies: compile_companies(sources.companies)?,
            lines: compile_lines(sources.lines)?,
            classifier: compile_classifier(sources.classifier)?,
        })
    }

    /// Load a rule set from a directory holding the seven table files
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, AnalysisError> {
        let dir = dir.as_ref();
        let read = |name: &str| -> Result<String, AnalysisError> {
            std::fs::read_to_string(dir.join(name))
                .map_err(|e| AnalysisError::RuleFile(format!("{}: {}", dir.join(name).display(), e)))
        };

        let semantic = read("semantic.toml")?;
        let dates = read("dates.toml")?;
        let structural = read("structural.toml")?;
        let keywords = read("keywords.toml")?;
        let companies = read("companies.toml")?;
        let lines = read("lines.toml")?;
        let classifier = read("classifier.toml")?;

        Self::from_sources(RuleSources {
            semantic: &semantic,
            dates: &dates,
            structural: &structural,
            keywords: &keywords,
            companies: &companies,
            lines: &lines,
            classifier: &classifier,
        })
    }
}

fn parse_toml<T: serde::de::DeserializeOwned>(table: &str, source: &str) -> Result<T, AnalysisError> {
    toml::from_str(source).map_err(|e| AnalysisError::RuleParse {
        table: table.to_string(),
        message: e.to_string(),
    })
}

fn check_weight(table: &str, label: &str, weight: f64) -> Result<(), AnalysisError> {
    if !(0.0..=1.0).contains(&weight) {
        return Err(AnalysisError::RuleValidation {
            table: table.to_string(),
            message: format!("weight {} for '{}' is outside [0, 1]", weight, label),
        });
    }
    Ok(())
}

fn compile_entry(table: &str, entry: &PatternEntry) -> Result<CompiledPattern, AnalysisError> {
    check_weight(table, &entry.pattern, entry.weight)?;
    let regex = Regex::new(&entry.pattern).map_err(|e| AnalysisError::InvalidPattern {
        table: table.to_string(),
        pattern: entry.pattern.clone(),
        message: e.to_string(),
    })?;
    Ok(CompiledPattern {
        regex,
        weight: entry.weight,
        category: entry.category.clone(),
    })
}

fn compile_patterns(table: &str, source: &str) -> Result<Vec<CompiledPattern>, AnalysisError> {
    let file: PatternFile = parse_toml(table, source)?;
    if file.pattern.is_empty() {
        return Err(AnalysisError::RuleValidation {
            table: table.to_string(),
            message: "table has no pattern entries".to_string(),
        });
    }
    file.pattern
        .iter()
        .map(|entry| compile_entry(table, entry))
        .collect()
}

fn compile_structural(source: &str) -> Result<StructuralRules, AnalysisError> {
    let file: StructuralFile = parse_toml("structural", source)?;
    if file.section.is_empty() {
        return Err(AnalysisError::RuleValidation {
            table: "structural".to_string(),
            message: "table has no section entries".to_string(),
        });
    }
    for s in &file.section {
        check_weight("structural", &s.term, s.weight)?;
    }
    for b in &file.bullet {
        check_weight("structural", &b.prefix, b.weight)?;
    }

    Ok(StructuralRules {
        max_heading_length: file.max_heading_length,
        bullet_min_length: file.bullet_min_length,
        bullet_max_length: file.bullet_max_length,
        numbered_weight: file.numbered_weight,
        sections: file
            .section
            .into_iter()
            .map(|s| (s.term.to_lowercase(), s.weight))
            .collect(),
        bullets: file
            .bullet
            .into_iter()
            .map(|b| (b.prefix, b.weight))
            .collect(),
        numbered: Regex::new(r"^\d{1,2}[.)]\s").expect("numbered-line pattern is fixed"),
    })
}

fn compile_vocabulary(source: &str) -> Result<Vocabulary, AnalysisError> {
    let file: VocabularyFile = parse_toml("keywords", source)?;
    if file.term.is_empty() {
        return Err(AnalysisError::RuleValidation {
            table: "keywords".to_string(),
            message: "table has no term entries".to_string(),
        });
    }

    let mut terms = Vec::with_capacity(file.term.len());
    for entry in file.term {
        check_weight("keywords", &entry.term, entry.weight)?;
        let category =
            TermCategory::parse(&entry.category).ok_or_else(|| AnalysisError::RuleValidation {
                table: "keywords".to_string(),
                message: format!("unknown category '{}' for '{}'", entry.category, entry.term),
            })?;
        terms.push(VocabTerm {
            term_lower: entry.term.to_lowercase(),
            term: entry.term,
            weight: entry.weight,
            category,
        });
    }
    Ok(Vocabulary { terms })
}

/// Capitalized name span (up to four words) followed by the suffix
fn suffix_pattern(suffix: &str) -> String {
    format!(
        r"\b(?:[A-ZÀ-Ý][\w&'’.-]*\s+){{1,4}}{}\b",
        regex::escape(suffix)
    )
}

fn compile_companies(source: &str) -> Result<CompanyRules, AnalysisError> {
    let file: CompanyFile = parse_toml("companies", source)?;
    if file.legal.is_empty() && file.sector.is_empty() && file.brand.is_empty() {
        return Err(AnalysisError::RuleValidation {
            table: "companies".to_string(),
            message: "table has no entries".to_string(),
        });
    }

    let compile_suffixes = |entries: &[SuffixEntry], category: &str| {
        entries
            .iter()
            .map(|entry| {
                check_weight("companies", &entry.suffix, entry.weight)?;
                compile_entry(
                    "companies",
                    &PatternEntry {
                        pattern: suffix_pattern(&entry.suffix),
                        weight: entry.weight,
                        category: category.to_string(),
                    },
                )
            })
            .collect::<Result<Vec<_>, _>>()
    };

    let legal = compile_suffixes(&file.legal, "legal")?;
    let sector = compile_suffixes(&file.sector, "sector")?;

    let mut brands = Vec::with_capacity(file.brand.len());
    for entry in file.brand {
        check_weight("companies", &entry.name, entry.weight)?;
        brands.push((entry.name.clone(), entry.name.to_lowercase(), entry.weight));
    }

    Ok(CompanyRules {
        legal,
        sector,
        brands,
    })
}

fn compile_lines(source: &str) -> Result<LineRules, AnalysisError> {
    let rules: LineRules = parse_toml("lines", source)?;
    for (label, weight) in [
        ("date_company_weight", rules.date_company_weight),
        ("title_weight", rules.title_weight),
        ("action_verb_weight", rules.action_verb_weight),
    ] {
        check_weight("lines", label, weight)?;
    }
    Ok(rules)
}

fn compile_classifier(source: &str) -> Result<ClassifierRules, AnalysisError> {
    let file: ClassifierFile = parse_toml("classifier", source)?;
    if file.group.is_empty() {
        return Err(AnalysisError::RuleValidation {
            table: "classifier".to_string(),
            message: "table has no groups".to_string(),
        });
    }

    let mut groups = Vec::with_capacity(file.group.len());
    for entry in file.group {
        let cv_type =
            CvType::parse(&entry.cv_type).ok_or_else(|| AnalysisError::RuleValidation {
                table: "classifier".to_string(),
                message: format!("unknown cv_type '{}'", entry.cv_type),
            })?;
        if entry.terms.is_empty() {
            return Err(AnalysisError::RuleValidation {
                table: "classifier".to_string(),
                message: format!("group '{}' has no terms", entry.cv_type),
            });
        }
        groups.push((
            cv_type,
            entry.terms.into_iter().map(|t| t.to_lowercase()).collect(),
        ));
    }
    Ok(ClassifierRules { groups })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_compile() {
        let rules = RuleSet::builtin();
        assert!(rules.semantic.len() >= 8);
        assert!(rules.dates.len() >= 12);
        assert!(rules.vocabulary.terms.len() >= 50);
        assert!(!rules.companies.legal.is_empty());
        assert_eq!(rules.classifier.groups.len(), 4);
    }

    #[test]
    fn test_builtin_classifier_priority_order() {
        let rules = RuleSet::builtin();
        let order: Vec<CvType> = rules.classifier.groups.iter().map(|(t, _)| *t).collect();
        assert_eq!(
            order,
            vec![
                CvType::Assistant,
                CvType::Tech,
                CvType::LuxeMode,
                CvType::Commercial
            ]
        );
    }

    #[test]
    fn test_invalid_regex_is_reported() {
        let mut sources = RuleSources::BUILTIN;
        let broken = r#"
[[pattern]]
pattern = '(unclosed'
weight = 0.5
category = "broken"
"#;
        sources.dates = broken;

        match RuleSet::from_sources(sources) {
            Err(AnalysisError::InvalidPattern { table, .. }) => assert_eq!(table, "dates"),
            other => panic!("expected InvalidPattern, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_out_of_range_weight_is_rejected() {
        let mut sources = RuleSources::BUILTIN;
        let broken = r#"
[[term]]
term = "assistante"
weight = 1.5
category = "title"
"#;
        sources.keywords = broken;

        assert!(matches!(
            RuleSet::from_sources(sources),
            Err(AnalysisError::RuleValidation { .. })
        ));
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let mut sources = RuleSources::BUILTIN;
        let broken = r#"
[[term]]
term = "assistante"
weight = 0.5
category = "adjective"
"#;
        sources.keywords = broken;

        assert!(matches!(
            RuleSet::from_sources(sources),
            Err(AnalysisError::RuleValidation { .. })
        ));
    }

    #[test]
    fn test_suffix_pattern_needs_capitalized_context() {
        let pattern = Regex::new(&suffix_pattern("SARL")).unwrap();
        assert!(pattern.is_match("Martin Dupont SARL"));
        assert!(!pattern.is_match("une sarl quelconque"));
        assert!(!pattern.is_match("SARL"));
    }

    #[test]
    fn test_from_dir_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            RuleSet::from_dir(dir.path()),
            Err(AnalysisError::RuleFile(_))
        ));
    }
}
