//! Analysis pipeline facade

use crate::classifier;
use crate::extractors::extract_all;
use crate::prompt::PromptBuilder;
use crate::rules::RuleSet;
use std::sync::Arc;
use tracing::debug;
use vitae_domain::{Analysis, Classification};

/// Everything the pipeline derives from one document
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    /// The six signals
    pub analysis: Analysis,

    /// Type, complexity, and global confidence
    pub classification: Classification,

    /// The synthesized extraction prompt
    pub prompt: String,
}

/// Runs the full analysis pipeline over documents
///
/// Holds a compiled rule set; cloning shares it. The pipeline itself
/// is synchronous and infallible - extractors are total functions.
#[derive(Debug, Clone)]
pub struct Analyzer {
    rules: Arc<RuleSet>,
}

impl Analyzer {
    /// Create an analyzer over the builtin rule tables
    pub fn new() -> Self {
        Self::with_rules(RuleSet::builtin().clone())
    }

    /// Create an analyzer over a custom rule set
    pub fn with_rules(rules: RuleSet) -> Self {
        Self {
            rules: Arc::new(rules),
        }
    }

    /// The rule set in use
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Run the six extractors over one document
    pub fn analyze(&self, text: &str) -> Analysis {
        let analysis = extract_all(text, &self.rules);
        debug!(
            semantic = analysis.semantic.confidence,
            dates = analysis.dates.confidence,
            structural = analysis.structural.confidence,
            keywords = analysis.keywords.confidence,
            companies = analysis.companies.confidence,
            line_patterns = analysis.line_patterns.confidence,
            "signals extracted"
        );
        analysis
    }

    /// Classify a document given its signals
    pub fn classify(&self, text: &str, analysis: &Analysis) -> Classification {
        classifier::classify(text, analysis, &self.rules)
    }

    /// Synthesize the extraction prompt for a classified document
    pub fn prompt(&self, classification: &Classification, text: &str) -> String {
        PromptBuilder::new(classification, text).build()
    }

    /// Run the complete pipeline: signals, classification, prompt
    pub fn run(&self, text: &str) -> AnalysisOutcome {
        let analysis = self.analyze(text);
        let classification = self.classify(text, &analysis);
        let prompt = self.prompt(&classification, text);
        AnalysisOutcome {
            analysis,
            classification,
            prompt,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}
