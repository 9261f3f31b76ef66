//! Signal module - evidence gathered by one analysis method

use serde::{Deserialize, Serialize};

/// Analysis method that produced a signal
///
/// Six independent methods inspect a document; each reports one
/// [`Signal`]. The methods share no state and can run in any order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    /// Experience-relation and temporal-range phrasing
    Semantic,

    /// Date formats (FR/EN month names, numeric, ISO, ranges)
    Dates,

    /// Section headings and bulleted structure
    Structural,

    /// Job-title, action-verb, and sector vocabulary
    Keywords,

    /// Employer-name shapes (legal suffixes, sector names, known brands)
    Companies,

    /// Per-line layout classification (date lines, title lines, verb lines)
    LinePatterns,
}

impl SignalKind {
    /// All six methods, in canonical order
    pub const ALL: [SignalKind; 6] = [
        SignalKind::Semantic,
        SignalKind::Dates,
        SignalKind::Structural,
        SignalKind::Keywords,
        SignalKind::Companies,
        SignalKind::LinePatterns,
    ];

    /// Get the method name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalKind::Semantic => "semantic",
            SignalKind::Dates => "dates",
            SignalKind::Structural => "structural",
            SignalKind::Keywords => "keywords",
            SignalKind::Companies => "companies",
            SignalKind::LinePatterns => "line_patterns",
        }
    }

    /// Parse a method name from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "semantic" => Some(SignalKind::Semantic),
            "dates" => Some(SignalKind::Dates),
            "structural" => Some(SignalKind::Structural),
            "keywords" => Some(SignalKind::Keywords),
            "companies" => Some(SignalKind::Companies),
            "line_patterns" => Some(SignalKind::LinePatterns),
            _ => None,
        }
    }
}

impl std::str::FromStr for SignalKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid signal kind: {}", s))
    }
}

impl std::fmt::Display for SignalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One piece of evidence supporting a signal
///
/// The text is a span lifted from the document; the confidence is the
/// producing rule's own strength, independent of the signal-level
/// confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    /// Matched span from the document
    pub text: String,

    /// Rule strength for this span, always in [0, 1]
    pub confidence: f64,
}

impl Fragment {
    /// Create a fragment, clamping confidence into [0, 1]
    pub fn new(text: impl Into<String>, confidence: f64) -> Self {
        Self {
            text: text.into(),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }
}

/// Outcome of one analysis method over one document
///
/// Immutable once produced. A document with no matches yields a signal
/// with confidence 0.0 and empty evidence - never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    /// Method that produced this signal
    pub kind: SignalKind,

    /// Method-level confidence, always in [0, 1]
    pub confidence: f64,

    /// Every match the method found
    pub evidence: Vec<Fragment>,
}

impl Signal {
    /// Create a signal, clamping confidence into [0, 1]
    pub fn new(kind: SignalKind, confidence: f64, evidence: Vec<Fragment>) -> Self {
        Self {
            kind,
            confidence: confidence.clamp(0.0, 1.0),
            evidence,
        }
    }

    /// The no-match signal for a method
    pub fn empty(kind: SignalKind) -> Self {
        Self {
            kind,
            confidence: 0.0,
            evidence: Vec::new(),
        }
    }

    /// Number of evidence fragments
    pub fn volume(&self) -> usize {
        self.evidence.len()
    }
}

/// The six signals computed for one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Experience-relation phrasing signal
    pub semantic: Signal,

    /// Date-format signal
    pub dates: Signal,

    /// Document-structure signal
    pub structural: Signal,

    /// Vocabulary signal
    pub keywords: Signal,

    /// Employer-name signal
    pub companies: Signal,

    /// Line-layout signal
    pub line_patterns: Signal,
}

impl Analysis {
    /// All six signals, in canonical order
    pub fn signals(&self) -> [&Signal; 6] {
        [
            &self.semantic,
            &self.dates,
            &self.structural,
            &self.keywords,
            &self.companies,
            &self.line_patterns,
        ]
    }

    /// Look up the signal for one method
    pub fn signal(&self, kind: SignalKind) -> &Signal {
        match kind {
            SignalKind::Semantic => &self.semantic,
            SignalKind::Dates => &self.dates,
            SignalKind::Structural => &self.structural,
            SignalKind::Keywords => &self.keywords,
            SignalKind::Companies => &self.companies,
            SignalKind::LinePatterns => &self.line_patterns,
        }
    }

    /// Total evidence volume used for complexity grading
    ///
    /// Keywords are excluded: vocabulary hits measure domain flavor, not
    /// document density, and would dominate the count on keyword-heavy
    /// inputs.
    pub fn signal_volume(&self) -> usize {
        self.semantic.volume()
            + self.dates.volume()
            + self.structural.volume()
            + self.companies.volume()
            + self.line_patterns.volume()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_kind_round_trip() {
        for kind in SignalKind::ALL {
            assert_eq!(SignalKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_signal_kind_invalid() {
        assert_eq!(SignalKind::parse("telepathy"), None);
        assert!("telepathy".parse::<SignalKind>().is_err());
    }

    #[test]
    fn test_signal_clamps_confidence() {
        let high = Signal::new(SignalKind::Dates, 3.7, Vec::new());
        assert_eq!(high.confidence, 1.0);

        let low = Signal::new(SignalKind::Dates, -0.5, Vec::new());
        assert_eq!(low.confidence, 0.0);
    }

    #[test]
    fn test_fragment_clamps_confidence() {
        let fragment = Fragment::new("Jan 2020 - Dec 2021", 1.4);
        assert_eq!(fragment.confidence, 1.0);
    }

    #[test]
    fn test_empty_signal() {
        let signal = Signal::empty(SignalKind::Companies);
        assert_eq!(signal.confidence, 0.0);
        assert!(signal.evidence.is_empty());
        assert_eq!(signal.volume(), 0);
    }

    #[test]
    fn test_signal_volume_excludes_keywords() {
        let evidence = vec![Fragment::new("x", 0.5), Fragment::new("y", 0.5)];
        let analysis = Analysis {
            semantic: Signal::new(SignalKind::Semantic, 0.2, evidence.clone()),
            dates: Signal::new(SignalKind::Dates, 0.1, evidence.clone()),
            structural: Signal::empty(SignalKind::Structural),
            keywords: Signal::new(SignalKind::Keywords, 0.9, evidence.clone()),
            companies: Signal::empty(SignalKind::Companies),
            line_patterns: Signal::new(SignalKind::LinePatterns, 0.3, evidence),
        };

        // semantic 2 + dates 2 + line_patterns 2; keywords' 2 do not count
        assert_eq!(analysis.signal_volume(), 6);
    }

    #[test]
    fn test_signal_lookup_matches_fields() {
        let analysis = Analysis {
            semantic: Signal::empty(SignalKind::Semantic),
            dates: Signal::empty(SignalKind::Dates),
            structural: Signal::empty(SignalKind::Structural),
            keywords: Signal::empty(SignalKind::Keywords),
            companies: Signal::empty(SignalKind::Companies),
            line_patterns: Signal::empty(SignalKind::LinePatterns),
        };

        for kind in SignalKind::ALL {
            assert_eq!(analysis.signal(kind).kind, kind);
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Signal construction always lands in [0, 1]
        #[test]
        fn test_signal_confidence_always_valid(raw in -10.0f64..10.0) {
            let signal = Signal::new(SignalKind::Semantic, raw, Vec::new());
            prop_assert!((0.0..=1.0).contains(&signal.confidence));
        }

        /// Property: Fragment construction always lands in [0, 1]
        #[test]
        fn test_fragment_confidence_always_valid(raw in -10.0f64..10.0) {
            let fragment = Fragment::new("span", raw);
            prop_assert!((0.0..=1.0).contains(&fragment.confidence));
        }
    }
}
