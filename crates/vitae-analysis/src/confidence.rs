//! Global confidence aggregation

use vitae_domain::Analysis;

/// Arithmetic mean of the six signal confidences
///
/// All six signals are always present because the extractors are
/// total, so the mean is well defined and lands in [0, 1].
pub fn global_confidence(analysis: &Analysis) -> f64 {
    let signals = analysis.signals();
    signals.iter().map(|s| s.confidence).sum::<f64>() / signals.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_domain::{Signal, SignalKind};

    #[test]
    fn test_mean_of_known_confidences() {
        let analysis = Analysis {
            semantic: Signal::new(SignalKind::Semantic, 0.6, Vec::new()),
            dates: Signal::new(SignalKind::Dates, 0.3, Vec::new()),
            structural: Signal::new(SignalKind::Structural, 0.9, Vec::new()),
            keywords: Signal::new(SignalKind::Keywords, 0.12, Vec::new()),
            companies: Signal::new(SignalKind::Companies, 0.45, Vec::new()),
            line_patterns: Signal::new(SignalKind::LinePatterns, 0.8, Vec::new()),
        };

        let expected = (0.6 + 0.3 + 0.9 + 0.12 + 0.45 + 0.8) / 6.0;
        assert!((global_confidence(&analysis) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_all_zero_signals() {
        let analysis = Analysis {
            semantic: Signal::empty(SignalKind::Semantic),
            dates: Signal::empty(SignalKind::Dates),
            structural: Signal::empty(SignalKind::Structural),
            keywords: Signal::empty(SignalKind::Keywords),
            companies: Signal::empty(SignalKind::Companies),
            line_patterns: Signal::empty(SignalKind::LinePatterns),
        };
        assert_eq!(global_confidence(&analysis), 0.0);
    }
}
