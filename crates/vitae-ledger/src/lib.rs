//! Vitae Ledger
//!
//! In-memory learning store and processing statistics.
//!
//! The ledger accumulates two kinds of observation:
//! - Per-category learning buckets: how often each (type, complexity)
//!   pair was seen and which signals spoke strongly for it
//! - Global statistics: processed counts, rolling quality averages, and
//!   a bounded history of recent extractions
//!
//! Both stores are bounded; neither grows with the number of documents
//! processed. One `Ledger` is constructed at the composition root and
//! shared behind `Arc<Mutex<…>>`.
//!
//! # Examples
//!
//! ```
//! use vitae_ledger::Ledger;
//!
//! let ledger = Ledger::new();
//! let snapshot = ledger.statistics();
//! assert_eq!(snapshot.total_processed, 0);
//! ```

#![warn(missing_docs)]

mod learning;
mod statistics;

use std::collections::HashMap;
use tracing::debug;
use vitae_domain::{Analysis, Classification, Complexity, CvType};
use vitae_gatekeeper::ExtractionReport;

pub use learning::{LearningBucket, PatternSample, PATTERN_CAPACITY, STRONG_CONFIDENCE};
pub use statistics::{
    DocumentMetrics, HistoryEntry, Statistics, StatisticsSnapshot, HISTORY_CAPACITY,
};

/// Learning store plus statistics for the whole pipeline
#[derive(Debug, Default)]
pub struct Ledger {
    buckets: HashMap<(CvType, Complexity), LearningBucket>,
    statistics: Statistics,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an analysis into its (type, complexity) bucket
    ///
    /// Every signal with confidence above [`STRONG_CONFIDENCE`] is
    /// sampled into the bucket's bounded pattern buffer.
    pub fn record_analysis(&mut self, classification: &Classification, analysis: &Analysis) {
        let key = (classification.cv_type, classification.complexity);
        let bucket = self.buckets.entry(key).or_default();
        bucket.total += 1;

        for signal in analysis.signals() {
            if signal.confidence > STRONG_CONFIDENCE {
                bucket.push_pattern(PatternSample {
                    kind: signal.kind,
                    confidence: signal.confidence,
                });
            }
        }

        debug!(
            cv_type = %classification.cv_type,
            complexity = %classification.complexity,
            total = bucket.total,
            "analysis recorded"
        );
    }

    /// Fold a validation report and document metrics into the statistics
    ///
    /// Rolling averages move only on successful extractions; the bucket
    /// named by the classification gets its success count bumped.
    pub fn record_extraction(
        &mut self,
        classification: &Classification,
        report: &ExtractionReport,
        metrics: DocumentMetrics,
    ) {
        if report.success {
            let key = (classification.cv_type, classification.complexity);
            self.buckets.entry(key).or_default().successful += 1;
        }
        self.statistics.record(report, metrics);
    }

    /// Serializable snapshot of the statistics
    pub fn statistics(&self) -> StatisticsSnapshot {
        self.statistics.snapshot()
    }

    /// Look up one learning bucket
    pub fn bucket(&self, cv_type: CvType, complexity: Complexity) -> Option<&LearningBucket> {
        self.buckets.get(&(cv_type, complexity))
    }

    /// Clear every bucket and all statistics
    pub fn reset(&mut self) {
        self.buckets.clear();
        self.statistics.reset();
    }
}
