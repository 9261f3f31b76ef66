//! Per-category learning buckets

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use vitae_domain::SignalKind;

/// Maximum pattern samples kept per bucket; the oldest is evicted first
pub const PATTERN_CAPACITY: usize = 100;

/// Signal confidence above which a sample enters the pattern buffer
pub const STRONG_CONFIDENCE: f64 = 0.7;

/// One strong-signal observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatternSample {
    /// Method that spoke strongly
    pub kind: SignalKind,

    /// The confidence it reported
    pub confidence: f64,
}

/// Accumulated observations for one (type, complexity) category
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LearningBucket {
    /// Documents classified into this category
    pub total: u64,

    /// Extractions that succeeded for this category
    pub successful: u64,

    patterns: VecDeque<PatternSample>,
}

impl LearningBucket {
    /// Append a sample, evicting the oldest beyond capacity
    pub fn push_pattern(&mut self, sample: PatternSample) {
        if self.patterns.len() == PATTERN_CAPACITY {
            self.patterns.pop_front();
        }
        self.patterns.push_back(sample);
    }

    /// The retained samples, oldest first
    pub fn patterns(&self) -> &VecDeque<PatternSample> {
        &self.patterns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_buffer_is_fifo_bounded() {
        let mut bucket = LearningBucket::default();
        for i in 0..PATTERN_CAPACITY + 1 {
            bucket.push_pattern(PatternSample {
                kind: SignalKind::Semantic,
                confidence: i as f64 / 200.0,
            });
        }

        assert_eq!(bucket.patterns().len(), PATTERN_CAPACITY);
        // The first sample (confidence 0.0) was evicted
        assert_eq!(bucket.patterns()[0].confidence, 1.0 / 200.0);
    }

    #[test]
    fn test_bucket_serializes() {
        let mut bucket = LearningBucket::default();
        bucket.total = 3;
        bucket.push_pattern(PatternSample {
            kind: SignalKind::Dates,
            confidence: 0.9,
        });

        let json = serde_json::to_string(&bucket).unwrap();
        let back: LearningBucket = serde_json::from_str(&json).unwrap();
        assert_eq!(back.total, 3);
        assert_eq!(back.patterns().len(), 1);
    }
}
