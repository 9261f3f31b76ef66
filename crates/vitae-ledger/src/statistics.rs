//! Processing statistics with bounded history

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};
use vitae_domain::ExtractionId;
use vitae_gatekeeper::ExtractionReport;

/// Maximum history entries retained; the oldest is evicted first
pub const HISTORY_CAPACITY: usize = 50;

/// Character count above which a document counts as multi-page
const MULTI_PAGE_CHARS: usize = 3000;

/// Line count above which a document counts as multi-page
const MULTI_PAGE_LINES: usize = 100;

/// Size measurements of one analyzed document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentMetrics {
    /// Character count
    pub chars: usize,

    /// Line count
    pub lines: usize,
}

impl DocumentMetrics {
    /// Measure a document
    pub fn from_text(text: &str) -> Self {
        Self {
            chars: text.chars().count(),
            lines: text.lines().count(),
        }
    }

    /// Whether the measurements suggest more than one page
    pub fn is_multi_page(&self) -> bool {
        self.chars > MULTI_PAGE_CHARS || self.lines > MULTI_PAGE_LINES
    }
}

/// One remembered extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Extraction identifier
    pub id: ExtractionId,

    /// Unix seconds when the extraction was recorded
    pub timestamp: u64,

    /// Whether the extraction met the success threshold
    pub success: bool,

    /// Work experiences recovered
    pub experience_count: usize,

    /// Quality score (0-100)
    pub quality_score: u8,
}

/// Running statistics over all processed documents
#[derive(Debug, Default)]
pub struct Statistics {
    total_processed: u64,
    multi_page_count: u64,
    successful_count: u64,
    average_experiences: f64,
    average_quality: f64,
    history: VecDeque<HistoryEntry>,
}

/// Serializable copy of the statistics for the control surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticsSnapshot {
    /// Documents processed in total
    pub total_processed: u64,

    /// Documents measuring as multi-page
    pub multi_page_count: u64,

    /// Extractions that met the success threshold
    pub successful_count: u64,

    /// Mean experience count over successful extractions
    pub average_experiences: f64,

    /// Mean quality score over successful extractions
    pub average_quality: f64,

    /// Rounded percentage of successful extractions
    pub success_rate_percent: u8,

    /// Most recent extractions, oldest first
    pub history: Vec<HistoryEntry>,
}

impl Statistics {
    /// Fold one extraction report and its document metrics in
    pub fn record(&mut self, report: &ExtractionReport, metrics: DocumentMetrics) {
        self.total_processed += 1;
        if metrics.is_multi_page() {
            self.multi_page_count += 1;
        }

        if report.success {
            self.successful_count += 1;
            let n = self.successful_count as f64;
            self.average_experiences =
                (self.average_experiences * (n - 1.0) + report.experience_count as f64) / n;
            self.average_quality =
                (self.average_quality * (n - 1.0) + report.quality_score as f64) / n;
        }

        if self.history.len() == HISTORY_CAPACITY {
            self.history.pop_front();
        }
        self.history.push_back(HistoryEntry {
            id: report.id,
            timestamp: unix_now(),
            success: report.success,
            experience_count: report.experience_count,
            quality_score: report.quality_score,
        });
    }

    /// Rounded percentage of successful extractions
    pub fn success_rate_percent(&self) -> u8 {
        if self.total_processed == 0 {
            return 0;
        }
        let rate = 100.0 * self.successful_count as f64 / self.total_processed as f64;
        rate.round() as u8
    }

    /// Serializable copy of the current state
    pub fn snapshot(&self) -> StatisticsSnapshot {
        StatisticsSnapshot {
            total_processed: self.total_processed,
            multi_page_count: self.multi_page_count,
            successful_count: self.successful_count,
            average_experiences: self.average_experiences,
            average_quality: self.average_quality,
            success_rate_percent: self.success_rate_percent(),
            history: self.history.iter().cloned().collect(),
        }
    }

    /// Clear all counters and the history
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(success: bool, count: usize, quality: u8) -> ExtractionReport {
        ExtractionReport {
            id: ExtractionId::new(),
            is_valid: true,
            experience_count: count,
            expected_experiences: 3,
            quality_score: quality,
            success,
        }
    }

    fn small() -> DocumentMetrics {
        DocumentMetrics { chars: 500, lines: 20 }
    }

    #[test]
    fn test_averages_move_only_on_success() {
        let mut stats = Statistics::default();
        stats.record(&report(true, 4, 80), small());
        stats.record(&report(false, 0, 0), small());
        stats.record(&report(true, 2, 60), small());

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.total_processed, 3);
        assert_eq!(snapshot.successful_count, 2);
        assert!((snapshot.average_experiences - 3.0).abs() < 1e-9);
        assert!((snapshot.average_quality - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_success_rate_rounds() {
        let mut stats = Statistics::default();
        stats.record(&report(true, 3, 80), small());
        stats.record(&report(true, 3, 80), small());
        stats.record(&report(false, 0, 0), small());

        // 2 of 3 → 66.67 → 67
        assert_eq!(stats.success_rate_percent(), 67);
    }

    #[test]
    fn test_multi_page_detection() {
        let mut stats = Statistics::default();
        stats.record(&report(true, 3, 80), DocumentMetrics { chars: 3001, lines: 10 });
        stats.record(&report(true, 3, 80), DocumentMetrics { chars: 100, lines: 101 });
        stats.record(&report(true, 3, 80), DocumentMetrics { chars: 3000, lines: 100 });

        assert_eq!(stats.snapshot().multi_page_count, 2);
    }

    #[test]
    fn test_history_bounded_fifo() {
        let mut stats = Statistics::default();
        let mut ids = Vec::new();
        for i in 0..HISTORY_CAPACITY + 1 {
            let r = report(true, i, 50);
            ids.push(r.id);
            stats.record(&r, small());
        }

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.history.len(), HISTORY_CAPACITY);
        // The first entry was evicted; the survivor head is the second insert
        assert_eq!(snapshot.history[0].id, ids[1]);
        assert_eq!(snapshot.history[0].experience_count, 1);
    }

    #[test]
    fn test_empty_statistics_snapshot() {
        let stats = Statistics::default();
        let snapshot = stats.snapshot();

        assert_eq!(snapshot.total_processed, 0);
        assert_eq!(snapshot.success_rate_percent, 0);
        assert_eq!(snapshot.average_experiences, 0.0);
        assert!(snapshot.history.is_empty());
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut stats = Statistics::default();
        stats.record(&report(true, 3, 90), small());

        let json = serde_json::to_string(&stats.snapshot()).unwrap();
        let back: StatisticsSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.total_processed, 1);
        assert_eq!(back.history.len(), 1);
    }
}
