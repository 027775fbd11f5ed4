//! Analysis history
//!
//! Append-only in-memory record of completed analyses for the lifetime of
//! the process. Entries are written once and never mutated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::NormalizedResult;

/// One completed analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// When the analysis completed
    pub timestamp: DateTime<Utc>,
    /// Name of the analyzed file
    pub filename: String,
    /// Overall score of the result
    pub overall_score: f64,
}

/// Aggregate statistics over the session history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryStatistics {
    /// Number of completed analyses
    pub total_analyses: usize,
    /// Average overall score, one decimal, absent when no analyses ran
    pub average_score: Option<f64>,
    /// Timestamp of the most recent analysis
    pub latest_analysis: Option<DateTime<Utc>>,
}

/// Append-only list of completed analyses.
#[derive(Debug, Default)]
pub struct AnalysisHistory {
    entries: Vec<HistoryEntry>,
}

impl AnalysisHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed analysis.
    pub fn record(&mut self, filename: &str, result: &NormalizedResult) {
        self.entries.push(HistoryEntry {
            timestamp: Utc::now(),
            filename: filename.to_string(),
            overall_score: result.overall_score,
        });
    }

    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Aggregate statistics over everything recorded so far.
    #[must_use]
    pub fn statistics(&self) -> HistoryStatistics {
        if self.entries.is_empty() {
            return HistoryStatistics {
                total_analyses: 0,
                average_score: None,
                latest_analysis: None,
            };
        }

        let total = self.entries.len();
        let sum: f64 = self.entries.iter().map(|entry| entry.overall_score).sum();
        let average = (sum / total as f64 * 10.0).round() / 10.0;

        HistoryStatistics {
            total_analyses: total,
            average_score: Some(average),
            latest_analysis: self.entries.last().map(|entry| entry.timestamp),
        }
    }
}
