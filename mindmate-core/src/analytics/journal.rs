//! Journal progress heuristics
//!
//! The improvement estimate is deliberately crude: a windowed keyword
//! scan over recent entries, matching the heuristic the progress view
//! has always shown.

use crate::types::JournalRecord;
use serde::Serialize;

/// Keywords suggesting an entry describes progress on a problem.
pub const PROGRESS_KEYWORDS: &[&str] = &[
    "resolved", "improved", "better", "less", "fixed", "solved", "helped", "reduced", "managed",
    "overcame",
];

/// Default number of recent entries the estimate looks at.
pub const DEFAULT_JOURNAL_WINDOW: usize = 10;

/// True when the entry text contains any progress keyword.
pub fn shows_improvement(entry: &str) -> bool {
    let low = entry.to_lowercase();
    PROGRESS_KEYWORDS.iter().any(|k| low.contains(k))
}

/// Percentage of the most recent `window` entries showing improvement.
///
/// The log must be newest-first. The divisor is the actual number of
/// entries examined, so a short log still yields a sensible percentage.
/// An empty window yields 0.0.
pub fn journal_improvement_estimate(journal_log: &[JournalRecord], window: usize) -> f64 {
    let recent = &journal_log[..journal_log.len().min(window)];
    if recent.is_empty() {
        return 0.0;
    }

    let matching = recent.iter().filter(|r| shows_improvement(&r.entry)).count();
    100.0 * matching as f64 / recent.len() as f64
}

/// The most recent entries (up to `max`, within the `window` newest)
/// whose text shows improvement. Newest-first, like the input.
pub fn progress_excerpts(
    journal_log: &[JournalRecord],
    window: usize,
    max: usize,
) -> Vec<&JournalRecord> {
    journal_log
        .iter()
        .take(window)
        .filter(|r| shows_improvement(&r.entry))
        .take(max)
        .collect()
}

/// Journaling activity summary for the progress overview.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JournalingSummary {
    /// Total entries ever written
    pub total_entries: usize,
    /// Improvement percentage over the recent window
    pub improvement_pct: f64,
    /// Recent (date, entry) pairs showing progress, newest-first
    pub excerpts: Vec<(String, String)>,
}
