//! Mood frequency tallies and the bucketed trend series
//!
//! Tallies are keyed by lowercased label; unlabeled chats never
//! contribute. The trend series reads chronologically, so it takes its
//! log oldest-first (callers holding the store's newest-first order
//! must reverse first).

use crate::types::ChatRecord;
use std::collections::BTreeMap;

/// Default number of trend buckets.
pub const DEFAULT_TREND_BUCKETS: usize = 6;

/// Occurrence count per mood label, sorted by count descending then
/// label ascending for a stable order.
pub fn mood_counts(chat_log: &[ChatRecord]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for record in chat_log {
        let label = record.mood_label();
        if !label.is_empty() {
            *counts.entry(label).or_insert(0) += 1;
        }
    }

    let mut sorted: Vec<(String, usize)> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted
}

/// The `n` most frequent mood labels.
pub fn top_moods(chat_log: &[ChatRecord], n: usize) -> Vec<(String, usize)> {
    let mut counts = mood_counts(chat_log);
    counts.truncate(n);
    counts
}

/// Per-label occurrence counts across `bucket_count` contiguous windows
/// of the log.
///
/// The log must be oldest-first; each label's series then reads
/// oldest to newest. Window size is `max(1, total / bucket_count)` and
/// remainder records fall into the last window, so the final window may
/// be shorter or longer than the rest. Labels never observed are absent;
/// an empty log yields an empty map.
pub fn bucketed_mood_trend(
    chat_log: &[ChatRecord],
    bucket_count: usize,
) -> BTreeMap<String, Vec<usize>> {
    let total = chat_log.len();
    if total == 0 || bucket_count == 0 {
        return BTreeMap::new();
    }

    let size = std::cmp::max(1, total / bucket_count);
    let windows = std::cmp::min(bucket_count, (total + size - 1) / size);

    let mut series: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for record in chat_log {
        let label = record.mood_label();
        if !label.is_empty() {
            series.entry(label).or_insert_with(|| vec![0; windows]);
        }
    }

    for w in 0..windows {
        let start = w * size;
        let end = if w == windows - 1 { total } else { (w + 1) * size };
        for record in &chat_log[start..end] {
            let label = record.mood_label();
            if let Some(counts) = series.get_mut(&label) {
                counts[w] += 1;
            }
        }
    }

    series
}
