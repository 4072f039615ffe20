//! Mood classification and per-day mood aggregates
//!
//! Everything here is a pure function over slices the caller already
//! materialized. Missing or empty mood labels and empty logs are valid
//! inputs with neutral outputs, never errors.

use crate::types::{ChatRecord, MoodSample, MusicMood};
use std::collections::HashSet;

/// Keywords marking a label as negative. Substring-matched, lowercase.
pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "sad", "anx", "depress", "tired", "low", "down", "worri", "panic",
];

/// Keywords marking a label as positive. Substring-matched, lowercase.
pub const POSITIVE_KEYWORDS: &[&str] = &["happy", "joy", "good", "calm", "relax"];

/// Cues in the human's own words that flag an anxious mention.
const ANXIOUS_TEXT_CUES: &[&str] = &["anxious", "anxiety", "panic", "worried"];

/// Positivity score for negative labels.
const NEGATIVE_SCORE: f64 = 0.2;
/// Positivity score for positive labels.
const POSITIVE_SCORE: f64 = 0.9;
/// Positivity score for empty or unmatched labels.
const NEUTRAL_SCORE: f64 = 0.5;

/// True when the label substring-matches the negative keyword set.
pub fn is_negative_label(label: &str) -> bool {
    let l = label.to_lowercase();
    NEGATIVE_KEYWORDS.iter().any(|k| l.contains(k))
}

/// Score a mood label on a [0, 1] positivity scale.
///
/// Negative keywords are checked first, so a label matching both sets
/// scores negative. Empty and unmatched labels are neutral (0.5).
pub fn classify_positivity(label: &str) -> f64 {
    let l = label.to_lowercase();
    if NEGATIVE_KEYWORDS.iter().any(|k| l.contains(k)) {
        NEGATIVE_SCORE
    } else if POSITIVE_KEYWORDS.iter().any(|k| l.contains(k)) {
        POSITIVE_SCORE
    } else {
        NEUTRAL_SCORE
    }
}

/// Collapse a newest-first chat log into at most `n` per-day mood samples.
///
/// One sample per calendar day; the most recent chat on a day wins.
/// Records whose timestamp has no parseable date token are skipped.
/// The result stays newest-first.
pub fn last_n_days_moods(chat_log: &[ChatRecord], n: usize) -> Vec<MoodSample> {
    let mut seen = HashSet::new();
    let mut samples = Vec::new();

    for record in chat_log {
        if samples.len() >= n {
            break;
        }
        let Some(date) = record.date() else {
            continue;
        };
        if seen.insert(date) {
            samples.push(MoodSample::new(date, record.mood_label()));
        }
    }

    samples
}

/// Length of the current run of negative days, counted from the newest
/// sample. A single non-negative day breaks the streak even when negative
/// days follow further back.
pub fn negative_streak(samples: &[MoodSample]) -> usize {
    samples
        .iter()
        .take_while(|s| is_negative_label(&s.label))
        .count()
}

/// Total negative days anywhere in the window.
pub fn count_negative_days(samples: &[MoodSample]) -> usize {
    samples
        .iter()
        .filter(|s| is_negative_label(&s.label))
        .count()
}

/// Mean positivity over the samples' labels; 0.5 for an empty window.
pub fn weekly_positivity(samples: &[MoodSample]) -> f64 {
    if samples.is_empty() {
        return NEUTRAL_SCORE;
    }
    let sum: f64 = samples.iter().map(|s| classify_positivity(&s.label)).sum();
    sum / samples.len() as f64
}

/// Chats flagged as anxious mentions, in the order given.
///
/// A chat qualifies when its mood label contains "anx" or the human's
/// message contains an anxious cue word.
pub fn anxious_mentions(chat_log: &[ChatRecord]) -> Vec<&ChatRecord> {
    chat_log
        .iter()
        .filter(|record| {
            let text = record.user_message.to_lowercase();
            record.mood_label().contains("anx") || ANXIOUS_TEXT_CUES.iter().any(|k| text.contains(k))
        })
        .collect()
}

/// Music mood for the most recent chat's label, Calm when the log is
/// empty or the label maps to nothing.
pub fn suggested_music(chat_log: &[ChatRecord]) -> MusicMood {
    chat_log
        .first()
        .and_then(|record| MusicMood::from_label(&record.mood_label()))
        .unwrap_or(MusicMood::Calm)
}
