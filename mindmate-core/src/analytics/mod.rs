//! Mood analytics for mindmate
//!
//! Pure, recompute-from-scratch transforms over snapshots of the chat
//! and journal logs:
//! - Positivity classification and per-day mood samples
//! - Streak counting and the weekly positivity mean
//! - The bucketed mood trend series
//! - Journal improvement heuristics
//! - The gentle check-in decision (the one function that touches state,
//!   for its once-per-day debounce)
//! - The assembled progress overview
//!
//! Every function takes already-materialized in-memory sequences; the
//! caller owns all I/O and snapshot consistency.

pub mod checkin;
pub mod journal;
pub mod mood;
pub mod overview;
pub mod trend;

pub use checkin::{gentle_check_in, CheckInPolicy};
pub use journal::{
    journal_improvement_estimate, progress_excerpts, shows_improvement, JournalingSummary,
    DEFAULT_JOURNAL_WINDOW, PROGRESS_KEYWORDS,
};
pub use mood::{
    anxious_mentions, classify_positivity, count_negative_days, is_negative_label,
    last_n_days_moods, negative_streak, suggested_music, weekly_positivity, NEGATIVE_KEYWORDS,
    POSITIVE_KEYWORDS,
};
pub use overview::{generate_overview, EmotionalInsights, ProgressOverview};
pub use trend::{bucketed_mood_trend, mood_counts, top_moods, DEFAULT_TREND_BUCKETS};
