//! Progress overview generation
//!
//! One read-everything-then-compute entry point that assembles the data
//! behind the progress view: wellness counters, journaling activity,
//! emotional insights, and the check-in decision.

use crate::analytics::journal::{journal_improvement_estimate, progress_excerpts, JournalingSummary};
use crate::analytics::mood::{
    anxious_mentions, last_n_days_moods, negative_streak, suggested_music, weekly_positivity,
};
use crate::analytics::trend::bucketed_mood_trend;
use crate::analytics::{checkin, trend};
use crate::config::AnalyticsConfig;
use crate::db::Database;
use crate::error::Result;
use crate::settings::SettingsStore;
use crate::types::{MusicMood, SessionContext, WellnessCounters};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Days of samples behind the weekly positivity figure.
const POSITIVITY_WINDOW_DAYS: usize = 7;
/// Days of samples behind the current-streak figure.
const STREAK_WINDOW_DAYS: usize = 14;
/// Most frequent moods listed in the insights.
const TOP_MOOD_COUNT: usize = 5;
/// Excerpts and anxious mentions shown.
const EXAMPLE_COUNT: usize = 3;

/// Mood-derived insights for the progress view.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EmotionalInsights {
    /// Chats carrying a mood label
    pub total_labeled: usize,
    /// Most frequent moods, count descending
    pub top_moods: Vec<(String, usize)>,
    /// Per-label counts across chronological buckets
    pub trend: BTreeMap<String, Vec<usize>>,
    /// Recent anxious (timestamp, message) pairs, newest-first
    pub anxious_mentions: Vec<(String, String)>,
}

/// Everything the progress view presents, computed in one pass.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressOverview {
    /// Practice counters for the current session
    pub wellness: WellnessCounters,
    /// Journaling activity and the improvement estimate
    pub journaling: JournalingSummary,
    /// Mood tallies, trend, and anxious mentions
    pub insights: EmotionalInsights,
    /// Mean positivity over the last 7 days
    pub weekly_positivity: f64,
    /// Current run of negative days (within the last 14)
    pub negative_streak: usize,
    /// Whether to offer a gentle check-in today
    pub check_in: bool,
    /// Music mood matching the latest chat
    pub suggested_music: MusicMood,
}

/// Assemble the progress overview from the store.
///
/// An empty store produces all neutral defaults, never an error. The
/// check-in decision is debounced through the database's settings table.
pub fn generate_overview(
    db: &Database,
    session: &SessionContext,
    config: &AnalyticsConfig,
    today: NaiveDate,
) -> Result<ProgressOverview> {
    let chats = db.chat_history()?;
    let journals = db.journal_history()?;

    tracing::debug!(
        chats = chats.len(),
        journals = journals.len(),
        "Generating progress overview"
    );

    let journaling = JournalingSummary {
        total_entries: journals.len(),
        improvement_pct: journal_improvement_estimate(&journals, config.journal_window),
        excerpts: progress_excerpts(&journals, config.journal_window, EXAMPLE_COUNT)
            .into_iter()
            .map(|r| (r.date.clone(), r.entry.clone()))
            .collect(),
    };

    // The trend reads chronologically; the store serves newest-first
    let mut chronological = chats.clone();
    chronological.reverse();

    let insights = EmotionalInsights {
        total_labeled: chats.iter().filter(|c| !c.mood_label().is_empty()).count(),
        top_moods: trend::top_moods(&chats, TOP_MOOD_COUNT),
        trend: bucketed_mood_trend(&chronological, config.trend_buckets),
        anxious_mentions: anxious_mentions(&chats)
            .into_iter()
            .take(EXAMPLE_COUNT)
            .map(|r| (r.timestamp.clone(), r.user_message.clone()))
            .collect(),
    };

    let week = last_n_days_moods(&chats, POSITIVITY_WINDOW_DAYS);
    let fortnight = last_n_days_moods(&chats, STREAK_WINDOW_DAYS);

    let policy = checkin::CheckInPolicy::from(config);
    let check_in = checkin::gentle_check_in(&chats, today, Some(db as &dyn SettingsStore), &policy);

    Ok(ProgressOverview {
        wellness: session.counters,
        journaling,
        insights,
        weekly_positivity: weekly_positivity(&week),
        negative_streak: negative_streak(&fortnight),
        check_in,
        suggested_music: suggested_music(&chats),
    })
}
