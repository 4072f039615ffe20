//! Core domain types for mindmate
//!
//! These types represent the canonical data model the companion persists
//! and the derived views the analytics engine computes over it.
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **ChatRecord** | One exchange between the human and the companion, with an optional mood label |
//! | **JournalRecord** | One free-text journal entry for a calendar day |
//! | **Mood label** | A short free-text string classifying emotional tone, produced by an external classifier |
//! | **MoodSample** | One (date, label) pair derived from the chat log, at most one per calendar day |
//! | **MusicMood** | The fixed set of moods the music library is keyed by |
//! | **SessionContext** | Per-session state (voice toggle, wellness counters), never ambient globals |
//!
//! Chat and journal logs are append-only. Nothing in this crate mutates or
//! deletes a record once stored; derived views are recomputed from scratch
//! on every call.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

// ============================================
// Chat
// ============================================

/// One chat exchange with the companion.
///
/// `timestamp` is a "YYYY-MM-DD HH:MM:SS" string as stored; the date
/// portion is extracted leniently (see [`ChatRecord::date`]) so a
/// malformed timestamp never aborts an aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRecord {
    /// Row id (None until stored)
    pub id: Option<i64>,
    /// Creation time, "YYYY-MM-DD HH:MM:SS"
    pub timestamp: String,
    /// What the human wrote
    pub user_message: String,
    /// What the companion answered
    pub assistant_message: String,
    /// Mood label from the external classifier; None/empty means unlabeled
    pub mood: Option<String>,
}

impl ChatRecord {
    /// Create a record with an explicit timestamp (tests, backfills).
    pub fn new(
        timestamp: impl Into<String>,
        user_message: impl Into<String>,
        assistant_message: impl Into<String>,
        mood: Option<String>,
    ) -> Self {
        Self {
            id: None,
            timestamp: timestamp.into(),
            user_message: user_message.into(),
            assistant_message: assistant_message.into(),
            mood,
        }
    }

    /// Create a record stamped with the local wall clock.
    pub fn now(
        user_message: impl Into<String>,
        assistant_message: impl Into<String>,
        mood: Option<String>,
    ) -> Self {
        Self::new(
            Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            user_message,
            assistant_message,
            mood,
        )
    }

    /// Extract the calendar date from the timestamp.
    ///
    /// The date is the leading token before the first whitespace or 'T'
    /// separator. Returns None when that token is not a valid date; such
    /// records are excluded from date-derived views, never an error.
    pub fn date(&self) -> Option<NaiveDate> {
        let token = self
            .timestamp
            .split(|c: char| c.is_whitespace() || c == 'T')
            .next()
            .unwrap_or("");
        NaiveDate::parse_from_str(token, "%Y-%m-%d").ok()
    }

    /// Mood label lowercased, empty string when unlabeled.
    pub fn mood_label(&self) -> String {
        self.mood.as_deref().unwrap_or("").to_lowercase()
    }
}

// ============================================
// Journal
// ============================================

/// One journal entry. More than one per day is allowed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalRecord {
    /// Row id (None until stored)
    pub id: Option<i64>,
    /// Entry date, "YYYY-MM-DD"
    pub date: String,
    /// Free-text entry
    pub entry: String,
}

impl JournalRecord {
    /// Create an entry with an explicit date (tests, backfills).
    pub fn new(date: impl Into<String>, entry: impl Into<String>) -> Self {
        Self {
            id: None,
            date: date.into(),
            entry: entry.into(),
        }
    }

    /// Create an entry dated today (local time).
    pub fn today(entry: impl Into<String>) -> Self {
        Self::new(Local::now().format("%Y-%m-%d").to_string(), entry)
    }
}

// ============================================
// Derived views
// ============================================

/// One mood observation per calendar day, derived from the chat log.
///
/// When multiple chats share a date only the most recent contributes
/// (the log is consumed newest-first). `label` is lowercased; empty
/// means the day's latest chat was unlabeled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodSample {
    /// Calendar day of the observation
    pub date: NaiveDate,
    /// Lowercased mood label, possibly empty
    pub label: String,
}

impl MoodSample {
    pub fn new(date: NaiveDate, label: impl Into<String>) -> Self {
        Self {
            date,
            label: label.into(),
        }
    }
}

// ============================================
// Profile and settings values
// ============================================

/// Onboarding profile, stored as one settings value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// What the companion should call the human
    pub name: String,
    /// Self-reported pronouns
    pub pronouns: String,
    /// Self-reported baseline mood
    pub baseline_mood: String,
}

/// The moods the music library is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MusicMood {
    Calm,
    Sad,
    Anxious,
    Happy,
}

impl MusicMood {
    /// All moods, in display order.
    pub fn all() -> [MusicMood; 4] {
        [
            MusicMood::Calm,
            MusicMood::Sad,
            MusicMood::Anxious,
            MusicMood::Happy,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MusicMood::Calm => "calm",
            MusicMood::Sad => "sad",
            MusicMood::Anxious => "anxious",
            MusicMood::Happy => "happy",
        }
    }

    /// Display name for report output.
    pub fn display_name(&self) -> &'static str {
        match self {
            MusicMood::Calm => "Calm",
            MusicMood::Sad => "Sad",
            MusicMood::Anxious => "Anxious",
            MusicMood::Happy => "Happy",
        }
    }

    /// Map a free-text mood label onto a music mood.
    ///
    /// Substring checks run in priority order: anxious cues win over sad,
    /// sad over happy, happy over calm. Unmatched labels map to None.
    pub fn from_label(label: &str) -> Option<MusicMood> {
        let l = label.to_lowercase();
        if l.contains("anx") || l.contains("panic") || l.contains("worri") {
            Some(MusicMood::Anxious)
        } else if l.contains("sad") || l.contains("down") {
            Some(MusicMood::Sad)
        } else if l.contains("happy") || l.contains("joy") || l.contains("good") {
            Some(MusicMood::Happy)
        } else if l.contains("calm") || l.contains("relax") {
            Some(MusicMood::Calm)
        } else {
            None
        }
    }
}

impl std::str::FromStr for MusicMood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "calm" => Ok(MusicMood::Calm),
            "sad" => Ok(MusicMood::Sad),
            "anxious" => Ok(MusicMood::Anxious),
            "happy" => Ok(MusicMood::Happy),
            other => Err(format!("unknown music mood: {other}")),
        }
    }
}

// ============================================
// Session context
// ============================================

/// Completed-practice counts for the current session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellnessCounters {
    /// Guided meditation sessions completed
    pub meditation_sessions: u32,
    /// Mindfulness practices completed
    pub mindfulness_sessions: u32,
    /// Yoga flows completed
    pub yoga_sessions: u32,
}

impl WellnessCounters {
    /// Progress toward the 10-session goal, clamped to [0, 1].
    pub fn goal_progress(count: u32) -> f64 {
        (count as f64 / 10.0).min(1.0)
    }
}

/// Per-session state the presentation layer threads through calls.
///
/// The companion never keeps this in ambient globals; a fresh context is
/// built at session start and counters reset with it.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    /// Session voice toggle; audio also requires the persisted flag
    pub voice: bool,
    /// Practice counters for this session
    pub counters: WellnessCounters,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed guided breathing/visualization session.
    ///
    /// Mirrors the practice flow, which counts a guided session as both a
    /// mindfulness practice and a meditation.
    pub fn record_mindfulness(&mut self) {
        self.counters.mindfulness_sessions += 1;
        self.counters.meditation_sessions += 1;
    }

    /// Record a completed yoga flow.
    pub fn record_yoga(&mut self) {
        self.counters.yoga_sessions += 1;
    }
}
