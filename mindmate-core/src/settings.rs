//! Key-value settings interface and typed accessors
//!
//! The engine only ever sees the [`SettingsStore`] trait; the SQLite
//! implementation lives in the db layer. Values are JSON-encoded strings.
//!
//! [`Settings`] wraps a store with typed getters/setters for the keys the
//! companion persists. Getters degrade: a missing key, a failing store, or
//! an undecodable value all yield the default, with a warning logged. The
//! companion should never refuse to run because a preference would not load.

use crate::error::Result;
use crate::types::{MusicMood, SessionContext, UserProfile};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Minimal key-value persistence contract.
///
/// Keys are arbitrary strings; values are opaque to the store.
pub trait SettingsStore {
    /// Fetch a value, None when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Settings key: persisted voice preference (bool).
pub const KEY_VOICE_ENABLED: &str = "voice_enabled";
/// Settings key: onboarding profile (UserProfile JSON).
pub const KEY_USER_PROFILE: &str = "user_profile";
/// Settings key: last date a low-mood check-in was shown ("YYYY-MM-DD").
pub const KEY_LAST_ALERT_DATE: &str = "last_alert_date";
/// Settings key: last mood music played (MusicMood string).
pub const KEY_LAST_PLAYED_MOOD: &str = "last_played_mood";

/// Typed view over any [`SettingsStore`].
pub struct Settings<'a> {
    store: &'a dyn SettingsStore,
}

impl<'a> Settings<'a> {
    pub fn new(store: &'a dyn SettingsStore) -> Self {
        Self { store }
    }

    /// Decode a JSON-encoded value, degrading to None on any failure.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.store.get(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!(key, error = %e, "Undecodable settings value, using default");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(key, error = %e, "Settings read failed, using default");
                None
            }
        }
    }

    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw)
    }

    /// Persisted voice preference, false by default.
    pub fn voice_enabled(&self) -> bool {
        self.get_json(KEY_VOICE_ENABLED).unwrap_or(false)
    }

    pub fn set_voice_enabled(&self, enabled: bool) -> Result<()> {
        self.set_json(KEY_VOICE_ENABLED, &enabled)
    }

    /// Onboarding profile, None until the human fills one in.
    pub fn user_profile(&self) -> Option<UserProfile> {
        self.get_json(KEY_USER_PROFILE)
    }

    pub fn set_user_profile(&self, profile: &UserProfile) -> Result<()> {
        self.set_json(KEY_USER_PROFILE, profile)
    }

    /// Last date a low-mood check-in fired, for same-day debounce.
    pub fn last_alert_date(&self) -> Option<NaiveDate> {
        self.get_json::<String>(KEY_LAST_ALERT_DATE)
            .and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok())
    }

    pub fn set_last_alert_date(&self, date: NaiveDate) -> Result<()> {
        self.set_json(KEY_LAST_ALERT_DATE, &date.format("%Y-%m-%d").to_string())
    }

    /// Last mood music played, None until music has been played.
    pub fn last_played_mood(&self) -> Option<MusicMood> {
        self.get_json::<String>(KEY_LAST_PLAYED_MOOD)
            .and_then(|s| s.parse().ok())
    }

    pub fn set_last_played_mood(&self, mood: MusicMood) -> Result<()> {
        self.set_json(KEY_LAST_PLAYED_MOOD, &mood.as_str())
    }

    /// Voice is allowed only when both the session toggle and the
    /// persisted preference are on.
    pub fn voice_allowed(&self, session: &SessionContext) -> bool {
        session.voice && self.voice_enabled()
    }
}
