//! Gentle low-mood check-in decision
//!
//! When most of the recent days read negative the companion offers a
//! gentle check-in. The decision here is the whole contract; presenting
//! it belongs to the caller.

use crate::analytics::mood::{count_negative_days, last_n_days_moods};
use crate::config::AnalyticsConfig;
use crate::settings::{Settings, SettingsStore};
use crate::types::ChatRecord;
use chrono::NaiveDate;

/// Window and threshold for the check-in decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckInPolicy {
    /// Days of mood samples to look back over
    pub window_days: usize,
    /// Negative days within the window required to trigger
    pub negative_threshold: usize,
}

impl Default for CheckInPolicy {
    fn default() -> Self {
        Self {
            window_days: 14,
            negative_threshold: 10,
        }
    }
}

impl From<&AnalyticsConfig> for CheckInPolicy {
    fn from(config: &AnalyticsConfig) -> Self {
        Self {
            window_days: config.check_in_window_days,
            negative_threshold: config.check_in_negative_threshold,
        }
    }
}

/// Decide whether to offer a low-mood check-in today.
///
/// The chat log must be newest-first. Triggers when at least
/// `negative_threshold` of the last `window_days` days read negative.
///
/// With a settings store available the trigger is debounced to once per
/// calendar day: firing records `today` and a same-day re-evaluation
/// returns false. Without a store (or when its reads fail) the decision
/// degrades to stateless evaluation; over-firing is acceptable there,
/// suppressing a genuine first alert is not. A failed debounce write is
/// logged and never blocks the alert.
pub fn gentle_check_in(
    chat_log: &[ChatRecord],
    today: NaiveDate,
    store: Option<&dyn SettingsStore>,
    policy: &CheckInPolicy,
) -> bool {
    let samples = last_n_days_moods(chat_log, policy.window_days);
    if count_negative_days(&samples) < policy.negative_threshold {
        return false;
    }

    let Some(store) = store else {
        // Stateless degraded mode
        return true;
    };

    let settings = Settings::new(store);
    if settings.last_alert_date() == Some(today) {
        tracing::debug!(%today, "Check-in already shown today, debouncing");
        return false;
    }

    if let Err(e) = settings.set_last_alert_date(today) {
        tracing::warn!(error = %e, "Failed to persist check-in date, alert may repeat");
    }
    true
}
