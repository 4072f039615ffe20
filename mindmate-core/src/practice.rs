//! Mindfulness exercise and yoga pose catalog
//!
//! Static guidance data plus the arithmetic that sizes a guided session.
//! Timers and audio playback belong to the presentation layer.

use serde::Serialize;

/// Guided mindfulness exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Exercise {
    /// Inhale 4s, hold 4s, exhale 4s
    FourFourFour,
    /// Inhale 4s, hold 4s, exhale 4s, hold 4s
    BoxBreathing,
    /// Open-ended guided visualization
    Visualization,
}

impl Exercise {
    /// All exercises, in display order.
    pub fn all() -> [Exercise; 3] {
        [
            Exercise::FourFourFour,
            Exercise::BoxBreathing,
            Exercise::Visualization,
        ]
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Exercise::FourFourFour => "4-4-4 Breathing",
            Exercise::BoxBreathing => "Box Breathing",
            Exercise::Visualization => "Visualization",
        }
    }

    /// Guidance text shown before the session starts.
    pub fn guidance(&self) -> &'static str {
        match self {
            Exercise::FourFourFour => {
                "Inhale for 4s, hold for 4s, exhale for 4s. Repeat this cycle to calm your nervous system."
            }
            Exercise::BoxBreathing => {
                "Inhale 4s, hold 4s, exhale 4s, hold 4s. This helps reset your breath and attention."
            }
            Exercise::Visualization => {
                "Close your eyes and picture a peaceful place. Notice colors, sounds, and sensations."
            }
        }
    }

    /// Seconds per breathing cycle; None for untimed exercises.
    pub fn cycle_seconds(&self) -> Option<u32> {
        match self {
            Exercise::FourFourFour => Some(12),
            // Box has an extra hold
            Exercise::BoxBreathing => Some(16),
            Exercise::Visualization => None,
        }
    }

    /// Full breathing cycles that fit in a session of `minutes`.
    ///
    /// At least one cycle always runs. Untimed exercises yield None.
    pub fn cycles_for(&self, minutes: u32) -> Option<u32> {
        let cycle = self.cycle_seconds()?;
        Some(std::cmp::max(1, minutes * 60 / cycle))
    }
}

/// Guided yoga poses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum YogaPose {
    ChildsPose,
    EasyPose,
    CatCow,
}

impl YogaPose {
    /// All poses, in display order.
    pub fn all() -> [YogaPose; 3] {
        [YogaPose::ChildsPose, YogaPose::EasyPose, YogaPose::CatCow]
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            YogaPose::ChildsPose => "Child's Pose",
            YogaPose::EasyPose => "Easy Pose",
            YogaPose::CatCow => "Cat-Cow",
        }
    }

    /// Ordered steps for a guided flow through this pose.
    pub fn steps(&self) -> &'static [&'static str] {
        match self {
            YogaPose::ChildsPose => &[
                "Come to your knees and sit back on your heels.",
                "Fold forward, forehead to the mat, arms extended or relaxed.",
                "Breathe here and feel the back release.",
            ],
            YogaPose::EasyPose => &[
                "Sit cross-legged with a straight spine.",
                "Rest hands on knees and soften your shoulders.",
                "Breathe slowly and focus on grounding.",
            ],
            YogaPose::CatCow => &[
                "Start on hands and knees.",
                "Inhale: drop belly and lift gaze (Cow).",
                "Exhale: round the back and tuck chin (Cat). Repeat.",
            ],
        }
    }

    /// Total seconds for a flow holding each step `hold_seconds`.
    pub fn flow_seconds(&self, hold_seconds: u32) -> u32 {
        self.steps().len() as u32 * hold_seconds
    }
}
