//! Computed achievement progress for presentation.
//!
//! These values are derived per request from the sighting history and the
//! unlock store; nothing here is persisted.

use serde::{Deserialize, Serialize};

/// Progress toward one achievement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementProgress {
    /// Achievement this entry describes
    pub achievement_id: String,
    /// Authoritative unlock state from the unlock store. Not derived from
    /// progress: a user can sit at 100% until a check persists the unlock.
    pub is_unlocked: bool,
    /// Progress toward `max`, clamped to `[0, max]`
    pub current: u32,
    /// Unlock threshold (live catalog count for dynamic-max definitions)
    pub max: u32,
    /// `100 * current / max`, or 0 when `max` is 0
    pub percentage: f64,
    /// Unlock timestamp, when unlocked (ISO 8601)
    pub unlocked_at: Option<String>,
}

/// Rollup across the whole catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementSummary {
    /// Definitions in the catalog
    pub total: u32,
    /// How many the user has unlocked
    pub unlocked: u32,
    /// `100 * unlocked / total`, or 0 for an empty catalog
    pub unlocked_percentage: f64,
}

/// Full progress response for one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressReport {
    /// One entry per catalog definition, in catalog order
    pub progress: Vec<AchievementProgress>,
    /// Rollup counts
    pub summary: AchievementSummary,
}
