// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Achievement definitions and unlock records.

use serde::{Deserialize, Serialize};

use crate::models::fish::Rarity;

/// Broad grouping of an achievement, for display and sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementKind {
    Badge,
    Milestone,
    Streak,
}

/// Display rarity tier of an achievement. No behavioral effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// Quantitative unlock rule of an achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Requirement {
    /// Distinct species spotted, all-time.
    FishCount { threshold: u32 },
    /// Distinct species of one rarity spotted.
    RarityCount { threshold: u32, rarity: Rarity },
    /// Consecutive calendar days with at least one sighting, ending today
    /// or yesterday.
    StreakDays { threshold: u32 },
    /// Distinct sighting locations (coordinates rounded to 3 decimals).
    LocationCount { threshold: u32 },
    /// Most distinct species spotted within a single calendar day.
    SpeedSpotting { threshold: u32 },
}

/// One achievement definition from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementDefinition {
    /// Unique achievement ID
    pub id: String,
    /// Kind (badge/milestone/streak)
    #[serde(rename = "type")]
    pub kind: AchievementKind,
    /// Display name
    pub name: String,
    /// Display description
    pub description: String,
    /// Display icon (emoji)
    pub icon: String,
    /// Display category
    pub category: String,
    /// Unlock rule
    pub requirement: Requirement,
    /// Display rarity tier
    pub tier: Tier,
}

/// Stored unlock event for a (user, achievement) pair.
///
/// At most one record exists per pair; unlocks are permanent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnlockRecord {
    /// Owning user ID
    pub user_id: String,
    /// Unlocked achievement ID
    pub achievement_id: String,
    /// When the achievement was unlocked (ISO 8601)
    pub unlocked_at: String,
}
