// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Achievement catalog loading and lookup.
//!
//! The catalog is versioned configuration: a fixed definition table loaded
//! once at startup and never mutated at runtime. The built-in table ships
//! with the crate; deployments can override it with a JSON file.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::models::achievement::{AchievementDefinition, AchievementKind, Requirement, Tier};
use crate::models::Rarity;

/// Definition whose `RarityCount` max tracks the live number of Common
/// species in the fish catalog instead of the static threshold.
pub const ALL_COMMON_SPECIES: &str = "all_common_species";

/// The fixed achievement definition table.
#[derive(Debug, Clone)]
pub struct AchievementCatalog {
    achievements: Vec<AchievementDefinition>,
}

impl AchievementCatalog {
    /// The built-in achievement table.
    pub fn builtin() -> Self {
        Self {
            achievements: builtin_definitions(),
        }
    }

    /// Load a catalog from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| CatalogError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load a catalog from a JSON array of definitions.
    pub fn load_from_json(json_data: &str) -> Result<Self, CatalogError> {
        let achievements: Vec<AchievementDefinition> =
            serde_json::from_str(json_data).map_err(|e| CatalogError::ParseError(e.to_string()))?;

        let catalog = Self::from_definitions(achievements)?;
        tracing::info!(count = catalog.len(), "Loaded achievement catalog");
        Ok(catalog)
    }

    /// Build a catalog from definitions, rejecting duplicate IDs.
    pub fn from_definitions(
        achievements: Vec<AchievementDefinition>,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for definition in &achievements {
            if !seen.insert(definition.id.clone()) {
                return Err(CatalogError::DuplicateId(definition.id.clone()));
            }
        }
        Ok(Self { achievements })
    }

    /// Definitions in catalog order.
    pub fn achievements(&self) -> &[AchievementDefinition] {
        &self.achievements
    }

    /// Look up a definition by ID.
    pub fn get(&self, id: &str) -> Option<&AchievementDefinition> {
        self.achievements.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.achievements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.achievements.is_empty()
    }
}

fn def(
    id: &str,
    kind: AchievementKind,
    name: &str,
    description: &str,
    icon: &str,
    category: &str,
    requirement: Requirement,
    tier: Tier,
) -> AchievementDefinition {
    AchievementDefinition {
        id: id.to_string(),
        kind,
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        category: category.to_string(),
        requirement,
        tier,
    }
}

fn builtin_definitions() -> Vec<AchievementDefinition> {
    vec![
        // ─── Badges ──────────────────────────────────────────────
        def(
            "deep_sea_explorer",
            AchievementKind::Badge,
            "Deep Sea Explorer",
            "Spotted fish at 10 different locations",
            "🌊",
            "exploration",
            Requirement::LocationCount { threshold: 10 },
            Tier::Rare,
        ),
        def(
            "rare_fish_hunter",
            AchievementKind::Badge,
            "Rare Fish Hunter",
            "Spotted 5 rare fish species",
            "🎯",
            "collection",
            Requirement::RarityCount {
                threshold: 5,
                rarity: Rarity::Rare,
            },
            Tier::Rare,
        ),
        def(
            "speed_spotter",
            AchievementKind::Badge,
            "Speed Spotter",
            "Spotted 3 fish in one day",
            "⚡",
            "speed",
            Requirement::SpeedSpotting { threshold: 3 },
            Tier::Common,
        ),
        def(
            "epic_collector",
            AchievementKind::Badge,
            "Epic Fish Collector",
            "Spotted 2 epic fish species",
            "👑",
            "collection",
            Requirement::RarityCount {
                threshold: 2,
                rarity: Rarity::Epic,
            },
            Tier::Epic,
        ),
        // ─── Milestones ──────────────────────────────────────────
        def(
            "first_catch",
            AchievementKind::Milestone,
            "First Catch",
            "Spotted your first fish",
            "🐟",
            "milestone",
            Requirement::FishCount { threshold: 1 },
            Tier::Common,
        ),
        def(
            "ten_fish_milestone",
            AchievementKind::Milestone,
            "Double Digits",
            "Spotted 10 different fish species",
            "🔟",
            "milestone",
            Requirement::FishCount { threshold: 10 },
            Tier::Common,
        ),
        def(
            ALL_COMMON_SPECIES,
            AchievementKind::Milestone,
            "Common Collector",
            "Spotted all common fish species",
            "🏆",
            "milestone",
            // Threshold is unused here; the max tracks the live catalog.
            Requirement::RarityCount {
                threshold: 0,
                rarity: Rarity::Common,
            },
            Tier::Rare,
        ),
        def(
            "marine_master",
            AchievementKind::Milestone,
            "Marine Master",
            "Spotted 50 different fish species",
            "🐠",
            "milestone",
            Requirement::FishCount { threshold: 50 },
            Tier::Epic,
        ),
        // ─── Streaks ─────────────────────────────────────────────
        def(
            "daily_spotter",
            AchievementKind::Streak,
            "Daily Spotter",
            "Spotted fish for 3 consecutive days",
            "📅",
            "consistency",
            Requirement::StreakDays { threshold: 3 },
            Tier::Common,
        ),
        def(
            "weekly_explorer",
            AchievementKind::Streak,
            "7-Day Spotter",
            "Spotted fish for 7 consecutive days",
            "📊",
            "consistency",
            Requirement::StreakDays { threshold: 7 },
            Tier::Rare,
        ),
        def(
            "monthly_biologist",
            AchievementKind::Streak,
            "Monthly Marine Biologist",
            "Spotted fish for 30 consecutive days",
            "🧪",
            "consistency",
            Requirement::StreakDays { threshold: 30 },
            Tier::Legendary,
        ),
        def(
            "dedication_master",
            AchievementKind::Streak,
            "Dedication Master",
            "Spotted fish for 100 consecutive days",
            "💎",
            "consistency",
            Requirement::StreakDays { threshold: 100 },
            Tier::Legendary,
        ),
    ]
}

/// Errors from catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse catalog JSON: {0}")]
    ParseError(String),

    #[error("Duplicate achievement id: {0}")]
    DuplicateId(String),
}
