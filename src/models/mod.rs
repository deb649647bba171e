// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod achievement;
pub mod fish;
pub mod progress;
pub mod sighting;

pub use achievement::{AchievementDefinition, AchievementKind, Requirement, Tier, UnlockRecord};
pub use fish::{FishSpecies, Rarity};
pub use progress::{AchievementProgress, AchievementSummary, ProgressReport};
pub use sighting::Sighting;
