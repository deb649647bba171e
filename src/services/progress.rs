// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Achievement progress derivation.
//!
//! A pure, single-pass computation over immutable snapshots of a user's
//! sightings, the fish catalog, and the unlock store. Performs no I/O;
//! `today` is an explicit argument so streak evaluation is deterministic.
//! Calendar days are UTC days.

use std::collections::{BTreeSet, HashMap, HashSet};

use chrono::NaiveDate;

use crate::models::achievement::{AchievementDefinition, Requirement};
use crate::models::{AchievementProgress, FishSpecies, Rarity, Sighting, UnlockRecord};
use crate::services::catalog::{AchievementCatalog, ALL_COMMON_SPECIES};
use crate::time_utils::utc_calendar_day;

/// Coordinates are rounded to this many decimal places before
/// deduplication, grouping sightings within roughly a hundred meters.
const LOCATION_DECIMALS: i32 = 3;

/// Computes per-achievement progress for one user.
pub struct ProgressCalculator<'a> {
    sightings: &'a [Sighting],
    fish: &'a [FishSpecies],
    unlocks: &'a [UnlockRecord],
    catalog: &'a AchievementCatalog,
}

impl<'a> ProgressCalculator<'a> {
    pub fn new(
        sightings: &'a [Sighting],
        fish: &'a [FishSpecies],
        unlocks: &'a [UnlockRecord],
        catalog: &'a AchievementCatalog,
    ) -> Self {
        Self {
            sightings,
            fish,
            unlocks,
            catalog,
        }
    }

    /// Progress for every definition, in catalog order.
    pub fn calculate_all(&self, today: NaiveDate) -> Vec<AchievementProgress> {
        self.catalog
            .achievements()
            .iter()
            .map(|definition| self.calculate(definition, today))
            .collect()
    }

    /// Progress for a single definition.
    pub fn calculate(&self, definition: &AchievementDefinition, today: NaiveDate) -> AchievementProgress {
        let unlock = self
            .unlocks
            .iter()
            .find(|u| u.achievement_id == definition.id);

        let (current, mut max) = match definition.requirement {
            Requirement::FishCount { threshold } => (self.distinct_fish_count(), threshold),
            Requirement::RarityCount { threshold, rarity } => {
                (self.rarity_count(rarity), threshold)
            }
            Requirement::StreakDays { threshold } => (self.current_streak_days(today), threshold),
            Requirement::LocationCount { threshold } => {
                (self.distinct_location_count(), threshold)
            }
            Requirement::SpeedSpotting { threshold } => {
                (self.max_distinct_fish_in_one_day(), threshold)
            }
        };

        // The "collect all common species" max tracks the live catalog.
        if definition.id == ALL_COMMON_SPECIES {
            if let Requirement::RarityCount { rarity, .. } = definition.requirement {
                max = self.species_of_rarity(rarity).count() as u32;
            }
        }

        let current = current.min(max);
        let percentage = if max > 0 {
            f64::from(current) / f64::from(max) * 100.0
        } else {
            0.0
        };

        AchievementProgress {
            achievement_id: definition.id.clone(),
            is_unlocked: unlock.is_some(),
            current,
            max,
            percentage,
            unlocked_at: unlock.map(|u| u.unlocked_at.clone()),
        }
    }

    // ─── Rule Derivations ────────────────────────────────────────

    /// Distinct species the user has ever sighted.
    fn distinct_fish_count(&self) -> u32 {
        let unique: HashSet<&str> = self.sightings.iter().map(|s| s.fish_id.as_str()).collect();
        unique.len() as u32
    }

    /// Distinct sighted species of the given rarity.
    ///
    /// Species absent from the catalog carry no rarity and are not counted.
    fn rarity_count(&self, rarity: Rarity) -> u32 {
        let spotted: HashSet<&str> = self.sightings.iter().map(|s| s.fish_id.as_str()).collect();
        self.species_of_rarity(rarity)
            .filter(|f| spotted.contains(f.id.as_str()))
            .count() as u32
    }

    fn species_of_rarity(&self, rarity: Rarity) -> impl Iterator<Item = &FishSpecies> {
        self.fish.iter().filter(move |f| f.rarity == rarity)
    }

    /// Length of the consecutive-day sighting streak ending today or
    /// yesterday. A most recent sighting older than that breaks the streak.
    ///
    /// Sightings with unparsable dates are skipped.
    fn current_streak_days(&self, today: NaiveDate) -> u32 {
        let days: BTreeSet<NaiveDate> = self
            .sightings
            .iter()
            .filter_map(|s| utc_calendar_day(&s.sighting_date))
            .collect();

        let latest = match days.iter().next_back() {
            Some(&day) => day,
            None => return 0,
        };

        if latest != today && Some(latest) != today.pred_opt() {
            return 0;
        }

        let mut streak = 1;
        let mut expected = latest.pred_opt();
        while let Some(day) = expected {
            if !days.contains(&day) {
                break;
            }
            streak += 1;
            expected = day.pred_opt();
        }
        streak
    }

    /// Distinct coordinate pairs after rounding.
    ///
    /// Sightings with a missing or half-populated pair have no location.
    fn distinct_location_count(&self) -> u32 {
        let locations: HashSet<(i64, i64)> = self
            .sightings
            .iter()
            .filter_map(Sighting::coordinates)
            .map(|(lat, lon)| (round_coordinate(lat), round_coordinate(lon)))
            .collect();
        locations.len() as u32
    }

    /// Most distinct species sighted within a single calendar day.
    fn max_distinct_fish_in_one_day(&self) -> u32 {
        let mut by_day: HashMap<NaiveDate, HashSet<&str>> = HashMap::new();
        for sighting in self.sightings {
            if let Some(day) = utc_calendar_day(&sighting.sighting_date) {
                by_day
                    .entry(day)
                    .or_default()
                    .insert(sighting.fish_id.as_str());
            }
        }
        by_day
            .values()
            .map(|fish| fish.len() as u32)
            .max()
            .unwrap_or(0)
    }
}

/// Fixed-point representation of a coordinate at `LOCATION_DECIMALS` places.
fn round_coordinate(value: f64) -> i64 {
    (value * 10f64.powi(LOCATION_DECIMALS)).round() as i64
}
