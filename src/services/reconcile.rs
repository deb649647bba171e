// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Unlock reconciliation.

use crate::models::AchievementProgress;

/// IDs of achievements whose progress has reached the threshold but which
/// have no unlock record yet, in input order.
///
/// A pure proposal over one progress snapshot. Persisting the unlocks, and
/// suppressing duplicates when concurrent evaluations propose the same ID,
/// is the unlock store's job.
pub fn newly_qualifying(progress: &[AchievementProgress]) -> Vec<String> {
    progress
        .iter()
        .filter(|p| !p.is_unlocked && p.current >= p.max)
        .map(|p| p.achievement_id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(achievement_id: &str, current: u32, max: u32, is_unlocked: bool) -> AchievementProgress {
        AchievementProgress {
            achievement_id: achievement_id.to_string(),
            is_unlocked,
            current,
            max,
            percentage: if max > 0 {
                f64::from(current) / f64::from(max) * 100.0
            } else {
                0.0
            },
            unlocked_at: None,
        }
    }

    #[test]
    fn test_qualifies_at_exact_threshold() {
        let progress = vec![
            entry("first_catch", 1, 1, false),
            entry("ten_fish_milestone", 4, 10, false),
        ];

        assert_eq!(newly_qualifying(&progress), vec!["first_catch"]);
    }

    #[test]
    fn test_already_unlocked_is_excluded() {
        let progress = vec![
            entry("first_catch", 1, 1, true),
            entry("speed_spotter", 3, 3, false),
        ];

        assert_eq!(newly_qualifying(&progress), vec!["speed_spotter"]);
    }

    #[test]
    fn test_idempotent_over_the_same_snapshot() {
        let progress = vec![
            entry("first_catch", 1, 1, false),
            entry("daily_spotter", 3, 3, false),
            entry("marine_master", 12, 50, false),
        ];

        let first = newly_qualifying(&progress);
        let second = newly_qualifying(&progress);
        assert_eq!(first, second);
        assert_eq!(first, vec!["first_catch", "daily_spotter"]);
    }

    #[test]
    fn test_empty_progress_proposes_nothing() {
        assert!(newly_qualifying(&[]).is_empty());
    }
}
