// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Achievement evaluation service.
//!
//! Handles the core workflow:
//! 1. Fetch the user's sightings, the fish catalog, and current unlocks
//! 2. Compute per-achievement progress
//! 3. Reconcile progress against the unlock store
//! 4. Persist newly qualifying unlocks (insert-if-absent)
//! 5. Recompute progress against the updated unlock set

use std::path::Path;

use chrono::Utc;

use crate::db::MemoryDb;
use crate::error::{AppError, Result};
use crate::models::achievement::AchievementDefinition;
use crate::models::{AchievementProgress, AchievementSummary, ProgressReport};
use crate::services::catalog::AchievementCatalog;
use crate::services::progress::ProgressCalculator;
use crate::services::reconcile::newly_qualifying;
use crate::time_utils::format_utc_rfc3339;

/// Outcome of an unlock check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Definitions this check unlocked, in catalog order
    pub newly_unlocked: Vec<AchievementDefinition>,
    /// Progress against the unlock state after persisting
    pub report: ProgressReport,
}

/// Evaluates achievement progress and persists unlocks.
#[derive(Clone)]
pub struct AchievementService {
    db: MemoryDb,
    catalog: AchievementCatalog,
}

impl AchievementService {
    pub fn new(db: MemoryDb, catalog: AchievementCatalog) -> Self {
        Self { db, catalog }
    }

    /// Build a service with a deploy-provided catalog file instead of the
    /// built-in table.
    pub fn with_catalog_file<P: AsRef<Path>>(db: MemoryDb, path: P) -> Result<Self> {
        let catalog = AchievementCatalog::load_from_file(path)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Catalog error: {}", e)))?;
        Ok(Self::new(db, catalog))
    }

    /// The catalog this service evaluates against.
    pub fn catalog(&self) -> &AchievementCatalog {
        &self.catalog
    }

    /// Current progress report for a user. Read-only: never unlocks.
    pub async fn progress_report(&self, user_id: &str) -> Result<ProgressReport> {
        let sightings = self.db.sightings_for_user(user_id).await?;
        let fish = self.db.list_fish().await?;
        let unlocks = self.db.unlocks_for_user(user_id).await?;

        let calculator = ProgressCalculator::new(&sightings, &fish, &unlocks, &self.catalog);
        let progress = calculator.calculate_all(Utc::now().date_naive());
        Ok(self.build_report(progress))
    }

    /// Check a user's progress and persist any newly qualifying unlocks.
    ///
    /// Safe to re-run: the unlock store's insert-if-absent absorbs repeats
    /// and concurrent checks, and "already unlocked" is an expected no-op.
    pub async fn check_and_unlock(&self, user_id: &str) -> Result<CheckResult> {
        let sightings = self.db.sightings_for_user(user_id).await?;
        let fish = self.db.list_fish().await?;
        let unlocks = self.db.unlocks_for_user(user_id).await?;

        let today = Utc::now().date_naive();
        let calculator = ProgressCalculator::new(&sightings, &fish, &unlocks, &self.catalog);
        let mut progress = calculator.calculate_all(today);

        let candidates = newly_qualifying(&progress);
        let now = format_utc_rfc3339(Utc::now());

        let mut newly_unlocked = Vec::new();
        for achievement_id in &candidates {
            let inserted = self
                .db
                .insert_unlock_if_absent(user_id, achievement_id, &now)
                .await?;
            if !inserted {
                // Lost a race with a concurrent check; the record exists.
                tracing::debug!(
                    user_id,
                    achievement_id = %achievement_id,
                    "Achievement already unlocked"
                );
                continue;
            }

            if let Some(definition) = self.catalog.get(achievement_id) {
                tracing::info!(
                    user_id,
                    achievement_id = %achievement_id,
                    "Achievement unlocked"
                );
                newly_unlocked.push(definition.clone());
            }
        }

        // The candidates now have unlock records, whether this check or a
        // concurrent one persisted them; recompute so the report agrees.
        if !candidates.is_empty() {
            let unlocks = self.db.unlocks_for_user(user_id).await?;
            let calculator = ProgressCalculator::new(&sightings, &fish, &unlocks, &self.catalog);
            progress = calculator.calculate_all(today);
        }

        Ok(CheckResult {
            newly_unlocked,
            report: self.build_report(progress),
        })
    }

    fn build_report(&self, progress: Vec<AchievementProgress>) -> ProgressReport {
        let total = self.catalog.len() as u32;
        let unlocked = progress.iter().filter(|p| p.is_unlocked).count() as u32;
        let unlocked_percentage = if total > 0 {
            f64::from(unlocked) / f64::from(total) * 100.0
        } else {
            0.0
        };

        ProgressReport {
            progress,
            summary: AchievementSummary {
                total,
                unlocked,
                unlocked_percentage,
            },
        }
    }
}
