// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Concurrent in-memory store with typed operations.
//!
//! Stands in for the tracker's persistent stores behind the async, fallible
//! seam a real backend satisfies:
//! - Fish catalog (read-only reference data)
//! - Sightings (append-only per-user history)
//! - Unlocks (one record per user × achievement, insert-if-absent)

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::error::Result;
use crate::models::{FishSpecies, Sighting, UnlockRecord};

/// Shared in-memory database handle. Cheap to clone.
#[derive(Clone, Default)]
pub struct MemoryDb {
    /// Fish catalog keyed by species ID
    fish: Arc<DashMap<String, FishSpecies>>,
    /// Sighting history keyed by user ID
    sightings: Arc<DashMap<String, Vec<Sighting>>>,
    /// Unlock records keyed by (user ID, achievement ID)
    unlocks: Arc<DashMap<(String, String), UnlockRecord>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    // ─── Fish Catalog ────────────────────────────────────────────

    /// Add or replace a species in the fish catalog.
    pub async fn upsert_fish(&self, fish: &FishSpecies) -> Result<()> {
        self.fish.insert(fish.id.clone(), fish.clone());
        Ok(())
    }

    /// All species in the catalog.
    pub async fn list_fish(&self) -> Result<Vec<FishSpecies>> {
        Ok(self.fish.iter().map(|entry| entry.value().clone()).collect())
    }

    // ─── Sightings ───────────────────────────────────────────────

    /// Append a sighting to its user's history.
    pub async fn insert_sighting(&self, sighting: &Sighting) -> Result<()> {
        self.sightings
            .entry(sighting.user_id.clone())
            .or_default()
            .push(sighting.clone());
        Ok(())
    }

    /// All sightings logged by a user.
    pub async fn sightings_for_user(&self, user_id: &str) -> Result<Vec<Sighting>> {
        Ok(self
            .sightings
            .get(user_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }

    // ─── Unlocks ─────────────────────────────────────────────────

    /// All unlock records for a user.
    pub async fn unlocks_for_user(&self, user_id: &str) -> Result<Vec<UnlockRecord>> {
        Ok(self
            .unlocks
            .iter()
            .filter(|entry| entry.key().0 == user_id)
            .map(|entry| entry.value().clone())
            .collect())
    }

    /// Number of achievements a user has unlocked.
    pub async fn unlock_count(&self, user_id: &str) -> Result<usize> {
        Ok(self
            .unlocks
            .iter()
            .filter(|entry| entry.key().0 == user_id)
            .count())
    }

    /// Insert an unlock record unless the (user, achievement) pair already
    /// has one. Returns `false` when the record already existed.
    ///
    /// The check-then-insert is atomic under the entry lock, so concurrent
    /// callers racing on the same pair store exactly one record.
    pub async fn insert_unlock_if_absent(
        &self,
        user_id: &str,
        achievement_id: &str,
        unlocked_at: &str,
    ) -> Result<bool> {
        let key = (user_id.to_string(), achievement_id.to_string());
        match self.unlocks.entry(key) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(entry) => {
                entry.insert(UnlockRecord {
                    user_id: user_id.to_string(),
                    achievement_id: achievement_id.to_string(),
                    unlocked_at: unlocked_at.to_string(),
                });
                Ok(true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_unlock_if_absent_inserts_once() {
        let db = MemoryDb::new();

        let inserted = db
            .insert_unlock_if_absent("u1", "first_catch", "2025-06-15T08:00:00Z")
            .await
            .unwrap();
        assert!(inserted);

        let inserted_again = db
            .insert_unlock_if_absent("u1", "first_catch", "2025-06-15T09:00:00Z")
            .await
            .unwrap();
        assert!(!inserted_again);

        let unlocks = db.unlocks_for_user("u1").await.unwrap();
        assert_eq!(unlocks.len(), 1);
        // First writer wins; the timestamp is never overwritten
        assert_eq!(unlocks[0].unlocked_at, "2025-06-15T08:00:00Z");
    }

    #[tokio::test]
    async fn test_unlocks_are_scoped_per_user() {
        let db = MemoryDb::new();

        db.insert_unlock_if_absent("u1", "first_catch", "2025-06-15T08:00:00Z")
            .await
            .unwrap();
        db.insert_unlock_if_absent("u2", "first_catch", "2025-06-15T08:00:00Z")
            .await
            .unwrap();

        assert_eq!(db.unlock_count("u1").await.unwrap(), 1);
        assert_eq!(db.unlock_count("u2").await.unwrap(), 1);
        assert_eq!(db.unlocks_for_user("u3").await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_sightings_for_unknown_user_is_empty() {
        let db = MemoryDb::new();
        assert!(db.sightings_for_user("nobody").await.unwrap().is_empty());
    }
}
