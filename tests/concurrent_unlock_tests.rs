//! Concurrent unlock checks must never double-unlock.
//!
//! Two evaluations for the same user can both see a stale unlock snapshot
//! and both propose the same achievement; the store's insert-if-absent has
//! to collapse them to a single record.

mod common;

use common::{days_ago, make_sighting, seed_fish};
use fishspot_tracker::db::MemoryDb;
use fishspot_tracker::services::{AchievementCatalog, AchievementService};

const NUM_CONCURRENT_CHECKS: usize = 10;

#[tokio::test]
async fn test_concurrent_checks_unlock_exactly_once() {
    let db = MemoryDb::new();
    seed_fish(&db).await;
    db.insert_sighting(&make_sighting("u1", "anchovy", &days_ago(0)))
        .await
        .unwrap();

    let service = AchievementService::new(db.clone(), AchievementCatalog::builtin());

    let mut handles = vec![];
    for _ in 0..NUM_CONCURRENT_CHECKS {
        let service = service.clone();
        handles.push(tokio::spawn(
            async move { service.check_and_unlock("u1").await },
        ));
    }

    let mut total_newly_unlocked = 0;
    for handle in handles {
        let result = handle
            .await
            .expect("Task join failed")
            .expect("Unlock check failed");
        total_newly_unlocked += result.newly_unlocked.len();
    }

    // Exactly one task won the insert; the rest saw "already unlocked"
    assert_eq!(total_newly_unlocked, 1);
    assert_eq!(db.unlock_count("u1").await.unwrap(), 1);

    let unlocks = db.unlocks_for_user("u1").await.unwrap();
    assert_eq!(unlocks.len(), 1);
    assert_eq!(unlocks[0].achievement_id, "first_catch");
}

#[tokio::test]
async fn test_rerun_after_race_reports_unlocked() {
    let db = MemoryDb::new();
    seed_fish(&db).await;
    db.insert_sighting(&make_sighting("u1", "anchovy", &days_ago(0)))
        .await
        .unwrap();

    let service = AchievementService::new(db.clone(), AchievementCatalog::builtin());
    service.check_and_unlock("u1").await.unwrap();

    // A later check against the settled store proposes nothing new but
    // reports the unlock
    let result = service.check_and_unlock("u1").await.unwrap();
    assert!(result.newly_unlocked.is_empty());

    let entry = result
        .report
        .progress
        .iter()
        .find(|p| p.achievement_id == "first_catch")
        .unwrap();
    assert!(entry.is_unlocked);
}
