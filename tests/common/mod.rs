// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for integration tests.

use fishspot_tracker::db::MemoryDb;
use fishspot_tracker::models::{FishSpecies, Rarity, Sighting};
use fishspot_tracker::time_utils::format_utc_rfc3339;

/// RFC 3339 timestamp `offset` days ago.
#[allow(dead_code)]
pub fn days_ago(offset: i64) -> String {
    format_utc_rfc3339(chrono::Utc::now() - chrono::Duration::days(offset))
}

/// Build a sighting without coordinates.
#[allow(dead_code)]
pub fn make_sighting(user_id: &str, fish_id: &str, sighting_date: &str) -> Sighting {
    Sighting {
        id: format!("{}_{}_{}", user_id, fish_id, sighting_date),
        user_id: user_id.to_string(),
        fish_id: fish_id.to_string(),
        latitude: None,
        longitude: None,
        sighting_date: sighting_date.to_string(),
        created_at: sighting_date.to_string(),
    }
}

/// Seed the standard test fish catalog: three common, two rare, one epic.
#[allow(dead_code)]
pub async fn seed_fish(db: &MemoryDb) {
    let species = [
        ("anchovy", Rarity::Common),
        ("sardine", Rarity::Common),
        ("herring", Rarity::Common),
        ("sunfish", Rarity::Rare),
        ("swordfish", Rarity::Rare),
        ("coelacanth", Rarity::Epic),
    ];

    for (id, rarity) in species {
        db.upsert_fish(&FishSpecies {
            id: id.to_string(),
            name: id.to_string(),
            rarity,
        })
        .await
        .expect("Failed to seed fish catalog");
    }
}
