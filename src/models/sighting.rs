// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! User fish sighting model.

use serde::{Deserialize, Serialize};

/// A single logged observation of a fish species by a user.
///
/// Immutable once created; the engine never updates or deletes sightings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sighting {
    /// Sighting ID
    pub id: String,
    /// Owning user ID
    pub user_id: String,
    /// Species ID from the external fish catalog
    pub fish_id: String,
    /// User-reported latitude, if any
    pub latitude: Option<f64>,
    /// User-reported longitude, if any
    pub longitude: Option<f64>,
    /// When the fish was sighted (ISO 8601)
    pub sighting_date: String,
    /// When this record was created (ISO 8601)
    pub created_at: String,
}

impl Sighting {
    /// The coordinate pair, if both halves are present.
    ///
    /// A half-populated pair counts as no location at all.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}
