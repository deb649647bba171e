// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Fish species reference data from the external catalog.

use serde::{Deserialize, Serialize};

/// Rarity classification of a fish species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
}

/// A species entry from the read-only fish catalog.
///
/// Only `id` and `rarity` feed achievement rules; `name` is display data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FishSpecies {
    /// Catalog species ID
    pub id: String,
    /// Display name
    pub name: String,
    /// Rarity classification
    pub rarity: Rarity,
}
