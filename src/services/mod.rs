// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod achievements;
pub mod catalog;
pub mod progress;
pub mod reconcile;

pub use achievements::{AchievementService, CheckResult};
pub use catalog::{AchievementCatalog, CatalogError};
pub use progress::ProgressCalculator;
pub use reconcile::newly_qualifying;
