// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Fishspot-Tracker: achievement engine for a fish-spotting tracker
//!
//! This crate computes per-achievement progress from a user's sighting
//! history and the fish catalog, and decides which achievements newly cross
//! their unlock threshold.

pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;
