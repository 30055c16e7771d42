// ABOUTME: Domain service layer sitting between callers and the persistence port
// ABOUTME: Hosts the WorkoutStore, the only component allowed to touch workout persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WorkoutX

//! Domain service layer
//!
//! Services receive already-authenticated identities from their callers and
//! return `AppResult` values whose errors are safe to hand to any transport.

/// Workout store: creation, reads, likes, and deletion for the workout aggregate
pub mod workouts;

pub use workouts::WorkoutStore;
