// ABOUTME: Workout aggregate data models re-exported from workoutx-core
// ABOUTME: Workouts, exercises, likes, visibility, and the user projection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WorkoutX

//! # Data Models
//!
//! The models live in `workoutx-core` so that anything consuming the store's
//! results can depend on them without pulling in `sqlx`.

pub use workoutx_core::models::*;
