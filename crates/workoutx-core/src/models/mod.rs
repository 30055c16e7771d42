// ABOUTME: Workout aggregate models: workouts, exercises, likes, and user projections
// ABOUTME: Request shapes, creation results, and read projections used by the workout store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WorkoutX

//! Data models for the workout aggregate.
//!
//! A [`Workout`](workout) owns its exercises (composition) and participates in
//! likes together with users. Users themselves are owned by the external
//! identity service and only appear here as a read-only [`UserProfile`].

/// Exercise input and projections
pub mod exercise;
/// Like relation between a workout and a user
pub mod like;
/// Read-only public projection of a user
pub mod user;
/// Workout visibility, requests, filters, and projections
pub mod workout;

pub use exercise::{Exercise, ExerciseRecord, ExerciseSpec};
pub use like::{LikeRef, WorkoutLike};
pub use user::UserProfile;
pub use workout::{CreatedWorkout, NewWorkout, Visibility, WorkoutDetails, WorkoutFilter};
