// ABOUTME: Persistence port for the workout aggregate
// ABOUTME: Object-safe async trait consumed by WorkoutStore, implemented over SQLite
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WorkoutX

//! Repository pattern for the workout store
//!
//! The store only ever sees [`WorkoutRepository`]. Every method reports
//! failures as a [`DatabaseError`] that still carries the backend's own
//! description; turning that into a caller-safe error is the store's job.

mod workout_repository;

pub use workout_repository::WorkoutRepositoryImpl;

use async_trait::async_trait;

use crate::errors::DatabaseError;
use crate::models::{
    CreatedWorkout, ExerciseRecord, NewWorkout, WorkoutDetails, WorkoutFilter, WorkoutLike,
};

/// Workout, exercise, and like persistence
#[async_trait]
pub trait WorkoutRepository: Send + Sync {
    /// Create a workout and all its exercises atomically
    async fn create_workout(&self, workout: &NewWorkout) -> Result<CreatedWorkout, DatabaseError>;

    /// List workouts matching the filter
    async fn find_workouts(
        &self,
        filter: &WorkoutFilter,
    ) -> Result<Vec<WorkoutDetails>, DatabaseError>;

    /// Get one workout by id
    async fn find_workout(&self, id: &str) -> Result<Option<WorkoutDetails>, DatabaseError>;

    /// Record a like for the pair
    async fn create_like(
        &self,
        workout_id: &str,
        user_id: &str,
    ) -> Result<WorkoutLike, DatabaseError>;

    /// Delete all likes for the pair, returning the number removed
    async fn delete_likes(&self, workout_id: &str, user_id: &str) -> Result<u64, DatabaseError>;

    /// Get the like for the pair, if any
    async fn find_like(
        &self,
        workout_id: &str,
        user_id: &str,
    ) -> Result<Option<WorkoutLike>, DatabaseError>;

    /// Get one exercise by id
    async fn find_exercise(&self, id: &str) -> Result<Option<ExerciseRecord>, DatabaseError>;

    /// Delete one exercise, returning whether it existed
    async fn delete_exercise(&self, id: &str) -> Result<bool, DatabaseError>;

    /// Delete a workout with its exercises and likes, returning whether it existed
    async fn delete_workout(&self, id: &str) -> Result<bool, DatabaseError>;
}
