// ABOUTME: SQLite implementation of the workout persistence port
// ABOUTME: Implements WorkoutRepository by delegating to WorkoutsManager
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WorkoutX

use async_trait::async_trait;

use super::WorkoutRepository;
use crate::database::Database;
use crate::errors::DatabaseError;
use crate::models::{
    CreatedWorkout, ExerciseRecord, NewWorkout, WorkoutDetails, WorkoutFilter, WorkoutLike,
};

/// `SQLite` implementation of `WorkoutRepository`
pub struct WorkoutRepositoryImpl {
    db: Database,
}

impl WorkoutRepositoryImpl {
    /// Create a new `WorkoutRepository` with the given database connection
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WorkoutRepository for WorkoutRepositoryImpl {
    async fn create_workout(&self, workout: &NewWorkout) -> Result<CreatedWorkout, DatabaseError> {
        self.db.workouts().create_workout(workout).await
    }

    async fn find_workouts(
        &self,
        filter: &WorkoutFilter,
    ) -> Result<Vec<WorkoutDetails>, DatabaseError> {
        self.db.workouts().find_workouts(filter).await
    }

    async fn find_workout(&self, id: &str) -> Result<Option<WorkoutDetails>, DatabaseError> {
        self.db.workouts().find_workout(id).await
    }

    async fn create_like(
        &self,
        workout_id: &str,
        user_id: &str,
    ) -> Result<WorkoutLike, DatabaseError> {
        self.db.workouts().create_like(workout_id, user_id).await
    }

    async fn delete_likes(&self, workout_id: &str, user_id: &str) -> Result<u64, DatabaseError> {
        self.db.workouts().delete_likes(workout_id, user_id).await
    }

    async fn find_like(
        &self,
        workout_id: &str,
        user_id: &str,
    ) -> Result<Option<WorkoutLike>, DatabaseError> {
        self.db.workouts().find_like(workout_id, user_id).await
    }

    async fn find_exercise(&self, id: &str) -> Result<Option<ExerciseRecord>, DatabaseError> {
        self.db.workouts().find_exercise(id).await
    }

    async fn delete_exercise(&self, id: &str) -> Result<bool, DatabaseError> {
        self.db.workouts().delete_exercise(id).await
    }

    async fn delete_workout(&self, id: &str) -> Result<bool, DatabaseError> {
        self.db.workouts().delete_workout(id).await
    }
}
