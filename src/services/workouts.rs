// ABOUTME: WorkoutStore service exposing the ten workout aggregate operations
// ABOUTME: Logs backend failures in full and returns an opaque error to callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WorkoutX

//! # Workout Store
//!
//! All reads and writes on workouts, exercises, and likes go through
//! [`WorkoutStore`]. It talks to persistence only via the injected
//! [`WorkoutRepository`] and holds no other state.
//!
//! Every operation has exactly two outcomes visible to callers: a result
//! (possibly `None` for a missing entity) or [`AppError::unexpected`]. Backend
//! details such as SQL text or constraint names are written to the log at the
//! failure site and never returned.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error, instrument, warn};
use workoutx_core::coercion::normalize_generated_workout;

use crate::database::{Database, WorkoutRepository, WorkoutRepositoryImpl};
use crate::errors::{AppError, AppResult, DatabaseError};
use crate::models::{
    CreatedWorkout, ExerciseRecord, ExerciseSpec, NewWorkout, Visibility, WorkoutDetails,
    WorkoutFilter, WorkoutLike,
};

/// Log a persistence failure and replace it with the caller-safe error
fn conceal(operation: &'static str) -> impl FnOnce(DatabaseError) -> AppError {
    move |e| {
        error!(
            operation,
            retryable = e.is_retryable(),
            error = %e,
            "Workout store operation failed"
        );
        AppError::unexpected()
    }
}

/// Aggregate-oriented access to workouts, exercises, and likes
#[derive(Clone)]
pub struct WorkoutStore {
    repository: Arc<dyn WorkoutRepository>,
}

impl WorkoutStore {
    /// Create a store over any persistence port implementation
    #[must_use]
    pub fn new(repository: Arc<dyn WorkoutRepository>) -> Self {
        Self { repository }
    }

    /// Create a store backed by the `SQLite` repository
    #[must_use]
    pub fn from_database(db: Database) -> Self {
        Self::new(Arc::new(WorkoutRepositoryImpl::new(db)))
    }

    /// Create a human-authored workout with its exercises in one atomic unit
    ///
    /// Exercise fields are stored exactly as given.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::unexpected`] if persistence fails; in that case no
    /// part of the workout is stored
    #[instrument(skip(self, name, exercises), fields(exercise_count = exercises.len()))]
    pub async fn create_workout(
        &self,
        user_id: &str,
        name: &str,
        visibility: Visibility,
        exercises: Vec<ExerciseSpec>,
    ) -> AppResult<CreatedWorkout> {
        let workout = NewWorkout {
            user_id: user_id.to_owned(),
            name: name.to_owned(),
            visibility: Some(visibility),
            exercises,
        };

        self.repository
            .create_workout(&workout)
            .await
            .map_err(conceal("create_workout"))
    }

    /// Create a workout from loosely typed generation output
    ///
    /// Every field is coerced to text and visibility takes the stored default.
    /// A payload that is not an object or lacks an `exercises` array is
    /// rejected before anything is written.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::unexpected`] for a malformed payload or a
    /// persistence failure
    #[instrument(skip(self, payload))]
    pub async fn create_generated_workout(
        &self,
        user_id: &str,
        payload: &Value,
    ) -> AppResult<CreatedWorkout> {
        let workout = normalize_generated_workout(user_id, payload).map_err(|e| {
            warn!(error = %e, "Rejected malformed generated workout");
            AppError::unexpected()
        })?;

        self.repository
            .create_workout(&workout)
            .await
            .map_err(conceal("create_generated_workout"))
    }

    /// List workouts; each unset filter dimension matches everything
    ///
    /// # Errors
    ///
    /// Returns [`AppError::unexpected`] if persistence fails
    #[instrument(skip(self))]
    pub async fn list_workouts(&self, filter: &WorkoutFilter) -> AppResult<Vec<WorkoutDetails>> {
        self.repository
            .find_workouts(filter)
            .await
            .map_err(conceal("list_workouts"))
    }

    /// Get one workout; `None` when it does not exist
    ///
    /// # Errors
    ///
    /// Returns [`AppError::unexpected`] if persistence fails
    #[instrument(skip(self))]
    pub async fn get_workout(&self, workout_id: &str) -> AppResult<Option<WorkoutDetails>> {
        self.repository
            .find_workout(workout_id)
            .await
            .map_err(conceal("get_workout"))
    }

    /// Record that a user likes a workout
    ///
    /// # Errors
    ///
    /// Returns [`AppError::unexpected`] if persistence fails, including when
    /// the workout does not exist
    #[instrument(skip(self))]
    pub async fn like_workout(&self, workout_id: &str, user_id: &str) -> AppResult<WorkoutLike> {
        self.repository
            .create_like(workout_id, user_id)
            .await
            .map_err(conceal("like_workout"))
    }

    /// Remove every like of the pair; succeeds when there was none
    ///
    /// # Errors
    ///
    /// Returns [`AppError::unexpected`] if persistence fails
    #[instrument(skip(self))]
    pub async fn unlike_workout(&self, workout_id: &str, user_id: &str) -> AppResult<()> {
        let removed = self
            .repository
            .delete_likes(workout_id, user_id)
            .await
            .map_err(conceal("unlike_workout"))?;

        debug!(removed, "Likes removed");
        Ok(())
    }

    /// Get the like of the pair, if the user currently likes the workout
    ///
    /// # Errors
    ///
    /// Returns [`AppError::unexpected`] if persistence fails
    #[instrument(skip(self))]
    pub async fn find_like(
        &self,
        workout_id: &str,
        user_id: &str,
    ) -> AppResult<Option<WorkoutLike>> {
        self.repository
            .find_like(workout_id, user_id)
            .await
            .map_err(conceal("find_like"))
    }

    /// Get one exercise; `None` when it does not exist
    ///
    /// # Errors
    ///
    /// Returns [`AppError::unexpected`] if persistence fails
    #[instrument(skip(self))]
    pub async fn get_exercise(&self, exercise_id: &str) -> AppResult<Option<ExerciseRecord>> {
        self.repository
            .find_exercise(exercise_id)
            .await
            .map_err(conceal("get_exercise"))
    }

    /// Delete one exercise; deleting a missing id is not an error
    ///
    /// Returns whether the exercise existed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::unexpected`] if persistence fails
    #[instrument(skip(self))]
    pub async fn delete_exercise(&self, exercise_id: &str) -> AppResult<bool> {
        self.repository
            .delete_exercise(exercise_id)
            .await
            .map_err(conceal("delete_exercise"))
    }

    /// Delete a workout together with its exercises and likes
    ///
    /// Deleting a missing id is not an error. Returns whether the workout
    /// existed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::unexpected`] if persistence fails
    #[instrument(skip(self))]
    pub async fn delete_workout(&self, workout_id: &str) -> AppResult<bool> {
        self.repository
            .delete_workout(workout_id)
            .await
            .map_err(conceal("delete_workout"))
    }
}
