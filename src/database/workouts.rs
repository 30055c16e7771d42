// ABOUTME: Workout aggregate database operations: nested creation, filtered reads, likes, deletes
// ABOUTME: All SQL for workouts, exercises, and workout_likes lives in WorkoutsManager
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WorkoutX

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Decode, QueryBuilder, Row, Sqlite, SqlitePool, Type};
use tracing::debug;
use uuid::Uuid;

use super::transactions::{retry_transaction, SqliteTransactionGuard};
use crate::errors::{AppError, DatabaseError};
use crate::models::{
    CreatedWorkout, Exercise, ExerciseRecord, ExerciseSpec, LikeRef, NewWorkout, UserProfile,
    Visibility, WorkoutDetails, WorkoutFilter, WorkoutLike,
};

const EXERCISE_COLUMNS: &str =
    "e.id, e.workout_id, e.position, e.name, e.series, e.repetitions, e.weight, e.rest_time, e.video_url, e.instructions, e.created_at";

/// Which workouts a read projection covers
#[derive(Clone, Copy)]
enum Selection<'a> {
    Matching(&'a WorkoutFilter),
    ById(&'a str),
}

impl<'a> Selection<'a> {
    /// Append the `WHERE` constraints on the `w` (workouts) alias
    fn push_constraints(self, query: &mut QueryBuilder<'a, Sqlite>) {
        query.push(" WHERE 1 = 1");
        match self {
            Self::Matching(filter) => {
                if let Some(user_id) = filter.owner() {
                    query.push(" AND w.user_id = ").push_bind(user_id);
                }
                if let Some(visibility) = filter.visibility {
                    query.push(" AND w.visibility = ").push_bind(visibility.as_str());
                }
            }
            Self::ById(id) => {
                query.push(" AND w.id = ").push_bind(id);
            }
        }
    }
}

/// Workout aggregate database operations manager
///
/// Wraps a `SqlitePool`; obtained through `Database::workouts()`.
pub struct WorkoutsManager {
    pool: SqlitePool,
    max_retries: u32,
}

impl WorkoutsManager {
    /// Create a new workouts manager
    #[must_use]
    pub const fn new(pool: SqlitePool, max_retries: u32) -> Self {
        Self { pool, max_retries }
    }

    // ========================================================================
    // Creation
    // ========================================================================

    /// Persist a workout and all of its exercises as one unit
    ///
    /// Either every row is committed or none is. Busy/locked failures are
    /// retried with backoff; each attempt starts a fresh transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if any insert or the commit fails
    pub async fn create_workout(
        &self,
        workout: &NewWorkout,
    ) -> Result<CreatedWorkout, DatabaseError> {
        retry_transaction(|| self.insert_workout_graph(workout), self.max_retries).await
    }

    async fn insert_workout_graph(
        &self,
        workout: &NewWorkout,
    ) -> Result<CreatedWorkout, DatabaseError> {
        let mut guard = SqliteTransactionGuard::new(self.pool.begin().await?);

        let workout_id = Uuid::new_v4().to_string();
        let created_at = Utc::now().to_rfc3339();

        // Without an explicit visibility the column default applies
        let stored_visibility: String = match workout.visibility {
            Some(visibility) => {
                sqlx::query_scalar(
                    r"
                    INSERT INTO workouts (id, user_id, name, visibility, created_at)
                    VALUES ($1, $2, $3, $4, $5)
                    RETURNING visibility
                    ",
                )
                .bind(&workout_id)
                .bind(&workout.user_id)
                .bind(&workout.name)
                .bind(visibility.as_str())
                .bind(&created_at)
                .fetch_one(guard.executor()?)
                .await?
            }
            None => {
                sqlx::query_scalar(
                    r"
                    INSERT INTO workouts (id, user_id, name, created_at)
                    VALUES ($1, $2, $3, $4)
                    RETURNING visibility
                    ",
                )
                .bind(&workout_id)
                .bind(&workout.user_id)
                .bind(&workout.name)
                .bind(&created_at)
                .fetch_one(guard.executor()?)
                .await?
            }
        };
        let visibility = parse_visibility(&stored_visibility)?;

        let mut exercises = Vec::with_capacity(workout.exercises.len());
        for (position, spec) in workout.exercises.iter().enumerate() {
            let exercise = Self::insert_exercise(
                &mut guard,
                &workout_id,
                position,
                spec,
                &created_at,
            )
            .await?;
            exercises.push(exercise);
        }

        guard.commit().await?;

        debug!(
            workout_id = %workout_id,
            exercise_count = exercises.len(),
            "Workout created"
        );

        Ok(CreatedWorkout {
            id: workout_id,
            name: workout.name.clone(),
            visibility,
            user_id: workout.user_id.clone(),
            exercises,
        })
    }

    async fn insert_exercise(
        guard: &mut SqliteTransactionGuard<'_>,
        workout_id: &str,
        position: usize,
        spec: &ExerciseSpec,
        created_at: &str,
    ) -> Result<Exercise, DatabaseError> {
        let position = i64::try_from(position).map_err(|e| DatabaseError::InvalidInput {
            context: format!("exercise position out of range: {e}"),
        })?;
        let exercise_id = Uuid::new_v4().to_string();

        sqlx::query(
            r"
            INSERT INTO exercises (
                id, workout_id, position, name, series, repetitions,
                weight, rest_time, video_url, instructions, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(&exercise_id)
        .bind(workout_id)
        .bind(position)
        .bind(&spec.name)
        .bind(&spec.series)
        .bind(&spec.repetitions)
        .bind(&spec.weight)
        .bind(&spec.rest_time)
        .bind(&spec.video_url)
        .bind(&spec.instructions)
        .bind(created_at)
        .execute(guard.executor()?)
        .await?;

        Ok(Exercise {
            id: exercise_id,
            name: spec.name.clone(),
            series: spec.series.clone(),
            repetitions: spec.repetitions.clone(),
            weight: spec.weight.clone(),
            rest_time: spec.rest_time.clone(),
            video_url: spec.video_url.clone(),
            instructions: spec.instructions.clone(),
        })
    }

    // ========================================================================
    // Read projections
    // ========================================================================

    /// List workouts matching the filter with owner, likes, and exercises
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails or a stored row cannot be decoded
    pub async fn find_workouts(
        &self,
        filter: &WorkoutFilter,
    ) -> Result<Vec<WorkoutDetails>, DatabaseError> {
        self.load_details(Selection::Matching(filter)).await
    }

    /// Get a single workout with owner, likes, and exercises
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails or a stored row cannot be decoded
    pub async fn find_workout(&self, id: &str) -> Result<Option<WorkoutDetails>, DatabaseError> {
        let mut details = self.load_details(Selection::ById(id)).await?;
        Ok(details.pop())
    }

    /// Three queries (workouts, exercises, likes) over one read transaction
    /// so the projection never mixes two different states of the aggregate
    async fn load_details(
        &self,
        selection: Selection<'_>,
    ) -> Result<Vec<WorkoutDetails>, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let mut workouts_query = QueryBuilder::<Sqlite>::new(
            r"
            SELECT w.id, w.name, w.visibility,
                   u.id AS owner_id, u.name AS owner_name, u.avatar AS owner_avatar
            FROM workouts w
            LEFT JOIN users u ON u.id = w.user_id
            ",
        );
        selection.push_constraints(&mut workouts_query);
        workouts_query.push(" ORDER BY w.created_at, w.rowid");
        let workout_rows = workouts_query.build().fetch_all(&mut *tx).await?;

        if workout_rows.is_empty() {
            tx.commit().await?;
            return Ok(Vec::new());
        }

        let mut exercises_query = QueryBuilder::<Sqlite>::new(format!(
            "SELECT {EXERCISE_COLUMNS} FROM exercises e JOIN workouts w ON w.id = e.workout_id"
        ));
        selection.push_constraints(&mut exercises_query);
        exercises_query.push(" ORDER BY e.workout_id, e.position");
        let exercise_rows = exercises_query.build().fetch_all(&mut *tx).await?;

        let mut likes_query = QueryBuilder::<Sqlite>::new(
            "SELECT l.workout_id, l.user_id FROM workout_likes l JOIN workouts w ON w.id = l.workout_id",
        );
        selection.push_constraints(&mut likes_query);
        likes_query.push(" ORDER BY l.created_at, l.rowid");
        let like_rows = likes_query.build().fetch_all(&mut *tx).await?;

        tx.commit().await?;

        let mut exercises_by_workout: HashMap<String, Vec<Exercise>> = HashMap::new();
        for row in &exercise_rows {
            let record = row_to_exercise_record(row)?;
            exercises_by_workout
                .entry(record.workout_id)
                .or_default()
                .push(record.exercise);
        }

        let mut likes_by_workout: HashMap<String, Vec<LikeRef>> = HashMap::new();
        for row in &like_rows {
            let workout_id: String = column(row, "workout_likes", "workout_id")?;
            let user_id: String = column(row, "workout_likes", "user_id")?;
            likes_by_workout
                .entry(workout_id)
                .or_default()
                .push(LikeRef { user_id });
        }

        workout_rows
            .iter()
            .map(|row| {
                let id: String = column(row, "workouts", "id")?;
                let visibility: String = column(row, "workouts", "visibility")?;
                Ok(WorkoutDetails {
                    name: column(row, "workouts", "name")?,
                    visibility: parse_visibility(&visibility)?,
                    likes: likes_by_workout.remove(&id).unwrap_or_default(),
                    user: row_to_owner(row)?,
                    exercises: exercises_by_workout.remove(&id).unwrap_or_default(),
                    id,
                })
            })
            .collect()
    }

    // ========================================================================
    // Likes
    // ========================================================================

    /// Record that `user_id` likes `workout_id`
    ///
    /// The pair is unique, so liking twice returns the row created the first
    /// time instead of inserting a duplicate.
    ///
    /// # Errors
    ///
    /// Returns an error if the workout does not exist or the query fails
    pub async fn create_like(
        &self,
        workout_id: &str,
        user_id: &str,
    ) -> Result<WorkoutLike, DatabaseError> {
        let row = sqlx::query(
            r"
            INSERT INTO workout_likes (id, workout_id, user_id, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (workout_id, user_id) DO UPDATE SET workout_id = excluded.workout_id
            RETURNING id, workout_id, user_id, created_at
            ",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(workout_id)
        .bind(user_id)
        .bind(Utc::now().to_rfc3339())
        .fetch_one(&self.pool)
        .await?;

        row_to_like(&row)
    }

    /// Delete every like for the pair, returning how many rows went away
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn delete_likes(&self, workout_id: &str, user_id: &str) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM workout_likes WHERE workout_id = $1 AND user_id = $2")
            .bind(workout_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Look up the like for the pair
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row cannot be decoded
    pub async fn find_like(
        &self,
        workout_id: &str,
        user_id: &str,
    ) -> Result<Option<WorkoutLike>, DatabaseError> {
        let row = sqlx::query(
            r"
            SELECT id, workout_id, user_id, created_at
            FROM workout_likes
            WHERE workout_id = $1 AND user_id = $2
            ORDER BY created_at, rowid
            LIMIT 1
            ",
        )
        .bind(workout_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_like).transpose()
    }

    // ========================================================================
    // Exercises and deletion
    // ========================================================================

    /// Get a single exercise together with its parent workout id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row cannot be decoded
    pub async fn find_exercise(&self, id: &str) -> Result<Option<ExerciseRecord>, DatabaseError> {
        let row = sqlx::query(&format!(
            "SELECT {EXERCISE_COLUMNS} FROM exercises e WHERE e.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_exercise_record).transpose()
    }

    /// Delete one exercise; `false` when no such exercise existed
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn delete_exercise(&self, id: &str) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM exercises WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a workout; exercises and likes follow through `ON DELETE CASCADE`
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn delete_workout(&self, id: &str) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// ============================================================================
// Row decoding
// ============================================================================

fn column<'r, T>(row: &'r SqliteRow, table: &'static str, name: &str) -> Result<T, DatabaseError>
where
    T: Decode<'r, Sqlite> + Type<Sqlite>,
{
    row.try_get(name)
        .map_err(|e| DatabaseError::MalformedRow {
            table,
            context: format!("column {name}: {e}"),
        })
}

fn parse_visibility(value: &str) -> Result<Visibility, DatabaseError> {
    value
        .parse()
        .map_err(|e: AppError| DatabaseError::MalformedRow {
            table: "workouts",
            context: e.to_string(),
        })
}

fn parse_timestamp(value: &str, table: &'static str) -> Result<DateTime<Utc>, DatabaseError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DatabaseError::MalformedRow {
            table,
            context: format!("invalid timestamp {value}: {e}"),
        })
}

fn row_to_owner(row: &SqliteRow) -> Result<Option<UserProfile>, DatabaseError> {
    let owner_id: Option<String> = column(row, "users", "owner_id")?;
    let owner_name: Option<String> = column(row, "users", "owner_name")?;
    let avatar: Option<String> = column(row, "users", "owner_avatar")?;

    Ok(match (owner_id, owner_name) {
        (Some(id), Some(name)) => Some(UserProfile { id, name, avatar }),
        _ => None,
    })
}

fn row_to_exercise_record(row: &SqliteRow) -> Result<ExerciseRecord, DatabaseError> {
    const TABLE: &str = "exercises";

    let position: i64 = column(row, TABLE, "position")?;
    let created_at: String = column(row, TABLE, "created_at")?;

    Ok(ExerciseRecord {
        workout_id: column(row, TABLE, "workout_id")?,
        position: u32::try_from(position).map_err(|e| DatabaseError::MalformedRow {
            table: TABLE,
            context: format!("position {position}: {e}"),
        })?,
        exercise: Exercise {
            id: column(row, TABLE, "id")?,
            name: column(row, TABLE, "name")?,
            series: column(row, TABLE, "series")?,
            repetitions: column(row, TABLE, "repetitions")?,
            weight: column(row, TABLE, "weight")?,
            rest_time: column(row, TABLE, "rest_time")?,
            video_url: column(row, TABLE, "video_url")?,
            instructions: column(row, TABLE, "instructions")?,
        },
        created_at: parse_timestamp(&created_at, TABLE)?,
    })
}

fn row_to_like(row: &SqliteRow) -> Result<WorkoutLike, DatabaseError> {
    const TABLE: &str = "workout_likes";

    let created_at: String = column(row, TABLE, "created_at")?;

    Ok(WorkoutLike {
        id: column(row, TABLE, "id")?,
        workout_id: column(row, TABLE, "workout_id")?,
        user_id: column(row, TABLE, "user_id")?,
        created_at: parse_timestamp(&created_at, TABLE)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::database::Database;

    fn spec(name: &str) -> ExerciseSpec {
        ExerciseSpec {
            name: name.to_owned(),
            series: "3".to_owned(),
            repetitions: "10".to_owned(),
            ..ExerciseSpec::default()
        }
    }

    async fn manager() -> WorkoutsManager {
        Database::new(&DatabaseConfig::in_memory())
            .await
            .unwrap()
            .workouts()
    }

    #[tokio::test]
    async fn test_missing_visibility_uses_column_default() {
        let workouts = manager().await;
        let created = workouts
            .create_workout(&NewWorkout {
                user_id: "u1".to_owned(),
                name: "Generated".to_owned(),
                visibility: None,
                exercises: vec![],
            })
            .await
            .unwrap();

        assert_eq!(created.visibility, Visibility::Private);
    }

    #[tokio::test]
    async fn test_exercises_keep_their_order() {
        let workouts = manager().await;
        let names = ["Squat", "Bench", "Deadlift", "Row"];
        let created = workouts
            .create_workout(&NewWorkout {
                user_id: "u1".to_owned(),
                name: "Full body".to_owned(),
                visibility: Some(Visibility::Public),
                exercises: names.iter().map(|n| spec(n)).collect(),
            })
            .await
            .unwrap();

        let details = workouts.find_workout(&created.id).await.unwrap().unwrap();
        let stored: Vec<&str> = details.exercises.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(stored, names);

        let last = workouts
            .find_exercise(&created.exercises[3].id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(last.position, 3);
        assert_eq!(last.workout_id, created.id);
    }

    #[tokio::test]
    async fn test_like_upsert_keeps_first_row() {
        let workouts = manager().await;
        let created = workouts
            .create_workout(&NewWorkout {
                user_id: "u1".to_owned(),
                name: "Pull".to_owned(),
                visibility: Some(Visibility::Public),
                exercises: vec![spec("Row")],
            })
            .await
            .unwrap();

        let first = workouts.create_like(&created.id, "u2").await.unwrap();
        let second = workouts.create_like(&created.id, "u2").await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(first.created_at, second.created_at);
        assert_eq!(workouts.delete_likes(&created.id, "u2").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_like_on_missing_workout_violates_foreign_key() {
        let workouts = manager().await;
        let err = workouts.create_like("missing", "u2").await.unwrap_err();
        assert!(matches!(err, DatabaseError::ConstraintViolation { .. }));
    }

    #[tokio::test]
    async fn test_deletes_report_whether_a_row_existed() {
        let workouts = manager().await;
        assert!(!workouts.delete_workout("missing").await.unwrap());
        assert!(!workouts.delete_exercise("missing").await.unwrap());
    }
}
