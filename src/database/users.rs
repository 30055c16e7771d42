// ABOUTME: User projection database operations
// ABOUTME: Mirrors id, name, and avatar from the external identity service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WorkoutX

use chrono::Utc;
use sqlx::SqlitePool;

use crate::errors::DatabaseError;
use crate::models::UserProfile;

/// Read-mostly projection of users owned by the identity service
///
/// Workouts do not reference this table with a foreign key. A workout whose
/// owner was never synced still loads, just without a `user` projection.
pub struct UsersManager {
    pool: SqlitePool,
}

impl UsersManager {
    /// Create a new users manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert or refresh a user's public profile
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn upsert_user(&self, user: &UserProfile) -> Result<(), DatabaseError> {
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r"
            INSERT INTO users (id, name, avatar, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            ON CONFLICT (id) DO UPDATE SET
                name = excluded.name,
                avatar = excluded.avatar,
                updated_at = excluded.updated_at
            ",
        )
        .bind(&user.id)
        .bind(&user.name)
        .bind(user.avatar.as_deref())
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::database::Database;
    use crate::models::{NewWorkout, Visibility};

    #[tokio::test]
    async fn test_upsert_refreshes_owner_projection() {
        let db = Database::new(&DatabaseConfig::in_memory()).await.unwrap();
        let users = db.users();
        let workouts = db.workouts();

        users
            .upsert_user(&UserProfile {
                id: "u1".to_owned(),
                name: "Ana".to_owned(),
                avatar: None,
            })
            .await
            .unwrap();
        let created = workouts
            .create_workout(&NewWorkout {
                user_id: "u1".to_owned(),
                name: "Push".to_owned(),
                visibility: Some(Visibility::Public),
                exercises: vec![],
            })
            .await
            .unwrap();

        let refreshed = UserProfile {
            id: "u1".to_owned(),
            name: "Ana Lima".to_owned(),
            avatar: Some("https://cdn.example.com/u1.png".to_owned()),
        };
        users.upsert_user(&refreshed).await.unwrap();

        let details = workouts.find_workout(&created.id).await.unwrap().unwrap();
        assert_eq!(details.user, Some(refreshed));

        let (rows,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(rows, 1);
    }
}
