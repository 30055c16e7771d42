// ABOUTME: SQLite database handle for the workout store: pool creation and schema migrations
// ABOUTME: Hands out per-domain managers (workouts, users) sharing one connection pool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WorkoutX

//! # Database Management
//!
//! [`Database`] owns the single long-lived connection pool of the process.
//! It is created once at startup and cloned (cheaply, the pool is
//! reference-counted) into whatever needs persistence.

/// Persistence port trait and its `SQLite` implementation
pub mod repositories;
/// Transaction guard and retry helpers
pub mod transactions;
/// Identity-service user projection
pub mod users;
/// Workout, exercise, and like SQL
pub mod workouts;

pub use repositories::{WorkoutRepository, WorkoutRepositoryImpl};
pub use transactions::{retry_transaction, SqliteTransactionGuard, TransactionGuard};
pub use users::UsersManager;
pub use workouts::WorkoutsManager;

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::config::{DatabaseConfig, DatabaseUrl};
use crate::constants::{database, limits};
use crate::errors::DatabaseError;

/// Database handle shared by every manager and repository
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
    max_retries: u32,
}

impl Database {
    /// Connect to the configured database and run migrations if enabled
    ///
    /// In-memory databases are served by a single connection that is never
    /// recycled, so the data lives as long as the pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or a migration fails
    pub async fn new(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let busy_timeout = Duration::from_secs(database::BUSY_TIMEOUT_SECS);

        let pool = match &config.url {
            DatabaseUrl::Memory => {
                let options = SqliteConnectOptions::from_str("sqlite::memory:")?
                    .foreign_keys(true)
                    .busy_timeout(busy_timeout);

                SqlitePoolOptions::new()
                    .max_connections(1)
                    .min_connections(1)
                    .idle_timeout(None)
                    .max_lifetime(None)
                    .connect_with(options)
                    .await?
            }
            DatabaseUrl::SQLite { path } => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent).await.map_err(|e| {
                        DatabaseError::ConnectionError {
                            context: format!(
                                "cannot create database directory {}: {e}",
                                parent.display()
                            ),
                        }
                    })?;
                }

                let options = SqliteConnectOptions::new()
                    .filename(path)
                    .create_if_missing(true)
                    .journal_mode(SqliteJournalMode::Wal)
                    .foreign_keys(true)
                    .busy_timeout(busy_timeout);

                SqlitePoolOptions::new()
                    .max_connections(config.max_connections.max(1))
                    .connect_with(options)
                    .await?
            }
        };

        info!(url = %config.url, "Connected to database");

        let db = Self {
            pool,
            max_retries: config.max_retries,
        };

        if config.auto_migrate {
            db.migrate().await?;
        }

        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Workout, exercise, and like operations
    #[must_use]
    pub fn workouts(&self) -> WorkoutsManager {
        WorkoutsManager::new(self.pool.clone(), self.max_retries)
    }

    /// User projection operations
    #[must_use]
    pub fn users(&self) -> UsersManager {
        UsersManager::new(self.pool.clone())
    }

    /// Close every pooled connection; called once at process teardown
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }

    /// Create all tables and indexes if they do not exist yet
    ///
    /// # Errors
    ///
    /// Returns an error if any DDL statement fails
    pub async fn migrate(&self) -> Result<(), DatabaseError> {
        self.migrate_users().await?;
        self.migrate_workouts().await?;
        self.migrate_exercises().await?;
        self.migrate_workout_likes().await?;
        debug!("Database schema is up to date");
        Ok(())
    }

    async fn migrate_users(&self) -> Result<(), DatabaseError> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                avatar TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn migrate_workouts(&self) -> Result<(), DatabaseError> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workouts (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                name TEXT NOT NULL,
                visibility TEXT NOT NULL DEFAULT 'PRIVATE' CHECK (visibility IN ('PUBLIC', 'PRIVATE')),
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_workouts_user_id ON workouts(user_id)")
            .execute(&self.pool)
            .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_workouts_visibility ON workouts(visibility)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn migrate_exercises(&self) -> Result<(), DatabaseError> {
        let ddl = format!(
            r"
            CREATE TABLE IF NOT EXISTS exercises (
                id TEXT PRIMARY KEY,
                workout_id TEXT NOT NULL REFERENCES workouts(id) ON DELETE CASCADE,
                position INTEGER NOT NULL,
                name TEXT NOT NULL CHECK (length(name) <= {max_name}),
                series TEXT NOT NULL,
                repetitions TEXT NOT NULL,
                weight TEXT NOT NULL,
                rest_time TEXT NOT NULL,
                video_url TEXT NOT NULL,
                instructions TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
            max_name = limits::MAX_EXERCISE_NAME_LENGTH,
        );
        sqlx::query(&ddl).execute(&self.pool).await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_exercises_workout_id ON exercises(workout_id, position)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn migrate_workout_likes(&self) -> Result<(), DatabaseError> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workout_likes (
                id TEXT PRIMARY KEY,
                workout_id TEXT NOT NULL REFERENCES workouts(id) ON DELETE CASCADE,
                user_id TEXT NOT NULL,
                created_at TEXT NOT NULL,
                UNIQUE (workout_id, user_id)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_workout_likes_user_id ON workout_likes(user_id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
